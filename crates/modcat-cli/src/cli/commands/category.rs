//! `modcat category [NAME]` – category filter.

use anyhow::Result;
use modcat_core::catalog::ALL_CATEGORIES;
use modcat_core::fetch::DefaultFetcher;

use super::load::load_catalog;
use crate::cli::render;

pub async fn run_category(fetcher: &DefaultFetcher, requested: Option<&str>) -> Result<()> {
    let catalog = load_catalog(fetcher).await?.catalog;
    let categories = catalog.categories();

    // Unknown names show everything, like the "All" filter.
    let selected = match requested {
        Some(name) if categories.contains(&name) => name,
        Some(name) => {
            if name != ALL_CATEGORIES {
                eprintln!("Unknown category {:?}; showing all.", name);
            }
            ALL_CATEGORIES
        }
        None => ALL_CATEGORIES,
    };

    let mut filters = vec![ALL_CATEGORIES];
    filters.extend(categories.iter().copied());
    let line: Vec<String> = filters
        .iter()
        .map(|c| if *c == selected { format!("[{c}]") } else { c.to_string() })
        .collect();
    println!("{}", line.join("  "));
    println!();

    let ids = catalog.in_category(Some(selected));
    if ids.is_empty() {
        println!("No mods found in this category.");
        return Ok(());
    }
    render::print_list(&catalog, &ids);
    Ok(())
}
