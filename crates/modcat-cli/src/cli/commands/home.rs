//! `modcat home` – curated homepage sections.

use anyhow::Result;
use modcat_core::fetch::DefaultFetcher;
use modcat_core::sections::HomeSections;

use super::load::load_catalog;
use crate::cli::render;

pub async fn run_home(fetcher: &DefaultFetcher, section_size: usize) -> Result<()> {
    let catalog = load_catalog(fetcher).await?.catalog;
    if catalog.is_empty() {
        println!("No mods available.");
        return Ok(());
    }

    let sections = HomeSections::compose_random(&catalog, section_size);
    for (title, ids) in sections.titled() {
        if ids.is_empty() {
            continue;
        }
        println!("== {} ==", title);
        render::print_list(&catalog, ids);
        println!();
    }
    Ok(())
}
