//! `modcat show <INDEX>` – one mod's detail view.

use anyhow::{bail, Result};
use modcat_core::catalog::EntryId;
use modcat_core::fetch::DefaultFetcher;

use super::load::load_catalog;
use crate::cli::render;

pub async fn run_show(fetcher: &DefaultFetcher, index: &str) -> Result<()> {
    let catalog = load_catalog(fetcher).await?.catalog;
    let Some(id) = catalog.resolve_index(index) else {
        bail!("the catalog is empty");
    };
    if fell_back(index, id) {
        eprintln!("No mod at index {:?}; showing index {}.", index, id);
    }
    let Some(entry) = catalog.get(id) else {
        bail!("mod {} not found", id);
    };
    for line in render::detail_lines(entry) {
        println!("{}", line);
    }
    Ok(())
}

/// True when `resolved` is not the index the user asked for.
fn fell_back(raw: &str, resolved: EntryId) -> bool {
    raw.trim().parse::<usize>().ok() != Some(resolved.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equivalent_spellings_are_not_a_fallback() {
        assert!(!fell_back("1", EntryId(1)));
        assert!(!fell_back("01", EntryId(1)));
        assert!(!fell_back("+1", EntryId(1)));
        assert!(!fell_back(" 2 ", EntryId(2)));
    }

    #[test]
    fn invalid_or_out_of_range_is_a_fallback() {
        assert!(fell_back("abc", EntryId(0)));
        assert!(fell_back("-1", EntryId(0)));
        assert!(fell_back("9", EntryId(0)));
    }
}
