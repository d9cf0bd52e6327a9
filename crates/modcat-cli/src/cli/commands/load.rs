//! Shared catalog load for the views.

use anyhow::{Context, Result};
use modcat_core::fetch::{CatalogSource, DefaultFetcher, Fetched};

/// Fetch the catalog once, telling the user when it has to go to the network
/// or when what they see is not current.
pub async fn load_catalog(fetcher: &DefaultFetcher) -> Result<Fetched> {
    if !fetcher.is_fresh().await {
        eprintln!("Fetching catalog...");
    }
    let fetched = fetcher
        .get_catalog()
        .await
        .context("could not load the mod catalog")?;
    match fetched.source {
        CatalogSource::StaleCache => eprintln!("Network unavailable; showing cached catalog."),
        CatalogSource::BuiltIn => eprintln!("Network unavailable; showing sample catalog."),
        _ => {}
    }
    tracing::debug!(
        "catalog ready: {} entries from {}",
        fetched.catalog.len(),
        fetched.source
    );
    Ok(fetched)
}
