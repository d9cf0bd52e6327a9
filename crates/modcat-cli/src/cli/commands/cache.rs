//! `modcat cache status|clear` – local catalog cache maintenance.

use anyhow::Result;
use modcat_core::cache::CacheState;
use modcat_core::fetch::DefaultFetcher;

pub async fn run_cache_status(fetcher: &DefaultFetcher) -> Result<()> {
    let cache = fetcher.cache();
    let state = cache.state().await;
    if state == CacheState::Empty {
        println!("No cached catalog.");
        return Ok(());
    }

    let entries = cache
        .read()
        .await
        .map(|c| c.len().to_string())
        .unwrap_or_else(|| "unreadable".to_string());
    println!("{:<10} {}", "ENTRIES", entries);
    match state {
        CacheState::Dated { age, fresh } => {
            println!("{:<10} {}s", "AGE", age.as_secs());
            println!("{:<10} {}s", "TTL", cache.ttl().as_secs());
            println!("{:<10} {}", "STATE", if fresh { "fresh" } else { "stale" });
        }
        _ => {
            println!("{:<10} unknown", "AGE");
            println!("{:<10} {}s", "TTL", cache.ttl().as_secs());
            println!("{:<10} stale (no valid timestamp)", "STATE");
        }
    }
    Ok(())
}

pub async fn run_cache_clear(fetcher: &DefaultFetcher) -> Result<()> {
    fetcher.cache().clear().await?;
    tracing::info!("catalog cache cleared");
    println!("Cache cleared.");
    Ok(())
}
