//! Time-boxed catalog cache over a key-value store.
//!
//! A record is two keys: the serialized catalog and its write time in epoch
//! milliseconds. Both are replaced together on every write. Missing or corrupt
//! records read as absent; nothing here fails the caller's fetch.

mod clock;
mod sqlite;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use sqlite::SqliteStore;
pub use store::{KvStore, MemoryStore};

use anyhow::{Context, Result};
use std::time::Duration;

use crate::catalog::Catalog;

/// Store key holding the serialized catalog.
pub const PAYLOAD_KEY: &str = "mods_data_cache";
/// Store key holding the write time (epoch milliseconds, decimal).
pub const TIMESTAMP_KEY: &str = "mods_data_timestamp";

/// Stored record status as seen by `CatalogCache::state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No payload stored.
    Empty,
    /// Payload stored but its timestamp is missing or unparsable. Only
    /// served as stale cache.
    Undated,
    /// Payload with a readable write time.
    Dated { age: Duration, fresh: bool },
}

pub struct CatalogCache<S, C> {
    store: S,
    clock: C,
    ttl: Duration,
}

impl<S: KvStore, C: Clock> CatalogCache<S, C> {
    pub fn new(store: S, clock: C, ttl: Duration) -> Self {
        Self { store, clock, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    async fn get_key(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("cache store read of {key} failed: {e:#}");
                None
            }
        }
    }

    /// Write time of the current record, if one exists and parses.
    pub async fn timestamp(&self) -> Option<u64> {
        let raw = self.get_key(TIMESTAMP_KEY).await?;
        match raw.trim().parse::<u64>() {
            Ok(ts) => Some(ts),
            Err(_) => {
                tracing::warn!("ignoring corrupt cache timestamp {raw:?}");
                None
            }
        }
    }

    /// Age of the current record; a timestamp in the future counts as zero.
    pub async fn age(&self) -> Option<Duration> {
        let ts = self.timestamp().await?;
        let now = self.clock.now_millis();
        Some(Duration::from_millis(now.saturating_sub(ts)))
    }

    /// Where the stored record stands, without parsing the payload.
    pub async fn state(&self) -> CacheState {
        if self.get_key(PAYLOAD_KEY).await.is_none() {
            return CacheState::Empty;
        }
        match self.age().await {
            Some(age) => CacheState::Dated {
                age,
                fresh: age < self.ttl,
            },
            None => CacheState::Undated,
        }
    }

    /// True iff a record exists and is younger than the TTL.
    pub async fn is_fresh(&self) -> bool {
        matches!(self.state().await, CacheState::Dated { fresh: true, .. })
    }

    /// The cached catalog regardless of age; `None` if absent or corrupt.
    pub async fn read(&self) -> Option<Catalog> {
        let payload = self.get_key(PAYLOAD_KEY).await?;
        match Catalog::from_json_str(&payload) {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                tracing::warn!("ignoring corrupt cache payload: {e}");
                None
            }
        }
    }

    /// Replace the record with `catalog` stamped at the current time.
    pub async fn write(&self, catalog: &Catalog) -> Result<()> {
        let payload = catalog.to_json_string().context("serialize catalog")?;
        let now = self.clock.now_millis().to_string();
        self.store
            .set_many(&[(PAYLOAD_KEY, payload.as_str()), (TIMESTAMP_KEY, now.as_str())])
            .await
            .context("write catalog cache")?;
        tracing::debug!("cached {} entries at {}", catalog.len(), now);
        Ok(())
    }

    /// Drop the record.
    pub async fn clear(&self) -> Result<()> {
        self.store.remove(PAYLOAD_KEY).await?;
        self.store.remove(TIMESTAMP_KEY).await?;
        Ok(())
    }
}
