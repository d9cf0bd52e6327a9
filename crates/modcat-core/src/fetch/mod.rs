//! Catalog acquisition.
//!
//! `CatalogFetcher::get_catalog` tries, in order and stopping at the first
//! success:
//! 1. a fresh cache record (no network),
//! 2. a direct GET of the catalog endpoint,
//! 3. the same request through the relay,
//! 4. the cache record regardless of age,
//! 5. the exhaustion policy (explicit error, or the built-in sample catalog).
//!
//! Network successes rewrite the cache. Steps run strictly one after another
//! with no retries; each failure is logged and the next step is tried.

mod error;
mod relay;
mod transport;

pub use error::{Exhausted, FetchError};
pub use relay::{relay_url, unwrap_envelope, ENVELOPE_FIELD};
pub use transport::{CurlTransport, HttpResponse, Transport};

use anyhow::Result;
use std::fmt;

use crate::cache::{CatalogCache, Clock, KvStore, SqliteStore, SystemClock};
use crate::catalog::{sample_catalog, Catalog};
use crate::config::{ExhaustionPolicy, ModcatConfig};

/// Where a returned catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    FreshCache,
    Direct,
    Relay,
    StaleCache,
    BuiltIn,
}

impl CatalogSource {
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogSource::FreshCache => "cache",
            CatalogSource::Direct => "direct",
            CatalogSource::Relay => "relay",
            CatalogSource::StaleCache => "stale cache",
            CatalogSource::BuiltIn => "built-in sample",
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog plus the step that produced it.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub catalog: Catalog,
    pub source: CatalogSource,
}

/// Endpoints and policy for the fetch chain.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub api_url: String,
    pub proxy_url: String,
    pub on_exhausted: ExhaustionPolicy,
}

impl From<&ModcatConfig> for FetchSettings {
    fn from(cfg: &ModcatConfig) -> Self {
        Self {
            api_url: cfg.api_url.clone(),
            proxy_url: cfg.proxy_url.clone(),
            on_exhausted: cfg.on_exhausted,
        }
    }
}

pub struct CatalogFetcher<S, C, T> {
    cache: CatalogCache<S, C>,
    transport: T,
    settings: FetchSettings,
}

/// Fetcher wired to the on-disk cache, wall clock and libcurl.
pub type DefaultFetcher = CatalogFetcher<SqliteStore, SystemClock, CurlTransport>;

/// Build the production fetcher from config, opening the default cache database.
pub async fn open_default(cfg: &ModcatConfig) -> Result<DefaultFetcher> {
    let store = SqliteStore::open_default().await?;
    let cache = CatalogCache::new(store, SystemClock, cfg.cache_ttl());
    let transport = CurlTransport::new(&cfg.http_or_default());
    Ok(CatalogFetcher::new(cache, transport, FetchSettings::from(cfg)))
}

impl<S: KvStore, C: Clock, T: Transport> CatalogFetcher<S, C, T> {
    pub fn new(cache: CatalogCache<S, C>, transport: T, settings: FetchSettings) -> Self {
        Self {
            cache,
            transport,
            settings,
        }
    }

    pub fn cache(&self) -> &CatalogCache<S, C> {
        &self.cache
    }

    /// Whether the next `get_catalog` will be served from cache without network.
    pub async fn is_fresh(&self) -> bool {
        self.cache.is_fresh().await
    }

    pub async fn get_catalog(&self) -> Result<Fetched, Exhausted> {
        if self.cache.is_fresh().await {
            if let Some(catalog) = self.cache.read().await {
                tracing::debug!("serving {} entries from fresh cache", catalog.len());
                return Ok(Fetched {
                    catalog,
                    source: CatalogSource::FreshCache,
                });
            }
        }

        let direct = match self.fetch_direct().await {
            Ok(catalog) => return Ok(self.remember(catalog, CatalogSource::Direct).await),
            Err(e) => {
                tracing::warn!("direct fetch of {} failed: {e}", self.settings.api_url);
                e
            }
        };

        let relay = match self.fetch_via_relay().await {
            Ok(catalog) => return Ok(self.remember(catalog, CatalogSource::Relay).await),
            Err(e) => {
                tracing::warn!("relay fetch failed: {e}");
                e
            }
        };

        if let Some(catalog) = self.cache.read().await {
            tracing::warn!("network unavailable, serving stale cache ({} entries)", catalog.len());
            return Ok(Fetched {
                catalog,
                source: CatalogSource::StaleCache,
            });
        }

        match self.settings.on_exhausted {
            ExhaustionPolicy::SampleData => {
                tracing::warn!("network unavailable and nothing cached, serving built-in sample");
                Ok(Fetched {
                    catalog: sample_catalog(),
                    source: CatalogSource::BuiltIn,
                })
            }
            ExhaustionPolicy::NoData => Err(Exhausted { direct, relay }),
        }
    }

    async fn fetch_direct(&self) -> Result<Catalog, FetchError> {
        let body = self
            .transport
            .get(&self.settings.api_url)
            .await?
            .into_success_body()?;
        Ok(Catalog::from_json_slice(&body)?)
    }

    async fn fetch_via_relay(&self) -> Result<Catalog, FetchError> {
        let url = relay_url(&self.settings.proxy_url, &self.settings.api_url);
        let body = self.transport.get(&url).await?.into_success_body()?;
        unwrap_envelope(&body)
    }

    async fn remember(&self, catalog: Catalog, source: CatalogSource) -> Fetched {
        if let Err(e) = self.cache.write(&catalog).await {
            tracing::warn!("could not cache catalog: {e:#}");
        }
        tracing::info!("fetched {} entries via {}", catalog.len(), source);
        Fetched { catalog, source }
    }
}
