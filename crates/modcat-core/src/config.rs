use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Upstream catalog feed.
pub const DEFAULT_API_URL: &str = "https://pixlcore.pages.dev/Mod_Data.json";
/// Relay prefix; the percent-encoded upstream URL is appended to it.
pub const DEFAULT_PROXY_URL: &str = "https://api.allorigins.win/get?url=";
/// Cache freshness window in milliseconds.
pub const DEFAULT_CACHE_TTL_MS: u64 = 60_000;
/// Number of entries per homepage section.
pub const DEFAULT_SECTION_SIZE: usize = 8;

/// HTTP timeouts (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// What `get_catalog` does when both network paths fail and nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExhaustionPolicy {
    /// Report an explicit "no data" error to the caller.
    #[default]
    NoData,
    /// Serve the built-in sample catalog.
    SampleData,
}

/// Global configuration loaded from `~/.config/modcat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModcatConfig {
    /// Catalog endpoint returning a JSON array of entries.
    pub api_url: String,
    /// Relay prefix used when the direct request fails.
    pub proxy_url: String,
    /// Cache freshness window in milliseconds.
    pub cache_ttl_ms: u64,
    /// Behaviour on total failure with no cached record.
    #[serde(default)]
    pub on_exhausted: ExhaustionPolicy,
    /// Entries per homepage section.
    pub section_size: usize,
    /// Optional HTTP timeouts; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for ModcatConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            cache_ttl_ms: DEFAULT_CACHE_TTL_MS,
            on_exhausted: ExhaustionPolicy::default(),
            section_size: DEFAULT_SECTION_SIZE,
            http: None,
        }
    }
}

impl ModcatConfig {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    pub fn http_or_default(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("modcat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ModcatConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ModcatConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ModcatConfig = toml::from_str(&data)?;
    Ok(cfg)
}
