//! Site configuration
//!
//! Settings are read from a TOML file, by default `~/.spa-review/config.toml`
//! (or the path in `SPA_REVIEW_CONFIG`). A missing file is not an error; every
//! field has a default, so the directory works out of the box with the
//! embedded dataset and no places API key.
//!
//! ```toml
//! base_url = "https://spa-review.com"
//! site_name = "Spa-Review"
//! data_path = "/srv/spa-review/spas.json"
//!
//! [places]
//! api_key = "..."
//! timeout_secs = 10
//! cache_ttl_secs = 86400     # 0 keeps entries until evicted
//! cache_max_entries = 10000
//! ```
//!
//! The `GOOGLE_PLACES_API_KEY` environment variable overrides `places.api_key`
//! so the key can stay out of the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tracing::debug;

use crate::constants::{
    CONFIG_PATH_ENV, DEFAULT_BASE_URL, DEFAULT_ENRICHMENT_CACHE_ENTRIES,
    DEFAULT_ENRICHMENT_TTL_SECS, DEFAULT_PLACES_ENDPOINT, DEFAULT_SITE_NAME, PLACES_API_KEY_ENV,
    PLACES_REQUEST_TIMEOUT,
};

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_site_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_PLACES_ENDPOINT.to_string()
}

const fn default_timeout_secs() -> u64 {
    PLACES_REQUEST_TIMEOUT.as_secs()
}

const fn default_cache_ttl_secs() -> u64 {
    DEFAULT_ENRICHMENT_TTL_SECS
}

const fn default_cache_max_entries() -> usize {
    DEFAULT_ENRICHMENT_CACHE_ENTRIES
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Origin used for canonical URLs, JSON-LD and the sitemap.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Dataset document to load instead of the embedded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,

    #[serde(default)]
    pub places: PlacesConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site_name: default_site_name(),
            data_path: None,
            places: PlacesConfig::default(),
        }
    }
}

/// Places web service and enrichment cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlacesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Zero disables expiry.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    #[serde(default = "default_cache_max_entries")]
    pub cache_max_entries: usize,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
            cache_max_entries: default_cache_max_entries(),
        }
    }
}

impl PlacesConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Entry lifetime for the enrichment cache, `None` when expiry is off.
    #[must_use]
    pub const fn cache_ttl(&self) -> Option<Duration> {
        if self.cache_ttl_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.cache_ttl_secs))
        }
    }
}

impl SiteConfig {
    /// Load configuration from `path`, or from [`SiteConfig::default_path`]
    /// when `None`.
    ///
    /// An explicit path must exist. The default path falls back to built-in
    /// defaults when the file is absent. The API key environment variable is
    /// applied afterwards in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit path does not exist or cannot be read
    /// - The file contains invalid TOML or unknown keys
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path).await?,
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path).await?
                } else {
                    debug!("No config at {}, using defaults", path.display());
                    Self::default()
                }
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file, without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// `SPA_REVIEW_CONFIG` when set, otherwise `~/.spa-review/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
            .join(".spa-review");
        Ok(config_dir.join("config.toml"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(PLACES_API_KEY_ENV)
            && !key.trim().is_empty()
        {
            debug!("Using places API key from {}", PLACES_API_KEY_ENV);
            self.places.api_key = Some(key);
        }
    }

    /// Site origin without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
