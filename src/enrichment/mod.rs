//! Live place data for spa pages
//!
//! The enrichment client overlays photos, contact details and recent reviews
//! from a places service onto a spa page. It is built from two injected
//! parts:
//!
//! - a [`PlacesBackend`] that performs the search and details requests
//!   ([`GooglePlacesClient`] in production, a stub in tests)
//! - an [`EnrichmentCache`] that memoizes definitive answers
//!   ([`LruTtlCache`] by default)
//!
//! # Contract
//!
//! [`EnrichmentClient::enrich`] never returns an error. Every request resolves
//! to one of three outcomes:
//!
//! | Outcome | When | Cached |
//! |---------|------|--------|
//! | [`Enrichment::Found`] | search matched, details fetched | yes |
//! | [`Enrichment::NotListed`] | search returned nothing | yes |
//! | [`Enrichment::Unavailable`] | missing name/city, no API key, network or API failure | no |
//!
//! Failures are not cached so a transient outage heals on the next request.
//! A cache miss costs exactly one search request and, when a place matched,
//! one details request.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use spa_review::enrichment::{EnrichmentClient, EnrichmentRequest, GooglePlacesClient, LruTtlCache};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let backend = GooglePlacesClient::new(
//!     "https://maps.googleapis.com/maps/api/place",
//!     std::env::var("GOOGLE_PLACES_API_KEY").ok(),
//!     Duration::from_secs(10),
//! )?;
//! let cache = Arc::new(LruTtlCache::new(10_000, Some(Duration::from_secs(86_400))));
//! let client = EnrichmentClient::new(Arc::new(backend), cache);
//!
//! let request = EnrichmentRequest::new("Chiva-Som", "Hua Hin", Some("Thailand".into()));
//! let enrichment = client.enrich(&request).await;
//! println!("{}", serde_json::to_string_pretty(&enrichment)?);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod models;
pub mod places;


pub use cache::{CacheStats, EnrichmentCache, EnrichmentKey, LruTtlCache};
pub use models::{Enrichment, EnrichmentRequest, PlaceDetails, PlacePhoto, PlaceReview};
pub use places::{GooglePlacesClient, PlacesBackend, PlacesError};

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::PlacesConfig;
use crate::core::SpaReviewError;

/// Message for requests missing a name or city.
pub const MISSING_FIELDS_ERROR: &str = "Missing name or city";

/// Message when no API key is configured.
pub const MISSING_KEY_ERROR: &str = "API key not configured";

/// Message for any upstream failure.
pub const FETCH_FAILED_ERROR: &str = "Failed to fetch";

/// Cached, never-failing places lookups.
#[derive(Clone)]
pub struct EnrichmentClient {
    backend: Arc<dyn PlacesBackend>,
    cache: Arc<dyn EnrichmentCache>,
}

impl std::fmt::Debug for EnrichmentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentClient")
            .field("configured", &self.backend.is_configured())
            .field("cache", &self.cache.stats())
            .finish()
    }
}

impl EnrichmentClient {
    pub fn new(backend: Arc<dyn PlacesBackend>, cache: Arc<dyn EnrichmentCache>) -> Self {
        Self {
            backend,
            cache,
        }
    }

    /// Google Places backend and LRU/TTL cache built from configuration.
    pub fn from_config(config: &PlacesConfig) -> Result<Self, SpaReviewError> {
        let backend =
            GooglePlacesClient::new(&config.endpoint, config.api_key.clone(), config.timeout())?;
        let cache = LruTtlCache::new(config.cache_max_entries, config.cache_ttl());
        Ok(Self::new(Arc::new(backend), Arc::new(cache)))
    }

    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Look up live data for a spa.
    pub async fn enrich(&self, request: &EnrichmentRequest) -> Enrichment {
        if !request.is_complete() {
            return Enrichment::unavailable(MISSING_FIELDS_ERROR);
        }

        if let Some(cached) = self.cache.get(request) {
            debug!("Enrichment cache hit for '{}' in {}", request.name, request.city);
            return cached;
        }

        if !self.backend.is_configured() {
            warn!("Places API key not configured, skipping enrichment for '{}'", request.name);
            return Enrichment::unavailable(MISSING_KEY_ERROR);
        }

        info!("Enrichment cache miss for '{}' in {}, querying places", request.name, request.city);
        match self.lookup(request).await {
            Ok(enrichment) => {
                if enrichment.is_cacheable() {
                    self.cache.insert(request.clone(), enrichment.clone());
                }
                enrichment
            }
            Err(e) => {
                warn!("Places lookup for '{}' in {} failed: {}", request.name, request.city, e);
                Enrichment::unavailable(FETCH_FAILED_ERROR)
            }
        }
    }

    async fn lookup(&self, request: &EnrichmentRequest) -> Result<Enrichment, PlacesError> {
        let Some(place_id) = self.backend.text_search(&request.search_query()).await? else {
            debug!("No place matched '{}'", request.search_query());
            return Ok(Enrichment::NotListed);
        };
        let details = self.backend.place_details(&place_id).await?;
        Ok(Enrichment::Found(details))
    }
}
