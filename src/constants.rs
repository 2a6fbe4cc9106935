//! Global constants used throughout the spa-review codebase.
//!
//! This module contains site identity, query defaults, enrichment limits and
//! timeout durations that are used across multiple modules. Defining them
//! centrally keeps magic numbers discoverable.

use std::time::Duration;

/// Public origin of the site. All canonical and JSON-LD URLs are rooted here
/// unless the configuration overrides it.
pub const DEFAULT_BASE_URL: &str = "https://spa-review.com";

/// Brand name used in page titles and structured data.
pub const DEFAULT_SITE_NAME: &str = "Spa-Review";

/// Year printed in "Best Spas in ..." guide titles.
pub const GUIDE_YEAR: u16 = 2026;

/// Default window size for ranked spa lists on city pages.
pub const DEFAULT_TOP_LIMIT: usize = 50;

/// Ranked list size used on country pages.
pub const COUNTRY_PAGE_LIMIT: usize = 20;

/// Maximum number of items emitted into an `ItemList` JSON-LD document.
pub const MAX_LIST_SCHEMA_ITEMS: usize = 50;

/// Default placeholder photo dimensions.
pub const DEFAULT_PHOTO_WIDTH: u32 = 600;
pub const DEFAULT_PHOTO_HEIGHT: u32 = 400;

/// Base URL of the places web service.
pub const DEFAULT_PLACES_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place";

/// Environment variable holding the places API key. Overrides the config file.
pub const PLACES_API_KEY_ENV: &str = "GOOGLE_PLACES_API_KEY";

/// Environment variable pointing at an alternate config file.
pub const CONFIG_PATH_ENV: &str = "SPA_REVIEW_CONFIG";

/// Timeout for a single places HTTP request (10 seconds).
///
/// A cache miss issues two sequential requests, so a page waits at most
/// twice this long before degrading to the empty enrichment shape.
pub const PLACES_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Enrichment cache entries expire after one day by default.
pub const DEFAULT_ENRICHMENT_TTL_SECS: u64 = 86_400;

/// Upper bound on cached enrichment results before LRU eviction kicks in.
pub const DEFAULT_ENRICHMENT_CACHE_ENTRIES: usize = 10_000;

/// Photos kept from a place details response.
pub const MAX_PLACE_PHOTOS: usize = 5;

/// Reviews kept from a place details response.
pub const MAX_PLACE_REVIEWS: usize = 3;

/// Review text is truncated to this many characters.
pub const MAX_REVIEW_TEXT_CHARS: usize = 300;

/// Width requested from the places photo endpoint.
pub const PLACE_PHOTO_MAX_WIDTH: u32 = 800;
