//! Test utilities for spa-review
//!
//! Shared helpers for unit and integration tests:
//! - [`init_test_logging`] installs a test-writer tracing subscriber once
//! - [`sample_dataset`] builds a small in-memory dataset with known rankings
//! - [`StubPlacesBackend`] stands in for the places web service and counts calls
//!
//! # Example
//!
//! ```rust,no_run
//! use spa_review::directory::SpaDirectory;
//! use spa_review::test_utils::{init_test_logging, sample_dataset};
//!
//! init_test_logging(None);
//! let directory = SpaDirectory::with_curated(sample_dataset(), Vec::new()).unwrap();
//! assert_eq!(directory.total_spa_count(), 9);
//! ```

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, Once};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::directory::SpaDataset;
use crate::enrichment::{PlaceDetails, PlacePhoto, PlaceReview, PlacesBackend, PlacesError};

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Dataset document behind [`sample_dataset`].
pub const SAMPLE_DATASET_JSON: &str = r#"{
    "Thailand": {
        "Bangkok": [
            ["Oasis Spa", 46, 213, "D"],
            ["Divana Massage & Spa", 47, 388, "D"],
            ["Health Land", 46, 213, "D"],
            ["urban retreat", 42, 331, "D"]
        ],
        "Hua Hin": [["Chiva-Som", 47, 63, "S"]]
    },
    "Japan": {
        "Hakone": [["Gora Kadan", 48, 52, "T"], ["Yuryo", 43, 210, "T"]]
    },
    "Portugal": {
        "Lisbon": [["Spa Name", 47, 63, "M"], ["Lisbon Wellness", 41, 12, "C"]]
    }
}"#;

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG` when set, otherwise leaves logging off.
///
/// ```bash
/// RUST_LOG=spa_review=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// Nine spas over three countries; see [`SAMPLE_DATASET_JSON`].
///
/// # Panics
///
/// Never in practice; the document is a constant.
#[must_use]
pub fn sample_dataset() -> SpaDataset {
    SpaDataset::from_json_str(SAMPLE_DATASET_JSON).expect("sample dataset is valid")
}

/// Place details returned by [`StubPlacesBackend`] for `place_id`.
#[must_use]
pub fn sample_place_details(place_id: &str) -> PlaceDetails {
    PlaceDetails {
        photos: vec![PlacePhoto {
            url: format!("https://places.test/photo?photo_reference={place_id}-0"),
            width: 800,
            height: 600,
            attribution: "<a>Guest</a>".to_string(),
        }],
        place_id: place_id.to_string(),
        address: Some("73/4 Petchkasem Road, Hua Hin".to_string()),
        website: Some("https://www.chivasom.com".to_string()),
        google_url: Some("https://maps.google.com/?cid=1".to_string()),
        phone: Some("+66 32 536 536".to_string()),
        google_rating: Some(4.7),
        google_reviews: Some(634),
        open_now: Some(true),
        reviews: vec![PlaceReview {
            author: "A. Guest".to_string(),
            rating: 5,
            text: Some("Life-changing stay.".to_string()),
            time: Some("a month ago".to_string()),
            profile_photo: None,
        }],
    }
}

/// In-memory [`PlacesBackend`] that records every call.
#[derive(Debug, Default)]
pub struct StubPlacesBackend {
    unconfigured: bool,
    place_id: Option<String>,
    failing: AtomicBool,
    search_calls: AtomicUsize,
    details_calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl StubPlacesBackend {
    /// Every search matches `place_id`.
    pub fn found(place_id: impl Into<String>) -> Self {
        Self {
            place_id: Some(place_id.into()),
            ..Self::default()
        }
    }

    /// Every search comes back empty.
    #[must_use]
    pub fn not_listed() -> Self {
        Self::default()
    }

    /// Reports missing credentials.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            unconfigured: true,
            ..Self::default()
        }
    }

    /// Make subsequent calls fail with HTTP 503.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn details_calls(&self) -> usize {
        self.details_calls.load(Ordering::SeqCst)
    }

    /// Search queries received, in order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().map(|queries| queries.clone()).unwrap_or_default()
    }

    fn check_failing(&self) -> Result<(), PlacesError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(PlacesError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PlacesBackend for StubPlacesBackend {
    fn is_configured(&self) -> bool {
        !self.unconfigured
    }

    async fn text_search(&self, query: &str) -> Result<Option<String>, PlacesError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }
        self.check_failing()?;
        Ok(self.place_id.clone())
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        self.details_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;
        Ok(sample_place_details(place_id))
    }
}
