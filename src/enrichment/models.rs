//! Request and response shapes for place enrichment.
//!
//! The serialized forms are what a page script consumes, so field names are
//! camelCase and the three outcomes serialize as three distinct object shapes:
//!
//! ```json
//! { "photos": [...], "placeId": "ChIJ...", "address": "...", "reviews": [...] }
//! { "photos": [], "placeId": null }
//! { "error": "Failed to fetch", "photos": [] }
//! ```

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A spa to enrich. `country` is optional and narrows the search when given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnrichmentRequest {
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub country: Option<String>,
}

impl EnrichmentRequest {
    pub fn new(name: impl Into<String>, city: impl Into<String>, country: Option<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            country: country.filter(|c| !c.trim().is_empty()),
        }
    }

    /// Both name and city are required before any lookup.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.city.trim().is_empty()
    }

    /// Free-text query sent to the places search endpoint.
    #[must_use]
    pub fn search_query(&self) -> String {
        match &self.country {
            Some(country) => format!("{} spa {} {}", self.name, self.city, country),
            None => format!("{} spa {}", self.name, self.city),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacePhoto {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceReview {
    pub author: String,
    pub rating: u8,
    pub text: Option<String>,
    /// Relative description such as "2 weeks ago"
    pub time: Option<String>,
    pub profile_photo: Option<String>,
}

/// Live data for a matched place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetails {
    pub photos: Vec<PlacePhoto>,
    pub place_id: String,
    pub address: Option<String>,
    pub website: Option<String>,
    pub google_url: Option<String>,
    pub phone: Option<String>,
    pub google_rating: Option<f64>,
    pub google_reviews: Option<u32>,
    /// `None` when opening hours are unknown
    pub open_now: Option<bool>,
    pub reviews: Vec<PlaceReview>,
}

/// Outcome of an enrichment lookup. Lookups never fail; a failure is the
/// [`Enrichment::Unavailable`] outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Enrichment {
    Found(PlaceDetails),
    /// The search returned no place for the query
    NotListed,
    /// Misconfiguration, invalid request or upstream failure
    Unavailable {
        error: String,
    },
}

impl Enrichment {
    pub fn unavailable(error: impl Into<String>) -> Self {
        Self::Unavailable {
            error: error.into(),
        }
    }

    #[must_use]
    pub fn photos(&self) -> &[PlacePhoto] {
        match self {
            Self::Found(details) => &details.photos,
            Self::NotListed | Self::Unavailable { .. } => &[],
        }
    }

    /// Only definitive answers are cached; failures are retried next time.
    #[must_use]
    pub const fn is_cacheable(&self) -> bool {
        !matches!(self, Self::Unavailable { .. })
    }
}

impl Serialize for Enrichment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Found(details) => details.serialize(serializer),
            Self::NotListed => {
                let mut state = serializer.serialize_struct("Enrichment", 2)?;
                state.serialize_field("photos", &[] as &[PlacePhoto])?;
                state.serialize_field("placeId", &None::<String>)?;
                state.end()
            }
            Self::Unavailable {
                error,
            } => {
                let mut state = serializer.serialize_struct("Enrichment", 2)?;
                state.serialize_field("error", error)?;
                state.serialize_field("photos", &[] as &[PlacePhoto])?;
                state.end()
            }
        }
    }
}
