//! Places web service backend.
//!
//! A lookup is two requests: a text search that yields a place id, then a
//! details request for that id. [`PlacesBackend`] is the seam between the
//! enrichment client and the HTTP service so tests can substitute a stub.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{
    MAX_PLACE_PHOTOS, MAX_PLACE_REVIEWS, MAX_REVIEW_TEXT_CHARS, PLACE_PHOTO_MAX_WIDTH,
};
use crate::core::SpaReviewError;
use crate::enrichment::models::{PlaceDetails, PlacePhoto, PlaceReview};

/// Fields requested from the details endpoint.
const DETAILS_FIELDS: &str = "photos,formatted_address,website,url,opening_hours,formatted_phone_number,rating,user_ratings_total,reviews";

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("places API key not configured")]
    MissingApiKey,

    #[error("places request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("places API returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("places API status {status}: {message}")]
    Api {
        status: String,
        message: String,
    },
}

/// Lookup operations against a places service.
#[async_trait]
pub trait PlacesBackend: Send + Sync {
    /// Whether credentials are present. Unconfigured backends are never called.
    fn is_configured(&self) -> bool {
        true
    }

    /// Place id of the best match for `query`, `None` when nothing matches.
    async fn text_search(&self, query: &str) -> Result<Option<String>, PlacesError>;

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError>;
}

/// HTTP client for the Google Places web service.
#[derive(Debug, Clone)]
pub struct GooglePlacesClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GooglePlacesClient {
    /// Build a client whose requests time out after `timeout`.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SpaReviewError> {
        let client = reqwest::Client::builder().timeout(timeout).build().map_err(|e| {
            SpaReviewError::ConfigError {
                message: format!("failed to build places HTTP client: {e}"),
            }
        })?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    fn api_key(&self) -> Result<&str, PlacesError> {
        self.api_key.as_deref().ok_or(PlacesError::MissingApiKey)
    }

    fn photo_url(&self, photo_reference: &str, api_key: &str) -> String {
        format!(
            "{}/photo?maxwidth={PLACE_PHOTO_MAX_WIDTH}&photo_reference={photo_reference}&key={api_key}",
            self.endpoint
        )
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, PlacesError> {
        let url = format!("{}/{path}", self.endpoint);
        let response = self.client.get(&url).query(params).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Places request to {} failed with HTTP {}", url, status);
            return Err(PlacesError::Status(status));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl PlacesBackend for GooglePlacesClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn text_search(&self, query: &str) -> Result<Option<String>, PlacesError> {
        let key = self.api_key()?;
        debug!("Places text search: {}", query);
        let body: TextSearchResponse = self
            .get_json("textsearch/json", &[("query", query), ("type", "spa"), ("key", key)])
            .await?;
        check_api_status(&body.status, body.error_message.as_deref())?;
        Ok(body.results.into_iter().next().map(|result| result.place_id))
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let key = self.api_key()?;
        debug!("Places details for {}", place_id);
        let body: DetailsResponse = self
            .get_json(
                "details/json",
                &[("place_id", place_id), ("fields", DETAILS_FIELDS), ("key", key)],
            )
            .await?;
        check_api_status(&body.status, body.error_message.as_deref())?;
        let raw = body.result.unwrap_or_default();
        Ok(raw.into_details(place_id, |reference| self.photo_url(reference, key)))
    }
}

/// Accept `OK` and `ZERO_RESULTS`; every other status is a failed request.
fn check_api_status(status: &str, message: Option<&str>) -> Result<(), PlacesError> {
    match status {
        "" | "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(PlacesError::Api {
            status: other.to_string(),
            message: message.unwrap_or_default().to_string(),
        }),
    }
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
    #[serde(default)]
    status: String,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    place_id: String,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    result: Option<RawPlaceDetails>,
    #[serde(default)]
    status: String,
    error_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPlaceDetails {
    #[serde(default)]
    photos: Vec<RawPhoto>,
    formatted_address: Option<String>,
    website: Option<String>,
    url: Option<String>,
    opening_hours: Option<RawOpeningHours>,
    formatted_phone_number: Option<String>,
    rating: Option<f64>,
    user_ratings_total: Option<u32>,
    #[serde(default)]
    reviews: Vec<RawReview>,
}

#[derive(Debug, Deserialize)]
struct RawPhoto {
    photo_reference: String,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    html_attributions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawOpeningHours {
    open_now: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawReview {
    #[serde(default)]
    author_name: String,
    #[serde(default)]
    rating: u8,
    text: Option<String>,
    relative_time_description: Option<String>,
    profile_photo_url: Option<String>,
}

impl RawPlaceDetails {
    fn into_details(self, place_id: &str, photo_url: impl Fn(&str) -> String) -> PlaceDetails {
        PlaceDetails {
            photos: self
                .photos
                .into_iter()
                .take(MAX_PLACE_PHOTOS)
                .map(|photo| PlacePhoto {
                    url: photo_url(&photo.photo_reference),
                    width: photo.width,
                    height: photo.height,
                    attribution: photo.html_attributions.into_iter().next().unwrap_or_default(),
                })
                .collect(),
            place_id: place_id.to_string(),
            address: self.formatted_address.filter(|s| !s.is_empty()),
            website: self.website.filter(|s| !s.is_empty()),
            google_url: self.url.filter(|s| !s.is_empty()),
            phone: self.formatted_phone_number.filter(|s| !s.is_empty()),
            google_rating: self.rating,
            google_reviews: self.user_ratings_total,
            open_now: self.opening_hours.and_then(|hours| hours.open_now),
            reviews: self
                .reviews
                .into_iter()
                .take(MAX_PLACE_REVIEWS)
                .map(|review| PlaceReview {
                    author: review.author_name,
                    rating: review.rating,
                    text: review.text.map(|text| text.chars().take(MAX_REVIEW_TEXT_CHARS).collect()),
                    time: review.relative_time_description,
                    profile_photo: review.profile_photo_url,
                })
                .collect(),
        }
    }
}
