//! Spa directory: dataset loading, expansion and queries
//!
//! [`SpaDirectory`] owns the read-only compact dataset plus the curated top
//! list and answers every question the site asks of them: country and city
//! listings, aggregate counts, ranked windows and slug resolution.
//!
//! # Architecture
//!
//! ```text
//! data/spas.json ──► SpaDataset ──┐
//!                                 ├──► SpaDirectory ──► ExpandedSpa / CountryStat / CityStat
//!        CURATED_SPAS ────────────┘          │
//!                                            └──► find_by_slug ──► SlugLookup
//! ```
//!
//! Records are stored compact and expanded on demand. Nothing derived is
//! cached; every query recomputes from the dataset, so a directory is
//! immutable after construction and can be shared across threads behind an
//! `Arc` without locking.
//!
//! # Ranking
//!
//! Ranked windows sort by rating then review count, both descending. The sort
//! is stable: spas with equal keys keep the order they have in the dataset
//! document. Ranks are 1-based within the returned window.
//!
//! # Slug resolution
//!
//! [`SpaDirectory::find_by_slug`] checks the curated list first and then
//! scans the bulk dataset lazily. Construction rejects datasets in which two
//! bulk spas expand to the same slug, which makes the scan unambiguous and
//! [`SpaDirectory::all_slugs`] duplicate-free.
//!
//! # Example
//!
//! ```rust
//! use spa_review::directory::{SlugLookup, SpaDirectory};
//!
//! let directory = SpaDirectory::embedded().unwrap();
//! let top = directory.top_spas_for_city("Thailand", "Bangkok", 3);
//! assert_eq!(top[0].rank, 1);
//!
//! match directory.find_by_slug(&top[0].slug) {
//!     SlugLookup::Curated(spa) | SlugLookup::Bulk(spa) => assert_eq!(spa.slug, top[0].slug),
//!     SlugLookup::NotFound => unreachable!(),
//! }
//! ```

pub mod curated;
pub mod dataset;
pub mod expand;
pub mod stats;

#[cfg(test)]
mod tests;

pub use curated::{CURATED_SPAS, CuratedSpa};
pub use dataset::{CityEntry, CompactSpaRecord, CountryEntry, SpaDataset};
pub use expand::{ExpandedSpa, Rating, display_name, expand};
pub use stats::{CityStat, CountryStat};

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::core::SpaReviewError;
use crate::utils::{spa_slug, to_slug};

/// Outcome of resolving a spa slug, tagged with where the match came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SlugLookup {
    /// Matched an entry of the curated top list
    Curated(ExpandedSpa),
    /// Matched a spa in the bulk dataset
    Bulk(ExpandedSpa),
    NotFound,
}

impl SlugLookup {
    #[must_use]
    pub const fn spa(&self) -> Option<&ExpandedSpa> {
        match self {
            Self::Curated(spa) | Self::Bulk(spa) => Some(spa),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub fn into_spa(self) -> Option<ExpandedSpa> {
        match self {
            Self::Curated(spa) | Self::Bulk(spa) => Some(spa),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// The loaded spa directory.
#[derive(Debug, Clone)]
pub struct SpaDirectory {
    dataset: SpaDataset,
    curated: Vec<CuratedSpa>,
}

impl SpaDirectory {
    /// Build a directory over `dataset` with the built-in curated list.
    ///
    /// # Errors
    ///
    /// Returns [`SpaReviewError::DuplicateSlug`] when two bulk spas expand to
    /// the same slug.
    pub fn new(dataset: SpaDataset) -> Result<Self, SpaReviewError> {
        Self::with_curated(dataset, CURATED_SPAS.to_vec())
    }

    /// Build a directory with a caller-supplied curated list.
    pub fn with_curated(
        dataset: SpaDataset,
        curated: Vec<CuratedSpa>,
    ) -> Result<Self, SpaReviewError> {
        check_unique_slugs(&dataset)?;
        info!(
            "Loaded spa directory: {} countries, {} spas, {} curated",
            dataset.countries().len(),
            dataset.total_spas(),
            curated.len()
        );
        Ok(Self {
            dataset,
            curated,
        })
    }

    /// Directory over the sample dataset compiled into the crate.
    pub fn embedded() -> Result<Self, SpaReviewError> {
        Self::new(SpaDataset::embedded()?)
    }

    /// Directory over a dataset document on disk.
    pub async fn load(path: &Path) -> Result<Self, SpaReviewError> {
        Self::new(SpaDataset::load(path).await?)
    }

    #[must_use]
    pub const fn dataset(&self) -> &SpaDataset {
        &self.dataset
    }

    /// Country names, sorted lexicographically.
    #[must_use]
    pub fn list_countries(&self) -> Vec<&str> {
        let mut names: Vec<&str> =
            self.dataset.countries().iter().map(|country| country.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// City names of `country`, sorted. Empty for an unknown country.
    #[must_use]
    pub fn list_cities(&self, country: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .dataset
            .country(country)
            .map(|entry| entry.cities.iter().map(|city| city.name.as_str()).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn total_spa_count(&self) -> usize {
        self.dataset.total_spas()
    }

    /// Per-country counts, largest first. Ties keep dataset order.
    #[must_use]
    pub fn country_stats(&self) -> Vec<CountryStat> {
        let mut stats: Vec<CountryStat> = self
            .dataset
            .countries()
            .iter()
            .map(|country| CountryStat {
                name: country.name.clone(),
                slug: to_slug(&country.name),
                city_count: country.cities.len(),
                spa_count: country.spa_count(),
            })
            .collect();
        stats.sort_by(|a, b| b.spa_count.cmp(&a.spa_count));
        stats
    }

    /// Per-city counts within `country`, largest first. Ties keep dataset order.
    #[must_use]
    pub fn city_stats(&self, country: &str) -> Vec<CityStat> {
        let Some(entry) = self.dataset.country(country) else {
            return Vec::new();
        };
        let mut stats: Vec<CityStat> = entry
            .cities
            .iter()
            .map(|city| CityStat {
                name: city.name.clone(),
                country: entry.name.clone(),
                slug: to_slug(&city.name),
                spa_count: city.spas.len(),
            })
            .collect();
        stats.sort_by(|a, b| b.spa_count.cmp(&a.spa_count));
        stats
    }

    /// Best-rated spas across every city of `country`.
    #[must_use]
    pub fn top_spas_for_country(&self, country: &str, limit: usize) -> Vec<ExpandedSpa> {
        let Some(entry) = self.dataset.country(country) else {
            return Vec::new();
        };
        let spas = entry
            .cities
            .iter()
            .flat_map(|city| city.spas.iter().map(|spa| expand(spa, &city.name, &entry.name)))
            .collect();
        rank_window(spas, limit)
    }

    /// Best-rated spas in one city.
    #[must_use]
    pub fn top_spas_for_city(&self, country: &str, city: &str, limit: usize) -> Vec<ExpandedSpa> {
        let Some(entry) = self.dataset.city(country, city) else {
            return Vec::new();
        };
        let spas = entry.spas.iter().map(|spa| expand(spa, &entry.name, country)).collect();
        rank_window(spas, limit)
    }

    /// Resolve a spa slug, curated list first.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> SlugLookup {
        if let Some(curated) = self.curated.iter().find(|spa| spa.slug() == slug) {
            debug!("Slug '{}' resolved to curated spa '{}'", slug, curated.name);
            return SlugLookup::Curated(curated.expand());
        }

        self.dataset
            .records()
            .find(|(_, city, record)| spa_slug(&display_name(&record.name, city), city) == slug)
            .map_or(SlugLookup::NotFound, |(country, city, record)| {
                debug!("Slug '{}' resolved to bulk spa in {}, {}", slug, city, country);
                SlugLookup::Bulk(expand(record, city, country))
            })
    }

    /// Every bulk spa slug, computed lazily in dataset order.
    ///
    /// Calling this again starts a fresh pass.
    pub fn all_slugs(&self) -> impl Iterator<Item = String> + '_ {
        self.dataset
            .records()
            .map(|(_, city, record)| spa_slug(&display_name(&record.name, city), city))
    }

    /// The curated list expanded, in authored order.
    #[must_use]
    pub fn curated_spas(&self) -> Vec<ExpandedSpa> {
        self.curated.iter().map(CuratedSpa::expand).collect()
    }

    /// Country whose slug is `slug`, first match in sorted order.
    #[must_use]
    pub fn find_country_by_slug(&self, slug: &str) -> Option<&str> {
        self.list_countries().into_iter().find(|name| to_slug(name) == slug)
    }

    /// `(city, country)` for a city slug, first match in sorted order.
    #[must_use]
    pub fn find_city_by_slug(&self, slug: &str) -> Option<(&str, &str)> {
        self.list_countries().into_iter().find_map(|country| {
            self.list_cities(country)
                .into_iter()
                .find(|city| to_slug(city) == slug)
                .map(|city| (city, country))
        })
    }
}

/// Stable sort by rating then reviews, truncate and assign 1-based ranks.
fn rank_window(mut spas: Vec<ExpandedSpa>, limit: usize) -> Vec<ExpandedSpa> {
    spas.sort_by(|a, b| b.rating.cmp(&a.rating).then_with(|| b.reviews.cmp(&a.reviews)));
    spas.truncate(limit);
    for (index, spa) in spas.iter_mut().enumerate() {
        spa.rank = index + 1;
    }
    spas
}

fn check_unique_slugs(dataset: &SpaDataset) -> Result<(), SpaReviewError> {
    let mut seen: HashMap<String, String> = HashMap::with_capacity(dataset.total_spas());
    for (country, city, record) in dataset.records() {
        let name = display_name(&record.name, city);
        let slug = spa_slug(&name, city);
        let described = format!("{name} ({city}, {country})");
        if let Some(first) = seen.get(&slug) {
            return Err(SpaReviewError::DuplicateSlug {
                slug,
                first: first.clone(),
                second: described,
            });
        }
        seen.insert(slug, described);
    }
    Ok(())
}
