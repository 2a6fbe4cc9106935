//! Aggregate counts for country and city listing pages.

use serde::Serialize;

/// Summary of one country for the country index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStat {
    pub name: String,
    pub slug: String,
    pub city_count: usize,
    pub spa_count: usize,
}

impl CountryStat {
    /// Number of direct children (cities).
    #[must_use]
    pub const fn child_count(&self) -> usize {
        self.city_count
    }
}

/// Summary of one city inside a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStat {
    pub name: String,
    pub country: String,
    pub slug: String,
    pub spa_count: usize,
}

impl CityStat {
    /// Number of direct children. A city's children are its spas.
    #[must_use]
    pub const fn child_count(&self) -> usize {
        self.spa_count
    }
}
