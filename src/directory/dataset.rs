//! The compact spa dataset.
//!
//! The dataset is a JSON document mapping country -> city -> list of compact
//! records. Each record is a four-element array:
//!
//! ```json
//! { "Thailand": { "Bangkok": [["Oasis Spa", 46, 213, "D"]] } }
//! ```
//!
//! | position | meaning                     | example |
//! |----------|-----------------------------|---------|
//! | 0        | spa name                    | `"Oasis Spa"` |
//! | 1        | rating x 10 (0..=50)        | `46` -> 4.6 |
//! | 2        | reviews / 10                | `213` -> 2,130 |
//! | 3        | one-letter type code        | `"D"` -> Day Spa |
//!
//! The order of countries and cities in the document is preserved. Ranked
//! queries break ties by this order, so the loader never reorders keys.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use tracing::debug;

use crate::core::SpaReviewError;

/// Sample dataset compiled into the binary.
const EMBEDDED_DATASET: &str = include_str!("../../data/spas.json");

/// Storage-efficient encoding of a spa before expansion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "(String, u8, u32, char)")]
pub struct CompactSpaRecord {
    pub name: String,
    pub rating_tenths: u8,
    pub reviews_tens: u32,
    pub type_code: char,
}

impl CompactSpaRecord {
    pub fn new(name: impl Into<String>, rating_tenths: u8, reviews_tens: u32, type_code: char) -> Self {
        Self {
            name: name.into(),
            rating_tenths,
            reviews_tens,
            type_code,
        }
    }
}

impl TryFrom<(String, u8, u32, char)> for CompactSpaRecord {
    type Error = String;

    fn try_from(
        (name, rating_tenths, reviews_tens, type_code): (String, u8, u32, char),
    ) -> Result<Self, Self::Error> {
        if rating_tenths > 50 {
            return Err(format!("rating {rating_tenths} for '{name}' exceeds 50 (5.0 stars)"));
        }
        if reviews_tens > u32::MAX / 10 {
            return Err(format!("review count {reviews_tens}0 for '{name}' is out of range"));
        }
        Ok(Self::new(name, rating_tenths, reviews_tens, type_code))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityEntry {
    pub name: String,
    pub spas: Vec<CompactSpaRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    pub name: String,
    pub cities: Vec<CityEntry>,
}

impl CountryEntry {
    #[must_use]
    pub fn city(&self, name: &str) -> Option<&CityEntry> {
        self.cities.iter().find(|city| city.name == name)
    }

    #[must_use]
    pub fn spa_count(&self) -> usize {
        self.cities.iter().map(|city| city.spas.len()).sum()
    }
}

/// Read-only country -> city -> records mapping in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaDataset {
    countries: Vec<CountryEntry>,
}

impl SpaDataset {
    #[must_use]
    pub const fn new(countries: Vec<CountryEntry>) -> Self {
        Self {
            countries,
        }
    }

    /// Parse a dataset document.
    pub fn from_json_str(json: &str) -> Result<Self, SpaReviewError> {
        let dataset: Self = serde_json::from_str(json)?;
        debug!(
            "Parsed spa dataset: {} countries, {} spas",
            dataset.countries.len(),
            dataset.total_spas()
        );
        Ok(dataset)
    }

    /// The sample dataset bundled with the crate.
    pub fn embedded() -> Result<Self, SpaReviewError> {
        Self::from_json_str(EMBEDDED_DATASET)
    }

    /// Read and parse a dataset document from disk.
    pub async fn load(path: &Path) -> Result<Self, SpaReviewError> {
        let content =
            tokio::fs::read_to_string(path).await.map_err(|e| SpaReviewError::DatasetRead {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Self::from_json_str(&content)
    }

    /// Countries in document order.
    #[must_use]
    pub fn countries(&self) -> &[CountryEntry] {
        &self.countries
    }

    #[must_use]
    pub fn country(&self, name: &str) -> Option<&CountryEntry> {
        self.countries.iter().find(|country| country.name == name)
    }

    #[must_use]
    pub fn city(&self, country: &str, city: &str) -> Option<&CityEntry> {
        self.country(country)?.city(city)
    }

    /// Every record with its country and city, in document order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &str, &CompactSpaRecord)> + '_ {
        self.countries.iter().flat_map(|country| {
            country.cities.iter().flat_map(move |city| {
                city.spas.iter().map(move |spa| (country.name.as_str(), city.name.as_str(), spa))
            })
        })
    }

    #[must_use]
    pub fn total_spas(&self) -> usize {
        self.countries.iter().map(CountryEntry::spa_count).sum()
    }
}

impl<'de> Deserialize<'de> for SpaDataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = OrderedMap::<OrderedMap<Vec<CompactSpaRecord>>>::deserialize(deserializer)?;
        let countries = map
            .0
            .into_iter()
            .map(|(name, cities)| CountryEntry {
                name,
                cities: cities
                    .0
                    .into_iter()
                    .map(|(name, spas)| CityEntry {
                        name,
                        spas,
                    })
                    .collect(),
            })
            .collect();
        Ok(Self::new(countries))
    }
}

/// JSON object deserialized as an insertion-ordered list of entries.
///
/// Duplicate keys are rejected rather than silently overwritten.
#[derive(Debug)]
struct OrderedMap<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                let mut seen = HashSet::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    if !seen.insert(key.clone()) {
                        return Err(de::Error::custom(format!("duplicate key `{key}`")));
                    }
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_document_order() {
        let dataset = SpaDataset::from_json_str(
            r#"{
                "Zambia": { "Lusaka": [["Zen Spa", 40, 5, "D"]] },
                "Austria": {
                    "Vienna": [["Therme Wien", 44, 300, "T"]],
                    "Graz": [["Mandira", 48, 20, "W"], ["Alpha", 41, 1, "X"]]
                }
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = dataset.countries().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Zambia", "Austria"]);

        let austria = dataset.country("Austria").unwrap();
        let cities: Vec<&str> = austria.cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(cities, ["Vienna", "Graz"]);
        assert_eq!(austria.spa_count(), 3);
        assert_eq!(dataset.total_spas(), 4);
    }

    #[test]
    fn test_parse_compact_record() {
        let dataset =
            SpaDataset::from_json_str(r#"{"X": {"Y": [["Spa Name", 47, 63, "M"]]}}"#).unwrap();
        let record = &dataset.city("X", "Y").unwrap().spas[0];
        assert_eq!(record, &CompactSpaRecord::new("Spa Name", 47, 63, 'M'));
    }

    #[test]
    fn test_records_iterates_in_document_order() {
        let dataset = SpaDataset::from_json_str(
            r#"{"B": {"b1": [["one", 1, 1, "D"], ["two", 1, 1, "D"]]}, "A": {"a1": [["three", 1, 1, "D"]]}}"#,
        )
        .unwrap();
        let order: Vec<(&str, &str, &str)> =
            dataset.records().map(|(c, city, r)| (c, city, r.name.as_str())).collect();
        assert_eq!(order, [("B", "b1", "one"), ("B", "b1", "two"), ("A", "a1", "three")]);
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let err = SpaDataset::from_json_str(r#"{"A": {}, "A": {}}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate key `A`"));
    }

    #[test]
    fn test_rejects_rating_above_five_stars() {
        let err = SpaDataset::from_json_str(r#"{"A": {"B": [["Spa", 51, 1, "D"]]}}"#).unwrap_err();
        assert!(matches!(err, SpaReviewError::DatasetParse { .. }));
        assert!(err.to_string().contains("exceeds 50"));
    }

    #[test]
    fn test_rejects_malformed_record() {
        let err = SpaDataset::from_json_str(r#"{"A": {"B": [["Spa", 40, 1]]}}"#).unwrap_err();
        assert!(matches!(err, SpaReviewError::DatasetParse { .. }));

        let err = SpaDataset::from_json_str(r#"{"A": {"B": [["Spa", 40, 1, "DD"]]}}"#).unwrap_err();
        assert!(matches!(err, SpaReviewError::DatasetParse { .. }));
    }

    #[test]
    fn test_embedded_dataset_parses() {
        let dataset = SpaDataset::embedded().unwrap();
        assert!(dataset.total_spas() > 50);
        assert!(dataset.city("Thailand", "Bangkok").is_some());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = SpaDataset::load(Path::new("/definitely/not/here.json")).await.unwrap_err();
        assert!(matches!(err, SpaReviewError::DatasetRead { .. }));
    }
}
