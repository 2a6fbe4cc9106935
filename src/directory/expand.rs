//! Expansion of compact records into display records.
//!
//! Expansion is a pure function of a [`CompactSpaRecord`] plus the city and
//! country it is filed under. Nothing is cached: expanded records are cheap to
//! rebuild and building them on demand keeps the stored dataset compact.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::core::SpaType;
use crate::directory::dataset::CompactSpaRecord;
use crate::utils::{default_photo_url, spa_slug};

/// Star rating stored as integer tenths (47 = 4.7 stars).
///
/// Integer storage keeps sorting exact; [`fmt::Display`] always renders one
/// decimal place and serialization emits a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rating(u8);

impl Rating {
    #[must_use]
    pub const fn from_tenths(tenths: u8) -> Self {
        Self(tenths)
    }

    #[must_use]
    pub const fn tenths(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// A fully-described spa, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedSpa {
    pub name: String,
    pub slug: String,
    pub city: String,
    pub country: String,
    pub rating: Rating,
    pub reviews: u32,
    #[serde(rename = "type")]
    pub spa_type: SpaType,
    pub type_color: &'static str,
    pub type_icon: &'static str,
    /// 1-based position inside a ranked window, 0 outside one
    pub rank: usize,
    pub photo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub awards: Vec<String>,
}

impl ExpandedSpa {
    /// Whether this record came from the curated list.
    #[must_use]
    pub fn is_curated(&self) -> bool {
        self.tagline.is_some() || !self.awards.is_empty()
    }
}

/// Display name for a compact record.
///
/// Names that already mention the city are kept. Otherwise the city is
/// appended to capitalised names ("Oasis Spa Bangkok") and prepended to the
/// rest ("Bangkok urban retreat").
#[must_use]
pub fn display_name(name: &str, city: &str) -> String {
    if name.contains(city) {
        name.to_string()
    } else if name.starts_with(|c: char| c.is_ascii_uppercase()) {
        format!("{name} {city}")
    } else {
        format!("{city} {name}")
    }
}

/// Expand a compact record filed under `city`, `country`.
#[must_use]
pub fn expand(record: &CompactSpaRecord, city: &str, country: &str) -> ExpandedSpa {
    let name = display_name(&record.name, city);
    let spa_type = SpaType::from_code_or_default(record.type_code);
    ExpandedSpa {
        slug: spa_slug(&name, city),
        photo_url: default_photo_url(&name, city),
        city: city.to_string(),
        country: country.to_string(),
        rating: Rating::from_tenths(record.rating_tenths),
        reviews: record.reviews_tens * 10,
        spa_type,
        type_color: spa_type.color(),
        type_icon: spa_type.icon(),
        rank: 0,
        tagline: None,
        awards: Vec::new(),
        name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_medical_spa_record() {
        let record = CompactSpaRecord::new("Spa Name", 47, 63, 'M');
        let spa = expand(&record, "Bangkok", "Thailand");

        assert_eq!(spa.rating, Rating::from_tenths(47));
        assert_eq!(spa.rating.as_f64(), 4.7);
        assert_eq!(spa.rating.to_string(), "4.7");
        assert_eq!(spa.reviews, 630);
        assert_eq!(spa.spa_type, SpaType::MedicalSpa);
        assert_eq!(spa.spa_type.label(), "Medical Spa");
        assert_eq!(spa.type_color, "#dc2626");
        assert_eq!(spa.name, "Spa Name Bangkok");
        assert_eq!(spa.slug, "spa-name-bangkok");
        assert_eq!(spa.rank, 0);
        assert!(!spa.is_curated());
    }

    #[test]
    fn test_display_name_rules() {
        assert_eq!(display_name("Oasis Spa Bangkok", "Bangkok"), "Oasis Spa Bangkok");
        assert_eq!(display_name("Bangkok Oasis", "Bangkok"), "Bangkok Oasis");
        assert_eq!(display_name("Oasis Spa", "Bangkok"), "Oasis Spa Bangkok");
        assert_eq!(display_name("urban retreat", "Bangkok"), "Bangkok urban retreat");
        assert_eq!(display_name("Évian Spa", "Vichy"), "Vichy Évian Spa");
    }

    #[test]
    fn test_name_containing_city_gets_no_suffix() {
        let record = CompactSpaRecord::new("Terme Merano", 45, 90, 'T');
        let spa = expand(&record, "Merano", "Italy");
        assert_eq!(spa.name, "Terme Merano");
        assert_eq!(spa.slug, "terme-merano");
    }

    #[test]
    fn test_unknown_type_code_expands_as_day_spa() {
        let record = CompactSpaRecord::new("Mystery", 30, 1, 'Z');
        let spa = expand(&record, "Oslo", "Norway");
        assert_eq!(spa.spa_type, SpaType::DaySpa);
        assert_eq!(spa.type_icon, "💆");
    }

    #[test]
    fn test_rating_display_always_one_decimal() {
        assert_eq!(Rating::from_tenths(50).to_string(), "5.0");
        assert_eq!(Rating::from_tenths(0).to_string(), "0.0");
        assert_eq!(Rating::from_tenths(9).to_string(), "0.9");
    }

    #[test]
    fn test_serialized_shape() {
        let spa = expand(&CompactSpaRecord::new("Oasis Spa", 46, 213, 'D'), "Bangkok", "Thailand");
        let json = serde_json::to_value(&spa).unwrap();
        assert_eq!(json["rating"], 4.6);
        assert_eq!(json["reviews"], 2130);
        assert_eq!(json["type"], "Day Spa");
        assert_eq!(json["typeColor"], "#ec4899");
        assert_eq!(json["slug"], "oasis-spa-bangkok");
        assert!(json["photoUrl"].as_str().unwrap().starts_with("https://picsum.photos/seed/"));
        assert!(json.get("tagline").is_none());
        assert!(json.get("awards").is_none());
    }
}
