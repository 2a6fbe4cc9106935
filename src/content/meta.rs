//! Page titles and meta descriptions.

use crate::directory::ExpandedSpa;
use crate::utils::format_thousands;

/// Site identity stamped into titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaCopy {
    pub site_name: String,
    pub year: u16,
}

impl MetaCopy {
    pub fn new(site_name: impl Into<String>, year: u16) -> Self {
        Self {
            site_name: site_name.into(),
            year,
        }
    }

    #[must_use]
    pub fn spa_title(&self, spa: &ExpandedSpa) -> String {
        format!("{} | Reviews, Treatments & Booking | {}", spa.name, self.site_name)
    }

    /// Spa description quoting the first three treatments of its type.
    #[must_use]
    pub fn spa_description(&self, spa: &ExpandedSpa) -> String {
        let highlights = spa.spa_type.offerings().into_iter().take(3).collect::<Vec<_>>().join(", ");
        format!(
            "{} in {}, {} — rated {}/5 from {} Google reviews. {} offering {} and more. Read reviews, compare prices & book.",
            spa.name,
            spa.city,
            spa.country,
            spa.rating,
            format_thousands(u64::from(spa.reviews)),
            spa.spa_type,
            highlights
        )
    }

    #[must_use]
    pub fn city_title(&self, city: &str, country: &str) -> String {
        format!(
            "Best Spas in {city}, {country} ({}) — Top-Rated & Reviewed | {}",
            self.year, self.site_name
        )
    }

    #[must_use]
    pub fn city_description(&self, city: &str, country: &str, spa_count: usize) -> String {
        format!(
            "Discover the {}+ best spas and wellness retreats in {city}, {country}. Compare ratings, read reviews, and book treatments at top-rated day spas, resort spas, medical spas & more.",
            format_thousands(spa_count as u64)
        )
    }

    #[must_use]
    pub fn country_title(&self, country: &str) -> String {
        format!("Best Spas in {country} ({}) — Complete Guide | {}", self.year, self.site_name)
    }

    #[must_use]
    pub fn country_description(&self, country: &str, city_count: usize, spa_count: usize) -> String {
        format!(
            "Explore {}+ spas across {city_count} cities in {country}. From luxury resort spas to wellness retreats, find the perfect spa experience. Ratings, reviews & direct booking.",
            format_thousands(spa_count as u64)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{CompactSpaRecord, expand};

    #[test]
    fn test_spa_meta() {
        let meta = MetaCopy::new("Spa-Review", 2026);
        let spa = expand(&CompactSpaRecord::new("Thermal Bath", 44, 150, 'T'), "Vichy", "France");
        assert_eq!(meta.spa_title(&spa), "Thermal Bath Vichy | Reviews, Treatments & Booking | Spa-Review");
        assert_eq!(
            meta.spa_description(&spa),
            "Thermal Bath Vichy in Vichy, France — rated 4.4/5 from 1,500 Google reviews. Thermal Spa offering Relaxation Massage, Deep Tissue Massage, Aromatherapy and more. Read reviews, compare prices & book."
        );
    }

    #[test]
    fn test_city_and_country_meta() {
        let meta = MetaCopy::new("Spa-Review", 2026);
        assert_eq!(
            meta.city_title("Bangkok", "Thailand"),
            "Best Spas in Bangkok, Thailand (2026) — Top-Rated & Reviewed | Spa-Review"
        );
        assert!(meta.city_description("Bangkok", "Thailand", 1234).starts_with("Discover the 1,234+ best spas"));
        assert_eq!(meta.country_title("Japan"), "Best Spas in Japan (2026) — Complete Guide | Spa-Review");
        assert!(meta.country_description("Japan", 3, 10).starts_with("Explore 10+ spas across 3 cities in Japan."));
    }
}
