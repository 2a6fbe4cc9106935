//! Blog content calendar.

use serde::{Deserialize, Serialize};

use crate::core::SpaType;
use crate::utils::to_slug;

/// Number of cities that get a dedicated guide.
const CITY_GUIDE_LIMIT: usize = 30;

/// Types that get a "What is a ..." explainer.
const EXPLAINER_TYPES: [SpaType; 4] =
    [SpaType::MedicalSpa, SpaType::DaySpa, SpaType::WellnessRetreat, SpaType::ThermalSpa];

/// A planned blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogIdea {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub target_keyword: String,
}

impl BlogIdea {
    fn new(title: String, slug: String, category: &str, target_keyword: String) -> Self {
        Self {
            title,
            slug,
            category: category.to_string(),
            target_keyword,
        }
    }
}

/// City guides, type explainers and the fixed seasonal and lifestyle pieces.
#[must_use]
pub fn blog_ideas(cities: &[&str], year: u16) -> Vec<BlogIdea> {
    let mut ideas: Vec<BlogIdea> = cities
        .iter()
        .take(CITY_GUIDE_LIMIT)
        .map(|city| {
            BlogIdea::new(
                format!("The Complete Guide to Spas in {city} ({year})"),
                format!("best-spas-{}", to_slug(city)),
                "City Guide",
                format!("best spas {city}"),
            )
        })
        .collect();

    ideas.extend(EXPLAINER_TYPES.iter().map(|kind| {
        let label = kind.label();
        BlogIdea::new(
            format!("What Is a {label}? Everything You Need to Know"),
            format!("what-is-a-{}", to_slug(label)),
            "Education",
            format!("what is a {}", label.to_lowercase()),
        )
    }));

    let fixed = [
        (format!("Best Winter Spa Destinations for {year}"), "best-winter-spa-destinations", "Seasonal", "winter spa destinations"),
        ("Top Luxury Spa Resorts for a Summer Escape".to_string(), "luxury-spa-resorts-summer", "Seasonal", "luxury spa resorts summer"),
        ("Best Couples Spa Retreats Around the World".to_string(), "best-couples-spa-retreats", "Lifestyle", "couples spa retreat"),
        ("The Ultimate Guide to Spa Etiquette".to_string(), "spa-etiquette-guide", "Education", "spa etiquette"),
        ("Medical Spa vs Day Spa: Which Is Right for You?".to_string(), "medical-spa-vs-day-spa", "Education", "medical spa vs day spa"),
        ("The 10 Best Thermal Spas in Europe".to_string(), "best-thermal-spas-europe", "Regional", "best thermal spas europe"),
        ("Wellness Retreats That Will Change Your Life".to_string(), "best-wellness-retreats", "Lifestyle", "best wellness retreats"),
    ];
    ideas.extend(fixed.into_iter().map(|(title, slug, category, keyword)| {
        BlogIdea::new(title, slug.to_string(), category, keyword.to_string())
    }));

    ideas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_ideas_layout() {
        let cities: Vec<String> = (0..40).map(|i| format!("City {i}")).collect();
        let refs: Vec<&str> = cities.iter().map(String::as_str).collect();
        let ideas = blog_ideas(&refs, 2026);

        assert_eq!(ideas.len(), 30 + 4 + 7);
        assert_eq!(ideas[0].title, "The Complete Guide to Spas in City 0 (2026)");
        assert_eq!(ideas[0].slug, "best-spas-city-0");
        assert_eq!(ideas[29].target_keyword, "best spas City 29");
        assert_eq!(ideas[30].slug, "what-is-a-medical-spa");
        assert_eq!(ideas[30].target_keyword, "what is a medical spa");
        assert_eq!(ideas[34].title, "Best Winter Spa Destinations for 2026");
        assert_eq!(ideas.last().unwrap().slug, "best-wellness-retreats");
    }

    #[test]
    fn test_blog_city_slugs_are_url_safe() {
        let ideas = blog_ideas(&["St. Moritz", "Évian-les-Bains"], 2026);
        assert_eq!(ideas[0].slug, "best-spas-st-moritz");
        assert_eq!(ideas[1].slug, "best-spas-evian-les-bains");
        assert_eq!(ideas.len(), 2 + 4 + 7);
    }
}
