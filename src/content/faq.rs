//! FAQ sets for city and spa pages.
//!
//! Both builders always return exactly four entries so page layouts and the
//! `FAQPage` JSON-LD stay stable.

use serde::{Deserialize, Serialize};

use crate::directory::{ExpandedSpa, Rating};
use crate::utils::format_thousands;

/// Rating quoted for a city with no ranked spas.
const FALLBACK_TOP_RATING: Rating = Rating::from_tenths(45);

/// Review count quoted for a city with no ranked spas.
const FALLBACK_TOP_REVIEWS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Site editorial rating derived from the public rating.
///
/// `min(5.0, round1(rating * 1.05 + 0.2))`, computed on tenths so halves round
/// up without floating point drift.
#[must_use]
pub fn editorial_rating(rating: Rating) -> Rating {
    let scaled = u32::from(rating.tenths()) * 105 + 200;
    let rounded = (scaled + 50) / 100;
    // clamped to 50 so the narrowing cast cannot truncate
    Rating::from_tenths(rounded.min(50) as u8)
}

/// The four FAQs shown on a city page.
///
/// `top_spas` is the city's ranked window; when it is empty the first answer
/// falls back to a generic top spa.
#[must_use]
pub fn city_faqs(city: &str, country: &str, top_spas: &[ExpandedSpa]) -> Vec<Faq> {
    let (top_name, top_rating, top_reviews) = match top_spas.first() {
        Some(spa) => (spa.name.clone(), spa.rating, spa.reviews),
        None => (
            format!("the top-rated spa in {city}"),
            FALLBACK_TOP_RATING,
            FALLBACK_TOP_REVIEWS,
        ),
    };

    vec![
        Faq::new(
            format!("What is the best spa in {city}, {country}?"),
            format!(
                "Based on verified Google reviews and our expert analysis, {top_name} is currently the highest-rated spa in {city}. It maintains a {top_rating}/5 rating from {} reviews.",
                format_thousands(u64::from(top_reviews))
            ),
        ),
        Faq::new(
            format!("How much does a spa treatment cost in {city}?"),
            format!(
                "Spa treatment prices in {city} vary widely depending on the type of venue. Day spas typically start from $30-80 for basic treatments, while luxury hotel spas and medical spas can range from $100-500+ per session. Multi-day wellness retreat packages may cost $200-2,000+ per night."
            ),
        ),
        Faq::new(
            format!("Do I need to book spa treatments in advance in {city}?"),
            format!(
                "For popular spas in {city}, especially during peak tourist season, advance booking is strongly recommended — ideally 1-2 weeks ahead. Many top spas offer online booking. Walk-in availability is more common at day spas and during off-peak hours."
            ),
        ),
        Faq::new(
            format!("What types of spas are available in {city}?"),
            format!(
                "{city} offers a diverse range of spa types including day spas for quick treatments, hotel spas within luxury properties, resort spas with full amenities, medical spas offering clinical treatments, wellness retreats for multi-day programs, and specialized thermal spas where geothermal resources are available."
            ),
        ),
    ]
}

/// The four FAQs shown on a spa page.
#[must_use]
pub fn spa_faqs(spa: &ExpandedSpa, offerings: &[&str]) -> Vec<Faq> {
    let name = &spa.name;
    let treatments = offerings.iter().take(6).copied().collect::<Vec<_>>().join(", ");

    vec![
        Faq::new(
            format!("What treatments does {name} offer?"),
            format!(
                "{name} offers a range of {} services including {treatments}, and more.",
                spa.spa_type.label().to_lowercase()
            ),
        ),
        Faq::new(
            format!("What is the rating of {name}?"),
            format!(
                "{name} has a Google rating of {}/5 based on {} reviews. Our editorial rating is {}/5.",
                spa.rating,
                format_thousands(u64::from(spa.reviews)),
                editorial_rating(spa.rating)
            ),
        ),
        Faq::new(
            format!("Where is {name} located?"),
            format!(
                "{name} is located in {}, {}. You can find directions and the exact location on Google Maps.",
                spa.city, spa.country
            ),
        ),
        Faq::new(
            format!("How do I book {name}?"),
            format!(
                "You can book {name} by searching for their official website or contacting them directly. We recommend booking 1-2 weeks in advance for popular time slots."
            ),
        ),
    ]
}
