//! The curated global top list.
//!
//! A hand-authored set of flagship spas that carry editorial extras (tagline,
//! awards) and exact review counts not present in the compact dataset. Slug
//! lookups consult this list before the bulk dataset, so a curated entry
//! shadows any bulk spa that produces the same slug.
//!
//! Curated slugs are always `to_slug("{name}-{city}")`; unlike bulk slugs the
//! city is appended even when the name already ends with it.

use crate::core::SpaType;
use crate::directory::expand::{ExpandedSpa, Rating};
use crate::utils::{default_photo_url, to_slug};

/// A hand-authored flagship spa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratedSpa {
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    /// Rating in tenths of a star (47 = 4.7)
    pub rating_tenths: u8,
    /// Exact review count
    pub reviews: u32,
    pub spa_type: SpaType,
    pub tagline: Option<&'static str>,
    pub awards: &'static [&'static str],
}

impl CuratedSpa {
    #[must_use]
    pub fn slug(&self) -> String {
        to_slug(&format!("{}-{}", self.name, self.city))
    }

    /// Expand into the display record shared with bulk spas.
    #[must_use]
    pub fn expand(&self) -> ExpandedSpa {
        ExpandedSpa {
            name: self.name.to_string(),
            slug: self.slug(),
            city: self.city.to_string(),
            country: self.country.to_string(),
            rating: Rating::from_tenths(self.rating_tenths),
            reviews: self.reviews,
            spa_type: self.spa_type,
            type_color: self.spa_type.color(),
            type_icon: self.spa_type.icon(),
            rank: 0,
            photo_url: default_photo_url(self.name, self.city),
            tagline: self.tagline.map(str::to_string),
            awards: self.awards.iter().map(|award| (*award).to_string()).collect(),
        }
    }
}

/// The global top 50 as published on the home page.
pub const CURATED_SPAS: &[CuratedSpa] = &[
    CuratedSpa {
        name: "Lefay Resort & Spa Lago di Garda",
        city: "Gargnano",
        country: "Italy",
        rating_tenths: 47,
        reviews: 3842,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Alpine air meets Italian soul on Lake Garda"),
        awards: &["Sunday Times #1 2025", "Condé Nast"],
    },
    CuratedSpa {
        name: "Chiva-Som",
        city: "Hua Hin",
        country: "Thailand",
        rating_tenths: 47,
        reviews: 634,
        spa_type: SpaType::DestinationSpa,
        tagline: Some("30 years of transformative healing"),
        awards: &["Sunday Times Top 50 2025"],
    },
    CuratedSpa {
        name: "RAKxa Integrative Wellness",
        city: "Bangkok",
        country: "Thailand",
        rating_tenths: 48,
        reviews: 412,
        spa_type: SpaType::MedicalSpa,
        tagline: Some("Thai wisdom meets cutting-edge diagnostics"),
        awards: &["Sunday Times Best Medi-Spa 2025"],
    },
    CuratedSpa {
        name: "Palace Merano",
        city: "Merano",
        country: "Italy",
        rating_tenths: 47,
        reviews: 1287,
        spa_type: SpaType::MedicalSpa,
        tagline: Some("Three decades of detox mastery"),
        awards: &["Sunday Times 2025"],
    },
    CuratedSpa {
        name: "Palazzo Fiuggi",
        city: "Fiuggi",
        country: "Italy",
        rating_tenths: 47,
        reviews: 689,
        spa_type: SpaType::MedicalSpa,
        tagline: Some("Renaissance grandeur meets metabolic medicine"),
        awards: &["Sunday Times Best Nutrition"],
    },
    CuratedSpa {
        name: "SHA Wellness Clinic",
        city: "Alicante",
        country: "Spain",
        rating_tenths: 43,
        reviews: 1134,
        spa_type: SpaType::WellnessClinic,
        tagline: Some("Science-driven longevity"),
        awards: &["World Spa Awards 2025"],
    },
    CuratedSpa {
        name: "Park Igls",
        city: "Innsbruck",
        country: "Austria",
        rating_tenths: 48,
        reviews: 523,
        spa_type: SpaType::MedicalSpa,
        tagline: Some("Mayr medicine in the Alps"),
        awards: &["Sunday Times Top 50"],
    },
    CuratedSpa {
        name: "Euphoria Retreat",
        city: "Mystras",
        country: "Greece",
        rating_tenths: 47,
        reviews: 358,
        spa_type: SpaType::WellnessRetreat,
        tagline: Some("Greek healing in the Peloponnese"),
        awards: &["Sunday Times Top 50", "Condé Nast Top 5"],
    },
    CuratedSpa {
        name: "Kamalaya Koh Samui",
        city: "Koh Samui",
        country: "Thailand",
        rating_tenths: 48,
        reviews: 1234,
        spa_type: SpaType::WellnessRetreat,
        tagline: Some("Soul sanctuary around a monk's cave"),
        awards: &["Condé Nast Awards"],
    },
    CuratedSpa {
        name: "Chenot Palace Weggis",
        city: "Weggis",
        country: "Switzerland",
        rating_tenths: 45,
        reviews: 347,
        spa_type: SpaType::MedicalSpa,
        tagline: Some("Swiss precision on Lake Lucerne"),
        awards: &["Sunday Times Top 50"],
    },
    CuratedSpa {
        name: "Clinique La Prairie",
        city: "Montreux",
        country: "Switzerland",
        rating_tenths: 45,
        reviews: 287,
        spa_type: SpaType::MedicalSpa,
        tagline: Some("Birthplace of longevity science since 1931"),
        awards: &[],
    },
    CuratedSpa {
        name: "Mandarin Oriental Spa Marrakech",
        city: "Marrakech",
        country: "Morocco",
        rating_tenths: 46,
        reviews: 2156,
        spa_type: SpaType::HotelSpa,
        tagline: Some("Moroccan tradition meets Oriental wellness"),
        awards: &[],
    },
    CuratedSpa {
        name: "Lanserhof Tegernsee",
        city: "Tegernsee",
        country: "Germany",
        rating_tenths: 45,
        reviews: 612,
        spa_type: SpaType::MedicalSpa,
        tagline: Some("Clinical precision meets Alpine serenity"),
        awards: &[],
    },
    CuratedSpa {
        name: "COMO Shambhala Estate",
        city: "Ubud",
        country: "Indonesia",
        rating_tenths: 47,
        reviews: 1567,
        spa_type: SpaType::WellnessRetreat,
        tagline: Some("Bali's original back-to-nature retreat"),
        awards: &[],
    },
    CuratedSpa {
        name: "Six Senses Ibiza",
        city: "Ibiza",
        country: "Spain",
        rating_tenths: 45,
        reviews: 891,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Longevity science on the north shore"),
        awards: &[],
    },
    CuratedSpa {
        name: "Ananda in the Himalayas",
        city: "Rishikesh",
        country: "India",
        rating_tenths: 46,
        reviews: 1847,
        spa_type: SpaType::DestinationSpa,
        tagline: Some("Ayurvedic healing at the Ganges"),
        awards: &[],
    },
    CuratedSpa {
        name: "Royal Mansour Spa",
        city: "Marrakech",
        country: "Morocco",
        rating_tenths: 48,
        reviews: 1523,
        spa_type: SpaType::HotelSpa,
        tagline: Some("The world's finest hammam"),
        awards: &[],
    },
    CuratedSpa {
        name: "Mii amo",
        city: "Sedona",
        country: "United States",
        rating_tenths: 47,
        reviews: 198,
        spa_type: SpaType::DestinationSpa,
        tagline: Some("Desert spirituality amid red rocks"),
        awards: &[],
    },
    CuratedSpa {
        name: "Bürgenstock Alpine Spa",
        city: "Bürgenstock",
        country: "Switzerland",
        rating_tenths: 45,
        reviews: 2634,
        spa_type: SpaType::ResortSpa,
        tagline: Some("10,000 sqm above Lake Lucerne"),
        awards: &[],
    },
    CuratedSpa {
        name: "Ritz-Carlton Spa Fari Islands",
        city: "North Malé Atoll",
        country: "Maldives",
        rating_tenths: 47,
        reviews: 892,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Overwater indulgence on the Indian Ocean"),
        awards: &[],
    },
    CuratedSpa {
        name: "Lily of the Valley",
        city: "Saint-Tropez",
        country: "France",
        rating_tenths: 44,
        reviews: 1023,
        spa_type: SpaType::ResortSpa,
        tagline: Some("French glamour near Saint-Tropez"),
        awards: &[],
    },
    CuratedSpa {
        name: "Zulal Wellness Resort",
        city: "Doha",
        country: "Qatar",
        rating_tenths: 46,
        reviews: 478,
        spa_type: SpaType::WellnessRetreat,
        tagline: Some("World's first Arabic Medicine resort"),
        awards: &[],
    },
    CuratedSpa {
        name: "Banyan Tree Spa AlUla",
        city: "AlUla",
        country: "Saudi Arabia",
        rating_tenths: 46,
        reviews: 423,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Desert heritage meets modern wellness"),
        awards: &[],
    },
    CuratedSpa {
        name: "Engel Ayurpura",
        city: "Dolomites",
        country: "Italy",
        rating_tenths: 47,
        reviews: 312,
        spa_type: SpaType::WellnessRetreat,
        tagline: Some("Ayurveda in the UNESCO Dolomites"),
        awards: &[],
    },
    CuratedSpa {
        name: "Golden Door",
        city: "San Diego",
        country: "United States",
        rating_tenths: 49,
        reviews: 156,
        spa_type: SpaType::DestinationSpa,
        tagline: Some("Six decades of 40-guest excellence"),
        awards: &[],
    },
    CuratedSpa {
        name: "Schloss Elmau",
        city: "Munich",
        country: "Germany",
        rating_tenths: 46,
        reviews: 2341,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Six spas in a Bavarian castle"),
        awards: &[],
    },
    CuratedSpa {
        name: "Brenners Park-Hotel & Spa",
        city: "Baden-Baden",
        country: "Germany",
        rating_tenths: 46,
        reviews: 1876,
        spa_type: SpaType::HotelSpa,
        tagline: Some("Grand tradition in thermal town"),
        awards: &[],
    },
    CuratedSpa {
        name: "JOALI BEING",
        city: "Baa Atoll",
        country: "Maldives",
        rating_tenths: 46,
        reviews: 189,
        spa_type: SpaType::WellnessRetreat,
        tagline: Some("An entire island for wellbeing"),
        awards: &[],
    },
    CuratedSpa {
        name: "Guerlain Spa One&Only Aesthesis",
        city: "Athens",
        country: "Greece",
        rating_tenths: 47,
        reviews: 567,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Parisian beauty on the Athens Riviera"),
        awards: &[],
    },
    CuratedSpa {
        name: "Ayurveda Resort Mandira",
        city: "Graz",
        country: "Austria",
        rating_tenths: 48,
        reviews: 198,
        spa_type: SpaType::WellnessRetreat,
        tagline: Some("European Ayurveda in Styrian hills"),
        awards: &[],
    },
    CuratedSpa {
        name: "SHA Mexico",
        city: "Cancun",
        country: "Mexico",
        rating_tenths: 46,
        reviews: 234,
        spa_type: SpaType::WellnessClinic,
        tagline: Some("The SHA Method meets the Caribbean"),
        awards: &[],
    },
    CuratedSpa {
        name: "Aqua Dome Tirol Therme",
        city: "Längenfeld",
        country: "Austria",
        rating_tenths: 45,
        reviews: 8923,
        spa_type: SpaType::ThermalSpa,
        tagline: Some("Futuristic thermal bowls in Tyrol"),
        awards: &[],
    },
    CuratedSpa {
        name: "Forte Village Resort",
        city: "Sardinia",
        country: "Italy",
        rating_tenths: 44,
        reviews: 4521,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Thalassotherapy on Sardinia's coast"),
        awards: &[],
    },
    CuratedSpa {
        name: "Lanserhof Lans",
        city: "Innsbruck",
        country: "Austria",
        rating_tenths: 45,
        reviews: 456,
        spa_type: SpaType::MedicalSpa,
        tagline: Some("The original Lanserhof since 2006"),
        awards: &[],
    },
    CuratedSpa {
        name: "One&Only Kéa Island",
        city: "Crete",
        country: "Greece",
        rating_tenths: 47,
        reviews: 178,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Aegean jewel with wellness innovation"),
        awards: &[],
    },
    CuratedSpa {
        name: "Rancho La Puerta",
        city: "Cabo San Lucas",
        country: "Mexico",
        rating_tenths: 48,
        reviews: 287,
        spa_type: SpaType::DestinationSpa,
        tagline: Some("Since 1940 — farm-to-table spa"),
        awards: &[],
    },
    CuratedSpa {
        name: "Mount Med Resort",
        city: "Innsbruck",
        country: "Austria",
        rating_tenths: 48,
        reviews: 123,
        spa_type: SpaType::MedicalSpa,
        tagline: Some("Biohacking and Alpine healing"),
        awards: &[],
    },
    CuratedSpa {
        name: "Morpheus Spa City of Dreams",
        city: "Macau",
        country: "China",
        rating_tenths: 44,
        reviews: 3421,
        spa_type: SpaType::HotelSpa,
        tagline: Some("Zaha Hadid meets wellness"),
        awards: &[],
    },
    CuratedSpa {
        name: "Tschuggen Grand Bergoase",
        city: "St. Moritz",
        country: "Switzerland",
        rating_tenths: 45,
        reviews: 723,
        spa_type: SpaType::HotelSpa,
        tagline: Some("Mario Botta's mountain masterpiece"),
        awards: &[],
    },
    CuratedSpa {
        name: "Garrya Mù Cang Chải",
        city: "Hanoi",
        country: "Vietnam",
        rating_tenths: 47,
        reviews: 89,
        spa_type: SpaType::WellnessRetreat,
        tagline: Some("Wellness amid terraced rice paddies"),
        awards: &[],
    },
    CuratedSpa {
        name: "Aro Hā Wellness Retreat",
        city: "Queenstown",
        country: "New Zealand",
        rating_tenths: 49,
        reviews: 112,
        spa_type: SpaType::WellnessRetreat,
        tagline: Some("Off-grid mindfulness in Southern Alps"),
        awards: &[],
    },
    CuratedSpa {
        name: "Shreyas Retreat",
        city: "Bangalore",
        country: "India",
        rating_tenths: 47,
        reviews: 345,
        spa_type: SpaType::WellnessRetreat,
        tagline: Some("Silent yoga and organic living"),
        awards: &[],
    },
    CuratedSpa {
        name: "Sunstone Spa",
        city: "Palm Springs",
        country: "United States",
        rating_tenths: 46,
        reviews: 1234,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Desert healing waters"),
        awards: &[],
    },
    CuratedSpa {
        name: "Delaire Graff Spa",
        city: "Cape Town",
        country: "South Africa",
        rating_tenths: 47,
        reviews: 789,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Wellness amid the Cape Winelands"),
        awards: &[],
    },
    CuratedSpa {
        name: "Daios Cove",
        city: "Crete",
        country: "Greece",
        rating_tenths: 45,
        reviews: 2134,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Holistic healing on a private beach"),
        awards: &[],
    },
    CuratedSpa {
        name: "Llao Llao Resort Spa",
        city: "Bariloche",
        country: "Argentina",
        rating_tenths: 45,
        reviews: 4567,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Patagonian grandeur on Lake Nahuel Huapi"),
        awards: &[],
    },
    CuratedSpa {
        name: "Lime Wood Hotel & Spa",
        city: "New Forest",
        country: "United Kingdom",
        rating_tenths: 46,
        reviews: 1876,
        spa_type: SpaType::HotelSpa,
        tagline: Some("England's finest in the New Forest"),
        awards: &[],
    },
    CuratedSpa {
        name: "Six Senses Douro Valley",
        city: "Porto",
        country: "Portugal",
        rating_tenths: 46,
        reviews: 2345,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Vineyard wellness in the Douro"),
        awards: &[],
    },
    CuratedSpa {
        name: "ADLER Spa Resort Sicilia",
        city: "Sicily",
        country: "Italy",
        rating_tenths: 46,
        reviews: 1567,
        spa_type: SpaType::ResortSpa,
        tagline: Some("Sicilian warmth meets Tyrolean wellness"),
        awards: &[],
    },
    CuratedSpa {
        name: "St. Regis Spa The Palm",
        city: "Dubai",
        country: "UAE",
        rating_tenths: 45,
        reviews: 5678,
        spa_type: SpaType::HotelSpa,
        tagline: Some("Ultra-luxe on Palm Jumeirah"),
        awards: &[],
    },
];
