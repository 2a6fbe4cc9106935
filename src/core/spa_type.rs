//! Spa categories and their presentation attributes.
//!
//! Each spa in the compact dataset carries a one-letter type code. Expansion
//! resolves it to a [`SpaType`], which in turn provides the human label, the
//! card accent colour, the icon and the type-specific treatment menu.
//!
//! Two fallbacks exist and they are intentionally different:
//!
//! - an unknown **code** in the compact dataset expands as [`SpaType::DaySpa`]
//!   ([`SpaType::from_code_or_default`])
//! - an unknown **label** passed to [`offerings_for`] uses the
//!   [`SpaType::HotelSpa`] treatment menu
//!
//! # Examples
//!
//! ```rust
//! use spa_review::core::{SpaType, offerings_for};
//!
//! let kind = SpaType::from_code('M').unwrap();
//! assert_eq!(kind.label(), "Medical Spa");
//! assert_eq!(kind.to_string(), "Medical Spa");
//!
//! let menu = offerings_for("Unknown-Type");
//! assert_eq!(menu.last(), Some(&"Hair Salon"));
//! ```

use serde::{Deserialize, Serialize};

/// Treatments offered by every spa regardless of type.
pub const BASE_OFFERINGS: &[&str] = &[
    "Relaxation Massage",
    "Deep Tissue Massage",
    "Aromatherapy",
    "Facial Treatment",
    "Body Scrub & Wrap",
];

/// The eight spa categories used across the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaType {
    #[serde(rename = "Day Spa")]
    DaySpa,
    #[serde(rename = "Hotel Spa")]
    HotelSpa,
    #[serde(rename = "Resort Spa")]
    ResortSpa,
    #[serde(rename = "Wellness Retreat")]
    WellnessRetreat,
    #[serde(rename = "Destination Spa")]
    DestinationSpa,
    #[serde(rename = "Medical Spa")]
    MedicalSpa,
    #[serde(rename = "Wellness Clinic")]
    WellnessClinic,
    #[serde(rename = "Thermal Spa")]
    ThermalSpa,
}

impl SpaType {
    /// All types in code order.
    pub const ALL: [SpaType; 8] = [
        SpaType::DaySpa,
        SpaType::HotelSpa,
        SpaType::ResortSpa,
        SpaType::WellnessRetreat,
        SpaType::DestinationSpa,
        SpaType::MedicalSpa,
        SpaType::WellnessClinic,
        SpaType::ThermalSpa,
    ];

    /// Resolve a compact-dataset type code.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'D' => Some(SpaType::DaySpa),
            'H' => Some(SpaType::HotelSpa),
            'R' => Some(SpaType::ResortSpa),
            'W' => Some(SpaType::WellnessRetreat),
            'S' => Some(SpaType::DestinationSpa),
            'M' => Some(SpaType::MedicalSpa),
            'C' => Some(SpaType::WellnessClinic),
            'T' => Some(SpaType::ThermalSpa),
            _ => None,
        }
    }

    /// Resolve a type code, defaulting unknown codes to Day Spa.
    #[must_use]
    pub fn from_code_or_default(code: char) -> Self {
        Self::from_code(code).unwrap_or(SpaType::DaySpa)
    }

    /// Resolve a human label such as `"Resort Spa"`. Exact match only.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    #[must_use]
    pub const fn code(&self) -> char {
        match self {
            SpaType::DaySpa => 'D',
            SpaType::HotelSpa => 'H',
            SpaType::ResortSpa => 'R',
            SpaType::WellnessRetreat => 'W',
            SpaType::DestinationSpa => 'S',
            SpaType::MedicalSpa => 'M',
            SpaType::WellnessClinic => 'C',
            SpaType::ThermalSpa => 'T',
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            SpaType::DaySpa => "Day Spa",
            SpaType::HotelSpa => "Hotel Spa",
            SpaType::ResortSpa => "Resort Spa",
            SpaType::WellnessRetreat => "Wellness Retreat",
            SpaType::DestinationSpa => "Destination Spa",
            SpaType::MedicalSpa => "Medical Spa",
            SpaType::WellnessClinic => "Wellness Clinic",
            SpaType::ThermalSpa => "Thermal Spa",
        }
    }

    /// Card accent colour as a CSS hex string.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            SpaType::DaySpa => "#ec4899",
            SpaType::HotelSpa => "#ca8a04",
            SpaType::ResortSpa => "#2563eb",
            SpaType::WellnessRetreat => "#16a34a",
            SpaType::DestinationSpa => "#7e22ce",
            SpaType::MedicalSpa => "#dc2626",
            SpaType::WellnessClinic => "#0891b2",
            SpaType::ThermalSpa => "#ea580c",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            SpaType::DaySpa => "💆",
            SpaType::HotelSpa => "✨",
            SpaType::ResortSpa => "🏖️",
            SpaType::WellnessRetreat => "🌿",
            SpaType::DestinationSpa => "🧘",
            SpaType::MedicalSpa => "🏥",
            SpaType::WellnessClinic => "🔬",
            SpaType::ThermalSpa => "♨️",
        }
    }

    /// Treatments specific to this type, appended after [`BASE_OFFERINGS`].
    #[must_use]
    pub const fn offering_extension(&self) -> &'static [&'static str] {
        match self {
            SpaType::HotelSpa => &[
                "Couples Suite",
                "Express Treatments",
                "Pool Access",
                "Fitness Center",
                "Sauna & Steam",
                "Hair Salon",
            ],
            SpaType::ResortSpa => &[
                "Infinity Pool",
                "Hydrotherapy Circuit",
                "Beachside Massage",
                "Yoga Pavilion",
                "Meditation Garden",
                "Outdoor Treatment Cabana",
            ],
            SpaType::DaySpa => &[
                "Manicure & Pedicure",
                "Waxing",
                "Lash & Brow",
                "Hair Treatment",
                "Quick Refresh Package",
                "Membership Plans",
            ],
            SpaType::MedicalSpa => &[
                "IV Therapy",
                "Cryotherapy",
                "Hyperbaric Chamber",
                "Genetic Testing",
                "Blood Analysis",
                "Detox Programs",
                "Anti-Aging Protocols",
            ],
            SpaType::WellnessRetreat => &[
                "Yoga & Meditation",
                "Sound Healing",
                "Breathwork",
                "Nature Walks",
                "Nutritional Counseling",
                "Digital Detox",
                "Mindfulness Sessions",
            ],
            SpaType::DestinationSpa => &[
                "Multi-Day Programs",
                "Personal Training",
                "Cooking Classes",
                "Life Coaching",
                "Sleep Optimization",
                "Weight Management",
            ],
            SpaType::WellnessClinic => &[
                "Functional Medicine",
                "Hormone Therapy",
                "Stem Cell Therapy",
                "Longevity Assessment",
                "Biohacking Lab",
                "DNA Analysis",
            ],
            SpaType::ThermalSpa => &[
                "Hot Springs Pools",
                "Cold Plunge",
                "Thermal Circuit",
                "Mud Therapy",
                "Mineral Baths",
                "Finnish Sauna",
                "Turkish Hammam",
            ],
        }
    }

    /// Full treatment menu: base list followed by the type extension.
    #[must_use]
    pub fn offerings(&self) -> Vec<&'static str> {
        BASE_OFFERINGS.iter().chain(self.offering_extension()).copied().collect()
    }
}

impl std::fmt::Display for SpaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Treatment menu for a type label, falling back to the Hotel Spa menu.
#[must_use]
pub fn offerings_for(label: &str) -> Vec<&'static str> {
    SpaType::from_label(label).unwrap_or(SpaType::HotelSpa).offerings()
}
