//! Editorial prose: hand-written intros and the template pools used when no
//! hand-written copy exists.
//!
//! Pool templates are Tera sources. Every pool has exactly three entries and
//! the entry is picked by [`select_template`](crate::utils::select_template)
//! on the entity name, so reordering a pool changes published copy.

/// Hand-written city intros keyed by exact city name.
pub const CITY_INTROS: &[(&str, &str)] = &[
    (
        "Bangkok",
        "Bangkok stands as Southeast Asia's undisputed wellness capital, where ancient Thai healing traditions merge seamlessly with cutting-edge medical spa technology. From riverside luxury hotels to hidden temple-district retreats, the city offers an extraordinary breadth of spa experiences at prices that make world-class treatments accessible to all.",
    ),
    (
        "Tokyo",
        "Tokyo's spa scene is a masterclass in precision and ritual. The city blends centuries-old onsen culture with futuristic beauty technology, creating experiences found nowhere else on Earth. From Michelin-starred ryokan baths to Ginza's most exclusive facial bars, every treatment reflects the Japanese philosophy of meticulous care.",
    ),
    (
        "Bali",
        "Bali has earned its reputation as the world's spiritual wellness destination. Ubud's jungle retreats, Seminyak's design-forward day spas, and Uluwatu's clifftop sanctuaries each offer distinct paths to renewal. What unites them is the island's deep healing energy — Balinese therapists are renowned as some of the most intuitive practitioners in the world.",
    ),
    (
        "London",
        "London's spa landscape is as layered as the city itself — Georgian townhouse hammams, members-only Mayfair treatment rooms, and vast Korean-style jjimjilbangs coexist within the same postcodes. The city has quietly become Europe's most diverse wellness destination, with practitioners drawn from every healing tradition on the planet.",
    ),
    (
        "Paris",
        "Paris approaches spa culture the way it approaches everything — with unapologetic refinement. The city's grand palace hotels house legendary treatment rooms by Guerlain, Dior, and Chanel, while a new generation of concept spas in the Marais and Saint-Germain is redefining French beauty rituals for the modern age.",
    ),
    (
        "New York",
        "New York's spa scene moves at the city's pace — fast, competitive, and always innovating. From Koreatown's 24-hour bathhouses to Fifth Avenue medical spas offering treatments that blur the line between luxury and clinical care, the city offers every conceivable wellness experience within a few subway stops.",
    ),
    (
        "Dubai",
        "Dubai has transformed itself into a global spa destination with characteristic ambition. The city's hotel spas are among the largest and most lavishly appointed on Earth, while a growing number of standalone wellness centers offer everything from traditional hammam rituals to cryotherapy and IV drip bars.",
    ),
];

/// Hand-written country intros keyed by exact country name.
pub const COUNTRY_INTROS: &[(&str, &str)] = &[
    (
        "Thailand",
        "Thailand is where the modern spa industry was born. From the traditional Thai massage parlors of Chiang Mai to the ultra-luxury wellness resorts of Koh Samui and Hua Hin, the country offers the widest range of spa experiences in Asia at every price point. Thai therapists are globally renowned for their skill, warmth, and intuitive touch.",
    ),
    (
        "Italy",
        "Italy's wellness tradition stretches back to the Roman thermae. Today, the country leads Europe in medical spa innovation — Merano, Lake Garda, and Fiuggi are home to world-class clinics combining thermal healing with modern diagnostics. Meanwhile, Tuscan countryside retreats and Amalfi Coast hotel spas offer pure indulgence.",
    ),
    (
        "Japan",
        "Japan's bathing culture is the world's most refined. From volcanic onsen towns like Beppu and Hakone to Tokyo's design-forward urban spas, the country treats bathing as both daily ritual and profound art form. The attention to detail — in water temperature, seasonal botanicals, and spatial design — is unmatched.",
    ),
    (
        "United States",
        "The American spa market is the world's largest and most diverse. California's wellness retreats pioneered the destination spa concept, while Arizona's desert resorts offer healing landscapes found nowhere else. New York and Miami push the boundaries of medical aesthetics, and Hawaii merges Polynesian healing traditions with resort luxury.",
    ),
    (
        "France",
        "France invented the concept of \"thalassotherapy\" and remains Europe's leading authority on water-based wellness. From the thermal towns of Évian and Vichy to the palace hotel spas of Paris and the Côte d'Azur, the French approach wellness with the same seriousness they bring to gastronomy — as a sophisticated art form.",
    ),
    (
        "Switzerland",
        "Switzerland is home to the world's most exclusive medical spas and longevity clinics. Clinique La Prairie, Chenot Palace, and Bürgenstock represent the pinnacle of science-driven wellness. The Swiss Alps provide a natural complement — pure air, pristine water, and landscapes that heal simply by being present.",
    ),
    (
        "India",
        "India is the birthplace of Ayurveda, yoga, and meditation — three pillars of the global wellness movement. Kerala's backwater retreats offer authentic panchakarma treatments, Rishikesh provides spiritual immersion at the source, and new-generation urban spas in Mumbai and Bangalore bring ancient wisdom into contemporary settings.",
    ),
];

/// City intro pool. Context: `city`, `country`, `spa_count` (formatted).
pub const CITY_INTRO_TEMPLATES: [&str; 3] = [
    "{{ city }} offers a vibrant and growing spa scene that reflects the best of {{ country }}'s wellness traditions. With {{ spa_count }}+ spas and wellness centers to choose from, visitors can find everything from intimate day spas to full-service resort experiences. The city's unique character — its climate, culture, and natural surroundings — shapes treatments you won't find anywhere else.",
    "Discover {{ city }}'s finest spas and wellness retreats, where {{ country }}'s healing heritage meets contemporary luxury. The city's {{ spa_count }}+ spa venues range from boutique treatment rooms to expansive wellness complexes, each offering a distinctive approach to relaxation and renewal. Whether you're seeking a quick escape or a transformative multi-day program, {{ city }} delivers.",
    "{{ city }}, {{ country }} has emerged as a compelling wellness destination with {{ spa_count }}+ spas catering to every preference and budget. Local traditions inform many of the signature treatments available here, while international brands bring global standards of luxury and innovation. The result is a spa scene that's both authentically local and world-class.",
];

/// Country intro pool. Context: `country`, `city_count`, `spa_count` (formatted).
pub const COUNTRY_INTRO_TEMPLATES: [&str; 3] = [
    "{{ country }} boasts a diverse and expanding spa landscape, with {{ spa_count }}+ wellness venues spread across {{ city_count }} cities and regions. From urban day spas to countryside retreats, the country offers travelers a compelling range of treatment styles rooted in local traditions and enhanced by global wellness trends.",
    "With {{ spa_count }}+ spas across {{ city_count }} destinations, {{ country }} has established itself as a noteworthy player in the global wellness tourism market. The country's natural resources — from mineral-rich waters to native botanicals — inform many signature treatments, while international hospitality brands ensure consistently high standards.",
    "{{ country }}'s spa scene reflects the country's broader character: a blend of deep-rooted traditions and forward-looking innovation. Across {{ city_count }} cities, {{ spa_count }}+ spas offer everything from traditional healing rituals to cutting-edge longevity programs, making the country a versatile destination for wellness travelers at every level.",
];

/// Spa description pool. Context: `name`, `spa_type`, `city`, `country`,
/// `rating`, `reviews` (formatted), `offerings` (list).
pub const SPA_DESCRIPTION_TEMPLATES: [&str; 3] = [
    "{{ name }} is a {{ spa_type | lower }} located in the heart of {{ city }}, {{ country }}. With a Google rating of {{ rating }}/5 from {{ reviews }} verified reviews, it ranks among the top-rated wellness venues in the region. Guests can enjoy {{ offerings | slice(end=5) | join(sep=\", \") }}, and more in a setting designed for complete relaxation and renewal.",
    "Set in {{ city }}, {{ country }}, {{ name }} offers a curated {{ spa_type | lower }} experience that has earned praise from {{ reviews }} reviewers on Google, maintaining an impressive {{ rating }}/5 rating. The spa's menu of services includes {{ offerings | slice(end=5) | join(sep=\", \") }}, delivered by skilled practitioners in an atmosphere of refined tranquility.",
    "{{ name }} brings world-class {{ spa_type | lower }} treatments to {{ city }}, {{ country }}. Rated {{ rating }}/5 across {{ reviews }} Google reviews, this venue has built a reputation for excellence through its commitment to quality, featuring {{ offerings | slice(end=5) | join(sep=\", \") }} among its signature offerings.",
];
