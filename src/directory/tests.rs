//! Tests for the directory module.

use super::*;
use crate::core::SpaType;
use crate::test_utils::init_test_logging;
use std::collections::HashSet;

const SMALL_DATASET: &str = r#"{
    "Thailand": {
        "Bangkok": [
            ["Oasis Spa", 46, 213, "D"],
            ["Divana Massage & Spa", 47, 388, "D"],
            ["Health Land", 46, 213, "D"],
            ["Vitallife Wellness Center", 46, 58, "M"],
            ["urban retreat", 42, 331, "D"]
        ],
        "Phuket": [["Kata Thermal", 45, 10, "T"]]
    },
    "Austria": {
        "Vienna": [["Therme Wien", 44, 300, "T"], ["Aux Gazelles", 44, 12, "D"]],
        "Graz": [["Mandira", 48, 20, "W"]]
    },
    "Belgium": {
        "Spa": [["Thermes de Spa", 43, 90, "T"]],
        "Bruges": [["Zen Spa", 41, 3, "D"]],
        "Ghent": [["Ghent Wellness", 42, 5, "D"]]
    }
}"#;

fn small_directory() -> SpaDirectory {
    init_test_logging(None);
    SpaDirectory::with_curated(SpaDataset::from_json_str(SMALL_DATASET).unwrap(), Vec::new())
        .unwrap()
}

#[test]
fn test_list_countries_sorted() {
    let directory = small_directory();
    assert_eq!(directory.list_countries(), ["Austria", "Belgium", "Thailand"]);
}

#[test]
fn test_list_cities_sorted_and_unknown_empty() {
    let directory = small_directory();
    assert_eq!(directory.list_cities("Austria"), ["Graz", "Vienna"]);
    assert!(directory.list_cities("Atlantis").is_empty());
}

#[test]
fn test_total_matches_country_stats() {
    let directory = small_directory();
    let summed: usize = directory.country_stats().iter().map(|s| s.spa_count).sum();
    assert_eq!(directory.total_spa_count(), 12);
    assert_eq!(summed, directory.total_spa_count());
}

#[test]
fn test_country_stats_descending_with_stable_ties() {
    let directory = small_directory();
    let stats = directory.country_stats();
    let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
    // Austria and Belgium both hold 3 spas and keep document order
    assert_eq!(names, ["Thailand", "Austria", "Belgium"]);
    assert_eq!(stats[0].slug, "thailand");
    assert_eq!(stats[0].city_count, 2);
    assert_eq!(stats[0].child_count(), 2);
    assert_eq!(stats[0].spa_count, 6);
}

#[test]
fn test_city_stats() {
    let directory = small_directory();
    let stats = directory.city_stats("Belgium");
    let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Spa", "Bruges", "Ghent"]);
    assert_eq!(stats[0].country, "Belgium");
    assert_eq!(stats[0].child_count(), stats[0].spa_count);

    let stats = directory.city_stats("Austria");
    assert_eq!(stats[0].name, "Vienna");
    assert_eq!(stats[0].spa_count, 2);

    assert!(directory.city_stats("Atlantis").is_empty());
}

#[test]
fn test_top_spas_for_city_ordering_and_ranks() {
    let directory = small_directory();
    for limit in 0..8 {
        let top = directory.top_spas_for_city("Thailand", "Bangkok", limit);
        assert_eq!(top.len(), limit.min(5));
        let ranks: Vec<usize> = top.iter().map(|spa| spa.rank).collect();
        assert_eq!(ranks, (1..=top.len()).collect::<Vec<_>>());
        for pair in top.windows(2) {
            assert!((pair[0].rating, pair[0].reviews) >= (pair[1].rating, pair[1].reviews));
        }
    }
}

#[test]
fn test_top_spas_ties_keep_dataset_order() {
    let directory = small_directory();
    let top = directory.top_spas_for_city("Thailand", "Bangkok", 5);
    let names: Vec<&str> = top.iter().map(|spa| spa.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Divana Massage & Spa Bangkok",
            "Oasis Spa Bangkok",
            "Health Land Bangkok",
            "Vitallife Wellness Center Bangkok",
            "Bangkok urban retreat",
        ]
    );
}

#[test]
fn test_top_spas_for_country_spans_cities() {
    let directory = small_directory();
    let top = directory.top_spas_for_country("Austria", 10);
    let names: Vec<&str> = top.iter().map(|spa| spa.name.as_str()).collect();
    assert_eq!(names, ["Mandira Graz", "Therme Wien Vienna", "Aux Gazelles Vienna"]);
    assert_eq!(top[0].city, "Graz");
    assert_eq!(top[0].spa_type, SpaType::WellnessRetreat);
    assert_eq!(top[2].rank, 3);
}

#[test]
fn test_top_spas_unknown_pairs_are_empty() {
    let directory = small_directory();
    assert!(directory.top_spas_for_country("Atlantis", 10).is_empty());
    assert!(directory.top_spas_for_city("Thailand", "Atlantis", 10).is_empty());
    assert!(directory.top_spas_for_city("Austria", "Bangkok", 10).is_empty());
}

#[test]
fn test_find_by_slug_bulk() {
    let directory = small_directory();
    let lookup = directory.find_by_slug("bangkok-urban-retreat-bangkok");
    let SlugLookup::Bulk(spa) = &lookup else {
        panic!("expected bulk match, got {lookup:?}");
    };
    assert_eq!(spa.name, "Bangkok urban retreat");
    assert_eq!(spa.country, "Thailand");
    assert_eq!(spa.rank, 0);
}

#[test]
fn test_find_by_slug_city_named_in_spa() {
    let directory = small_directory();
    // "Thermes de Spa" already contains the city name "Spa"
    let spa = directory.find_by_slug("thermes-de-spa").into_spa().unwrap();
    assert_eq!(spa.name, "Thermes de Spa");
}

#[test]
fn test_find_by_slug_idempotent() {
    let directory = small_directory();
    for slug in ["oasis-spa-bangkok", "missing-spa", "mandira-graz"] {
        assert_eq!(directory.find_by_slug(slug), directory.find_by_slug(slug));
    }
}

#[test]
fn test_find_by_slug_not_found() {
    let directory = small_directory();
    let lookup = directory.find_by_slug("no-such-spa");
    assert_eq!(lookup, SlugLookup::NotFound);
    assert!(!lookup.is_found());
    assert!(lookup.spa().is_none());
}

#[test]
fn test_curated_entry_shadows_bulk_entry() {
    let directory = SpaDirectory::embedded().unwrap();
    let lookup = directory.find_by_slug("chiva-som-hua-hin");
    let SlugLookup::Curated(spa) = lookup else {
        panic!("curated list should win");
    };
    assert_eq!(spa.reviews, 634);
    assert!(spa.tagline.is_some());
    assert!(spa.is_curated());

    // The bulk record with the same slug still exists
    assert!(directory.all_slugs().any(|slug| slug == "chiva-som-hua-hin"));

    let bulk_only =
        SpaDirectory::with_curated(directory.dataset().clone(), Vec::new()).unwrap();
    let SlugLookup::Bulk(spa) = bulk_only.find_by_slug("chiva-som-hua-hin") else {
        panic!("expected bulk match without curated list");
    };
    assert_eq!(spa.reviews, 630);
}

#[test]
fn test_curated_slug_resolves_without_bulk_entry() {
    let directory = SpaDirectory::embedded().unwrap();
    let spa = directory.find_by_slug("kamalaya-koh-samui-koh-samui").into_spa().unwrap();
    assert_eq!(spa.city, "Koh Samui");
}

#[test]
fn test_all_slugs_exhaustive_unique_restartable() {
    let directory = SpaDirectory::embedded().unwrap();
    let first: Vec<String> = directory.all_slugs().collect();
    let second: Vec<String> = directory.all_slugs().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), directory.total_spa_count());

    let unique: HashSet<&String> = first.iter().collect();
    assert_eq!(unique.len(), first.len());
    assert!(first.iter().all(|slug| directory.find_by_slug(slug).is_found()));
}

#[test]
fn test_duplicate_slug_rejected_at_load() {
    let dataset = SpaDataset::from_json_str(
        r#"{"Thailand": {"Bangkok": [["Oasis Spa", 46, 213, "D"], ["Oasis Spa Bangkok", 40, 1, "H"]]}}"#,
    )
    .unwrap();
    let err = SpaDirectory::new(dataset).unwrap_err();
    match err {
        SpaReviewError::DuplicateSlug {
            slug,
            first,
            second,
        } => {
            assert_eq!(slug, "oasis-spa-bangkok");
            assert_eq!(first, "Oasis Spa Bangkok (Bangkok, Thailand)");
            assert_eq!(second, "Oasis Spa Bangkok (Bangkok, Thailand)");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_find_country_and_city_by_slug() {
    let directory = SpaDirectory::embedded().unwrap();
    assert_eq!(directory.find_country_by_slug("united-states"), Some("United States"));
    assert_eq!(directory.find_country_by_slug("atlantis"), None);
    assert_eq!(directory.find_city_by_slug("evian-les-bains"), Some(("Évian-les-Bains", "France")));
    assert_eq!(directory.find_city_by_slug("st-moritz"), Some(("St. Moritz", "Switzerland")));
    assert_eq!(directory.find_city_by_slug("langenfeld"), Some(("Längenfeld", "Austria")));
    assert_eq!(directory.find_city_by_slug("atlantis"), None);
}

#[test]
fn test_curated_spas_in_authored_order() {
    let directory = SpaDirectory::embedded().unwrap();
    let curated = directory.curated_spas();
    assert_eq!(curated.len(), CURATED_SPAS.len());
    assert_eq!(curated[0].name, CURATED_SPAS[0].name);
    assert!(curated.iter().all(|spa| spa.rank == 0));
}

#[test]
fn test_medical_spa_record_expansion_through_directory() {
    let dataset =
        SpaDataset::from_json_str(r#"{"Thailand": {"Bangkok": [["Spa Name", 47, 63, "M"]]}}"#)
            .unwrap();
    let directory = SpaDirectory::with_curated(dataset, Vec::new()).unwrap();
    let top = directory.top_spas_for_city("Thailand", "Bangkok", 1);
    assert_eq!(top[0].rating.to_string(), "4.7");
    assert_eq!(top[0].reviews, 630);
    assert_eq!(top[0].spa_type.label(), "Medical Spa");
}

#[tokio::test]
async fn test_load_from_file() {
    let temp = tempfile::NamedTempFile::new().unwrap();
    tokio::fs::write(temp.path(), SMALL_DATASET).await.unwrap();
    let directory = SpaDirectory::load(temp.path()).await.unwrap();
    assert_eq!(directory.total_spa_count(), 12);
}
