use spa_review::directory::{SlugLookup, SpaDirectory};
use spa_review::utils::to_slug;
use std::collections::HashSet;

use crate::common::init_test_logging;

fn embedded() -> SpaDirectory {
    init_test_logging(None);
    SpaDirectory::embedded().unwrap()
}

#[test]
fn test_embedded_dataset_totals() {
    let directory = embedded();
    assert_eq!(directory.list_countries().len(), 10);
    assert_eq!(directory.total_spa_count(), 84);

    let stats = directory.country_stats();
    assert_eq!(stats.iter().map(|s| s.spa_count).sum::<usize>(), 84);
    assert_eq!(stats[0].name, "Thailand");
    assert_eq!(stats[0].spa_count, 22);
    assert!(stats.windows(2).all(|pair| pair[0].spa_count >= pair[1].spa_count));
}

#[test]
fn test_every_listed_slug_resolves_to_itself() {
    let directory = embedded();
    let slugs: Vec<String> = directory.all_slugs().collect();
    let unique: HashSet<&String> = slugs.iter().collect();
    assert_eq!(unique.len(), slugs.len());

    for slug in &slugs {
        let spa = directory.find_by_slug(slug).into_spa().unwrap();
        assert_eq!(&spa.slug, slug);
        assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert_eq!(&to_slug(slug), slug);
    }
}

#[test]
fn test_curated_flagship_shadows_bulk_record() {
    let directory = embedded();
    let SlugLookup::Curated(spa) = directory.find_by_slug("chiva-som-hua-hin") else {
        panic!("Chiva-Som should resolve to its curated entry");
    };
    assert_eq!(spa.reviews, 634);
    assert!(spa.tagline.is_some());
    assert_eq!(directory.all_slugs().filter(|slug| slug == "chiva-som-hua-hin").count(), 1);
}

#[test]
fn test_country_window_ranks_across_cities() {
    let directory = embedded();
    let top = directory.top_spas_for_country("Thailand", 3);
    let names: Vec<&str> = top.iter().map(|spa| spa.name.as_str()).collect();
    assert_eq!(
        names,
        ["Fah Lanna Spa Chiang Mai", "Mandarin Oriental Spa Bangkok", "Amanpuri Holistic Spa Phuket"]
    );
    assert_eq!(top.iter().map(|spa| spa.rank).collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_city_window_larger_than_city() {
    let directory = embedded();
    let top = directory.top_spas_for_city("Thailand", "Hua Hin", 50);
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].name, "Chiva-Som Hua Hin");
    assert!(top.windows(2).all(|pair| {
        (pair[0].rating, pair[0].reviews) >= (pair[1].rating, pair[1].reviews)
    }));
}

#[test]
fn test_diacritic_city_slug_lookup() {
    let directory = embedded();
    assert_eq!(directory.find_city_by_slug("langenfeld"), Some(("Längenfeld", "Austria")));
    assert_eq!(directory.find_country_by_slug("united-arab-emirates"), Some("United Arab Emirates"));
    assert_eq!(directory.find_city_by_slug("atlantis"), None);
}
