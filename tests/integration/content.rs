use chrono::{TimeZone, Utc};
use spa_review::content::{ContentGenerator, city_faqs, spa_faqs};
use spa_review::directory::SpaDirectory;
use spa_review::seo::{ChangeFrequency, render_sitemap_xml, robots_txt, sitemap_entries};

use crate::common::init_test_logging;

fn embedded() -> SpaDirectory {
    init_test_logging(None);
    SpaDirectory::embedded().unwrap()
}

#[test]
fn test_generated_copy_is_reproducible_across_instances() {
    let directory = embedded();
    let first = ContentGenerator::new().unwrap();
    let second = ContentGenerator::new().unwrap();

    for country in directory.list_countries() {
        for city in directory.list_cities(country) {
            assert_eq!(
                first.city_intro(city, country, 3).unwrap(),
                second.city_intro(city, country, 3).unwrap()
            );
            for spa in directory.top_spas_for_city(country, city, 50) {
                let offerings = spa.spa_type.offerings();
                let description = first.spa_description(&spa, &offerings).unwrap();
                assert_eq!(description, second.spa_description(&spa, &offerings).unwrap());
                assert!(description.contains(&spa.name));
                assert_eq!(spa_faqs(&spa, &offerings), spa_faqs(&spa, &offerings));
            }
        }
    }
}

#[test]
fn test_hand_written_intro_wins_over_pool() {
    let generator = ContentGenerator::new().unwrap();
    let intro = generator.city_intro("Bangkok", "Thailand", 10).unwrap();
    assert!(intro.starts_with("Bangkok stands as Southeast Asia's undisputed wellness capital"));

    let generated = generator.city_intro("Hakone", "Japan", 3).unwrap();
    assert!(generated.contains("Hakone"));
}

#[test]
fn test_city_faq_quotes_top_ranked_spa() {
    let directory = embedded();
    let top = directory.top_spas_for_city("Thailand", "Bangkok", 50);
    let faqs = city_faqs("Bangkok", "Thailand", &top);
    assert_eq!(faqs.len(), 4);
    assert_eq!(faqs[0].question, "What is the best spa in Bangkok, Thailand?");
    assert!(faqs[0].answer.contains("Mandarin Oriental Spa Bangkok"));
    assert!(faqs[0].answer.contains("4.8/5 rating from 1,420 reviews"));
}

#[test]
fn test_sitemap_covers_every_country_and_city() {
    let directory = embedded();
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let entries = sitemap_entries(&directory, "https://spa-review.com", now);

    // home + 10 countries + 27 cities + 2 posts
    assert_eq!(entries.len(), 40);
    assert_eq!(entries[0].url, "https://spa-review.com");
    assert!(entries.iter().any(|e| e.url == "https://spa-review.com/city/langenfeld"));
    assert!(entries.iter().any(|e| e.url == "https://spa-review.com/city/evian-les-bains"));
    let blog: Vec<_> =
        entries.iter().filter(|e| e.change_frequency == ChangeFrequency::Monthly).collect();
    assert_eq!(blog.len(), 2);

    let xml = render_sitemap_xml(&entries);
    assert_eq!(xml.matches("<url>").count(), 40);
    assert!(xml.contains("<lastmod>2026-03-01T12:00:00.000Z</lastmod>"));
}

#[test]
fn test_robots_points_at_sitemap() {
    let robots = robots_txt("https://spa-review.com/");
    assert!(robots.contains("Sitemap: https://spa-review.com/sitemap.xml"));
    assert!(robots.contains("User-agent: GPTBot\nDisallow: /"));
}
