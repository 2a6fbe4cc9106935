use predicates::prelude::*;

use crate::common::TestSite;

#[test]
fn test_countries_sorted() {
    let site = TestSite::new();
    let output = site.command_with_data().arg("countries").output().unwrap();
    assert!(output.status.success());
    let countries: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(countries, ["Japan", "Portugal", "Thailand"]);
}

#[test]
fn test_top_city_window() {
    let site = TestSite::new();
    let output = site
        .command_with_data()
        .args(["top", "Thailand", "--city", "Bangkok", "--limit", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let spas: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let spas = spas.as_array().unwrap();
    assert_eq!(spas.len(), 2);
    assert_eq!(spas[0]["name"], "Divana Massage & Spa Bangkok");
    assert_eq!(spas[0]["rank"], 1);
    assert_eq!(spas[0]["reviews"], 3880);
    assert_eq!(spas[1]["rank"], 2);
}

#[test]
fn test_spa_page_prefers_curated_entry() {
    let site = TestSite::new();
    let output = site.command_with_data().args(["spa", "chiva-som-hua-hin"]).output().unwrap();
    assert!(output.status.success());

    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["source"], "curated");
    assert_eq!(page["spa"]["reviews"], 634);
    assert_eq!(page["faqs"].as_array().unwrap().len(), 4);
    assert_eq!(page["jsonLd"][0]["@type"], "HealthAndBeautyBusiness");
    assert_eq!(page["jsonLd"][1]["@type"], "BreadcrumbList");
}

#[test]
fn test_unknown_spa_slug_fails() {
    let site = TestSite::new();
    site.command_with_data()
        .args(["spa", "no-such-spa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No spa found for slug 'no-such-spa'"));
}

#[test]
fn test_city_page() {
    let site = TestSite::new();
    let output = site.command_with_data().args(["city", "hakone"]).output().unwrap();
    assert!(output.status.success());

    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["city"], "Hakone");
    assert_eq!(page["country"], "Japan");
    assert_eq!(page["spaCount"], 2);
    assert_eq!(page["spas"][0]["name"], "Gora Kadan Hakone");
    assert_eq!(page["jsonLd"][0]["numberOfItems"], 2);
}

#[test]
fn test_stats_summary() {
    let site = TestSite::new();
    site.command_with_data()
        .args(["stats", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"spaCount\": 9"))
        .stdout(predicate::str::contains("\"countryCount\": 3"))
        .stdout(predicate::str::contains("\"countries\"").not());
}

#[test]
fn test_slugs_one_per_line() {
    let site = TestSite::new();
    let output = site.command_with_data().arg("slugs").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let slugs: Vec<&str> = stdout.lines().collect();
    assert_eq!(slugs.len(), 9);
    assert!(slugs.contains(&"oasis-spa-bangkok"));
    assert!(slugs.contains(&"bangkok-urban-retreat-bangkok"));
}

#[test]
fn test_robots_uses_configured_base_url() {
    let site = TestSite::new();
    site.write_config("base_url = \"https://staging.spa-review.com\"\n");
    site.command()
        .arg("robots")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sitemap: https://staging.spa-review.com/sitemap.xml"));
}

#[test]
fn test_sitemap_with_fixed_lastmod() {
    let site = TestSite::new();
    site.command_with_data()
        .args(["sitemap", "--lastmod", "2026-01-15T00:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains("<loc>https://spa-review.com/city/hua-hin</loc>"))
        .stdout(predicate::str::contains("<lastmod>2026-01-15T00:00:00.000Z</lastmod>"));
}

#[test]
fn test_enrich_without_api_key_degrades() {
    let site = TestSite::new();
    site.command()
        .args(["enrich", "Chiva-Som", "Hua Hin", "--country", "Thailand"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"error\": \"API key not configured\""))
        .stdout(predicate::str::contains("\"photos\": []"));
}

#[test]
fn test_invalid_dataset_reports_friendly_error() {
    let site = TestSite::new();
    let bad = site.path().join("bad.json");
    std::fs::write(&bad, "{\"Thailand\": {\"Bangkok\": [[\"Oasis Spa\", 46]]}}").unwrap();
    site.command()
        .arg("--data")
        .arg(&bad)
        .arg("countries")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid spa dataset"));
}

#[test]
fn test_invalid_config_fails() {
    let site = TestSite::new();
    site.write_config("base_url = [");
    site.command().arg("robots").assert().failure().stderr(predicate::str::contains("error"));
}

#[test]
fn test_city_intro_quotes_full_city_count() {
    let site = TestSite::new();
    let output = site.command_with_data().args(["city", "hakone", "--limit", "1"]).output().unwrap();
    assert!(output.status.success());

    let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(page["spaCount"], 2);
    assert_eq!(page["spas"].as_array().unwrap().len(), 1);
    assert!(page["intro"].as_str().unwrap().contains("The city's 2+ spa venues"));
}
