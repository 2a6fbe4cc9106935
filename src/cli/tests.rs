use super::*;

#[test]
fn test_log_level_from_flags() {
    let cli = Cli::try_parse_from(["spa-review", "--verbose", "countries"]).unwrap();
    assert_eq!(cli.log_level(), Some("debug"));

    let cli = Cli::try_parse_from(["spa-review", "countries", "--quiet"]).unwrap();
    assert_eq!(cli.log_level(), None);

    let cli = Cli::try_parse_from(["spa-review", "countries"]).unwrap();
    assert_eq!(cli.log_level(), Some("info"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    assert!(Cli::try_parse_from(["spa-review", "-v", "-q", "countries"]).is_err());
}

#[test]
fn test_top_arguments() {
    let cli = Cli::try_parse_from([
        "spa-review",
        "--data",
        "spas.json",
        "top",
        "Thailand",
        "--city",
        "Bangkok",
        "--limit",
        "5",
    ])
    .unwrap();
    assert_eq!(cli.data, Some(PathBuf::from("spas.json")));
    let Commands::Top(top) = cli.command else {
        panic!("expected top command");
    };
    assert_eq!(top.country, "Thailand");
    assert_eq!(top.city.as_deref(), Some("Bangkok"));
    assert_eq!(top.limit, Some(5));
}

#[test]
fn test_page_limits_default() {
    let cli = Cli::try_parse_from(["spa-review", "city", "bangkok"]).unwrap();
    let Commands::City(city) = cli.command else {
        panic!("expected city command");
    };
    assert_eq!(city.limit, 50);

    let cli = Cli::try_parse_from(["spa-review", "country", "thailand"]).unwrap();
    let Commands::Country(country) = cli.command else {
        panic!("expected country command");
    };
    assert_eq!(country.limit, 20);
}

#[test]
fn test_enrich_requires_name_and_city() {
    assert!(Cli::try_parse_from(["spa-review", "enrich", "Chiva-Som"]).is_err());
    let cli =
        Cli::try_parse_from(["spa-review", "enrich", "Chiva-Som", "Hua Hin", "--country", "Thailand"])
            .unwrap();
    let Commands::Enrich(enrich) = cli.command else {
        panic!("expected enrich command");
    };
    assert_eq!(enrich.country.as_deref(), Some("Thailand"));
}

#[test]
fn test_paths() {
    assert_eq!(country_path("Czech Republic"), "/country/czech-republic");
    assert_eq!(city_path("Baden-Baden"), "/city/baden-baden");
    assert_eq!(absolute_url("https://spa-review.com/", "/city/bangkok"), "https://spa-review.com/city/bangkok");
}

#[test]
fn test_sitemap_lastmod_parses_rfc3339() {
    let cli = Cli::try_parse_from(["spa-review", "sitemap", "--lastmod", "2026-01-15T00:00:00Z"])
        .unwrap();
    let Commands::Sitemap(sitemap) = cli.command else {
        panic!("expected sitemap command");
    };
    assert_eq!(sitemap.lastmod.unwrap().to_rfc3339(), "2026-01-15T00:00:00+00:00");
}
