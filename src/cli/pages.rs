//! Page payload commands: `spa`, `city` and `country`.
//!
//! Each command prints everything a page template needs in one JSON object:
//! the records, the generated copy, titles and the JSON-LD blocks.

use anyhow::{Result, bail};
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use crate::cli::{CommandContext, absolute_url, city_path, country_path, print_json};
use crate::constants::{COUNTRY_PAGE_LIMIT, DEFAULT_TOP_LIMIT, GUIDE_YEAR};
use crate::content::{ContentGenerator, Faq, MetaCopy, city_faqs, editorial_rating, spa_faqs};
use crate::directory::{CityStat, ExpandedSpa, Rating, SlugLookup};
use crate::seo::{Crumb, SchemaBuilder};

fn generator(ctx: &CommandContext) -> Result<ContentGenerator> {
    Ok(ContentGenerator::new()?.with_meta(MetaCopy::new(&ctx.config.site_name, GUIDE_YEAR)))
}

fn schema(ctx: &CommandContext) -> SchemaBuilder {
    SchemaBuilder::new(ctx.config.base_url(), &ctx.config.site_name)
}

/// Spa page by slug.
#[derive(Args, Debug)]
pub struct SpaCommand {
    pub slug: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SpaPage {
    source: &'static str,
    spa: ExpandedSpa,
    editorial_rating: Rating,
    title: String,
    meta_description: String,
    description: String,
    offerings: Vec<&'static str>,
    faqs: Vec<Faq>,
    json_ld: Vec<Value>,
}

impl SpaCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let directory = ctx.directory().await?;
        let (source, spa) = match directory.find_by_slug(&self.slug) {
            SlugLookup::Curated(spa) => ("curated", spa),
            SlugLookup::Bulk(spa) => ("bulk", spa),
            SlugLookup::NotFound => bail!("No spa found for slug '{}'", self.slug),
        };

        let generator = generator(ctx)?;
        let schema = schema(ctx);
        let offerings = spa.spa_type.offerings();
        let faqs = spa_faqs(&spa, &offerings);
        let crumbs = [
            Crumb::link("Home", "/"),
            Crumb::link(spa.country.as_str(), country_path(&spa.country)),
            Crumb::link(spa.city.as_str(), city_path(&spa.city)),
            Crumb::current(spa.name.as_str()),
        ];

        let page = SpaPage {
            source,
            editorial_rating: editorial_rating(spa.rating),
            title: generator.meta().spa_title(&spa),
            meta_description: generator.meta().spa_description(&spa),
            description: generator.spa_description(&spa, &offerings)?,
            json_ld: vec![schema.spa(&spa, &offerings), schema.breadcrumb(&crumbs), schema.faq(&faqs)],
            offerings,
            faqs,
            spa,
        };
        print_json(&page)
    }
}

/// City page by slug.
#[derive(Args, Debug)]
pub struct CityCommand {
    pub slug: String,

    /// Spas to include, best first
    #[arg(short, long, default_value_t = DEFAULT_TOP_LIMIT)]
    pub limit: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CityPage {
    city: String,
    country: String,
    spa_count: usize,
    title: String,
    meta_description: String,
    intro: String,
    spas: Vec<ExpandedSpa>,
    faqs: Vec<Faq>,
    json_ld: Vec<Value>,
}

impl CityCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let directory = ctx.directory().await?;
        let Some((city, country)) = directory.find_city_by_slug(&self.slug) else {
            bail!("No city found for slug '{}'", self.slug);
        };

        let generator = generator(ctx)?;
        let schema = schema(ctx);
        let spa_count = directory.dataset().city(country, city).map_or(0, |entry| entry.spas.len());
        let spas = directory.top_spas_for_city(country, city, self.limit);
        let faqs = city_faqs(city, country, &spas);
        let title = generator.meta().city_title(city, country);
        let url = absolute_url(ctx.config.base_url(), &city_path(city));
        let crumbs = [
            Crumb::link("Home", "/"),
            Crumb::link(country, country_path(country)),
            Crumb::current(city),
        ];

        let page = CityPage {
            intro: generator.city_intro(city, country, spa_count)?,
            meta_description: generator.meta().city_description(city, country, spa_count),
            json_ld: vec![
                schema.spa_list(&spas, &title, &url),
                schema.breadcrumb(&crumbs),
                schema.faq(&faqs),
            ],
            city: city.to_string(),
            country: country.to_string(),
            spa_count,
            title,
            spas,
            faqs,
        };
        print_json(&page)
    }
}

/// Country page by slug.
#[derive(Args, Debug)]
pub struct CountryCommand {
    pub slug: String,

    #[arg(short, long, default_value_t = COUNTRY_PAGE_LIMIT)]
    pub limit: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CountryPage {
    country: String,
    city_count: usize,
    spa_count: usize,
    title: String,
    meta_description: String,
    intro: String,
    cities: Vec<CityStat>,
    top_spas: Vec<ExpandedSpa>,
    json_ld: Vec<Value>,
}

impl CountryCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let directory = ctx.directory().await?;
        let Some(country) = directory.find_country_by_slug(&self.slug) else {
            bail!("No country found for slug '{}'", self.slug);
        };

        let generator = generator(ctx)?;
        let schema = schema(ctx);
        let cities = directory.city_stats(country);
        let city_count = cities.len();
        let spa_count = cities.iter().map(|city| city.spa_count).sum();
        let top_spas = directory.top_spas_for_country(country, self.limit);
        let title = generator.meta().country_title(country);
        let url = absolute_url(ctx.config.base_url(), &country_path(country));
        let crumbs = [Crumb::link("Home", "/"), Crumb::current(country)];

        let page = CountryPage {
            intro: generator.country_intro(country, city_count, spa_count)?,
            meta_description: generator.meta().country_description(country, city_count, spa_count),
            json_ld: vec![schema.spa_list(&top_spas, &title, &url), schema.breadcrumb(&crumbs)],
            country: country.to_string(),
            city_count,
            spa_count,
            title,
            cities,
            top_spas,
        };
        print_json(&page)
    }
}
