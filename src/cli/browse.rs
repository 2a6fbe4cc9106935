//! Listing commands: `stats`, `countries`, `cities`, `top` and `slugs`.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use crate::cli::{CommandContext, print_json};
use crate::constants::{COUNTRY_PAGE_LIMIT, DEFAULT_TOP_LIMIT};
use crate::directory::CountryStat;
use crate::seo::SchemaBuilder;

/// Site totals.
#[derive(Args, Debug)]
pub struct StatsCommand {
    /// Omit the per-country breakdown
    #[arg(long)]
    pub summary: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsOutput {
    country_count: usize,
    spa_count: usize,
    curated_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    countries: Option<Vec<CountryStat>>,
    json_ld: Vec<Value>,
}

impl StatsCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let directory = ctx.directory().await?;
        let schema = SchemaBuilder::new(ctx.config.base_url(), &ctx.config.site_name);
        let country_count = directory.list_countries().len();
        let spa_count = directory.total_spa_count();

        print_json(&StatsOutput {
            country_count,
            spa_count,
            curated_count: directory.curated_spas().len(),
            countries: (!self.summary).then(|| directory.country_stats()),
            json_ld: vec![schema.organization(spa_count, country_count), schema.website()],
        })
    }
}

pub(crate) async fn countries(ctx: &CommandContext) -> Result<()> {
    let directory = ctx.directory().await?;
    print_json(&directory.list_countries())
}

/// Cities of one country.
#[derive(Args, Debug)]
pub struct CitiesCommand {
    /// Country name as it appears in the dataset
    pub country: String,

    /// Print per-city spa counts, largest first
    #[arg(long)]
    pub stats: bool,
}

impl CitiesCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let directory = ctx.directory().await?;
        if self.stats {
            print_json(&directory.city_stats(&self.country))
        } else {
            print_json(&directory.list_cities(&self.country))
        }
    }
}

/// Ranked spas for a country, or for one city with `--city`.
#[derive(Args, Debug)]
pub struct TopCommand {
    pub country: String,

    #[arg(long)]
    pub city: Option<String>,

    /// Window size; 50 for a city, 20 for a country by default
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl TopCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let directory = ctx.directory().await?;
        let spas = match &self.city {
            Some(city) => directory.top_spas_for_city(
                &self.country,
                city,
                self.limit.unwrap_or(DEFAULT_TOP_LIMIT),
            ),
            None => directory
                .top_spas_for_country(&self.country, self.limit.unwrap_or(COUNTRY_PAGE_LIMIT)),
        };
        print_json(&spas)
    }
}

/// Every reachable spa slug.
#[derive(Args, Debug)]
pub struct SlugsCommand {
    /// Emit a JSON array instead of one slug per line
    #[arg(long)]
    pub json: bool,
}

impl SlugsCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let directory = ctx.directory().await?;
        if self.json {
            let slugs: Vec<String> = directory.all_slugs().collect();
            print_json(&slugs)
        } else {
            for slug in directory.all_slugs() {
                println!("{slug}");
            }
            Ok(())
        }
    }
}
