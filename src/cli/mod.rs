//! Command-line interface for spa-review.
//!
//! The CLI is a thin front end over the library: every command loads the
//! configuration, builds the directory (or enrichment client) it needs and
//! prints JSON to stdout. `sitemap` and `robots` print their documents as
//! plain text.
//!
//! # Commands
//!
//! - `stats` - site totals, per-country counts and site-wide JSON-LD
//! - `countries` / `cities <country>` - sorted name listings
//! - `top <country> [--city <city>] [--limit N]` - ranked spa window
//! - `spa <slug>` / `city <slug>` / `country <slug>` - full page payloads
//! - `slugs` - every spa slug, one per line
//! - `blog-ideas` - editorial calendar seeded from the largest cities
//! - `sitemap` / `robots` - crawler documents
//! - `enrich <name> <city> [--country <country>]` - live places lookup
//!
//! # Global Options
//!
//! - `--verbose` - debug logging on stderr
//! - `--quiet` - no logging
//! - `--config <path>` - alternate config file
//! - `--data <path>` - alternate dataset document
//!
//! # Examples
//!
//! ```bash
//! spa-review top Thailand --city Bangkok --limit 10
//! spa-review spa chiva-som-hua-hin
//! spa-review --data ./spas.json sitemap > public/sitemap.xml
//! GOOGLE_PLACES_API_KEY=... spa-review enrich "Chiva-Som" "Hua Hin" --country Thailand
//! ```

mod browse;
mod enrich;
mod pages;
mod seo;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::directory::SpaDirectory;

pub use browse::{CitiesCommand, SlugsCommand, StatsCommand, TopCommand};
pub use enrich::EnrichCommand;
pub use pages::{CityCommand, CountryCommand, SpaCommand};
pub use seo::{BlogIdeasCommand, SitemapCommand};

/// Spa directory command-line front end.
#[derive(Parser, Debug)]
#[command(
    name = "spa-review",
    about = "Spa directory tools - query the dataset, render page payloads and crawler files",
    version,
    author
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Disable logging; only errors are reported.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file.
    ///
    /// Defaults to `SPA_REVIEW_CONFIG`, then `~/.spa-review/config.toml`.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dataset document to load instead of the configured or embedded one.
    #[arg(long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Site totals and per-country counts
    Stats(StatsCommand),

    /// List countries in sorted order
    Countries,

    /// List the cities of a country in sorted order
    Cities(CitiesCommand),

    /// Rank the best spas of a country or city
    Top(TopCommand),

    /// Full payload for a spa page
    Spa(SpaCommand),

    /// Full payload for a city page
    City(CityCommand),

    /// Full payload for a country page
    Country(CountryCommand),

    /// Print every spa slug
    Slugs(SlugsCommand),

    /// Editorial calendar of blog post ideas
    BlogIdeas(BlogIdeasCommand),

    /// Render sitemap.xml
    Sitemap(SitemapCommand),

    /// Render robots.txt
    Robots,

    /// Look up live place data for a spa
    Enrich(EnrichCommand),
}

/// Resolved settings shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: SiteConfig,
}

impl CommandContext {
    pub const fn new(config: SiteConfig) -> Self {
        Self {
            config,
        }
    }

    /// Directory over the configured dataset, or the embedded one when no
    /// `data_path` is set.
    pub async fn directory(&self) -> Result<SpaDirectory> {
        let directory = match &self.config.data_path {
            Some(path) => SpaDirectory::load(path).await?,
            None => SpaDirectory::embedded()?,
        };
        Ok(directory)
    }
}

impl Cli {
    /// Run the parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration or the dataset cannot be loaded,
    /// when a page slug is unknown, or when output cannot be written.
    pub async fn execute(self) -> Result<()> {
        init_logging(self.log_level());

        let mut config = SiteConfig::load(self.config.as_deref()).await?;
        if let Some(data) = self.data {
            config.data_path = Some(data);
        }
        debug!("Using base URL {} and dataset {:?}", config.base_url(), config.data_path);
        let ctx = CommandContext::new(config);

        match self.command {
            Commands::Stats(cmd) => cmd.execute(&ctx).await,
            Commands::Countries => browse::countries(&ctx).await,
            Commands::Cities(cmd) => cmd.execute(&ctx).await,
            Commands::Top(cmd) => cmd.execute(&ctx).await,
            Commands::Spa(cmd) => cmd.execute(&ctx).await,
            Commands::City(cmd) => cmd.execute(&ctx).await,
            Commands::Country(cmd) => cmd.execute(&ctx).await,
            Commands::Slugs(cmd) => cmd.execute(&ctx).await,
            Commands::BlogIdeas(cmd) => cmd.execute(&ctx).await,
            Commands::Sitemap(cmd) => cmd.execute(&ctx).await,
            Commands::Robots => seo::robots(&ctx),
            Commands::Enrich(cmd) => cmd.execute(&ctx).await,
        }
    }

    /// `debug` with `--verbose`, nothing with `--quiet`, `info` otherwise.
    #[must_use]
    pub fn log_level(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            None
        } else {
            Some("info")
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides `level`.
fn init_logging(level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if let Some(level) = level {
        EnvFilter::new(format!("spa_review={level}"))
    } else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Pretty-print `value` as JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Site-relative path for a country page.
pub(crate) fn country_path(country: &str) -> String {
    format!("/country/{}", crate::utils::to_slug(country))
}

/// Site-relative path for a city page.
pub(crate) fn city_path(city: &str) -> String {
    format!("/city/{}", crate::utils::to_slug(city))
}

/// Absolute URL for a site-relative `path`.
pub(crate) fn absolute_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}
