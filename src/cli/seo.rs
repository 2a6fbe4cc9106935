//! Crawler and editorial planning commands: `sitemap`, `robots`, `blog-ideas`.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;

use crate::cli::{CommandContext, print_json};
use crate::constants::GUIDE_YEAR;
use crate::content::blog_ideas;
use crate::seo::{render_sitemap_xml, robots_txt, sitemap_entries};

/// sitemap.xml for every country, city and published post.
#[derive(Args, Debug)]
pub struct SitemapCommand {
    /// Timestamp for every `<lastmod>` (RFC 3339), defaults to now
    #[arg(long)]
    pub lastmod: Option<DateTime<Utc>>,
}

impl SitemapCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let directory = ctx.directory().await?;
        let entries =
            sitemap_entries(&directory, ctx.config.base_url(), self.lastmod.unwrap_or_else(Utc::now));
        print!("{}", render_sitemap_xml(&entries));
        Ok(())
    }
}

pub(crate) fn robots(ctx: &CommandContext) -> Result<()> {
    print!("{}", robots_txt(ctx.config.base_url()));
    Ok(())
}

/// Blog post ideas, with city guides for the cities holding the most spas.
#[derive(Args, Debug)]
pub struct BlogIdeasCommand {
    #[arg(long, default_value_t = GUIDE_YEAR)]
    pub year: u16,
}

impl BlogIdeasCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let directory = ctx.directory().await?;
        let mut cities: Vec<(String, usize)> = directory
            .list_countries()
            .into_iter()
            .flat_map(|country| directory.city_stats(country))
            .map(|stat| (stat.name, stat.spa_count))
            .collect();
        cities.sort_by(|a, b| b.1.cmp(&a.1));
        let names: Vec<&str> = cities.iter().map(|(name, _)| name.as_str()).collect();
        print_json(&blog_ideas(&names, self.year))
    }
}
