//! sitemap.xml and robots.txt generation.
//!
//! The sitemap lists the homepage, every country page, every city page and the
//! published blog posts. Individual spa pages are left to internal linking.
//! URLs are emitted once even when two countries share a city slug.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::Write as _;

use crate::directory::SpaDirectory;
use crate::utils::to_slug;

/// Blog posts that are live and belong in the sitemap.
pub const PUBLISHED_BLOG_SLUGS: &[&str] = &["spa-etiquette-guide", "medical-spa-vs-day-spa"];

/// Crawlers denied the whole site.
const BLOCKED_AGENTS: &[&str] = &["GPTBot"];

/// Paths hidden from every crawler.
const DISALLOWED_PATHS: &[&str] = &["/api/", "/admin/", "/_next/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Every indexable URL, homepage first, then countries, cities and blog posts.
#[must_use]
pub fn sitemap_entries(
    directory: &SpaDirectory,
    base_url: &str,
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    let mut push = |url: String, change_frequency: ChangeFrequency, priority: f32| {
        if seen.insert(url.clone()) {
            entries.push(SitemapEntry {
                url,
                last_modified: now,
                change_frequency,
                priority,
            });
        }
    };

    push(base_url.to_string(), ChangeFrequency::Weekly, 1.0);

    let countries = directory.list_countries();
    for country in &countries {
        push(format!("{base_url}/country/{}", to_slug(country)), ChangeFrequency::Weekly, 0.9);
    }
    for country in &countries {
        for city in directory.list_cities(country) {
            push(format!("{base_url}/city/{}", to_slug(city)), ChangeFrequency::Weekly, 0.8);
        }
    }
    for slug in PUBLISHED_BLOG_SLUGS {
        push(format!("{base_url}/blog/{slug}"), ChangeFrequency::Monthly, 0.7);
    }

    entries
}

/// Render entries as a sitemap protocol 0.9 document.
#[must_use]
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        // writing to a String cannot fail
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Millis, true),
            entry.change_frequency.as_str(),
            entry.priority
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

/// robots.txt for the site.
#[must_use]
pub fn robots_txt(base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    let mut robots = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOWED_PATHS {
        robots.push_str("Disallow: ");
        robots.push_str(path);
        robots.push('\n');
    }
    for agent in BLOCKED_AGENTS {
        let _ = write!(robots, "\nUser-agent: {agent}\nDisallow: /\n");
    }
    let _ = write!(robots, "\nHost: {base_url}\nSitemap: {base_url}/sitemap.xml\n");
    robots
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
