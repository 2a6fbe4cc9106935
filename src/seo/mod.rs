//! Search-engine facing output: JSON-LD structured data, sitemap and robots.
//!
//! - [`SchemaBuilder`] produces schema.org documents for spa, listing, blog
//!   and site-wide pages
//! - [`sitemap_entries`] / [`render_sitemap_xml`] enumerate indexable URLs
//! - [`robots_txt`] renders crawler rules
//!
//! # Example
//!
//! ```rust
//! use spa_review::seo::{SchemaBuilder, robots_txt};
//!
//! let schema = SchemaBuilder::new("https://spa-review.com", "Spa-Review");
//! assert_eq!(schema.website()["@type"], "WebSite");
//! assert!(robots_txt("https://spa-review.com").contains("GPTBot"));
//! ```

pub mod schema;
pub mod sitemap;

pub use schema::{ArticleMeta, Crumb, SchemaBuilder};
pub use sitemap::{
    ChangeFrequency, PUBLISHED_BLOG_SLUGS, SitemapEntry, render_sitemap_xml, robots_txt,
    sitemap_entries,
};
