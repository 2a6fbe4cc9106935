//! schema.org JSON-LD documents.
//!
//! Builders return [`serde_json::Value`] so callers can embed them in a
//! `<script type="application/ld+json">` block or print them as-is. All URLs
//! are rooted at the configured base URL.

use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::constants::MAX_LIST_SCHEMA_ITEMS;
use crate::content::Faq;
use crate::directory::ExpandedSpa;
use crate::utils::{format_thousands, spa_photo_url};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// One step in a breadcrumb trail. `path` is site-relative, e.g. `/country/japan`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub name: String,
    pub path: Option<String>,
}

impl Crumb {
    pub fn link(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
        }
    }

    /// Final crumb for the current page, rendered without a link.
    pub fn current(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }
}

/// Blog post metadata for [`SchemaBuilder::article`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMeta {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub published: NaiveDate,
    pub modified: Option<NaiveDate>,
    pub author: Option<String>,
}

/// Builds JSON-LD documents for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaBuilder {
    base_url: String,
    site_name: String,
}

impl SchemaBuilder {
    pub fn new(base_url: impl Into<String>, site_name: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            site_name: site_name.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn spa_url(&self, slug: &str) -> String {
        format!("{}/spa/{slug}", self.base_url)
    }

    /// `HealthAndBeautyBusiness` with address, rating and treatment catalog.
    #[must_use]
    pub fn spa(&self, spa: &ExpandedSpa, offerings: &[&str]) -> Value {
        let catalog: Vec<Value> = offerings
            .iter()
            .enumerate()
            .map(|(i, service)| {
                json!({
                    "@type": "Offer",
                    "itemOffered": { "@type": "Service", "name": service },
                    "position": i + 1,
                })
            })
            .collect();

        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "HealthAndBeautyBusiness",
            "name": spa.name,
            "description": format!(
                "{} in {}, {}. Rated {}/5 from {} reviews.",
                spa.spa_type,
                spa.city,
                spa.country,
                spa.rating,
                format_thousands(u64::from(spa.reviews))
            ),
            "image": spa_photo_url(&spa.name, &spa.city, 1200, 630),
            "address": postal_address(spa),
            "aggregateRating": {
                "@type": "AggregateRating",
                "ratingValue": spa.rating.to_string(),
                "bestRating": "5",
                "worstRating": "1",
                "reviewCount": spa.reviews.to_string(),
            },
            "priceRange": "$$-$$$$",
            "url": self.spa_url(&spa.slug),
            "hasOfferCatalog": {
                "@type": "OfferCatalog",
                "name": "Spa Services",
                "itemListElement": catalog,
            },
        })
    }

    /// `ItemList` for a ranked listing page. At most 50 items are embedded,
    /// `numberOfItems` reports the full count.
    #[must_use]
    pub fn spa_list(&self, spas: &[ExpandedSpa], title: &str, url: &str) -> Value {
        let items: Vec<Value> = spas
            .iter()
            .take(MAX_LIST_SCHEMA_ITEMS)
            .enumerate()
            .map(|(i, spa)| {
                json!({
                    "@type": "ListItem",
                    "position": i + 1,
                    "item": {
                        "@type": "HealthAndBeautyBusiness",
                        "name": spa.name,
                        "image": spa.photo_url,
                        "address": postal_address(spa),
                        "aggregateRating": {
                            "@type": "AggregateRating",
                            "ratingValue": spa.rating.to_string(),
                            "bestRating": "5",
                            "reviewCount": spa.reviews.to_string(),
                        },
                        "url": self.spa_url(&spa.slug),
                    },
                })
            })
            .collect();

        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "ItemList",
            "name": title,
            "url": url,
            "numberOfItems": spas.len(),
            "itemListElement": items,
        })
    }

    #[must_use]
    pub fn breadcrumb(&self, crumbs: &[Crumb]) -> Value {
        let items: Vec<Value> = crumbs
            .iter()
            .enumerate()
            .map(|(i, crumb)| {
                let mut item = json!({
                    "@type": "ListItem",
                    "position": i + 1,
                    "name": crumb.name,
                });
                if let Some(path) = &crumb.path {
                    item["item"] = Value::String(format!("{}{path}", self.base_url));
                }
                item
            })
            .collect();

        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "BreadcrumbList",
            "itemListElement": items,
        })
    }

    /// Site `Organization` quoting live directory totals.
    #[must_use]
    pub fn organization(&self, spa_count: usize, country_count: usize) -> Value {
        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Organization",
            "name": self.site_name,
            "url": self.base_url,
            "logo": format!("{}/logo.png", self.base_url),
            "description": format!(
                "The definitive guide to the world's best spas and wellness retreats. {}+ spas across {} countries.",
                format_thousands(spa_count as u64),
                country_count
            ),
            "sameAs": [
                "https://twitter.com/spa-review",
                "https://instagram.com/spa-review",
                "https://facebook.com/spa-review",
            ],
        })
    }

    /// `WebSite` with a sitelinks `SearchAction`.
    #[must_use]
    pub fn website(&self) -> Value {
        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "WebSite",
            "name": self.site_name,
            "url": self.base_url,
            "potentialAction": {
                "@type": "SearchAction",
                "target": {
                    "@type": "EntryPoint",
                    "urlTemplate": format!("{}/search?q={{search_term_string}}", self.base_url),
                },
                "query-input": "required name=search_term_string",
            },
        })
    }

    #[must_use]
    pub fn article(&self, article: &ArticleMeta) -> Value {
        let url = format!("{}/blog/{}", self.base_url, article.slug);
        let published = article.published.format("%Y-%m-%d").to_string();
        let modified = article
            .modified
            .map_or_else(|| published.clone(), |date| date.format("%Y-%m-%d").to_string());
        let author =
            article.author.clone().unwrap_or_else(|| format!("{} Editorial", self.site_name));

        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "Article",
            "headline": article.title,
            "description": article.description,
            "url": url,
            "datePublished": published,
            "dateModified": modified,
            "author": { "@type": "Organization", "name": author },
            "publisher": {
                "@type": "Organization",
                "name": self.site_name,
                "url": self.base_url,
                "logo": { "@type": "ImageObject", "url": format!("{}/logo.png", self.base_url) },
            },
            "mainEntityOfPage": { "@type": "WebPage", "@id": url },
        })
    }

    #[must_use]
    pub fn faq(&self, faqs: &[Faq]) -> Value {
        let questions: Vec<Value> = faqs
            .iter()
            .map(|faq| {
                json!({
                    "@type": "Question",
                    "name": faq.question,
                    "acceptedAnswer": { "@type": "Answer", "text": faq.answer },
                })
            })
            .collect();

        json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "FAQPage",
            "mainEntity": questions,
        })
    }
}

fn postal_address(spa: &ExpandedSpa) -> Value {
    json!({
        "@type": "PostalAddress",
        "addressLocality": spa.city,
        "addressCountry": spa.country,
    })
}
