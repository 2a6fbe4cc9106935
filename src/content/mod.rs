//! Deterministic editorial content
//!
//! Every city, country and spa page carries prose. Hand-written copy exists
//! for a handful of flagship destinations; everything else is rendered from a
//! small pool of Tera templates, with the template chosen by a stable hash of
//! the entity name. The same name therefore always renders the same copy,
//! which keeps indexed pages stable between builds.
//!
//! # Selection order
//!
//! 1. Hand-written intro for the exact name, returned verbatim
//! 2. Pool template at `char_code_sum(name) % pool.len()`, rendered with the
//!    entity's figures (numbers use thousands separators, spa types are
//!    lowercased in running text)
//!
//! Spa descriptions have no hand-written layer.
//!
//! # Example
//!
//! ```rust
//! use spa_review::content::ContentGenerator;
//!
//! let content = ContentGenerator::new().unwrap();
//! let intro = content.city_intro("Lisbon", "Portugal", 1250).unwrap();
//! assert!(intro.contains("1,250+"));
//! assert_eq!(intro, content.city_intro("Lisbon", "Portugal", 1250).unwrap());
//! ```

pub mod blog;
pub mod faq;
pub mod meta;
pub mod prose;

pub use blog::{BlogIdea, blog_ideas};
pub use faq::{Faq, city_faqs, editorial_rating, spa_faqs};
pub use meta::MetaCopy;

use std::collections::HashMap;
use tera::{Context as TeraContext, Tera};
use tracing::debug;

use crate::constants::{DEFAULT_SITE_NAME, GUIDE_YEAR};
use crate::core::SpaReviewError;
use crate::core::error::format_tera_error;
use crate::directory::ExpandedSpa;
use crate::utils::{format_thousands, template_index};

use prose::{
    CITY_INTRO_TEMPLATES, CITY_INTROS, COUNTRY_INTRO_TEMPLATES, COUNTRY_INTROS,
    SPA_DESCRIPTION_TEMPLATES,
};

const CITY_POOL: &str = "city_intro";
const COUNTRY_POOL: &str = "country_intro";
const SPA_POOL: &str = "spa_description";

/// Renders page copy for cities, countries and spas.
///
/// Cheap to share: rendering takes `&self` and the pools are compiled once.
#[derive(Debug)]
pub struct ContentGenerator {
    tera: Tera,
    city_intros: HashMap<String, String>,
    country_intros: HashMap<String, String>,
    meta: MetaCopy,
}

impl ContentGenerator {
    /// Generator with the built-in hand-written intros.
    pub fn new() -> Result<Self, SpaReviewError> {
        let mut tera = Tera::default();
        let pools = [
            (CITY_POOL, &CITY_INTRO_TEMPLATES),
            (COUNTRY_POOL, &COUNTRY_INTRO_TEMPLATES),
            (SPA_POOL, &SPA_DESCRIPTION_TEMPLATES),
        ];
        for (pool, templates) in pools {
            for (index, source) in templates.iter().enumerate() {
                let name = template_name(pool, index);
                tera.add_raw_template(&name, source).map_err(|e| template_error(&name, &e))?;
            }
        }

        Ok(Self {
            tera,
            city_intros: to_table(CITY_INTROS),
            country_intros: to_table(COUNTRY_INTROS),
            meta: MetaCopy::new(DEFAULT_SITE_NAME, GUIDE_YEAR),
        })
    }

    /// Replace the hand-written city intros.
    #[must_use]
    pub fn with_city_intros(mut self, intros: HashMap<String, String>) -> Self {
        self.city_intros = intros;
        self
    }

    /// Replace the hand-written country intros.
    #[must_use]
    pub fn with_country_intros(mut self, intros: HashMap<String, String>) -> Self {
        self.country_intros = intros;
        self
    }

    /// Use a different site name and guide year in titles.
    #[must_use]
    pub fn with_meta(mut self, meta: MetaCopy) -> Self {
        self.meta = meta;
        self
    }

    #[must_use]
    pub const fn meta(&self) -> &MetaCopy {
        &self.meta
    }

    pub fn city_intro(
        &self,
        city: &str,
        country: &str,
        spa_count: usize,
    ) -> Result<String, SpaReviewError> {
        if let Some(intro) = self.city_intros.get(city) {
            return Ok(intro.clone());
        }
        let mut context = TeraContext::new();
        context.insert("city", city);
        context.insert("country", country);
        context.insert("spa_count", &format_thousands(spa_count as u64));
        self.render_pool(CITY_POOL, CITY_INTRO_TEMPLATES.len(), city, &context)
    }

    pub fn country_intro(
        &self,
        country: &str,
        city_count: usize,
        spa_count: usize,
    ) -> Result<String, SpaReviewError> {
        if let Some(intro) = self.country_intros.get(country) {
            return Ok(intro.clone());
        }
        let mut context = TeraContext::new();
        context.insert("country", country);
        context.insert("city_count", &format_thousands(city_count as u64));
        context.insert("spa_count", &format_thousands(spa_count as u64));
        self.render_pool(COUNTRY_POOL, COUNTRY_INTRO_TEMPLATES.len(), country, &context)
    }

    /// Description paragraph for a spa page, quoting its first five treatments.
    pub fn spa_description(
        &self,
        spa: &ExpandedSpa,
        offerings: &[&str],
    ) -> Result<String, SpaReviewError> {
        let mut context = TeraContext::new();
        context.insert("name", &spa.name);
        context.insert("spa_type", spa.spa_type.label());
        context.insert("city", &spa.city);
        context.insert("country", &spa.country);
        context.insert("rating", &spa.rating.to_string());
        context.insert("reviews", &format_thousands(u64::from(spa.reviews)));
        context.insert("offerings", offerings);
        self.render_pool(SPA_POOL, SPA_DESCRIPTION_TEMPLATES.len(), &spa.name, &context)
    }

    fn render_pool(
        &self,
        pool: &str,
        pool_len: usize,
        key: &str,
        context: &TeraContext,
    ) -> Result<String, SpaReviewError> {
        let index = template_index(key, pool_len).ok_or_else(|| SpaReviewError::Other {
            message: format!("template pool '{pool}' is empty"),
        })?;
        let name = template_name(pool, index);
        debug!("Rendering '{}' for '{}'", name, key);
        self.tera.render(&name, context).map_err(|e| template_error(&name, &e))
    }
}

fn template_name(pool: &str, index: usize) -> String {
    format!("{pool}/{index}")
}

fn template_error(name: &str, error: &tera::Error) -> SpaReviewError {
    SpaReviewError::TemplateError {
        template: name.to_string(),
        reason: format_tera_error(error),
    }
}

fn to_table(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries.iter().map(|(name, text)| ((*name).to_string(), (*text).to_string())).collect()
}
