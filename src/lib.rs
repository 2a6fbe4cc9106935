//! spa-review - spa directory core
//!
//! The data and content engine behind a global spa directory. A compact
//! dataset of roughly forty thousand spas (country -> city -> four-field
//! records) is expanded on demand into full spa records, ranked, looked up by
//! slug and turned into deterministic editorial copy, structured data and
//! crawler files. Live place data (photos, contact details, reviews) is
//! overlaid through a cached enrichment client.
//!
//! # Architecture Overview
//!
//! - The dataset is loaded once and never mutated. Every query expands only
//!   the records it returns, so memory stays proportional to the compact form.
//! - A small hand-curated list of flagship spas shadows bulk records with the
//!   same slug.
//! - Generated copy is a pure function of its inputs: the same spa always gets
//!   the same description, photo and FAQ answers.
//! - Enrichment never fails outward. Missing keys and upstream errors degrade
//!   to an empty payload, definitive answers are cached.
//!
//! # Core Modules
//!
//! - [`directory`] - dataset model, expansion, ranking, slug lookup, aggregates
//! - [`content`] - intros, spa descriptions, FAQs, titles, blog calendar
//! - [`seo`] - JSON-LD builders, sitemap and robots.txt
//! - [`enrichment`] - places client, injectable LRU/TTL cache
//!
//! ## Supporting Modules
//!
//! - [`core`] - error types and the spa type catalogue
//! - [`config`] - TOML site configuration
//! - [`utils`] - slugs, name hashing, number formatting
//! - [`constants`] - defaults and limits
//! - [`cli`] - `spa-review` command-line front end
//!
//! # Example
//!
//! ```rust,no_run
//! use spa_review::directory::{SlugLookup, SpaDirectory};
//! use spa_review::content::ContentGenerator;
//!
//! # fn example() -> anyhow::Result<()> {
//! let directory = SpaDirectory::embedded()?;
//! let top = directory.top_spas_for_city("Thailand", "Bangkok", 10);
//!
//! let generator = ContentGenerator::new()?;
//! println!("{}", generator.city_intro("Bangkok", "Thailand", top.len())?);
//!
//! if let SlugLookup::Curated(spa) = directory.find_by_slug("chiva-som-hua-hin") {
//!     println!("{} ({})", spa.name, spa.rating);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;

pub mod content;
pub mod directory;
pub mod enrichment;
pub mod seo;

pub mod utils;

// test_utils is available for tests and when the test-utils feature is enabled
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
