//! Small pure helpers shared across the crate.
//!
//! # Modules
//!
//! - [`slug`] - URL slug derivation for countries, cities and spas
//! - [`hash`] - Deterministic hashes for template bucketing and photo seeds
//! - [`format`] - Number formatting for editorial copy
//!
//! Everything here is a pure function of its inputs. Outputs feed indexed URLs
//! and cached page copy, so behaviour changes are visible regressions.
//!
//! # Example
//!
//! ```rust
//! use spa_review::utils::{select_template, spa_slug, to_slug};
//!
//! assert_eq!(to_slug("Hua Hin"), "hua-hin");
//! assert_eq!(spa_slug("Chiva-Som", "Hua Hin"), "chiva-som-hua-hin");
//!
//! let pool = ["first", "second", "third"];
//! assert_eq!(select_template("Bangkok", &pool), select_template("Bangkok", &pool));
//! ```

pub mod format;
pub mod hash;
pub mod slug;

pub use format::format_thousands;
pub use hash::{
    char_code_sum, default_photo_url, select_template, spa_hash, spa_photo_url, template_index,
};
pub use slug::{spa_slug, to_slug};
