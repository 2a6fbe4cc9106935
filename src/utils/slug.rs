//! URL slug derivation.
//!
//! Slugs are the public locators for countries, cities and spas. They must be
//! stable across releases because they appear in indexed URLs, so the
//! normalization here is deliberately simple and fully deterministic:
//!
//! 1. lowercase
//! 2. canonical decomposition (NFD)
//! 3. drop combining diacritical marks (U+0300..=U+036F)
//! 4. collapse every run of characters outside `[a-z0-9]` into a single `-`
//! 5. trim leading and trailing `-`
//!
//! The output alphabet is `[a-z0-9-]` with no leading, trailing or doubled
//! dashes, which makes [`to_slug`] idempotent.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("slug pattern is a valid regex"));

/// Combining Diacritical Marks block.
const fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

/// Convert an arbitrary display string into a URL slug.
///
/// # Examples
///
/// ```rust
/// use spa_review::utils::to_slug;
///
/// assert_eq!(to_slug("Bürgenstock Alpine Spa"), "burgenstock-alpine-spa");
/// assert_eq!(to_slug("  St. Moritz  "), "st-moritz");
/// assert_eq!(to_slug(&to_slug("Kéa & Co.")), to_slug("Kéa & Co."));
/// ```
pub fn to_slug(input: &str) -> String {
    let folded: String =
        input.to_lowercase().nfd().filter(|c| !is_combining_mark(*c)).collect();
    NON_ALPHANUMERIC.replace_all(&folded, "-").trim_matches('-').to_string()
}

/// Slug for a bulk-dataset spa.
///
/// The city is appended for disambiguation unless the name slug already ends
/// with the city slug, so "Oasis Spa Bangkok" in Bangkok becomes
/// `oasis-spa-bangkok` rather than `oasis-spa-bangkok-bangkok`.
pub fn spa_slug(name: &str, city: &str) -> String {
    let name_slug = to_slug(name);
    let city_slug = to_slug(city);
    if name_slug.ends_with(&city_slug) {
        name_slug
    } else {
        to_slug(&format!("{name}-{city}"))
    }
}
