//! Deterministic hashing helpers.
//!
//! Two hashes live here and both are load-bearing for output stability:
//!
//! - [`char_code_sum`] buckets entity names into prose templates. Changing it
//!   would change which intro every existing city, country and spa renders.
//! - [`spa_hash`] seeds placeholder photo URLs. Changing it would change every
//!   placeholder image on the site.
//!
//! Both operate on raw characters with no case or whitespace normalization.

use crate::constants::{DEFAULT_PHOTO_HEIGHT, DEFAULT_PHOTO_WIDTH};

/// Sum of character codes of `name`.
///
/// For each character the first UTF-16 code unit is summed, which equals the
/// code point for everything in the Basic Multilingual Plane.
pub fn char_code_sum(name: &str) -> u64 {
    let mut buf = [0u16; 2];
    name.chars().map(|c| u64::from(c.encode_utf16(&mut buf)[0])).sum()
}

/// Index of the template selected for `name` in a pool of `pool_len` entries.
///
/// Returns `None` for an empty pool.
pub fn template_index(name: &str, pool_len: usize) -> Option<usize> {
    if pool_len == 0 {
        return None;
    }
    // pool_len fits in u64 on every supported target
    Some((char_code_sum(name) % pool_len as u64) as usize)
}

/// Pick a template from `pool` by the character-code sum of `name`.
///
/// Pure and collision tolerant: different names may share a template, and the
/// same name always selects the same one.
pub fn select_template<'a, T>(name: &str, pool: &'a [T]) -> Option<&'a T> {
    template_index(name, pool.len()).map(|idx| &pool[idx])
}

/// 32-bit rolling hash of `name + location` used to seed placeholder photos.
///
/// Computes `h = (h << 5) - h + unit` over UTF-16 code units with signed 32-bit
/// wrap-around and returns the absolute value.
pub fn spa_hash(name: &str, location: &str) -> u32 {
    let h = name.encode_utf16().chain(location.encode_utf16()).fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    h.unsigned_abs()
}

/// Placeholder photo URL for a spa.
pub fn spa_photo_url(name: &str, location: &str, width: u32, height: u32) -> String {
    format!("https://picsum.photos/seed/{}/{width}/{height}", spa_hash(name, location))
}

/// Placeholder photo URL at the default card size.
pub fn default_photo_url(name: &str, location: &str) -> String {
    spa_photo_url(name, location, DEFAULT_PHOTO_WIDTH, DEFAULT_PHOTO_HEIGHT)
}
