//! Enrichment result cache.
//!
//! The client only talks to [`EnrichmentCache`]; callers choose the
//! implementation and its lifetime. [`LruTtlCache`] is the in-process default:
//! a sharded concurrent map bounded by entry count, evicting the least
//! recently used entry at capacity and dropping entries older than the TTL on
//! access.
//!
//! Recency is tracked with a monotonically increasing access counter rather
//! than timestamps, so two accesses in the same instant still order strictly.
//! An ordered index over that counter makes eviction at capacity a pop from
//! the front instead of a scan of the map.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::enrichment::models::{Enrichment, EnrichmentRequest};

/// Cache key: the request's name, city and country verbatim.
pub type EnrichmentKey = EnrichmentRequest;

/// Hit/miss counters and current size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl CacheStats {
    /// Fraction of lookups served from cache, 0.0 before any lookup.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Storage for enrichment results shared across requests.
pub trait EnrichmentCache: Send + Sync {
    fn get(&self, key: &EnrichmentKey) -> Option<Enrichment>;

    fn insert(&self, key: EnrichmentKey, value: Enrichment);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn stats(&self) -> CacheStats;

    fn clear(&self);
}

impl<T: EnrichmentCache + ?Sized> EnrichmentCache for Arc<T> {
    fn get(&self, key: &EnrichmentKey) -> Option<Enrichment> {
        (**self).get(key)
    }

    fn insert(&self, key: EnrichmentKey, value: Enrichment) {
        (**self).insert(key, value);
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn stats(&self) -> CacheStats {
        (**self).stats()
    }

    fn clear(&self) {
        (**self).clear();
    }
}

#[derive(Debug)]
struct CacheEntry {
    value: Enrichment,
    inserted_at: Instant,
    last_access: u64,
}

/// Inserts between two sweeps for expired entries.
const PURGE_STRIDE: u64 = 1024;

/// Bounded LRU cache with optional time-to-live.
///
/// `recency` maps each entry's last access tick to its key, so the least
/// recently used entry is always the first key of the index. Lock order is
/// map shard then `recency`; the index lock is never held while touching the
/// map.
#[derive(Debug)]
pub struct LruTtlCache {
    entries: DashMap<EnrichmentKey, CacheEntry>,
    recency: Mutex<BTreeMap<u64, EnrichmentKey>>,
    max_entries: usize,
    ttl: Option<Duration>,
    clock: AtomicU64,
    inserts: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl LruTtlCache {
    /// A cache holding at most `max_entries` results, each valid for `ttl`
    /// (`None` never expires). A capacity of zero stores nothing.
    #[must_use]
    pub fn new(max_entries: usize, ttl: Option<Duration>) -> Self {
        Self {
            entries: DashMap::new(),
            recency: Mutex::new(BTreeMap::new()),
            max_entries,
            ttl,
            clock: AtomicU64::new(0),
            inserts: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    #[must_use]
    pub const fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        self.ttl.is_some_and(|ttl| entry.inserted_at.elapsed() >= ttl)
    }

    fn recency(&self) -> MutexGuard<'_, BTreeMap<u64, EnrichmentKey>> {
        // a panic mid-update leaves at most stale slots, which eviction skips
        self.recency.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Removes `key` only if its last access is still `tick`.
    fn remove_at(&self, key: &EnrichmentKey, tick: u64) -> bool {
        let removed = self.entries.remove_if(key, |_, entry| entry.last_access == tick).is_some();
        if removed {
            self.recency().remove(&tick);
        }
        removed
    }

    /// Drops the least recently used entry.
    ///
    /// Index slots whose entry was touched or replaced since they were popped
    /// no longer match and are skipped.
    fn evict_one(&self) {
        loop {
            let Some((tick, key)) = self.recency().pop_first() else {
                return;
            };
            if self.entries.remove_if(&key, |_, entry| entry.last_access == tick).is_some() {
                debug!("Evicting least recently used enrichment for '{}' in {}", key.name, key.city);
                return;
            }
        }
    }

    /// Removes every expired entry and returns how many were dropped.
    ///
    /// Runs on its own every [`PURGE_STRIDE`] inserts; expired entries are
    /// otherwise dropped when looked up.
    pub fn purge_expired(&self) -> usize {
        if self.ttl.is_none() {
            return 0;
        }
        let expired: Vec<(EnrichmentKey, u64)> = self
            .entries
            .iter()
            .filter(|entry| self.is_expired(entry.value()))
            .map(|entry| (entry.key().clone(), entry.last_access))
            .collect();
        let purged = expired.into_iter().filter(|(key, tick)| self.remove_at(key, *tick)).count();
        if purged > 0 {
            debug!("Purged {} expired enrichment entries", purged);
        }
        purged
    }
}

impl EnrichmentCache for LruTtlCache {
    fn get(&self, key: &EnrichmentKey) -> Option<Enrichment> {
        let expired_at = match self.entries.get_mut(key) {
            Some(mut entry) if !self.is_expired(&entry) => {
                let previous = entry.last_access;
                let tick = self.tick();
                entry.last_access = tick;
                {
                    let mut recency = self.recency();
                    recency.remove(&previous);
                    recency.insert(tick, key.clone());
                }
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.value.clone());
            }
            Some(entry) => Some(entry.last_access),
            None => None,
        };
        if let Some(tick) = expired_at {
            debug!("Enrichment for '{}' in {} expired", key.name, key.city);
            self.remove_at(key, tick);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    fn insert(&self, key: EnrichmentKey, value: Enrichment) {
        if self.max_entries == 0 {
            return;
        }
        if self.inserts.fetch_add(1, Ordering::Relaxed) % PURGE_STRIDE == PURGE_STRIDE - 1 {
            self.purge_expired();
        }
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.evict_one();
        }
        let tick = self.tick();
        let entry = CacheEntry {
            value,
            inserted_at: Instant::now(),
            last_access: tick,
        };
        // the shard stays locked while the index is updated
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                let previous = occupied.insert(entry).last_access;
                let mut recency = self.recency();
                recency.remove(&previous);
                recency.insert(tick, occupied.key().clone());
            }
            Entry::Vacant(vacant) => {
                let key = vacant.key().clone();
                let _slot = vacant.insert(entry);
                self.recency().insert(tick, key);
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }

    fn clear(&self) {
        self.entries.clear();
        self.recency().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> EnrichmentKey {
        EnrichmentRequest::new(name, "Bangkok", Some("Thailand".to_string()))
    }

    #[test]
    fn test_hit_and_miss_counters() {
        let cache = LruTtlCache::new(10, None);
        assert!(cache.get(&key("a")).is_none());
        cache.insert(key("a"), Enrichment::NotListed);
        assert_eq!(cache.get(&key("a")), Some(Enrichment::NotListed));

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_key_includes_country() {
        let cache = LruTtlCache::new(10, None);
        cache.insert(key("a"), Enrichment::NotListed);
        assert!(cache.get(&EnrichmentRequest::new("a", "Bangkok", None)).is_none());
    }

    #[test]
    fn test_lru_eviction_drops_least_recently_used() {
        let cache = LruTtlCache::new(2, None);
        cache.insert(key("a"), Enrichment::NotListed);
        cache.insert(key("b"), Enrichment::NotListed);
        // touch "a" so "b" becomes the eviction candidate
        assert!(cache.get(&key("a")).is_some());
        cache.insert(key("c"), Enrichment::NotListed);

        assert_eq!(cache.len(), 2);
        assert!(cache.get(&key("a")).is_some());
        assert!(cache.get(&key("b")).is_none());
        assert!(cache.get(&key("c")).is_some());
    }

    #[test]
    fn test_recency_index_tracks_entries_at_capacity() {
        let cache = LruTtlCache::new(3, None);
        for i in 0..50 {
            cache.insert(key(&format!("spa-{i}")), Enrichment::NotListed);
            // keep "spa-0" hot so it is never the eviction candidate
            assert!(cache.get(&key("spa-0")).is_some());
        }

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.recency().len(), 3);
        assert!(cache.get(&key("spa-0")).is_some());
        assert!(cache.get(&key("spa-48")).is_some());
        assert!(cache.get(&key("spa-49")).is_some());
        assert!(cache.get(&key("spa-47")).is_none());
    }

    #[test]
    fn test_replacing_value_keeps_single_index_slot() {
        let cache = LruTtlCache::new(2, None);
        cache.insert(key("a"), Enrichment::NotListed);
        cache.insert(key("a"), Enrichment::unavailable("Failed to fetch"));
        assert_eq!(cache.recency().len(), 1);
        assert_eq!(cache.get(&key("a")), Some(Enrichment::unavailable("Failed to fetch")));
    }

    #[test]
    fn test_purge_expired() {
        let cache = LruTtlCache::new(10, Some(Duration::ZERO));
        cache.insert(key("a"), Enrichment::NotListed);
        cache.insert(key("b"), Enrichment::NotListed);
        assert_eq!(cache.purge_expired(), 2);
        assert!(cache.is_empty());
        assert!(cache.recency().is_empty());

        let forever = LruTtlCache::new(10, None);
        forever.insert(key("a"), Enrichment::NotListed);
        assert_eq!(forever.purge_expired(), 0);
        assert_eq!(forever.len(), 1);
    }

    #[test]
    fn test_inserts_sweep_expired_entries_on_stride() {
        let cache = LruTtlCache::new(usize::MAX, Some(Duration::ZERO));
        for i in 0..PURGE_STRIDE {
            cache.insert(key(&format!("spa-{i}")), Enrichment::NotListed);
        }
        // the sweep runs before the last insert lands
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_reinsert_at_capacity_does_not_evict() {
        let cache = LruTtlCache::new(2, None);
        cache.insert(key("a"), Enrichment::NotListed);
        cache.insert(key("b"), Enrichment::NotListed);
        cache.insert(key("b"), Enrichment::NotListed);
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&key("a")).is_some());
    }

    #[test]
    fn test_ttl_expiry() {
        let cache = LruTtlCache::new(10, Some(Duration::ZERO));
        cache.insert(key("a"), Enrichment::NotListed);
        assert!(cache.get(&key("a")).is_none());
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_long_ttl_keeps_entries() {
        let cache = LruTtlCache::new(10, Some(Duration::from_secs(3600)));
        cache.insert(key("a"), Enrichment::NotListed);
        assert!(cache.get(&key("a")).is_some());
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let cache = LruTtlCache::new(0, None);
        cache.insert(key("a"), Enrichment::NotListed);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_shared_through_arc() {
        let cache = Arc::new(LruTtlCache::new(10, None));
        let shared: Arc<dyn EnrichmentCache> = cache.clone();
        shared.insert(key("a"), Enrichment::NotListed);
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(shared.is_empty());
    }
}
