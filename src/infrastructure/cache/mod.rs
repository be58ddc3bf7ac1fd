//! # Result Cache
//!
//! Time-bounded memoization for computed comparison responses.
//!
//! This module provides the [`ResultCache`] port and the production
//! [`InMemoryResultCache`], a [`DashMap`]-backed TTL cache keyed by the
//! canonical query key. Entries expire a fixed interval after insertion
//! and are evicted lazily on lookup; there is no capacity-based eviction.
//!
//! # Concurrency
//!
//! Two in-flight requests missing on the same key may both compute and
//! both write. The last write wins; results are deterministic for a given
//! data snapshot, so this needs no stampede protection.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use wash_compare::application::query::ComparisonResponse;
//! use wash_compare::infrastructure::cache::{InMemoryResultCache, ResultCache};
//!
//! let cache = InMemoryResultCache::new();
//! let response = ComparisonResponse::empty(1, 10);
//!
//! cache.put("key".to_string(), response.clone(), Duration::from_secs(30));
//! assert_eq!(cache.get("key"), Some(response));
//! ```

use crate::application::query::ComparisonResponse;
use dashmap::DashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Port for comparison response memoization.
///
/// Injected into the engine as a collaborator (never a singleton) so tests
/// can substitute a deterministic implementation.
pub trait ResultCache: Send + Sync + fmt::Debug {
    /// Returns the cached response for the key, if present and fresh.
    fn get(&self, key: &str) -> Option<ComparisonResponse>;

    /// Stores a response under the key for `ttl`.
    fn put(&self, key: String, value: ComparisonResponse, ttl: Duration);
}

/// A cached response with its expiry instant.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: ComparisonResponse,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Concurrency-safe TTL cache for comparison responses.
///
/// # Thread Safety
///
/// Backed by [`DashMap`]; can be shared across async tasks.
#[derive(Debug, Default)]
pub struct InMemoryResultCache {
    entries: DashMap<String, CacheEntry>,
}

impl InMemoryResultCache {
    /// Creates a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries, including not-yet-evicted expired ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Sweeps out every expired entry and returns how many were removed.
    ///
    /// Lookup already evicts lazily; this is an optional maintenance hook
    /// for long-running processes with many distinct keys.
    pub fn purge_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before.saturating_sub(self.entries.len())
    }
}

impl ResultCache for InMemoryResultCache {
    fn get(&self, key: &str) -> Option<ComparisonResponse> {
        let expired = match self.entries.get(key) {
            Some(entry) => {
                if !entry.is_expired() {
                    return Some(entry.value.clone());
                }
                true
            }
            None => false,
        };
        if expired {
            // The read guard is dropped above; safe to remove.
            self.entries.remove(key);
        }
        None
    }

    fn put(&self, key: String, value: ComparisonResponse, ttl: Duration) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.insert(key, entry);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn response(page: u32) -> ComparisonResponse {
        ComparisonResponse::empty(page, 10)
    }

    #[test]
    fn get_on_empty_cache_misses() {
        let cache = InMemoryResultCache::new();
        assert!(cache.get("missing").is_none());
    }

    #[test]
    fn put_then_get_hits() {
        let cache = InMemoryResultCache::new();
        cache.put("k".to_string(), response(1), Duration::from_secs(30));

        assert_eq!(cache.get("k"), Some(response(1)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn expired_entry_is_a_miss_and_is_evicted() {
        let cache = InMemoryResultCache::new();
        cache.put("k".to_string(), response(1), Duration::from_millis(10));

        std::thread::sleep(Duration::from_millis(25));

        assert!(cache.get("k").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn zero_ttl_expires_immediately() {
        let cache = InMemoryResultCache::new();
        cache.put("k".to_string(), response(1), Duration::ZERO);
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn overwrite_refreshes_entry() {
        let cache = InMemoryResultCache::new();
        cache.put("k".to_string(), response(1), Duration::from_millis(10));
        cache.put("k".to_string(), response(2), Duration::from_secs(30));

        std::thread::sleep(Duration::from_millis(25));

        // The second write replaced both value and expiry.
        assert_eq!(cache.get("k"), Some(response(2)));
    }

    #[test]
    fn keys_are_independent() {
        let cache = InMemoryResultCache::new();
        cache.put("a".to_string(), response(1), Duration::from_secs(30));
        cache.put("b".to_string(), response(2), Duration::from_secs(30));

        assert_eq!(cache.get("a"), Some(response(1)));
        assert_eq!(cache.get("b"), Some(response(2)));
    }

    #[test]
    fn purge_expired_sweeps_only_stale_entries() {
        let cache = InMemoryResultCache::new();
        cache.put("stale".to_string(), response(1), Duration::from_millis(10));
        cache.put("fresh".to_string(), response(2), Duration::from_secs(30));

        std::thread::sleep(Duration::from_millis(25));

        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("fresh"), Some(response(2)));
    }

    #[test]
    fn clear_removes_everything() {
        let cache = InMemoryResultCache::new();
        cache.put("a".to_string(), response(1), Duration::from_secs(30));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn concurrent_writes_last_write_wins() {
        use std::sync::Arc;

        let cache = Arc::new(InMemoryResultCache::new());
        let mut handles = Vec::new();

        for i in 0..8u32 {
            let cache = Arc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                cache.put("shared".to_string(), response(i), Duration::from_secs(30));
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // Some write won; the entry is fresh and well-formed.
        let hit = cache.get("shared").unwrap();
        assert!(hit.page < 8);
    }
}
