//! In-memory TTL caches for remote lookups
//!
//! Each fetcher owns its own cache instance; keys and TTL configuration are
//! never shared across fetchers. Expiration is lazy: an expired entry is
//! ignored on read and overwritten by the next insert, never swept.

pub mod key;

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

pub use key::radar_cache_key;

/// Cache TTL configuration per data type
pub struct CacheTtl;

impl CacheTtl {
    /// Active alert feed - NWS republishes on the order of minutes
    pub const ALERTS: Duration = Duration::from_secs(5 * 60); // 5 min
}

struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// Keyed in-memory store with optional time-to-live.
///
/// `get` treats entries whose age has reached the TTL as absent. A cache
/// built with [`TtlCache::unbounded`] never expires anything; entries live
/// until an explicit [`TtlCache::clear`].
pub struct TtlCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    ttl: Option<Duration>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    /// Cache whose entries expire `ttl` after being stored.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl: Some(ttl),
        }
    }

    /// Cache without expiration, for payloads that never change once
    /// published. Invalidation is manual via `clear`.
    pub fn unbounded() -> Self {
        Self {
            entries: HashMap::new(),
            ttl: None,
        }
    }

    /// Stored value if present and fresh.
    pub fn get(&self, key: &K) -> Option<&V> {
        let entry = self.entries.get(key)?;
        match self.ttl {
            Some(ttl) if entry.stored_at.elapsed() >= ttl => None,
            _ => Some(&entry.value),
        }
    }

    /// Last stored value regardless of age.
    ///
    /// The degradation read: when a refresh fails, callers fall back to
    /// whatever was cached last, even past its TTL.
    pub fn stale(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Store a value, overwriting any previous entry for the key.
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop every entry unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
