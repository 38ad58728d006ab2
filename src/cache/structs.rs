use cached::{Cached, TimedSizedCache};
use log::info;
use std::time::Duration;

use super::key::ResourceKey;

/// In-memory query cache keyed by API resource, with a fixed entry lifetime
/// and least recently used eviction once `capacity` is reached
pub struct QueryCache<V> {
    entries: TimedSizedCache<ResourceKey, V>,
}

impl<V: Clone> QueryCache<V> {
    /// Create a new cache instance
    pub fn new(lifetime: Duration, capacity: usize) -> Self {
        Self {
            entries: TimedSizedCache::with_size_and_lifespan(capacity.max(1), lifetime.as_secs()),
        }
    }

    /// Load a fresh value; expired entries read as missing
    pub fn get(&mut self, key: &ResourceKey) -> Option<V> {
        self.entries.cache_get(key).cloned()
    }

    pub fn insert(&mut self, key: ResourceKey, value: V) {
        self.entries.cache_set(key, value);
    }

    /// Drop a single key so the next read goes upstream
    pub fn invalidate(&mut self, key: &ResourceKey) -> bool {
        let removed = self.entries.cache_remove(key).is_some();
        if removed {
            info!("Invalidated cached {}", key);
        }
        removed
    }

    /// Clear all cached data
    pub fn clear(&mut self) {
        self.entries.cache_clear();
        info!("Cleared query cache");
    }

    pub fn len(&self) -> usize {
        self.entries.cache_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
