//! Shared Cache Handle
//!
//! The `Cache` seam the catalog talks to, and the process-wide in-memory
//! implementation backed by `CacheStore`.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheKey, CacheStats, CacheStore};

// == Cache Trait ==
/// Synchronous key-value cache addressed by `CacheKey`.
///
/// Calls never suspend; each one is atomic with respect to a single key.
pub trait Cache: Send + Sync {
    /// Existence check with no side effect.
    fn has(&self, key: &CacheKey) -> bool;

    /// Returns the serialized value, or `None` on a miss.
    fn get(&self, key: &CacheKey) -> Option<String>;

    /// Unconditionally stores `value` under `key`.
    fn set(&self, key: &CacheKey, value: String);

    /// Removes every listed key that is present. Returns how many were removed.
    fn invalidate(&self, keys: &[CacheKey]) -> usize;
}

// == Memory Cache ==
/// Cloneable handle to a single in-process `CacheStore`.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<Mutex<CacheStore>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }
}

impl Cache for MemoryCache {
    fn has(&self, key: &CacheKey) -> bool {
        self.store.lock().has(&key.as_key())
    }

    fn get(&self, key: &CacheKey) -> Option<String> {
        let value = self.store.lock().get(&key.as_key());
        debug!(key = %key, hit = value.is_some(), "cache lookup");
        value
    }

    fn set(&self, key: &CacheKey, value: String) {
        self.store.lock().set(key.as_key(), value);
    }

    fn invalidate(&self, keys: &[CacheKey]) -> usize {
        let raw: Vec<String> = keys.iter().map(CacheKey::as_key).collect();
        let removed = self.store.lock().invalidate(raw.iter().map(String::as_str));
        debug!(requested = keys.len(), removed, "cache invalidation");
        removed
    }
}
