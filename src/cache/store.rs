//! Cache Store Module
//!
//! String-keyed storage for serialized query results.

use std::collections::HashMap;

use crate::cache::CacheStats;

// == Cache Store ==
/// Unbounded key-value storage with hit/miss accounting.
///
/// Nothing here expires or is evicted: an entry stays until it is
/// overwritten or invalidated.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, String>,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Has ==
    /// Checks whether a key is present. Does not touch statistics.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Get ==
    /// Retrieves a value by key, recording a hit or a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a value, overwriting any previous one.
    pub fn set(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Invalidate ==
    /// Removes every listed key that is present.
    ///
    /// Absent keys are ignored. Returns the number of entries removed.
    pub fn invalidate<'a, I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let removed = keys
            .into_iter()
            .filter(|key| self.entries.remove(*key).is_some())
            .count();

        self.stats.record_invalidations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new();

        store.set("categories".to_string(), r#"["shoes"]"#.to_string());

        assert!(store.has("categories"));
        assert_eq!(store.get("categories").as_deref(), Some(r#"["shoes"]"#));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_missing() {
        let mut store = CacheStore::new();
        assert!(store.get("latest-products").is_none());
        assert!(!store.has("latest-products"));
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new();

        store.set("k".to_string(), "v1".to_string());
        store.set("k".to_string(), "v2".to_string());

        assert_eq!(store.get("k").as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_invalidate_present_and_absent() {
        let mut store = CacheStore::new();
        store.set("a".to_string(), "1".to_string());
        store.set("b".to_string(), "2".to_string());
        store.set("c".to_string(), "3".to_string());

        let removed = store.invalidate(["a", "b", "missing"]);

        assert_eq!(removed, 2);
        assert!(!store.has("a"));
        assert!(!store.has("b"));
        assert!(store.has("c"));
    }

    #[test]
    fn test_store_invalidate_is_idempotent() {
        let mut store = CacheStore::new();
        store.set("a".to_string(), "1".to_string());

        assert_eq!(store.invalidate(["a"]), 1);
        assert_eq!(store.invalidate(["a"]), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_has_does_not_count() {
        let mut store = CacheStore::new();
        store.set("a".to_string(), "1".to_string());
        store.has("a");
        store.has("b");

        let stats = store.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string());
        store.get("key1"); // hit
        store.get("nonexistent"); // miss
        store.invalidate(["key1"]);

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.invalidations, 1);
        assert_eq!(stats.total_entries, 0);
    }
}
