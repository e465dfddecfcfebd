//! Lesson Cache Module
//!
//! Bounded store of generated lessons combining HashMap storage with FIFO
//! insertion tracking.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheStats, FifoTracker};
use crate::models::GeneratedLesson;

// == Lesson Cache ==
/// In-memory lesson cache with strict FIFO eviction and no expiry.
#[derive(Debug)]
pub struct LessonCache {
    /// Key-value storage
    entries: HashMap<String, GeneratedLesson>,
    /// Insertion order tracker
    order: FifoTracker,
    /// Lookup statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
}

impl LessonCache {
    // == Constructor ==
    /// Creates an empty cache that holds at most `max_entries` lessons.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: FifoTracker::new(),
            stats: CacheStats::new(),
            max_entries,
        }
    }

    // == Get ==
    /// Returns a copy of the cached lesson and records a hit or miss.
    ///
    /// Lookups never affect eviction order.
    pub fn get(&mut self, key: &str) -> Option<GeneratedLesson> {
        match self.entries.get(key) {
            Some(lesson) => {
                self.stats.record_hit();
                Some(lesson.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Stores a lesson, then trims the oldest entries until the bound holds.
    ///
    /// Overwriting an existing key replaces the value but keeps the key's
    /// original insertion position. Returns the evicted keys, oldest first.
    pub fn insert(&mut self, key: String, value: GeneratedLesson) -> Vec<String> {
        self.entries.insert(key.clone(), value);
        self.order.record_insert(&key);
        self.stats.record_insertion();

        let evicted = self.trim();
        self.stats.set_total_entries(self.entries.len());
        evicted
    }

    // == Trim ==
    fn trim(&mut self) -> Vec<String> {
        let mut evicted = Vec::new();
        while self.entries.len() > self.max_entries {
            let Some(oldest) = self.order.evict_oldest() else {
                break;
            };
            if self.entries.remove(&oldest).is_some() {
                debug!(key = %oldest, "evicted oldest cached lesson");
                self.stats.record_eviction();
                evicted.push(oldest);
            }
        }
        evicted
    }

    // == Clear ==
    /// Drops every entry. Statistics counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Cached keys, oldest inserted first.
    pub fn keys(&self) -> Vec<String> {
        self.order.keys().cloned().collect()
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

    fn lesson(title: &str) -> GeneratedLesson {
        GeneratedLesson {
            title: title.to_string(),
            ..GeneratedLesson::default()
        }
    }

    #[test]
    fn test_cache_new() {
        let cache = LessonCache::new(100);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert!(cache.keys().is_empty());
    }

    #[test]
    fn test_cache_insert_and_get() {
        let mut cache = LessonCache::new(100);

        cache.insert("key1".to_string(), lesson("one"));
        let value = cache.get("key1").unwrap();

        assert_eq!(value.title, "one");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_nonexistent() {
        let mut cache = LessonCache::new(100);
        assert!(cache.get("nonexistent").is_none());
    }

    #[test]
    fn test_cache_overwrite() {
        let mut cache = LessonCache::new(100);

        cache.insert("key1".to_string(), lesson("old"));
        cache.insert("key1".to_string(), lesson("new"));

        assert_eq!(cache.get("key1").unwrap().title, "new");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_fifo_eviction() {
        let mut cache = LessonCache::new(3);

        cache.insert("key1".to_string(), lesson("1"));
        cache.insert("key2".to_string(), lesson("2"));
        cache.insert("key3".to_string(), lesson("3"));

        // Cache is full, adding key4 should evict key1 (oldest)
        let evicted = cache.insert("key4".to_string(), lesson("4"));

        assert_eq!(evicted, vec!["key1".to_string()]);
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains_key("key1"));
        assert!(cache.contains_key("key2"));
        assert!(cache.contains_key("key4"));
    }

    #[test]
    fn test_cache_get_does_not_protect_from_eviction() {
        let mut cache = LessonCache::new(3);

        cache.insert("key1".to_string(), lesson("1"));
        cache.insert("key2".to_string(), lesson("2"));
        cache.insert("key3".to_string(), lesson("3"));

        // A recent read must not move key1 behind the others
        cache.get("key1").unwrap();
        cache.insert("key4".to_string(), lesson("4"));

        assert!(!cache.contains_key("key1"));
        assert!(cache.contains_key("key2"));
    }

    #[test]
    fn test_cache_overwrite_keeps_insertion_position() {
        let mut cache = LessonCache::new(2);

        cache.insert("key1".to_string(), lesson("1"));
        cache.insert("key2".to_string(), lesson("2"));
        cache.insert("key1".to_string(), lesson("1b"));
        cache.insert("key3".to_string(), lesson("3"));

        assert!(!cache.contains_key("key1"));
        assert_eq!(cache.keys(), vec!["key2".to_string(), "key3".to_string()]);
    }

    #[test]
    fn test_cache_zero_capacity_keeps_nothing() {
        let mut cache = LessonCache::new(0);
        let evicted = cache.insert("key1".to_string(), lesson("1"));
        assert_eq!(evicted, vec!["key1".to_string()]);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = LessonCache::new(10);
        cache.insert("key1".to_string(), lesson("1"));
        cache.insert("key2".to_string(), lesson("2"));

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.keys().is_empty());
        assert_eq!(cache.stats().insertions, 2);
        assert_eq!(cache.stats().total_entries, 0);
    }

    #[test]
    fn test_cache_stats() {
        let mut cache = LessonCache::new(1);

        cache.insert("key1".to_string(), lesson("1"));
        cache.get("key1").unwrap(); // hit
        let _ = cache.get("nonexistent"); // miss
        cache.insert("key2".to_string(), lesson("2")); // evicts key1

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.insertions, 2);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
