//! Cache Module
//!
//! Bounded in-memory cache for generated lessons with FIFO eviction.

mod fifo;
mod stats;
mod store;


// Re-export public types
pub use fifo::FifoTracker;
pub use stats::CacheStats;
pub use store::LessonCache;

/// Cache key for a chapter/lesson pair.
///
/// Generation options, difficulty included, are not part of the key.
pub fn lesson_cache_key(chapter_title: &str, lesson_title: &str) -> String {
    format!("lesson_{}_{}", chapter_title, lesson_title)
}
