//! Storage Module
//!
//! The durable key-value contract the progress store is written against,
//! an in-memory implementation, and a namespacing wrapper.

mod memory;
mod prefixed;

pub use memory::MemoryStore;
pub use prefixed::{PrefixedStore, DEFAULT_PREFIX};

/// Synchronous string key-value storage.
///
/// Implementations use interior mutability so one instance can be shared
/// behind an `Arc`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value`; returns false if the write could not be performed.
    fn set(&self, key: &str, value: String) -> bool;

    fn remove(&self, key: &str);

    /// Every stored key, in no particular order.
    fn keys(&self) -> Vec<String>;
}
