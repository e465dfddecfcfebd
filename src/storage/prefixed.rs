//! Namespaced JSON storage on top of any `KeyValueStore`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

use super::KeyValueStore;

/// Prefix applied to every key this application writes.
pub const DEFAULT_PREFIX: &str = "python_coach_";

/// Stores JSON values under `{prefix}{key}` so the application can share a
/// storage medium and still clear only its own keys.
#[derive(Clone)]
pub struct PrefixedStore {
    inner: Arc<dyn KeyValueStore>,
    prefix: String,
}

impl PrefixedStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self::with_prefix(inner, DEFAULT_PREFIX)
    }

    pub fn with_prefix(inner: Arc<dyn KeyValueStore>, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// Serializes and writes `value`. Returns false if either step fails.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(serialized) => self.inner.set(&self.full_key(key), serialized),
            Err(err) => {
                error!(key, error = %err, "failed to serialize stored value");
                false
            }
        }
    }

    /// Reads and deserializes `key`. Missing or unreadable values yield None.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.inner.get(&self.full_key(key))?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "ignoring unreadable stored value");
                None
            }
        }
    }

    pub fn remove(&self, key: &str) {
        self.inner.remove(&self.full_key(key));
    }

    /// Removes every key carrying this store's prefix and nothing else.
    pub fn clear(&self) -> usize {
        let owned: Vec<String> = self
            .inner
            .keys()
            .into_iter()
            .filter(|key| key.starts_with(&self.prefix))
            .collect();
        for key in &owned {
            self.inner.remove(key);
        }
        owned.len()
    }
}
