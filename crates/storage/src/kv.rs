//! The synchronous key-value store adapter.

use std::sync::{Arc, RwLock};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::Result;

/// A synchronous, string-keyed, string-valued store.
///
/// There are no transactional guarantees across keys: a failure between two
/// writes can leave related keys inconsistent. Values are untrusted on read;
/// see [`read_json`].
pub trait KeyValueStore: Send + Sync {
    /// Get the value for a key, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Set the value for a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Shared handle to a store, as held by the typed stores and sessions.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Process-local store, insertion ordered.
///
/// Used in tests and when no data directory is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<IndexMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store behind a shared handle.
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .shift_remove(key);
        Ok(())
    }
}

/// Read and parse a JSON value, treating missing or malformed content as
/// absent. Malformed content is logged, never raised.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key = %key, error = %e, "Discarding malformed stored value");
            None
        }
    }
}

/// Serialize a value as JSON and store it.
pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_crud() {
        let store = MemoryStore::new();
        assert!(store.get("a").is_none());

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert_eq!(store.len(), 2);

        store.set("a", "3").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("3"));

        store.remove("a").unwrap();
        store.remove("missing").unwrap();
        assert!(store.get("a").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_read_json_discards_malformed() {
        let store = MemoryStore::new();
        store.set("list", "[1, 2").unwrap();
        assert!(read_json::<Vec<u32>>(&store, "list").is_none());

        write_json(&store, "list", &vec![1u32, 2]).unwrap();
        assert_eq!(read_json::<Vec<u32>>(&store, "list"), Some(vec![1, 2]));
    }
}
