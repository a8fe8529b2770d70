//! In-memory key-value store - used for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use planner_core::StoreError;
use planner_core::ports::KeyValueStore;

/// In-memory store using a simple HashMap behind an RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryStore {
    store: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn poisoned() -> StoreError {
        StoreError::Backend("in-memory store lock poisoned".to_string())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let store = self.store.read().map_err(|_| Self::poisoned())?;
        Ok(store.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut store = self.store.write().map_err(|_| Self::poisoned())?;
        store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut store = self.store.write().map_err(|_| Self::poisoned())?;
        store.remove(key);
        Ok(())
    }
}
