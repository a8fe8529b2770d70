//! JSON persistence of the planner records over any key-value store.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use planner_core::StoreError;
use planner_core::domain::{ClientProfile, Post};
use planner_core::ports::{KeyValueStore, PlannerStorage};

/// Names of the two stored records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub posts: String,
    pub profile: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            posts: "posts".to_string(),
            profile: "clientProfile".to_string(),
        }
    }
}

/// Persistence adapter storing each record as one JSON document.
///
/// Posts pass through [`planner_core::domain::StoredPost`] on the way in,
/// so every loaded post is default-filled and stripped of legacy fields.
pub struct JsonPlannerStorage {
    store: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl JsonPlannerStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            keys: StorageKeys::default(),
        }
    }

    pub fn with_keys(mut self, keys: StorageKeys) -> Self {
        self.keys = keys;
        self
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        // an empty record counts as absent, not malformed
        let raw = match self.store.get(key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(None),
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::malformed(key, e))
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::write_failure(key, e))?;
        self.store.set(key, &raw)
    }
}

impl PlannerStorage for JsonPlannerStorage {
    fn load_posts(&self) -> Vec<Post> {
        match self.read::<Vec<Post>>(&self.keys.posts) {
            Ok(Some(posts)) => posts,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::error!(key = %self.keys.posts, error = %e, "Failed to load stored posts; starting empty");
                Vec::new()
            }
        }
    }

    fn load_profile(&self, default: ClientProfile) -> ClientProfile {
        match self.read::<ClientProfile>(&self.keys.profile) {
            Ok(Some(profile)) => profile,
            Ok(None) => default,
            Err(e) => {
                tracing::error!(key = %self.keys.profile, error = %e, "Failed to load client profile; keeping default");
                default
            }
        }
    }

    fn save_posts(&self, posts: &[Post]) {
        if let Err(e) = self.write(&self.keys.posts, posts) {
            tracing::warn!(key = %self.keys.posts, error = %e, "Failed to persist posts");
        }
    }

    fn save_profile(&self, profile: &ClientProfile) {
        if let Err(e) = self.write(&self.keys.profile, profile) {
            tracing::warn!(key = %self.keys.profile, error = %e, "Failed to persist client profile");
        }
    }
}
