//! Storage wiring - picks the key-value backend named by the configuration.

use std::sync::Arc;

use planner_core::StoreError;
use planner_core::ports::{KeyValueStore, PlannerStorage};
use planner_infra::{FileStore, InMemoryStore, JsonPlannerStorage};

#[cfg(feature = "redis")]
use planner_infra::RedisStore;

use crate::config::{AppConfig, StoreBackend};

/// Build the persistence adapter the planner will use.
pub fn build_storage(config: &AppConfig) -> Result<Arc<dyn PlannerStorage>, StoreError> {
    let store = build_store(config)?;
    let storage = JsonPlannerStorage::new(store).with_keys(config.keys.clone());

    tracing::info!(
        posts_key = %config.keys.posts,
        profile_key = %config.keys.profile,
        "Storage initialized"
    );

    Ok(Arc::new(storage))
}

fn build_store(config: &AppConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    let store: Arc<dyn KeyValueStore> = match config.store {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store - nothing will survive a restart");
            Arc::new(InMemoryStore::new())
        }
        StoreBackend::File => {
            tracing::info!(dir = %config.data_dir.display(), "Using file store");
            Arc::new(FileStore::new(&config.data_dir))
        }
        #[cfg(feature = "redis")]
        StoreBackend::Redis => match RedisStore::new(&config.redis) {
            Ok(store) => {
                tracing::info!(
                    url = %config.redis.url,
                    "Using Redis store - keys must not be shared with another planner host"
                );
                Arc::new(store)
            }
            Err(e) if config.redis.fallback_to_memory => {
                tracing::error!(
                    "Failed to connect to Redis: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryStore::new())
            }
            Err(e) => return Err(e),
        },
    };

    Ok(store)
}
