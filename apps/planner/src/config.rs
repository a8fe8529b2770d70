//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use planner_infra::StorageKeys;
#[cfg(feature = "redis")]
use planner_infra::RedisConfig;

/// Which key-value backend holds the planner records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    File,
    #[cfg(feature = "redis")]
    Redis,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown PLANNER_STORE value '{0}' (expected file, memory or redis)")]
    UnknownBackend(String),

    #[cfg(not(feature = "redis"))]
    #[error("PLANNER_STORE={0} requires the '{0}' feature")]
    FeatureDisabled(&'static str),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreBackend,
    pub data_dir: PathBuf,
    pub keys: StorageKeys,
    #[cfg(feature = "redis")]
    pub redis: RedisConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = match lookup("PLANNER_STORE") {
            Some(value) => parse_backend(&value)?,
            None => StoreBackend::File,
        };

        let defaults = StorageKeys::default();
        let keys = StorageKeys {
            posts: lookup("PLANNER_POSTS_KEY").unwrap_or(defaults.posts),
            profile: lookup("PLANNER_PROFILE_KEY").unwrap_or(defaults.profile),
        };

        Ok(Self {
            store,
            data_dir: lookup("PLANNER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./planner-data")),
            keys,
            #[cfg(feature = "redis")]
            redis: RedisConfig::from_lookup(&lookup),
        })
    }
}

fn parse_backend(value: &str) -> Result<StoreBackend, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "file" => Ok(StoreBackend::File),
        "memory" => Ok(StoreBackend::Memory),
        #[cfg(feature = "redis")]
        "redis" => Ok(StoreBackend::Redis),
        #[cfg(not(feature = "redis"))]
        "redis" => Err(ConfigError::FeatureDisabled("redis")),
        other => Err(ConfigError::UnknownBackend(other.to_string())),
    }
}
