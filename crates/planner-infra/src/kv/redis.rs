//! Redis key-value store, for a single planner host that keeps its records
//! in a local Redis instead of on disk.
//!
//! Every save rewrites a whole record, so a key must belong to exactly one
//! planner host.

use std::sync::Mutex;
use std::time::Duration;

use redis::{Client, Commands, Connection};

use planner_core::StoreError;
use planner_core::ports::KeyValueStore;

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Whether to fallback to in-memory store if Redis is unavailable
    pub fallback_to_memory: bool,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
            fallback_to_memory: true,
        }
    }
}

impl RedisConfig {
    /// Load configuration from a variable source such as the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            url: lookup("REDIS_URL").unwrap_or(defaults.url),
            connect_timeout: lookup("REDIS_CONNECT_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
            fallback_to_memory: lookup("REDIS_FALLBACK_TO_MEMORY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.fallback_to_memory),
        }
    }
}

/// Redis-backed store. Commands are serialized over a single connection.
pub struct RedisStore {
    conn: Mutex<Connection>,
}

impl RedisStore {
    pub fn new(config: &RedisConfig) -> Result<Self, StoreError> {
        let client =
            Client::open(config.url.as_str()).map_err(|e| StoreError::Backend(e.to_string()))?;

        let conn = client
            .get_connection_with_timeout(config.connect_timeout)
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        tracing::info!(url = %config.url, "Connected to Redis store");

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<T>(
        &self,
        op: impl FnOnce(&mut Connection) -> redis::RedisResult<T>,
    ) -> Result<T, StoreError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::Backend("redis connection lock poisoned".to_string()))?;
        op(&mut *conn).map_err(|e| StoreError::Backend(e.to_string()))
    }
}

impl KeyValueStore for RedisStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.with_conn(|conn| conn.get::<_, Option<String>>(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.with_conn(|conn| conn.set::<_, _, ()>(key, value))
            .map_err(|e| StoreError::write_failure(key, e))
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.with_conn(|conn| conn.del::<_, ()>(key))
    }

    fn exists(&self, key: &str) -> bool {
        self.with_conn(|conn| conn.exists::<_, bool>(key))
            .unwrap_or(false)
    }
}
