//! # Planner Infrastructure
//!
//! Concrete implementations of the ports defined in `planner-core`.
//!
//! ## Feature Flags
//!
//! - none (default) - file and in-memory stores only
//! - `full` - All features enabled
//! - `redis` - Redis-backed key-value store for a single host

pub mod kv;
pub mod storage;

// Re-exports - Local
pub use kv::{FileStore, InMemoryStore};
pub use storage::{JsonPlannerStorage, StorageKeys};

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use kv::{RedisConfig, RedisStore};
