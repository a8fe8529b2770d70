//! Key-value store implementations - local file, Redis and in-memory.

mod file;
mod memory;

#[cfg(feature = "redis")]
mod redis;

pub use file::FileStore;
pub use memory::InMemoryStore;

#[cfg(feature = "redis")]
pub use self::redis::{RedisConfig, RedisStore};
