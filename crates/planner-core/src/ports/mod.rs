//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod key_value;
mod storage;

pub use key_value::KeyValueStore;
pub use storage::PlannerStorage;
