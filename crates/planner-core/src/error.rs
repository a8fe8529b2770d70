//! Storage-level error types.

use thiserror::Error;

/// Errors raised at the persistence boundary.
///
/// None of these ever reach the user: reads degrade to empty/default state
/// and writes are best-effort.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Stored record '{key}' is malformed: {source}")]
    ReadMalformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write record '{key}': {reason}")]
    WriteFailure { key: String, reason: String },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn malformed(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ReadMalformed {
            key: key.into(),
            source,
        }
    }

    pub fn write_failure(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::WriteFailure {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}
