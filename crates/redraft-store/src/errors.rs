//! Error handling for redraft-store
//!
//! Wraps redraft-core's RedraftError with store-specific helpers

use redraft_core::RedraftError;

/// Result type alias using RedraftError
pub type Result<T> = std::result::Result<T, RedraftError>;

/// Create a store error from rusqlite::Error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> RedraftError {
    RedraftError::StoreUnavailable {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> RedraftError {
    RedraftError::StoreUnavailable {
        op: "migration".to_string(),
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}
