//! Error taxonomy for redraft operations
//!
//! Every error carries a stable `ERR_*` code for programmatic handling.
//! The diff engine itself never errors - it is total over any two finite
//! texts - so the taxonomy only covers store access and version resolution.

use thiserror::Error;

/// Result type alias using RedraftError
pub type Result<T> = std::result::Result<T, RedraftError>;

/// Canonical error type for commit-store and resolution failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RedraftError {
    /// No commit exists at the referenced timestamp (recoverable; callers
    /// should fall back or surface it, never crash)
    #[error("No commit found at timestamp: {timestamp}")]
    CommitNotFound { timestamp: String },

    /// The store's backing medium failed; the attempted operation is lost
    /// but previously committed snapshots are untouched
    #[error("Commit store unavailable in operation '{op}': {message}")]
    StoreUnavailable { op: String, message: String },

    /// A persisted history record is malformed or out of order. Surfaced at
    /// load time; loading preserves the valid prefix of history.
    #[error("Invalid history record at '{timestamp}': {reason}")]
    InvalidHistory { timestamp: String, reason: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl RedraftError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            RedraftError::CommitNotFound { .. } => "ERR_NOT_FOUND",
            RedraftError::StoreUnavailable { .. } => "ERR_STORE_UNAVAILABLE",
            RedraftError::InvalidHistory { .. } => "ERR_INVALID_INPUT",
            RedraftError::Serialization { .. } => "ERR_SERIALIZATION",
        }
    }

    /// True if the caller can reasonably continue after this error
    /// (fall back to another version, report and keep going)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RedraftError::CommitNotFound { .. } | RedraftError::InvalidHistory { .. }
        )
    }
}

impl From<serde_json::Error> for RedraftError {
    fn from(err: serde_json::Error) -> Self {
        RedraftError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let cases = [
            (
                RedraftError::CommitNotFound {
                    timestamp: "2025-02-21 14:30:05".to_string(),
                },
                "ERR_NOT_FOUND",
            ),
            (
                RedraftError::StoreUnavailable {
                    op: "append_commit".to_string(),
                    message: "disk full".to_string(),
                },
                "ERR_STORE_UNAVAILABLE",
            ),
            (
                RedraftError::InvalidHistory {
                    timestamp: "garbage".to_string(),
                    reason: "unparseable timestamp".to_string(),
                },
                "ERR_INVALID_INPUT",
            ),
            (
                RedraftError::Serialization {
                    message: "bad json".to_string(),
                },
                "ERR_SERIALIZATION",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_recoverability_split() {
        let not_found = RedraftError::CommitNotFound {
            timestamp: "t".to_string(),
        };
        let unavailable = RedraftError::StoreUnavailable {
            op: "append_commit".to_string(),
            message: "io".to_string(),
        };
        assert!(not_found.is_recoverable());
        assert!(!unavailable.is_recoverable());
    }
}
