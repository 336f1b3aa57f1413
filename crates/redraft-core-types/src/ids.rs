//! Identity types for commits
//!
//! Commit identifiers are opaque strings, stable across store reloads.
//! Fresh identifiers use UUIDv7 so that id generation order matches
//! temporal order, which keeps debugging output readable.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique, stable identifier for a single commit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitId(String);

impl CommitId {
    /// Generate a new random CommitId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization / store reload)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for CommitId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
