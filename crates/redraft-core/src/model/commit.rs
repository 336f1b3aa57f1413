use redraft_core_types::{CommitId, Timestamp};
use serde::{Deserialize, Serialize};

/// Commit - an immutable, timestamped snapshot of the full document text
///
/// Commits are never mutated or deleted once created; retention policy is an
/// external concern. Timestamps are strictly increasing in creation order,
/// which the [`CommitStore`](crate::history::CommitStore) enforces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    /// Unique identifier for this commit (UUID v7), stable across reloads
    pub id: CommitId,

    /// Monotonic instant at which the commit was created
    pub timestamp: Timestamp,

    /// Optional short commit message supplied by the author
    pub message: Option<String>,

    /// Full document text at this point
    pub content: String,
}

impl Commit {
    /// Create a new Commit with a fresh identifier
    pub fn new(timestamp: Timestamp, message: Option<String>, content: String) -> Self {
        Self {
            id: CommitId::new(),
            timestamp,
            message,
            content,
        }
    }

    /// Metadata view of this commit (no content)
    pub fn meta(&self) -> CommitMeta {
        CommitMeta {
            id: self.id.clone(),
            timestamp: self.timestamp.clone(),
            message: self.message.clone(),
        }
    }
}

/// Commit metadata without the document content, for listings and menus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitMeta {
    /// Unique identifier of the commit
    pub id: CommitId,
    /// Monotonic instant at which the commit was created
    pub timestamp: Timestamp,
    /// Optional short commit message
    pub message: Option<String>,
}
