//! In-memory, append-only commit store
//!
//! Holds the linear history of one document. Commits are immutable once
//! appended and ordered oldest to newest by strictly increasing timestamps.
//! Not thread-safe (no Arc/RwLock) - the store is single-writer by design;
//! callers serialize writes and may read committed snapshots freely.

use crate::errors::{RedraftError, Result};
use crate::model::{Commit, CommitMeta};
use redraft_core_types::Timestamp;

/// Ordered collection of commits for a single document
#[derive(Debug, Clone, Default)]
pub struct CommitStore {
    /// Commits in creation order (oldest first)
    commits: Vec<Commit>,
}

impl CommitStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            commits: Vec::new(),
        }
    }

    /// Append a new commit with a fresh monotonic timestamp
    ///
    /// The timestamp is the current wall-clock second, or one second past
    /// the latest commit when two commits land within the same second, so
    /// timestamps are strictly increasing in call order.
    pub fn create_commit(&mut self, content: String, message: Option<String>) -> CommitMeta {
        let timestamp = self.next_timestamp();
        let commit = Commit::new(timestamp, message, content);
        let meta = commit.meta();

        tracing::debug!(
            commit_id = %meta.id,
            timestamp = %meta.timestamp,
            content_chars = commit.content.chars().count(),
            "Appended commit"
        );

        self.commits.push(commit);
        meta
    }

    /// Append an already-materialized commit, e.g. when reloading history
    ///
    /// # Errors
    ///
    /// Returns `InvalidHistory` if the commit's timestamp is not strictly
    /// greater than the latest commit's; the store is left unchanged.
    pub fn append_restored(&mut self, commit: Commit) -> Result<()> {
        if let Some(latest) = self.latest_timestamp() {
            if commit.timestamp <= *latest {
                return Err(RedraftError::InvalidHistory {
                    timestamp: commit.timestamp.as_str().to_string(),
                    reason: format!("timestamp is not greater than predecessor '{}'", latest),
                });
            }
        }
        self.commits.push(commit);
        Ok(())
    }

    /// Commit metadata, oldest to newest
    pub fn commits(&self) -> Vec<CommitMeta> {
        self.commits.iter().map(Commit::meta).collect()
    }

    /// Full commits, oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Commit> {
        self.commits.iter()
    }

    /// Content of the commit at the given timestamp
    ///
    /// # Errors
    ///
    /// Returns `CommitNotFound` if no commit has that timestamp.
    pub fn content_at(&self, timestamp: &Timestamp) -> Result<&str> {
        self.commits
            .binary_search_by(|c| c.timestamp.cmp(timestamp))
            .map(|idx| self.commits[idx].content.as_str())
            .map_err(|_| RedraftError::CommitNotFound {
                timestamp: timestamp.as_str().to_string(),
            })
    }

    /// Timestamp of the newest commit, if any
    pub fn latest_timestamp(&self) -> Option<&Timestamp> {
        self.commits.last().map(|c| &c.timestamp)
    }

    /// Content of the newest commit, if any
    pub fn latest_content(&self) -> Option<&str> {
        self.commits.last().map(|c| c.content.as_str())
    }

    /// Content of the oldest commit, or empty text if none exist
    pub fn base_content(&self) -> &str {
        self.commits
            .first()
            .map(|c| c.content.as_str())
            .unwrap_or("")
    }

    /// True iff the live text differs byte-for-byte from the latest commit
    ///
    /// With no commits yet, any non-empty live text counts as uncommitted.
    /// This is a pure content comparison, not a dirty flag.
    pub fn has_uncommitted_changes(&self, current_text: &str) -> bool {
        match self.latest_content() {
            Some(latest) => latest != current_text,
            None => !current_text.is_empty(),
        }
    }

    /// Number of commits in the store
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// True if the store holds no commits
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// The timestamp the next commit will receive: the current wall-clock
    /// second, or one second past the latest commit if that is later
    ///
    /// Callers persisting ledger-first use this to materialize the commit
    /// before appending it here via [`append_restored`](Self::append_restored).
    pub fn next_timestamp(&self) -> Timestamp {
        let now = Timestamp::now();
        match self.latest_timestamp() {
            Some(latest) if *latest >= now => latest.successor(),
            _ => now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_store_is_empty() {
        let store = CommitStore::new();
        assert!(store.is_empty());
        assert!(store.latest_timestamp().is_none());
        assert_eq!(store.base_content(), "");
    }

    #[test]
    fn test_timestamps_strictly_increase_in_call_order() {
        let mut store = CommitStore::new();
        let mut previous: Option<Timestamp> = None;
        for i in 0..5 {
            let meta = store.create_commit(format!("draft {}", i), None);
            if let Some(prev) = &previous {
                assert!(meta.timestamp > *prev, "timestamps must strictly increase");
            }
            previous = Some(meta.timestamp);
        }
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_content_at_found_and_not_found() {
        let mut store = CommitStore::new();
        let meta = store.create_commit("FADE IN:".to_string(), None);
        assert_eq!(store.content_at(&meta.timestamp).unwrap(), "FADE IN:");

        let missing = Timestamp::from_str("1999-01-01 00:00:00").unwrap();
        let err = store.content_at(&missing).unwrap_err();
        assert!(matches!(err, RedraftError::CommitNotFound { .. }));
    }

    #[test]
    fn test_uncommitted_detection() {
        let mut store = CommitStore::new();

        // No commits yet: empty text is clean, non-empty is not
        assert!(!store.has_uncommitted_changes(""));
        assert!(store.has_uncommitted_changes("FADE IN:"));

        store.create_commit("FADE IN:".to_string(), None);
        assert!(!store.has_uncommitted_changes("FADE IN:"));
        assert!(store.has_uncommitted_changes("FADE IN:\n\nINT. HOUSE - DAY"));
    }

    #[test]
    fn test_base_content_is_oldest() {
        let mut store = CommitStore::new();
        store.create_commit("A".to_string(), None);
        store.create_commit("AB".to_string(), None);
        assert_eq!(store.base_content(), "A");
        assert_eq!(store.latest_content(), Some("AB"));
    }

    #[test]
    fn test_append_restored_rejects_out_of_order() {
        let mut store = CommitStore::new();
        let t1 = Timestamp::from_str("2025-02-21 14:30:05").unwrap();
        let t2 = Timestamp::from_str("2025-02-21 14:30:06").unwrap();

        store
            .append_restored(Commit::new(t2, None, "later".to_string()))
            .unwrap();
        let result = store.append_restored(Commit::new(t1, None, "earlier".to_string()));
        assert!(matches!(result, Err(RedraftError::InvalidHistory { .. })));
        // Store unchanged by the failed append
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_commits_listing_is_oldest_to_newest() {
        let mut store = CommitStore::new();
        let first = store.create_commit("A".to_string(), Some("one".to_string()));
        let second = store.create_commit("AB".to_string(), Some("two".to_string()));

        let listing = store.commits();
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].id, first.id);
        assert_eq!(listing[1].id, second.id);
        assert!(listing[0].timestamp < listing[1].timestamp);
    }
}
