//! Version reference resolution.
//!
//! A [`VersionRef`] names one side of a comparison without carrying the
//! text itself. Resolution dispatches to the commit store or to the live
//! document provider and fails with `CommitNotFound` for a timestamp no
//! commit carries; callers surface that instead of substituting content.

use redraft_core::{CommitStore, Result};
use redraft_core_types::Timestamp;

/// Source of the live document text.
///
/// Supplied by the embedding application; the engine never caches the
/// returned text across calls.
pub trait DocumentProvider {
    /// The document's present text
    fn current_text(&self) -> String;
}

/// Names a version of the document for comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRef {
    /// The oldest commit's content, or empty text if no commits exist
    Base,
    /// The live document's present text
    Current,
    /// The content of the commit at this timestamp
    At(Timestamp),
}

impl std::fmt::Display for VersionRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionRef::Base => write!(f, "base"),
            VersionRef::Current => write!(f, "current"),
            VersionRef::At(ts) => write!(f, "{}", ts),
        }
    }
}

/// Resolve a version reference to its full text
///
/// # Errors
///
/// Returns `CommitNotFound` when `At(timestamp)` matches no commit.
pub fn resolve(
    store: &CommitStore,
    provider: &dyn DocumentProvider,
    version: &VersionRef,
) -> Result<String> {
    match version {
        VersionRef::Base => Ok(store.base_content().to_string()),
        VersionRef::Current => Ok(provider.current_text()),
        VersionRef::At(timestamp) => store.content_at(timestamp).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redraft_core::RedraftError;
    use std::str::FromStr;

    struct FixedProvider(&'static str);
    impl DocumentProvider for FixedProvider {
        fn current_text(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_base_is_empty_without_commits() {
        let store = CommitStore::new();
        let provider = FixedProvider("live text");
        let text = resolve(&store, &provider, &VersionRef::Base).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_base_is_oldest_commit() {
        let mut store = CommitStore::new();
        store.create_commit("A".to_string(), None);
        store.create_commit("AB".to_string(), None);
        let provider = FixedProvider("live text");
        assert_eq!(resolve(&store, &provider, &VersionRef::Base).unwrap(), "A");
    }

    #[test]
    fn test_current_comes_from_provider() {
        let store = CommitStore::new();
        let provider = FixedProvider("live text");
        assert_eq!(
            resolve(&store, &provider, &VersionRef::Current).unwrap(),
            "live text"
        );
    }

    #[test]
    fn test_at_found_and_not_found() {
        let mut store = CommitStore::new();
        let meta = store.create_commit("FADE IN:".to_string(), None);
        let provider = FixedProvider("");

        let text = resolve(&store, &provider, &VersionRef::At(meta.timestamp)).unwrap();
        assert_eq!(text, "FADE IN:");

        let missing = Timestamp::from_str("1999-01-01 00:00:00").unwrap();
        let err = resolve(&store, &provider, &VersionRef::At(missing)).unwrap_err();
        assert!(matches!(err, RedraftError::CommitNotFound { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(VersionRef::Base.to_string(), "base");
        assert_eq!(VersionRef::Current.to_string(), "current");
        let ts = Timestamp::from_str("2025-02-21 14:30:05").unwrap();
        assert_eq!(VersionRef::At(ts).to_string(), "2025-02-21 14:30:05");
    }
}
