//! Workspace facade over history, resolution, and diffing.
//!
//! One workspace binds one document: the embedding application supplies the
//! live text through a [`DocumentProvider`] and calls in for commits,
//! history listings, and comparisons. Commits are written ledger-first; the
//! in-memory store only sees a commit the ledger has already accepted, so a
//! storage fault leaves both sides exactly as they were.

use std::path::Path;

use redraft_core::diff::{indicator_ranges, map_to_spans, DiffResult, IndicatorRange};
use redraft_core::{Commit, CommitMeta, CommitStore, DiffConfig, Result};
use redraft_core_types::{Generation, Timestamp};
use redraft_store::{CommitLedger, LoadWarning};

use crate::resolver::{self, DocumentProvider, VersionRef};
use crate::session::{ComparisonSession, SessionState};

/// A diff stamped with the generation of the selection that requested it
#[derive(Debug)]
pub struct Comparison {
    /// Token of the selection this result answers; stale tokens should be
    /// discarded by the consumer
    pub generation: Generation,
    /// The diff laid out over its rendered union view
    pub diff: DiffResult,
}

/// Version-control facade for a single document
pub struct Workspace<P: DocumentProvider> {
    provider: P,
    store: CommitStore,
    ledger: Option<CommitLedger>,
    config: DiffConfig,
    session: ComparisonSession,
}

impl<P: DocumentProvider> Workspace<P> {
    /// Create a workspace with no persistence (history lives in memory only)
    pub fn in_memory(provider: P, config: DiffConfig) -> Self {
        Self {
            provider,
            store: CommitStore::new(),
            ledger: None,
            config,
            session: ComparisonSession::new(),
        }
    }

    /// Open a workspace backed by a ledger file, reloading prior history.
    ///
    /// A corrupt history tail is skipped, not fatal: the valid prefix is
    /// loaded and the warnings are returned for the caller to surface.
    pub fn open<Q: AsRef<Path>>(
        path: Q,
        provider: P,
        config: DiffConfig,
    ) -> Result<(Self, Vec<LoadWarning>)> {
        let ledger = CommitLedger::open(path)?;
        let history = ledger.load_history()?;

        let mut store = CommitStore::new();
        for commit in history.commits {
            store.append_restored(commit)?;
        }

        tracing::info!(
            commits = store.len(),
            warnings = history.warnings.len(),
            "Opened workspace"
        );

        Ok((
            Self {
                provider,
                store,
                ledger: Some(ledger),
                config,
                session: ComparisonSession::new(),
            },
            history.warnings,
        ))
    }

    /// Commit the live document text.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the ledger write fails; in that case
    /// neither the ledger nor the in-memory history changes and the session
    /// returns to its previous state.
    pub fn commit(&mut self, message: Option<String>) -> Result<CommitMeta> {
        self.session.begin_commit();
        match self.commit_inner(message) {
            Ok(meta) => {
                self.session
                    .finish_commit(VersionRef::At(meta.timestamp.clone()));
                Ok(meta)
            }
            Err(e) => {
                self.session.abort_commit();
                Err(e)
            }
        }
    }

    fn commit_inner(&mut self, message: Option<String>) -> Result<CommitMeta> {
        let content = self.provider.current_text();
        let commit = Commit::new(self.store.next_timestamp(), message, content);
        let meta = commit.meta();

        if let Some(ledger) = &mut self.ledger {
            ledger.append_commit(&commit)?;
        }
        self.store.append_restored(commit)?;

        tracing::info!(commit_id = %meta.id, timestamp = %meta.timestamp, "Created commit");
        Ok(meta)
    }

    /// Commit metadata, oldest to newest
    pub fn commits(&self) -> Vec<CommitMeta> {
        self.store.commits()
    }

    /// Content of the commit at the given timestamp
    ///
    /// # Errors
    ///
    /// Returns `CommitNotFound` if no commit has that timestamp.
    pub fn content_at(&self, timestamp: &Timestamp) -> Result<String> {
        self.store.content_at(timestamp).map(str::to_string)
    }

    /// True iff the live text differs from the latest commit's content
    pub fn has_uncommitted_changes(&self) -> bool {
        self.store
            .has_uncommitted_changes(&self.provider.current_text())
    }

    /// Resolve and diff two versions of the document.
    ///
    /// The session moves to comparing these references and the result is
    /// stamped with a fresh generation; results from earlier selections are
    /// superseded. Resolution failures leave the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CommitNotFound` when either reference names a timestamp no
    /// commit carries.
    pub fn compare(&mut self, old: VersionRef, new: VersionRef) -> Result<Comparison> {
        let old_text = resolver::resolve(&self.store, &self.provider, &old)?;
        let new_text = resolver::resolve(&self.store, &self.provider, &new)?;
        let generation = self.session.select(old, new);

        let diff = map_to_spans(&old_text, &new_text, &self.config);
        tracing::debug!(
            generation = %generation,
            spans = diff.spans().len(),
            rendered_chars = diff.rendered_len(),
            "Computed comparison"
        );
        Ok(Comparison { generation, diff })
    }

    /// Normalized indicator ranges for a comparison's diff
    pub fn indicator_ranges(&self, diff: &DiffResult) -> Vec<IndicatorRange> {
        indicator_ranges(diff, &self.config)
    }

    /// True if the given generation is still the latest selection
    pub fn is_current(&self, generation: Generation) -> bool {
        self.session.is_current(generation)
    }

    /// Current comparison session state
    pub fn session_state(&self) -> &SessionState {
        self.session.state()
    }
}
