//! Comparison session state and generation tokens.
//!
//! The session tracks which two versions are being compared and hands out a
//! fresh generation for every selection, so a consumer that fired several
//! comparisons in quick succession can discard every result but the newest.
//! There is no in-flight preemption; a superseded computation simply runs to
//! completion and its result is ignored.

use std::sync::atomic::{AtomicU64, Ordering};

use redraft_core_types::Generation;

use crate::resolver::VersionRef;

/// Monotonic source of generation tokens
#[derive(Debug, Default)]
pub struct GenerationCounter {
    counter: AtomicU64,
}

impl GenerationCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next generation
    pub fn next(&self) -> Generation {
        Generation::new(self.counter.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// The most recently issued generation
    pub fn latest(&self) -> Generation {
        Generation::new(self.counter.load(Ordering::Relaxed))
    }

    /// True if the given generation is the latest issued
    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.latest()
    }
}

/// Where a comparison session currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No comparison selected yet
    Idle,
    /// Two versions are selected and diffed
    Comparing { old: VersionRef, new: VersionRef },
    /// A commit is in flight
    Committing,
}

/// Tracks the comparison state machine for one document.
///
/// Transitions: `Idle -> Comparing` on selection, `Comparing -> Comparing`
/// on re-selection, `Comparing -> Committing` on a commit action, and back
/// to `Comparing` with the old side advanced to the fresh commit. There is
/// no terminal state; the session lives as long as the document.
#[derive(Debug)]
pub struct ComparisonSession {
    state: SessionState,
    generations: GenerationCounter,
    // State to restore if a commit attempt fails
    resume: SessionState,
}

impl ComparisonSession {
    /// Create an idle session
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            generations: GenerationCounter::new(),
            resume: SessionState::Idle,
        }
    }

    /// Current state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Select (or re-select) the versions under comparison.
    ///
    /// Returns the generation stamped on this selection; results carrying
    /// an older generation should be discarded.
    pub fn select(&mut self, old: VersionRef, new: VersionRef) -> Generation {
        self.state = SessionState::Comparing { old, new };
        self.generations.next()
    }

    /// True if the given generation is still the latest selection
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generations.is_current(generation)
    }

    /// Enter the committing state, remembering where to resume
    pub fn begin_commit(&mut self) {
        self.resume = self.state.clone();
        self.state = SessionState::Committing;
    }

    /// Leave the committing state after a successful commit.
    ///
    /// The session returns to comparing with the old side advanced to the
    /// freshly created commit; the new side of the previous comparison is
    /// kept, defaulting to the live document.
    pub fn finish_commit(&mut self, committed: VersionRef) {
        let new = match &self.resume {
            SessionState::Comparing { new, .. } => new.clone(),
            _ => VersionRef::Current,
        };
        self.state = SessionState::Comparing {
            old: committed,
            new,
        };
        self.resume = SessionState::Idle;
    }

    /// Leave the committing state after a failed commit, restoring the
    /// previous state unchanged
    pub fn abort_commit(&mut self) {
        self.state = std::mem::replace(&mut self.resume, SessionState::Idle);
    }
}

impl Default for ComparisonSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redraft_core_types::Timestamp;
    use std::str::FromStr;

    #[test]
    fn test_generations_strictly_increase() {
        let counter = GenerationCounter::new();
        let a = counter.next();
        let b = counter.next();
        let c = counter.next();
        assert!(a < b && b < c);
        assert!(counter.is_current(c));
        assert!(!counter.is_current(a));
    }

    #[test]
    fn test_reselection_supersedes_previous_generation() {
        let mut session = ComparisonSession::new();
        let first = session.select(VersionRef::Base, VersionRef::Current);
        assert!(session.is_current(first));

        let second = session.select(VersionRef::Base, VersionRef::Current);
        assert!(!session.is_current(first));
        assert!(session.is_current(second));
    }

    #[test]
    fn test_commit_advances_old_side() {
        let mut session = ComparisonSession::new();
        session.select(VersionRef::Base, VersionRef::Current);

        session.begin_commit();
        assert_eq!(*session.state(), SessionState::Committing);

        let ts = Timestamp::from_str("2025-02-21 14:30:05").unwrap();
        session.finish_commit(VersionRef::At(ts.clone()));
        assert_eq!(
            *session.state(),
            SessionState::Comparing {
                old: VersionRef::At(ts),
                new: VersionRef::Current,
            }
        );
    }

    #[test]
    fn test_failed_commit_restores_previous_state() {
        let mut session = ComparisonSession::new();
        session.select(VersionRef::Base, VersionRef::Current);
        let before = session.state().clone();

        session.begin_commit();
        session.abort_commit();
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn test_commit_from_idle_compares_against_live_text() {
        let mut session = ComparisonSession::new();
        session.begin_commit();
        let ts = Timestamp::from_str("2025-02-21 14:30:05").unwrap();
        session.finish_commit(VersionRef::At(ts.clone()));
        assert_eq!(
            *session.state(),
            SessionState::Comparing {
                old: VersionRef::At(ts),
                new: VersionRef::Current,
            }
        );
    }
}
