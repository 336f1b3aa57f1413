//! Redraft engine - orchestration layer
//!
//! Ties the pure core (diff pipeline, in-memory history) to the persistence
//! layer and exposes the workspace facade that callers embed. Version
//! references are resolved here, comparison sessions are tracked here, and
//! commits are written ledger-first so a storage fault never desynchronizes
//! memory from disk.

pub mod resolver;
pub mod session;
pub mod workspace;

pub use resolver::{resolve, DocumentProvider, VersionRef};
pub use session::{ComparisonSession, GenerationCounter, SessionState};
pub use workspace::{Comparison, Workspace};
