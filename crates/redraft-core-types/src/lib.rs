//! Core types shared across redraft facilities
//!
//! This crate provides foundational types used by the commit store, the
//! diff engine, and the comparison sessions:
//!
//! - **Identity types**: CommitId
//! - **Ordering types**: Timestamp (canonical sortable string form)
//! - **Supersession types**: Generation token for discarding stale results

pub mod generation;
pub mod ids;
pub mod timestamp;

pub use generation::Generation;
pub use ids::CommitId;
pub use timestamp::Timestamp;
