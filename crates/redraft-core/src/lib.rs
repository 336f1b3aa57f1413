//! Redraft core - snapshot history and text-diff kernel
//!
//! This crate provides the foundational pieces of the redraft engine:
//! - Immutable commit model and the in-memory, append-only commit store
//! - Myers shortest-edit-script diff with a semantic cleanup pass
//! - Union-view span mapping and proportional indicator ranges
//! - Error taxonomy and diff configuration
//!
//! Everything here is pure and synchronous; persistence lives in
//! `redraft-store` and orchestration in `redraft-engine`.

pub mod config;
pub mod diff;
pub mod errors;
pub mod history;
pub mod logging;
pub mod model;

// Re-export commonly used types
pub use config::DiffConfig;
pub use errors::{RedraftError, Result};
pub use history::CommitStore;
pub use model::{Commit, CommitMeta};
