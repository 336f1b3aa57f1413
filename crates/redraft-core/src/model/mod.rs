//! Domain models for the commit history

mod commit;

pub use commit::{Commit, CommitMeta};
