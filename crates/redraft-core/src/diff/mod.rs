//! Text diff engine
//!
//! Pipeline: [`engine::diff`] computes a minimal Myers edit script, then
//! [`cleanup`] merges and reclassifies noisy fragments for readability, and
//! [`spans`] lays the script out over the rendered union view with
//! normalized indicator ranges for a fixed-length track.
//!
//! Diff computation is pure and reentrant; any number of invocations may run
//! concurrently without coordination.

pub mod cleanup;
pub mod engine;
pub mod model;
pub mod spans;

pub use engine::diff;
pub use model::{Edit, EditOp, EditScript};
pub use spans::{
    indicator_ranges, map_to_spans, DiffResult, DiffSpan, IndicatorKind, IndicatorRange,
};
