//! Diff configuration
//!
//! All tunables are passed as an explicit value; there is no global or
//! shared configuration state. The thresholds shape readability of the
//! diff, never its correctness: round-trip reconstruction holds for any
//! choice of values.

use serde::{Deserialize, Serialize};

/// Tunables for semantic cleanup and indicator rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Equal runs shorter than this many characters are candidates for
    /// elimination during semantic cleanup, when the edits around them
    /// dominate them on both sides
    pub noise_threshold: usize,

    /// Same-kind indicator ranges separated by less than this fraction of
    /// the track are merged, so a fixed-height track never shows
    /// imperceptible slivers
    pub min_indicator_gap_fraction: f64,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            noise_threshold: 4,
            min_indicator_gap_fraction: 0.005,
        }
    }
}
