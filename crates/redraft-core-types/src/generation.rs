//! Generation tokens for cancellation-by-supersession
//!
//! A comparison request is stamped with a generation drawn from a monotonic
//! counter. Consumers discard any result whose generation is not the latest
//! issued; no in-flight preemption is needed because diff computation is
//! pure and side-effect free.

use serde::{Deserialize, Serialize};

/// Monotonically increasing token attached to each comparison request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(u64);

impl Generation {
    /// Wrap a raw counter value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw counter value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
