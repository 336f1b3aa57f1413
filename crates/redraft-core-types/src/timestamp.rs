//! Canonical commit timestamps
//!
//! Timestamps are stored in a fixed-width string form (`YYYY-MM-DD HH:MM:SS`,
//! UTC) so that lexicographic order equals chronological order and the value
//! round-trips through any string-keyed storage without ambiguity. The rest
//! of the system treats them as opaque, totally ordered keys.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical storage format. Fixed width, second resolution.
const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Monotonically comparable instant identifying a commit
///
/// Ordering is derived from the inner string; because the format is fixed
/// width this matches chronological order exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(String);

impl Timestamp {
    /// Capture the current wall-clock instant, truncated to whole seconds
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Get the canonical string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The timestamp one second after this one
    ///
    /// Used to keep commit timestamps strictly increasing when two commits
    /// land within the same wall-clock second.
    pub fn successor(&self) -> Self {
        let dt = NaiveDateTime::parse_from_str(&self.0, FORMAT)
            .expect("timestamp is canonical by construction");
        Self::from_datetime(DateTime::from_naive_utc_and_offset(
            dt + Duration::seconds(1),
            Utc,
        ))
    }

    fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.format(FORMAT).to_string())
    }
}

impl std::str::FromStr for Timestamp {
    type Err = chrono::ParseError;

    /// Parse a canonical timestamp string, rejecting any other format
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dt = NaiveDateTime::parse_from_str(s, FORMAT)?;
        Ok(Self::from_datetime(DateTime::from_naive_utc_and_offset(
            dt, Utc,
        )))
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
