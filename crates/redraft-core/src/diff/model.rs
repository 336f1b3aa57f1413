//! Edit script types
//!
//! An edit script is an ordered list of Equal/Insert/Delete runs that
//! transforms one text into another. Output is deterministic: the same pair
//! of inputs always produces the same script.

use serde::{Deserialize, Serialize};

/// Operation tag for one run of an edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditOp {
    /// Text present in both versions
    Equal,
    /// Text present only in the old version
    Delete,
    /// Text present only in the new version
    Insert,
}

/// One run of an edit script: an operation and the literal text it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// What happened to this run of text
    pub op: EditOp,
    /// The literal substring covered by this run
    pub text: String,
}

impl Edit {
    /// Create a new edit run
    pub fn new(op: EditOp, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }
}

/// Ordered sequence of edit runs, oldest-position first
pub type EditScript = Vec<Edit>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_construction() {
        let edit = Edit::new(EditOp::Insert, "APARTMENT");
        assert_eq!(edit.op, EditOp::Insert);
        assert_eq!(edit.text, "APARTMENT");
    }

    #[test]
    fn test_serialization_round_trip() {
        let script: EditScript = vec![
            Edit::new(EditOp::Equal, "INT. "),
            Edit::new(EditOp::Delete, "HOUSE"),
            Edit::new(EditOp::Insert, "APARTMENT"),
        ];
        let json = serde_json::to_string(&script).unwrap();
        let back: EditScript = serde_json::from_str(&json).unwrap();
        assert_eq!(back, script);
    }
}
