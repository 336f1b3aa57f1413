//! Span layout over the rendered union view.
//!
//! The union view is the single text stream formed by concatenating every
//! edit run in script order, so deleted and inserted material appear in
//! place, side by side. [`map_to_spans`] produces that view together with a
//! contiguous, non-overlapping span sequence carrying char offsets into it,
//! and [`indicator_ranges`] reduces the edit spans to normalized [0,1]
//! position ranges for a fixed-length indicator track.

use serde::{Deserialize, Serialize};

use crate::config::DiffConfig;
use crate::diff::engine;
use crate::diff::model::EditOp;

/// One contiguous run of the rendered union view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSpan {
    /// What happened to this run of text
    pub op: EditOp,
    /// The literal substring covered by this span
    pub text: String,
    /// Char offset of the span's first char in the rendered text
    pub start: usize,
    /// Char offset one past the span's last char in the rendered text
    pub end: usize,
}

/// A diff laid out over its rendered union view.
///
/// The span sequence is contiguous and total: concatenating every span's
/// text reproduces the rendered text exactly, spans never overlap, and no
/// span is empty unless both inputs were empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    spans: Vec<DiffSpan>,
    rendered: String,
    rendered_len: usize,
}

impl DiffResult {
    /// The spans in script order
    pub fn spans(&self) -> &[DiffSpan] {
        &self.spans
    }

    /// The rendered union view text
    pub fn rendered_text(&self) -> &str {
        &self.rendered
    }

    /// Length of the rendered text in chars
    pub fn rendered_len(&self) -> usize {
        self.rendered_len
    }

    /// Reassemble the old text from the Equal and Delete spans
    pub fn reconstruct_old(&self) -> String {
        self.spans
            .iter()
            .filter(|s| s.op != EditOp::Insert)
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Reassemble the new text from the Equal and Insert spans
    pub fn reconstruct_new(&self) -> String {
        self.spans
            .iter()
            .filter(|s| s.op != EditOp::Delete)
            .map(|s| s.text.as_str())
            .collect()
    }
}

/// Diff two texts and lay the script out over the rendered union view
pub fn map_to_spans(old: &str, new: &str, config: &DiffConfig) -> DiffResult {
    let script = engine::diff(old, new, config);

    let mut spans = Vec::with_capacity(script.len());
    let mut rendered = String::new();
    let mut offset = 0usize;
    for edit in script {
        let len = edit.text.chars().count();
        rendered.push_str(&edit.text);
        spans.push(DiffSpan {
            op: edit.op,
            text: edit.text,
            start: offset,
            end: offset + len,
        });
        offset += len;
    }

    DiffResult {
        spans,
        rendered,
        rendered_len: offset,
    }
}

/// Which side of the change an indicator range marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorKind {
    /// Material added in the new version
    Insert,
    /// Material removed from the old version
    Delete,
}

/// A proportional [0,1] position range on a fixed-length indicator track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRange {
    pub start_fraction: f64,
    pub end_fraction: f64,
    pub kind: IndicatorKind,
}

/// Reduce a diff's edit spans to normalized indicator ranges.
///
/// Offsets are normalized by the total rendered length. Adjacent same-kind
/// ranges separated by less than `min_indicator_gap_fraction` are merged so
/// a fixed-height track never shows imperceptible slivers. Equal spans
/// produce no ranges; a diff with no edits yields an empty sequence.
pub fn indicator_ranges(result: &DiffResult, config: &DiffConfig) -> Vec<IndicatorRange> {
    let total = result.rendered_len();
    if total == 0 {
        return Vec::new();
    }
    let total = total as f64;

    let mut ranges: Vec<IndicatorRange> = Vec::new();
    for span in result.spans() {
        let kind = match span.op {
            EditOp::Insert => IndicatorKind::Insert,
            EditOp::Delete => IndicatorKind::Delete,
            EditOp::Equal => continue,
        };
        let start_fraction = span.start as f64 / total;
        let end_fraction = span.end as f64 / total;

        match ranges.last_mut() {
            Some(last)
                if last.kind == kind
                    && start_fraction - last.end_fraction
                        < config.min_indicator_gap_fraction =>
            {
                last.end_fraction = end_fraction;
            }
            _ => ranges.push(IndicatorRange {
                start_fraction,
                end_fraction,
                kind,
            }),
        }
    }
    ranges
}
