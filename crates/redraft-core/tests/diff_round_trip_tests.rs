//! Round-trip and totality properties of the diff pipeline.
//!
//! These must hold for any input pair and any threshold configuration:
//! cleanup may reshape edit boundaries but never loses content.

use proptest::prelude::*;
use redraft_core::diff::{diff, map_to_spans, EditOp};
use redraft_core::DiffConfig;

fn reconstruct_old(script: &[redraft_core::diff::Edit]) -> String {
    script
        .iter()
        .filter(|e| e.op != EditOp::Insert)
        .map(|e| e.text.as_str())
        .collect()
}

fn reconstruct_new(script: &[redraft_core::diff::Edit]) -> String {
    script
        .iter()
        .filter(|e| e.op != EditOp::Delete)
        .map(|e| e.text.as_str())
        .collect()
}

proptest! {
    #[test]
    fn prop_round_trip_reconstruction(old in ".{0,60}", new in ".{0,60}") {
        let config = DiffConfig::default();
        let script = diff(&old, &new, &config);
        prop_assert_eq!(reconstruct_old(&script), old);
        prop_assert_eq!(reconstruct_new(&script), new);
    }

    #[test]
    fn prop_identity_single_equal(text in ".{0,60}") {
        let config = DiffConfig::default();
        let script = diff(&text, &text, &config);
        prop_assert_eq!(script.len(), 1);
        prop_assert_eq!(script[0].op, EditOp::Equal);
        prop_assert_eq!(script[0].text.clone(), text);
    }

    #[test]
    fn prop_deterministic(old in ".{0,40}", new in ".{0,40}") {
        let config = DiffConfig::default();
        prop_assert_eq!(diff(&old, &new, &config), diff(&old, &new, &config));
    }

    #[test]
    fn prop_round_trip_holds_for_any_threshold(
        old in ".{0,40}",
        new in ".{0,40}",
        noise_threshold in 0usize..16,
    ) {
        let config = DiffConfig {
            noise_threshold,
            min_indicator_gap_fraction: 0.005,
        };
        let script = diff(&old, &new, &config);
        prop_assert_eq!(reconstruct_old(&script), old);
        prop_assert_eq!(reconstruct_new(&script), new);
    }

    #[test]
    fn prop_spans_total_and_contiguous(old in ".{0,60}", new in ".{0,60}") {
        let config = DiffConfig::default();
        let result = map_to_spans(&old, &new, &config);

        let joined: String = result.spans().iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(joined, result.rendered_text());

        let mut offset = 0usize;
        for span in result.spans() {
            prop_assert_eq!(span.start, offset);
            prop_assert_eq!(span.end - span.start, span.text.chars().count());
            offset = span.end;
        }
        prop_assert_eq!(offset, result.rendered_len());

        prop_assert_eq!(result.reconstruct_old(), old);
        prop_assert_eq!(result.reconstruct_new(), new);
    }

    #[test]
    fn prop_indicator_fractions_in_unit_interval(old in ".{0,60}", new in ".{0,60}") {
        let config = DiffConfig::default();
        let result = map_to_spans(&old, &new, &config);
        for range in redraft_core::diff::indicator_ranges(&result, &config) {
            prop_assert!(range.start_fraction >= 0.0);
            prop_assert!(range.end_fraction <= 1.0);
            prop_assert!(range.start_fraction < range.end_fraction);
        }
    }
}

#[test]
fn test_no_zero_length_spans_except_double_empty() {
    let config = DiffConfig::default();
    let cases = [
        ("", "FADE IN:"),
        ("FADE IN:", ""),
        ("INT. HOUSE - DAY", "INT. APARTMENT - DAY"),
        ("A", "ABC"),
        ("cat dog", "birds"),
    ];
    for (old, new) in cases {
        let result = map_to_spans(old, new, &config);
        for span in result.spans() {
            assert!(span.end > span.start, "empty span for {old:?} -> {new:?}");
        }
    }
}
