//! End-to-end workspace scenarios: commit, reload from disk, compare.

use std::sync::{Arc, Mutex};

use redraft_core::diff::EditOp;
use redraft_core::{DiffConfig, RedraftError};
use redraft_engine::{DocumentProvider, VersionRef, Workspace};

#[derive(Clone)]
struct SharedDoc(Arc<Mutex<String>>);

impl SharedDoc {
    fn new(text: &str) -> Self {
        Self(Arc::new(Mutex::new(text.to_string())))
    }

    fn set(&self, text: &str) {
        *self.0.lock().unwrap() = text.to_string();
    }
}

impl DocumentProvider for SharedDoc {
    fn current_text(&self) -> String {
        self.0.lock().unwrap().clone()
    }
}

#[test]
fn test_history_reloads_from_ledger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.db");

    // GIVEN a workspace that committed three drafts
    let doc = SharedDoc::new("A");
    let (mut ws, warnings) = Workspace::open(&path, doc.clone(), DiffConfig::default()).unwrap();
    assert!(warnings.is_empty());

    let t1 = ws.commit(Some("first".to_string())).unwrap().timestamp;
    doc.set("AB");
    ws.commit(None).unwrap();
    doc.set("ABC");
    ws.commit(None).unwrap();
    drop(ws);

    // WHEN the workspace is reopened against the same file
    let doc = SharedDoc::new("ABC");
    let (mut ws, warnings) = Workspace::open(&path, doc, DiffConfig::default()).unwrap();

    // THEN history, messages, and content all survive
    assert!(warnings.is_empty());
    let commits = ws.commits();
    assert_eq!(commits.len(), 3);
    assert_eq!(commits[0].message.as_deref(), Some("first"));
    assert_eq!(ws.content_at(&t1).unwrap(), "A");
    assert!(!ws.has_uncommitted_changes());

    // AND a comparison against the reloaded history works
    let cmp = ws
        .compare(VersionRef::At(t1), VersionRef::Current)
        .unwrap();
    let ops: Vec<(EditOp, &str)> = cmp
        .diff
        .spans()
        .iter()
        .map(|s| (s.op, s.text.as_str()))
        .collect();
    assert_eq!(ops, vec![(EditOp::Equal, "A"), (EditOp::Insert, "BC")]);
}

#[test]
fn test_base_compares_against_oldest_commit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.db");

    let doc = SharedDoc::new("INT. HOUSE - DAY");
    let (mut ws, _) = Workspace::open(&path, doc.clone(), DiffConfig::default()).unwrap();
    ws.commit(None).unwrap();

    doc.set("INT. APARTMENT - DAY");
    let cmp = ws.compare(VersionRef::Base, VersionRef::Current).unwrap();
    let ops: Vec<(EditOp, &str)> = cmp
        .diff
        .spans()
        .iter()
        .map(|s| (s.op, s.text.as_str()))
        .collect();
    assert_eq!(
        ops,
        vec![
            (EditOp::Equal, "INT. "),
            (EditOp::Delete, "HOUSE"),
            (EditOp::Insert, "APARTMENT"),
            (EditOp::Equal, " - DAY"),
        ]
    );

    // Indicator ranges for the same comparison, normalized by rendered length
    let ranges = ws.indicator_ranges(&cmp.diff);
    assert_eq!(ranges.len(), 2);
}

#[test]
fn test_empty_base_yields_single_insert() {
    let doc = SharedDoc::new("FADE IN:");
    let mut ws = Workspace::in_memory(doc, DiffConfig::default());

    // No commits yet: Base resolves to empty text
    let cmp = ws.compare(VersionRef::Base, VersionRef::Current).unwrap();
    let ops: Vec<(EditOp, &str)> = cmp
        .diff
        .spans()
        .iter()
        .map(|s| (s.op, s.text.as_str()))
        .collect();
    assert_eq!(ops, vec![(EditOp::Insert, "FADE IN:")]);
    assert!(ws.has_uncommitted_changes());
}

#[test]
fn test_missing_timestamp_surfaces_not_found() {
    let doc = SharedDoc::new("FADE IN:");
    let mut ws = Workspace::in_memory(doc, DiffConfig::default());

    let missing = "1999-01-01 00:00:00".parse().unwrap();
    let err = ws
        .compare(VersionRef::At(missing), VersionRef::Current)
        .unwrap_err();
    assert!(matches!(err, RedraftError::CommitNotFound { .. }));
    assert_eq!(err.code(), "ERR_NOT_FOUND");
}

#[test]
fn test_commit_timestamps_strictly_increase() {
    let doc = SharedDoc::new("");
    let mut ws = Workspace::in_memory(doc.clone(), DiffConfig::default());

    let mut previous = None;
    for i in 0..4 {
        doc.set(&format!("draft {}", i));
        let meta = ws.commit(None).unwrap();
        if let Some(prev) = previous {
            assert!(meta.timestamp > prev);
        }
        previous = Some(meta.timestamp);
    }
}
