//! Semantic cleanup of edit scripts.
//!
//! A minimal edit script is often noisy for human eyes: a one-character
//! equality wedged between two large edits reads better as part of one
//! bigger edit. This pass merges adjacent runs, factors common affixes out
//! of delete/insert pairs, eliminates equal runs dominated by the edits
//! around them, and folds overlaps between a deletion and the insertion
//! that follows it.
//!
//! Cleanup is lossy toward readability, never toward correctness: for any
//! threshold choice, concatenating Equal+Delete runs still reproduces the
//! old text and Equal+Insert runs the new text.

use crate::config::DiffConfig;
use crate::diff::model::{Edit, EditOp, EditScript};

/// Run the full cleanup pipeline in place
pub fn semantic(script: &mut EditScript, config: &DiffConfig) {
    merge(script);
    if eliminate_noisy_equalities(script, config) {
        merge(script);
    }
    fold_overlaps(script);
}

/// Merge adjacent same-op runs, order deletions before insertions within a
/// change block, and factor common prefixes/suffixes of delete/insert pairs
/// back into the surrounding equalities. Reruns itself when the boundary-
/// shifting pass makes progress.
pub(crate) fn merge(script: &mut EditScript) {
    loop {
        // Sentinel equality so the final change block is flushed
        script.push(Edit::new(EditOp::Equal, String::new()));

        let mut pointer: usize = 0;
        let mut count_delete: usize = 0;
        let mut count_insert: usize = 0;
        let mut text_delete = String::new();
        let mut text_insert = String::new();

        while pointer < script.len() {
            match script[pointer].op {
                EditOp::Insert => {
                    count_insert += 1;
                    text_insert.push_str(&script[pointer].text);
                    pointer += 1;
                }
                EditOp::Delete => {
                    count_delete += 1;
                    text_delete.push_str(&script[pointer].text);
                    pointer += 1;
                }
                EditOp::Equal => {
                    if count_delete + count_insert > 1 {
                        if count_delete != 0 && count_insert != 0 {
                            // Factor a common prefix into the preceding equality
                            let prefix_len = common_prefix_bytes(&text_insert, &text_delete);
                            if prefix_len > 0 {
                                let start = pointer - count_delete - count_insert;
                                if start > 0 && script[start - 1].op == EditOp::Equal {
                                    let prefix = text_insert[..prefix_len].to_string();
                                    script[start - 1].text.push_str(&prefix);
                                } else {
                                    script.insert(
                                        0,
                                        Edit::new(
                                            EditOp::Equal,
                                            text_insert[..prefix_len].to_string(),
                                        ),
                                    );
                                    pointer += 1;
                                }
                                text_insert.drain(..prefix_len);
                                text_delete.drain(..prefix_len);
                            }
                            // Factor a common suffix into this equality
                            let suffix_len = common_suffix_bytes(&text_insert, &text_delete);
                            if suffix_len > 0 {
                                let suffix =
                                    text_insert[text_insert.len() - suffix_len..].to_string();
                                script[pointer].text =
                                    format!("{}{}", suffix, script[pointer].text);
                                text_insert.truncate(text_insert.len() - suffix_len);
                                text_delete.truncate(text_delete.len() - suffix_len);
                            }
                        }
                        // Replace the change block with the merged pair,
                        // deletion first
                        pointer -= count_delete + count_insert;
                        script.drain(pointer..pointer + count_delete + count_insert);
                        if !text_delete.is_empty() {
                            script.insert(pointer, Edit::new(EditOp::Delete, text_delete.clone()));
                            pointer += 1;
                        }
                        if !text_insert.is_empty() {
                            script.insert(pointer, Edit::new(EditOp::Insert, text_insert.clone()));
                            pointer += 1;
                        }
                        pointer += 1;
                    } else if pointer != 0 && script[pointer - 1].op == EditOp::Equal {
                        // Merge consecutive equalities
                        let text = script.remove(pointer).text;
                        script[pointer - 1].text.push_str(&text);
                    } else {
                        pointer += 1;
                    }
                    count_insert = 0;
                    count_delete = 0;
                    text_delete.clear();
                    text_insert.clear();
                }
            }
        }

        if script.last().map(|e| e.text.is_empty()).unwrap_or(false) {
            script.pop();
        }

        // Shift single edits surrounded by equalities sideways when doing so
        // lets two equalities fuse, e.g. A<ins>BA</ins>C becomes <ins>AB</ins>AC
        let mut changes = false;
        let mut pointer: usize = 1;
        while pointer + 1 < script.len() {
            if script[pointer - 1].op == EditOp::Equal && script[pointer + 1].op == EditOp::Equal {
                let prev_text = script[pointer - 1].text.clone();
                let next_text = script[pointer + 1].text.clone();
                if script[pointer].text.ends_with(&prev_text) {
                    // Shift left over the preceding equality
                    let core_len = script[pointer].text.len() - prev_text.len();
                    let core = script[pointer].text[..core_len].to_string();
                    script[pointer].text = format!("{}{}", prev_text, core);
                    script[pointer + 1].text = format!("{}{}", prev_text, next_text);
                    script.remove(pointer - 1);
                    changes = true;
                } else if script[pointer].text.starts_with(&next_text) {
                    // Shift right over the following equality
                    script[pointer - 1].text.push_str(&next_text);
                    let rest = script[pointer].text[next_text.len()..].to_string();
                    script[pointer].text = format!("{}{}", rest, next_text);
                    script.remove(pointer + 1);
                    changes = true;
                }
            }
            pointer += 1;
        }

        if !changes {
            break;
        }
    }
}

/// Eliminate equal runs that are shorter than the noise threshold and
/// dominated by the edits on both sides, reclassifying them as a paired
/// delete+insert so the surrounding edits can fuse into one larger edit.
///
/// Returns true if anything changed (the caller should re-merge).
fn eliminate_noisy_equalities(script: &mut EditScript, config: &DiffConfig) -> bool {
    let mut changed = false;
    // Indices of equalities that may still be eliminated
    let mut equalities: Vec<usize> = Vec::new();
    let mut last_equality: Option<String> = None;
    // Change sizes (in chars) before and after the candidate equality
    let mut len_insertions1: usize = 0;
    let mut len_deletions1: usize = 0;
    let mut len_insertions2: usize = 0;
    let mut len_deletions2: usize = 0;

    let mut pointer: isize = 0;
    while (pointer as usize) < script.len() {
        let i = pointer as usize;
        if script[i].op == EditOp::Equal {
            equalities.push(i);
            len_insertions1 = len_insertions2;
            len_deletions1 = len_deletions2;
            len_insertions2 = 0;
            len_deletions2 = 0;
            last_equality = Some(script[i].text.clone());
        } else {
            let run_len = script[i].text.chars().count();
            if script[i].op == EditOp::Insert {
                len_insertions2 += run_len;
            } else {
                len_deletions2 += run_len;
            }

            let candidate = match (&last_equality, equalities.last()) {
                (Some(eq), Some(&idx)) => Some((eq.clone(), idx)),
                _ => None,
            };
            if let Some((eq_text, idx)) = candidate {
                let eq_len = eq_text.chars().count();
                if eq_len > 0
                    && eq_len < config.noise_threshold
                    && eq_len <= len_insertions1.max(len_deletions1)
                    && eq_len <= len_insertions2.max(len_deletions2)
                {
                    // Reclassify the equality as delete+insert of the same
                    // text; round-trip reconstruction is unaffected
                    script[idx] = Edit::new(EditOp::Delete, eq_text.clone());
                    script.insert(idx + 1, Edit::new(EditOp::Insert, eq_text));
                    equalities.pop();
                    // The previous equality needs re-evaluation too
                    equalities.pop();
                    pointer = equalities.last().map(|&p| p as isize).unwrap_or(-1);
                    len_insertions1 = 0;
                    len_deletions1 = 0;
                    len_insertions2 = 0;
                    len_deletions2 = 0;
                    last_equality = None;
                    changed = true;
                }
            }
        }
        pointer += 1;
    }

    changed
}

/// Fold overlaps between a deletion and the insertion that follows it into
/// an equality, when the overlap covers at least half of either edit.
fn fold_overlaps(script: &mut EditScript) {
    let mut pointer: usize = 1;
    while pointer < script.len() {
        if script[pointer - 1].op == EditOp::Delete && script[pointer].op == EditOp::Insert {
            let deletion = script[pointer - 1].text.clone();
            let insertion = script[pointer].text.clone();
            let overlap1 = common_overlap_bytes(&deletion, &insertion);
            let overlap2 = common_overlap_bytes(&insertion, &deletion);

            if overlap1 >= overlap2 {
                if overlap1 > 0
                    && overlap1 < deletion.len()
                    && overlap1 < insertion.len()
                    && (overlap1 * 2 >= deletion.len() || overlap1 * 2 >= insertion.len())
                {
                    // Trailing part of the deletion matches the leading part
                    // of the insertion
                    script.insert(
                        pointer,
                        Edit::new(EditOp::Equal, insertion[..overlap1].to_string()),
                    );
                    script[pointer - 1].text = deletion[..deletion.len() - overlap1].to_string();
                    script[pointer + 1].text = insertion[overlap1..].to_string();
                    pointer += 1;
                }
            } else if overlap2 > 0
                && overlap2 < deletion.len()
                && overlap2 < insertion.len()
                && (overlap2 * 2 >= deletion.len() || overlap2 * 2 >= insertion.len())
            {
                // Reversed: trailing part of the insertion matches the
                // leading part of the deletion
                script.insert(
                    pointer,
                    Edit::new(EditOp::Equal, deletion[..overlap2].to_string()),
                );
                script[pointer - 1] = Edit::new(
                    EditOp::Insert,
                    insertion[..insertion.len() - overlap2].to_string(),
                );
                script[pointer + 1] =
                    Edit::new(EditOp::Delete, deletion[overlap2..].to_string());
                pointer += 1;
            }
            pointer += 1;
        }
        pointer += 1;
    }
}

/// Byte length of the common prefix of two strings (char-boundary safe)
fn common_prefix_bytes(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}

/// Byte length of the common suffix of two strings (char-boundary safe)
fn common_suffix_bytes(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().rev().zip(b.chars().rev()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}

/// Byte length of the longest suffix of `a` that is a prefix of `b`
fn common_overlap_bytes(a: &str, b: &str) -> usize {
    for (i, _) in a.char_indices() {
        let suffix = &a[i..];
        if b.starts_with(suffix) {
            return suffix.len();
        }
    }
    0
}
