//! Myers shortest-edit-script computation.
//!
//! The core entry point is [`diff`], which returns a minimal edit script
//! transforming `old` into `new`, post-processed by semantic cleanup. The
//! function is total over any two finite texts and never errors.
//!
//! The search runs over the char sequence and finds a shortest path of
//! length D through the implicit edit graph in O(N·D) time and space
//! (D <= N+M). Callers comparing very large, heavily edited texts should
//! schedule the call off the interactive path. Ties between equally short
//! paths are broken deterministically by preferring deletions over
//! insertions at equal graph positions, so output is stable across runs.

use crate::config::DiffConfig;
use crate::diff::cleanup;
use crate::diff::model::{Edit, EditOp, EditScript};

/// Compute the minimal edit script transforming `old` into `new`
///
/// Identical inputs (including two empty texts) yield a single Equal run;
/// an empty `old` yields a single Insert and an empty `new` a single Delete.
/// Whitespace differences are diffed char-for-char like any other text.
pub fn diff(old: &str, new: &str, config: &DiffConfig) -> EditScript {
    if old == new {
        return vec![Edit::new(EditOp::Equal, old)];
    }

    let mut script = compute_raw(old, new);
    cleanup::semantic(&mut script, config);
    script
}

/// Minimal script before cleanup: trim the common affixes, then run the
/// graph search on what remains.
fn compute_raw(old: &str, new: &str) -> EditScript {
    let a: Vec<char> = old.chars().collect();
    let b: Vec<char> = new.chars().collect();

    let prefix_len = common_prefix(&a, &b);
    let suffix_len = common_suffix(&a[prefix_len..], &b[prefix_len..]);

    let mid_a = &a[prefix_len..a.len() - suffix_len];
    let mid_b = &b[prefix_len..b.len() - suffix_len];

    let mut script: EditScript = Vec::new();
    if prefix_len > 0 {
        script.push(Edit::new(
            EditOp::Equal,
            a[..prefix_len].iter().collect::<String>(),
        ));
    }

    if mid_a.is_empty() {
        // Caller guarantees old != new, so mid_b is non-empty here
        script.push(Edit::new(EditOp::Insert, mid_b.iter().collect::<String>()));
    } else if mid_b.is_empty() {
        script.push(Edit::new(EditOp::Delete, mid_a.iter().collect::<String>()));
    } else {
        script.extend(myers(mid_a, mid_b));
    }

    if suffix_len > 0 {
        script.push(Edit::new(
            EditOp::Equal,
            a[a.len() - suffix_len..].iter().collect::<String>(),
        ));
    }

    script
}

/// Length of the common prefix of two char slices
fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Length of the common suffix of two char slices
fn common_suffix(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Greedy Myers forward search over non-empty inputs.
///
/// `v[offset + k]` holds the furthest x reached on diagonal k after each
/// round d; one snapshot of `v` is kept per round so the path can be
/// recovered by walking the rounds backwards.
fn myers(a: &[char], b: &[char]) -> EditScript {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = n + m;
    let offset = max;

    let mut v = vec![0isize; (2 * max + 1) as usize];
    let mut trace: Vec<Vec<isize>> = Vec::new();

    for d in 0..=max {
        trace.push(v.clone());
        let mut k = -d;
        while k <= d {
            let ki = (offset + k) as usize;
            // On ties, step right (delete) rather than down (insert)
            let mut x = if k == -d || (k != d && v[ki - 1] < v[ki + 1]) {
                v[ki + 1]
            } else {
                v[ki - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[ki] = x;
            if x >= n && y >= m {
                return backtrack(a, b, &trace, d);
            }
            k += 2;
        }
    }

    unreachable!("an edit path of length at most n+m always exists")
}

/// Recover the edit script by walking the round snapshots backwards from
/// (n, m), emitting one non-diagonal move per round plus its snake.
fn backtrack(a: &[char], b: &[char], trace: &[Vec<isize>], d_final: isize) -> EditScript {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let offset = n + m;

    let mut x = n;
    let mut y = m;
    // Moves collected from the end of the path towards the start
    let mut reversed: Vec<(EditOp, char)> = Vec::new();

    let mut d = d_final;
    while d >= 0 {
        let v = &trace[d as usize];
        let k = x - y;
        let ki = (offset + k) as usize;

        // Same tie-break as the forward pass, so the recovered path is the
        // one that was actually searched
        let prev_k = if k == -d || (k != d && v[ki - 1] < v[ki + 1]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[(offset + prev_k) as usize];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            reversed.push((EditOp::Equal, a[(x - 1) as usize]));
            x -= 1;
            y -= 1;
        }

        if d > 0 {
            if x == prev_x {
                reversed.push((EditOp::Insert, b[prev_y as usize]));
            } else {
                reversed.push((EditOp::Delete, a[prev_x as usize]));
            }
        }

        x = prev_x;
        y = prev_y;
        d -= 1;
    }

    // Coalesce per-char moves into runs, restoring forward order
    let mut script: EditScript = Vec::new();
    for (op, ch) in reversed.into_iter().rev() {
        match script.last_mut() {
            Some(edit) if edit.op == op => edit.text.push(ch),
            _ => script.push(Edit::new(op, ch.to_string())),
        }
    }
    script
}
