// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: Levenshtein DP rows threaded through trie traversal.
//!
//! The classic edit-distance table is O(nm) per candidate string, but
//! trie paths share prefixes - so instead of recomputing the table per
//! key, each traversal step derives one new DP row from its parent's row.
//! A row for a node describes the distance between the path-string ending
//! there and every prefix of the query; shared path prefixes are computed
//! once and reused by every key below them.
//!
//! The part that keeps this sub-exponential is the pruning bound: the
//! recurrence can never shrink below the minimum of the current row, so
//! once `min(row) > max_distance` the whole subtree is hopeless and the
//! traversal turns back. Without it a fuzzy query degenerates into a full
//! scan of the trie.

use crate::trie::{fold_byte, Trie, TrieNode};

/// Every stored key within Levenshtein distance `max_distance` of `query`,
/// in lexicographic byte order.
///
/// Unit-cost insertions, deletions, and substitutions; no transpositions.
/// The query is case-folded the same way insertion folds keys, so fuzzy
/// and prefix search agree on what "equal bytes" means. `max_distance = 0`
/// degenerates to exact lookup (through the same traversal, not a
/// shortcut). An empty result set is an ordinary value, never an error.
pub fn search_fuzzy(trie: &Trie, query: impl AsRef<[u8]>, max_distance: usize) -> Vec<Vec<u8>> {
    let query: Vec<u8> = query.as_ref().iter().map(|&b| fold_byte(b)).collect();

    // Identity row: turning the empty path into the first i query bytes
    // costs exactly i insertions.
    let row: Vec<usize> = (0..=query.len()).collect();

    let mut results = Vec::new();

    // The root spells the empty key, and its row is the identity row, so
    // the empty key matches iff |query| <= max_distance.
    if trie.root().is_terminal() && query.len() <= max_distance {
        results.push(Vec::new());
    }

    let mut path = Vec::new();
    for (byte, child) in trie.root().children() {
        path.push(byte);
        descend(
            child,
            byte,
            &query,
            &row,
            max_distance,
            &mut path,
            &mut results,
        );
        path.pop();
    }

    results
}

/// Process one node: derive its DP row from the parent's, emit the path on
/// a within-bound terminal, and give up on the subtree when even the row
/// minimum is out of reach.
///
/// `row[i]` = minimal edit distance between the path-string ending at
/// `node` and the first `i` bytes of `query`. Each frame owns its row and
/// drops it on every exit path, pruning included - row storage is strictly
/// stack-scoped.
fn descend(
    node: &TrieNode,
    byte: u8,
    query: &[u8],
    parent_row: &[usize],
    max_distance: usize,
    path: &mut Vec<u8>,
    results: &mut Vec<Vec<u8>>,
) {
    let mut row = Vec::with_capacity(query.len() + 1);
    // One deletion gets from this path to the empty query prefix.
    row.push(parent_row[0] + 1);
    let mut min_in_row = row[0];

    for i in 1..=query.len() {
        let insert_cost = row[i - 1] + 1;
        let delete_cost = parent_row[i] + 1;
        let substitute_cost = parent_row[i - 1] + usize::from(query[i - 1] != byte);
        let cell = insert_cost.min(delete_cost).min(substitute_cost);
        min_in_row = min_in_row.min(cell);
        row.push(cell);
    }

    if node.is_terminal() && row[query.len()] <= max_distance {
        results.push(path.clone());
    }

    // No descendant row can dip below the minimum of this one.
    if min_in_row > max_distance {
        return;
    }

    for (next, child) in node.children() {
        path.push(next);
        descend(child, next, query, &row, max_distance, path, results);
        path.pop();
    }
}
