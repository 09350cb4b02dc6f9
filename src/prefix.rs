// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix enumeration: walk to the prefix, then collect the subtree.

use crate::trie::{fold_byte, Trie, TrieNode};

/// Every stored key beginning with `prefix`, in lexicographic byte order.
///
/// The prefix is case-folded exactly the way insertion folds keys, so
/// `search_prefix(&t, "APP")` finds what `insert("apple")` stored. A
/// prefix with no corresponding path is a perfectly normal outcome and
/// yields an empty vec - never an error. If the folded prefix is itself a
/// stored key, it appears first.
pub fn search_prefix(trie: &Trie, prefix: impl AsRef<[u8]>) -> Vec<Vec<u8>> {
    let mut path: Vec<u8> = prefix.as_ref().iter().map(|&b| fold_byte(b)).collect();

    let mut node = trie.root();
    for &b in &path {
        match node.child(b) {
            Some(child) => node = child,
            None => return Vec::new(),
        }
    }

    let mut results = Vec::new();
    collect(node, &mut path, &mut results);
    results
}

/// Depth-first collection under `node`. `path` holds the bytes from the
/// root down to `node` and grows and shrinks in lockstep with the
/// traversal, so arbitrarily long keys never hit a fixed cap.
fn collect(node: &TrieNode, path: &mut Vec<u8>, results: &mut Vec<Vec<u8>>) {
    if node.is_terminal() {
        results.push(path.clone());
    }
    for (byte, child) in node.children() {
        path.push(byte);
        collect(child, path, results);
        path.pop();
    }
}
