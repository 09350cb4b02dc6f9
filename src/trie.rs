// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The trie itself: node storage, insertion, lifecycle.
//!
//! A 256-way byte trie. Each node carries a dense child table indexed by
//! byte value plus an end-of-key marker. Dense wins here: child lookup is
//! a single array index, and typeahead vocabularies are small enough that
//! the per-node footprint doesn't bite.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - Every non-root node is reachable from the root by exactly one path of
//!   byte-labeled edges; that path spells the stored key.
//! - `is_terminal` is set iff an inserted key ends at that node. Terminal
//!   nodes are not necessarily leaves ("car" and "cart" share a path).
//! - Keys are case-folded on the way in. Original casing is gone for good.
//! - Nodes are only ever added. The only way to remove anything is
//!   [`Trie::clear`], which drops the whole tree at once.

use std::fmt;

/// Number of distinct edge labels per node - one per byte value.
pub const ALPHABET_SIZE: usize = 256;

/// Case-fold a single byte: ASCII-only, the byte-level equivalent of
/// `tolower(3)` in the C locale. Bytes above 0x7F pass through untouched.
#[inline]
pub(crate) fn fold_byte(b: u8) -> u8 {
    b.to_ascii_lowercase()
}

/// One trie node: a dense child table and an end-of-key marker.
///
/// Children are boxed, so each node exclusively owns its subtree and
/// teardown is plain ownership drop - children are freed before their
/// parent's storage goes, the same post-order guarantee a hand-written
/// recursive free would give.
pub(crate) struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    is_terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        TrieNode {
            children: std::array::from_fn(|_| None),
            is_terminal: false,
        }
    }

    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    #[inline]
    pub(crate) fn child(&self, byte: u8) -> Option<&TrieNode> {
        self.children[byte as usize].as_deref()
    }

    /// Present children in ascending byte order. Both search algorithms
    /// lean on this ordering for deterministic, duplicate-free output.
    pub(crate) fn children(&self) -> impl Iterator<Item = (u8, &TrieNode)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(byte, slot)| slot.as_deref().map(|node| (byte as u8, node)))
    }
}

/// An in-memory index of byte-string keys.
///
/// Owns a single root node. Construct as many independent tries as you
/// like - there is no shared or global state, so tests (and hosts that
/// want per-tenant indexes) get isolation for free.
///
/// Insertion takes `&mut self` and searches take `&self`; the borrow
/// checker enforces the serialization a concurrent host would otherwise
/// have to provide by hand.
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// An empty index. Always ready: the root exists from the start, so
    /// every operation is total without lazy-initialization checks.
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Insert `key`, case-folded byte by byte.
    ///
    /// Walks from the root, creating a child on demand wherever the edge
    /// is absent, then marks the final node terminal. Idempotent:
    /// re-inserting an existing key changes nothing. The empty key is
    /// legal and marks the root itself. O(L) time, at most L allocations.
    pub fn insert(&mut self, key: impl AsRef<[u8]>) {
        let mut node = &mut self.root;
        for &b in key.as_ref() {
            node = &mut **node.children[fold_byte(b) as usize]
                .get_or_insert_with(|| Box::new(TrieNode::new()));
        }
        if !node.is_terminal {
            node.is_terminal = true;
            self.len += 1;
        }
    }

    /// Exact membership: does the folded `key` terminate at a node?
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        let mut node = &self.root;
        for &b in key.as_ref() {
            match node.child(fold_byte(b)) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_terminal
    }

    /// Discard every stored key and install a fresh empty root.
    ///
    /// The old tree is torn down by ownership drop (children before
    /// parents, all the way down).
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: AsRef<[u8]>> Extend<K> for Trie {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: AsRef<[u8]>> FromIterator<K> for Trie {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
