//! Byte-trie typeahead index with bounded fuzzy matching.
//!
//! A 256-way trie over raw bytes with two query modes: exact-prefix
//! enumeration and approximate matching by Levenshtein edit distance.
//! Built to sit behind a suggestion box: index your vocabulary once, then
//! complete prefixes and catch typos as the user types.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐      ┌──────────────┐
//! │   trie.rs   │─────▶│  prefix.rs   │  walk + depth-first collect
//! │  (TrieNode, │      └──────────────┘
//! │    Trie)    │      ┌──────────────┐
//! │             │─────▶│  fuzzy.rs    │  DP rows + pruning over the trie
//! └─────────────┘      └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use typeahead::{search_fuzzy, search_prefix, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert("cat");
//! trie.insert("cart");
//!
//! assert_eq!(search_prefix(&trie, "ca").len(), 2);
//! assert_eq!(search_fuzzy(&trie, "cot", 1), vec![b"cat".to_vec()]);
//! ```
//!
//! # Semantics worth knowing
//!
//! - Keys are byte strings over the full 0-255 range; no encoding checks
//!   of any kind, UTF-8 included.
//! - Every byte is ASCII case-folded on insert and on query, so results
//!   come back lowercase. Original casing is not recoverable.
//! - Both searches return results in lexicographic byte order, with no
//!   duplicates. An empty result set is an ordinary value, never an error.
//! - Nothing here is internally synchronized; `&mut self` insertion and
//!   `&self` searches give the usual Rust aliasing guarantees instead.

mod fuzzy;
mod prefix;
mod trie;
pub mod wordlist;

pub use fuzzy::search_fuzzy;
pub use prefix::search_prefix;
pub use trie::{Trie, ALPHABET_SIZE};
