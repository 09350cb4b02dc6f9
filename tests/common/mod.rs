//! Shared test utilities.

#![allow(dead_code)]

use typeahead::Trie;

/// Build a trie from string literals.
pub fn build_trie(words: &[&str]) -> Trie {
    words.iter().collect()
}

/// Byte-string results as lossy strings, for readable assertions.
pub fn as_strings(results: &[Vec<u8>]) -> Vec<String> {
    results
        .iter()
        .map(|key| String::from_utf8_lossy(key).into_owned())
        .collect()
}
