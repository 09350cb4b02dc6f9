//! Differential tests: trie fuzzy search against a strsim oracle.
//!
//! strsim computes full Levenshtein tables per pair with none of our
//! pruning, which makes it a good independent witness: any divergence
//! means the incremental rows or the pruning bound are wrong.

use super::common::as_strings;
use proptest::prelude::*;
use std::collections::BTreeSet;
use strsim::levenshtein;
use typeahead::{search_fuzzy, Trie};

// ============================================================================
// STRATEGIES
// ============================================================================

/// ASCII-only so strsim's char-based distance equals our byte-based one.
fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{0,8}").unwrap()
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(key_strategy(), 0..30)
}

// ============================================================================
// ORACLE
// ============================================================================

/// Soundness and completeness in one shot: the folded, deduped corpus
/// filtered by true edit distance, sorted.
fn oracle(words: &[String], query: &str, max_distance: usize) -> Vec<String> {
    let folded: BTreeSet<String> = words.iter().map(|w| w.to_ascii_lowercase()).collect();
    let query = query.to_ascii_lowercase();
    folded
        .into_iter()
        .filter(|w| levenshtein(w, &query) <= max_distance)
        .collect()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn matches_the_levenshtein_oracle(
        words in corpus_strategy(),
        query in key_strategy(),
        max_distance in 0usize..4,
    ) {
        let trie: Trie = words.iter().collect();
        let got = as_strings(&search_fuzzy(&trie, query.as_bytes(), max_distance));
        prop_assert_eq!(got, oracle(&words, &query, max_distance));
    }

    #[test]
    fn distance_zero_equals_membership(words in corpus_strategy(), query in key_strategy()) {
        let trie: Trie = words.iter().collect();
        let got = search_fuzzy(&trie, query.as_bytes(), 0);
        if trie.contains(query.as_bytes()) {
            prop_assert_eq!(got, vec![query.to_ascii_lowercase().into_bytes()]);
        } else {
            prop_assert!(got.is_empty());
        }
    }

    #[test]
    fn widening_the_bound_only_adds(
        words in corpus_strategy(),
        query in key_strategy(),
        max_distance in 0usize..3,
    ) {
        let trie: Trie = words.iter().collect();
        let narrow: BTreeSet<Vec<u8>> =
            search_fuzzy(&trie, query.as_bytes(), max_distance).into_iter().collect();
        let wide: BTreeSet<Vec<u8>> =
            search_fuzzy(&trie, query.as_bytes(), max_distance + 1).into_iter().collect();
        prop_assert!(narrow.is_subset(&wide));
    }

    #[test]
    fn output_is_strictly_increasing(
        words in corpus_strategy(),
        query in key_strategy(),
        max_distance in 0usize..4,
    ) {
        let trie: Trie = words.iter().collect();
        let got = search_fuzzy(&trie, query.as_bytes(), max_distance);
        for pair in got.windows(2) {
            prop_assert!(pair[0] < pair[1], "unordered pair: {:?} then {:?}", pair[0], pair[1]);
        }
    }
}
