//! Property tests for the bad-character matcher
//!
//! Every result is checked against a naive window-by-window search.

use proptest::prelude::*;
use wordmap_core::matcher::{
    contains, contains_with, Alphabet, DenseTable, LastOccurrence, MatcherConfig,
    PatternMatcher, SparseTable, TableKind,
};

fn naive_find<T: PartialEq>(pattern: &[T], text: &[T]) -> Option<usize> {
    if pattern.len() > text.len() {
        return None;
    }
    text.windows(pattern.len()).position(|window| window == pattern)
}

/// Small alphabets produce many partial matches and repeated symbols
fn small_alphabet_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..max_len)
}

proptest! {
    #[test]
    fn embedded_pattern_is_found(
        prefix in prop::collection::vec(any::<u8>(), 0..40),
        pattern in prop::collection::vec(any::<u8>(), 1..12),
        suffix in prop::collection::vec(any::<u8>(), 0..40),
    ) {
        let text = [prefix.as_slice(), pattern.as_slice(), suffix.as_slice()].concat();
        prop_assert!(contains(&pattern, &text).unwrap());
    }

    #[test]
    fn agrees_with_naive_search(
        pattern in small_alphabet_bytes(6).prop_filter("non-empty", |p| !p.is_empty()),
        text in small_alphabet_bytes(60),
    ) {
        let matcher = PatternMatcher::new(&pattern).unwrap();
        prop_assert_eq!(matcher.find(&text), naive_find(&pattern, &text));
        prop_assert_eq!(contains(&pattern, &text).unwrap(), naive_find(&pattern, &text).is_some());
    }

    #[test]
    fn pattern_matches_itself(pattern in prop::collection::vec(any::<u8>(), 1..64)) {
        prop_assert!(contains(&pattern, &pattern).unwrap());
    }

    #[test]
    fn longer_pattern_never_matches(
        text in prop::collection::vec(any::<u8>(), 0..32),
        extra in prop::collection::vec(any::<u8>(), 1..8),
    ) {
        let pattern = [text.as_slice(), extra.as_slice()].concat();
        prop_assert!(!contains(&pattern, &text).unwrap());

        let stats = PatternMatcher::new(&pattern).unwrap().scan_stats(&text);
        prop_assert_eq!(stats.comparisons, 0);
    }

    #[test]
    fn shift_is_positive_and_safe(
        pattern in small_alphabet_bytes(8).prop_filter("non-empty", |p| !p.is_empty()),
        text in small_alphabet_bytes(40),
    ) {
        let matcher = PatternMatcher::new(&pattern).unwrap();
        let m = pattern.len();
        if text.len() < m {
            return Ok(());
        }

        let mut offset = 0;
        while offset <= text.len() - m {
            let window = &text[offset..offset + m];
            let Some(j) = (0..m).rev().find(|&j| pattern[j] != window[j]) else {
                break;
            };

            let shift = matcher.shift(j, window[j]);
            prop_assert!(shift >= 1);

            // No true alignment may be jumped over
            for skipped in offset + 1..(offset + shift).min(text.len() - m + 1) {
                prop_assert_ne!(&text[skipped..skipped + m], pattern.as_slice());
            }
            offset += shift;
        }
    }

    #[test]
    fn dense_and_sparse_tables_agree(pattern in prop::collection::vec(any::<u8>(), 1..24)) {
        let dense = DenseTable::build(&pattern, Alphabet::BYTES).unwrap();
        let sparse = SparseTable::build(&pattern, Alphabet::BYTES).unwrap();

        for row in 0..pattern.len() {
            for symbol in 0..256 {
                let expected = pattern[..=row].iter().rposition(|&b| b as usize == symbol);
                prop_assert_eq!(dense.last_at_or_before(row, symbol), expected);
                prop_assert_eq!(sparse.last_at_or_before(row, symbol), expected);
            }
        }
    }

    #[test]
    fn table_layouts_give_same_answers(
        pattern in "[a-d]{1,5}",
        text in "[a-d]{0,40}",
    ) {
        let answers: Vec<bool> = [TableKind::Dense, TableKind::Sparse, TableKind::Auto]
            .into_iter()
            .map(|table| {
                let config = MatcherConfig { alphabet_size: None, table };
                contains_with(pattern.as_bytes(), text.as_bytes(), &config).unwrap()
            })
            .collect();

        prop_assert!(answers.iter().all(|&a| a == text.contains(pattern.as_str())));
    }

    #[test]
    fn char_matching_agrees_with_str_contains(
        pattern in "[a-cα-γ]{1,4}",
        text in "[a-cα-γ]{0,30}",
    ) {
        let pattern_chars: Vec<char> = pattern.chars().collect();
        let text_chars: Vec<char> = text.chars().collect();

        prop_assert_eq!(
            contains(&pattern_chars, &text_chars).unwrap(),
            text.contains(pattern.as_str())
        );
    }
}
