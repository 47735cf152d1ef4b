//! Bad-character scan over a fully materialized text

use super::alphabet::{Alphabet, Symbol};
use super::error::MatchResult;
use super::table::{LastOccurrence, Table, TableKind};

/// Matcher settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatcherConfig {
    /// Alphabet size (None = default for the symbol type)
    pub alphabet_size: Option<usize>,

    /// Table layout
    pub table: TableKind,
}

impl MatcherConfig {
    /// Alphabet to use for symbols of type `S`
    pub fn alphabet_for<S: Symbol>(&self) -> MatchResult<Alphabet> {
        match self.alphabet_size {
            Some(size) => Alphabet::new(size),
            None => Ok(Alphabet::for_symbol::<S>()),
        }
    }
}

/// Work counters collected during one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Pattern alignments tried
    pub alignments: usize,
    /// Symbol comparisons made
    pub comparisons: usize,
    /// Offset of the match, if one was found
    pub match_offset: Option<usize>,
}

/// A preprocessed pattern ready to scan any number of texts
///
/// ```rust
/// use wordmap_core::matcher::PatternMatcher;
///
/// let matcher = PatternMatcher::new(b"ana").unwrap();
/// assert!(matcher.is_match(b"banana"));
/// assert_eq!(matcher.find(b"banana"), Some(1));
/// assert!(!matcher.is_match(b"bandit"));
/// ```
#[derive(Debug, Clone)]
pub struct PatternMatcher<S: Symbol> {
    pattern: Vec<S>,
    table: Table,
}

impl<S: Symbol> PatternMatcher<S> {
    /// Preprocess `pattern` with the default alphabet and table layout
    pub fn new(pattern: &[S]) -> MatchResult<Self> {
        Self::with_config(pattern, &MatcherConfig::default())
    }

    /// Preprocess `pattern` with explicit settings
    pub fn with_config(pattern: &[S], config: &MatcherConfig) -> MatchResult<Self> {
        let alphabet = config.alphabet_for::<S>()?;
        let table = Table::build(pattern, alphabet, config.table)?;

        Ok(Self {
            pattern: pattern.to_vec(),
            table,
        })
    }

    /// The pattern symbols
    pub fn pattern(&self) -> &[S] {
        &self.pattern
    }

    /// The last-occurrence table built for the pattern
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Whether the pattern occurs anywhere in `text`
    pub fn is_match(&self, text: &[S]) -> bool {
        self.find(text).is_some()
    }

    /// Leftmost offset at which the pattern occurs in `text`
    pub fn find(&self, text: &[S]) -> Option<usize> {
        self.scan(text, &mut ScanStats::default())
    }

    /// Scan `text` and report the work done
    pub fn scan_stats(&self, text: &[S]) -> ScanStats {
        let mut stats = ScanStats::default();
        let found = self.scan(text, &mut stats);
        stats.match_offset = found;
        stats
    }

    /// Shift after a mismatch of `pattern[j]` against text symbol `bad`
    ///
    /// Always at least 1, so every iteration moves the alignment forward.
    #[inline]
    pub fn shift(&self, j: usize, bad: S) -> usize {
        match self.table.last_at_or_before(j, bad.index()) {
            Some(last) => j.saturating_sub(last).max(1),
            None => j + 1,
        }
    }

    fn scan(&self, text: &[S], stats: &mut ScanStats) -> Option<usize> {
        let m = self.pattern.len();
        let n = text.len();
        if m > n {
            return None;
        }

        let mut offset = 0;
        while offset <= n - m {
            stats.alignments += 1;

            let window = &text[offset..offset + m];
            let mismatch = (0..m).rev().find(|&j| {
                stats.comparisons += 1;
                self.pattern[j] != window[j]
            });

            match mismatch {
                None => return Some(offset),
                Some(j) => offset += self.shift(j, window[j]),
            }
        }

        None
    }
}

impl PatternMatcher<u8> {
    /// Preprocess the UTF-8 bytes of `pattern`
    pub fn from_str_bytes(pattern: &str) -> MatchResult<Self> {
        Self::new(pattern.as_bytes())
    }

    /// Whether the pattern occurs in the UTF-8 bytes of `text`
    pub fn is_match_str(&self, text: &str) -> bool {
        self.is_match(text.as_bytes())
    }
}

/// Whether `pattern` occurs in `text`, using the default alphabet for `S`
pub fn contains<S: Symbol>(pattern: &[S], text: &[S]) -> MatchResult<bool> {
    contains_with(pattern, text, &MatcherConfig::default())
}

/// Whether `pattern` occurs in `text`, with explicit settings
///
/// The pattern is validated first. A pattern longer than the text is then
/// rejected without building a table or comparing any symbols.
pub fn contains_with<S: Symbol>(
    pattern: &[S],
    text: &[S],
    config: &MatcherConfig,
) -> MatchResult<bool> {
    config.alphabet_for::<S>()?.validate_pattern(pattern)?;
    if pattern.len() > text.len() {
        return Ok(false);
    }

    Ok(PatternMatcher::with_config(pattern, config)?.is_match(text))
}

/// Byte-level [`contains`] on UTF-8 strings
pub fn contains_str(pattern: &str, text: &str) -> MatchResult<bool> {
    contains(pattern.as_bytes(), text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchError;

    #[test]
    fn test_scenarios() {
        assert!(contains_str("abc", "xabcx").unwrap());
        assert!(!contains_str("abc", "xyz").unwrap());
        assert!(!contains_str("aaaa", "aaa").unwrap());
        assert!(contains_str("ana", "banana").unwrap());
        assert!(!contains_str("ABC", "abc").unwrap());
    }

    #[test]
    fn test_empty_pattern_is_contract_violation() {
        assert_eq!(contains_str("", "anything"), Err(MatchError::EmptyPattern));
        assert_eq!(contains_str("", ""), Err(MatchError::EmptyPattern));
        assert!(PatternMatcher::<u8>::new(&[]).is_err());
    }

    #[test]
    fn test_pattern_equal_to_text() {
        assert!(contains_str("wordmap", "wordmap").unwrap());
        assert!(contains_str("x", "x").unwrap());
    }

    #[test]
    fn test_empty_text() {
        assert!(!contains_str("a", "").unwrap());
    }

    #[test]
    fn test_longer_pattern_makes_no_comparisons() {
        let matcher = PatternMatcher::new(b"aaaa").unwrap();
        let stats = matcher.scan_stats(b"aaa");

        assert_eq!(stats.alignments, 0);
        assert_eq!(stats.comparisons, 0);
        assert_eq!(stats.match_offset, None);
    }

    #[test]
    fn test_find_leftmost() {
        let matcher = PatternMatcher::new(b"ana").unwrap();
        assert_eq!(matcher.find(b"banana"), Some(1));
        assert_eq!(matcher.find(b"ana"), Some(0));
        assert_eq!(matcher.find(b"xxxana"), Some(3));
    }

    #[test]
    fn test_shift_skips_absent_symbol() {
        let matcher = PatternMatcher::new(b"abc").unwrap();

        // 'z' is nowhere in the pattern: slide past it entirely
        assert_eq!(matcher.shift(2, b'z'), 3);
        // 'a' last occurs at 0, align it under the text symbol
        assert_eq!(matcher.shift(2, b'a'), 2);
        // 'c' only occurs after position 1, so the prefix lookup misses
        assert_eq!(matcher.shift(1, b'c'), 2);
    }

    #[test]
    fn test_shift_is_never_zero() {
        let matcher = PatternMatcher::new(b"aab").unwrap();
        for j in 0..3 {
            for bad in 0..=255u8 {
                assert!(matcher.shift(j, bad) >= 1);
            }
        }
    }

    #[test]
    fn test_absent_symbols_skip_whole_windows() {
        let matcher = PatternMatcher::new(b"abcd").unwrap();
        let stats = matcher.scan_stats(b"xxxxxxxxxxxxxxxxabcd");

        assert_eq!(stats.match_offset, Some(16));
        // 16 leading symbols, skipped four at a time
        assert_eq!(stats.alignments, 5);
    }

    #[test]
    fn test_char_symbols() {
        let pattern: Vec<char> = "世界".chars().collect();
        let text: Vec<char> = "こんにちは世界".chars().collect();

        assert!(contains(&pattern, &text).unwrap());
        let matcher = PatternMatcher::new(&pattern).unwrap();
        assert_eq!(matcher.table().kind(), TableKind::Sparse);
        assert_eq!(matcher.find(&text), Some(5));
    }

    #[test]
    fn test_restricted_alphabet() {
        let config = MatcherConfig {
            alphabet_size: Some(128),
            table: TableKind::Dense,
        };

        assert!(contains_with(b"map", b"wordmap", &config).unwrap());

        // Text symbols outside the alphabet never match and are skipped
        assert!(contains_with(b"map", "m\u{e9}map".as_bytes(), &config).unwrap());

        // Pattern symbols outside the alphabet are rejected
        let err = contains_with("caf\u{e9}".as_bytes(), b"cafe", &config).unwrap_err();
        assert!(matches!(
            err,
            MatchError::SymbolOutOfAlphabet {
                position: 3,
                alphabet_size: 128,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_alphabet() {
        let config = MatcherConfig {
            alphabet_size: Some(0),
            table: TableKind::Auto,
        };
        assert_eq!(
            contains_with(b"a", b"a", &config),
            Err(MatchError::InvalidAlphabet)
        );
    }

    #[test]
    fn test_oversized_dense_table_is_rejected() {
        let huge = MatcherConfig {
            alphabet_size: Some(usize::MAX),
            table: TableKind::Dense,
        };
        assert_eq!(
            contains_with(b"abc", b"xxabcxx", &huge),
            Err(MatchError::TableTooLarge {
                rows: 3,
                width: usize::MAX,
            })
        );

        let large = MatcherConfig {
            alphabet_size: Some(1 << 40),
            ..huge
        };
        assert!(matches!(
            contains_with(b"abc", b"xxabcxx", &large),
            Err(MatchError::TableTooLarge { .. })
        ));

        // Auto falls back to occurrence lists, which do not depend on the alphabet
        let auto = MatcherConfig {
            table: TableKind::Auto,
            ..huge
        };
        assert_eq!(contains_with(b"abc", b"xxabcxx", &auto), Ok(true));
    }

    #[test]
    fn test_dense_and_sparse_agree() {
        let texts: [&[u8]; 4] = [b"abracadabra", b"cadabra", b"abrabrac", b"dabr"];
        for kind in [TableKind::Dense, TableKind::Sparse] {
            let config = MatcherConfig {
                alphabet_size: None,
                table: kind,
            };
            let matcher = PatternMatcher::with_config(b"cad", &config).unwrap();
            assert_eq!(matcher.table().kind(), kind);

            let found: Vec<Option<usize>> = texts.iter().map(|t| matcher.find(t)).collect();
            assert_eq!(found, vec![Some(4), Some(0), None, None]);
        }
    }

    #[test]
    fn test_utf8_helpers() {
        let matcher = PatternMatcher::from_str_bytes("ölig").unwrap();
        assert!(matcher.is_match_str("Schmierölige"));
        assert!(!matcher.is_match_str("Schmieroelige"));
    }
}
