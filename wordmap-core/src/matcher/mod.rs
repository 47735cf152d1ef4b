//! Bad-character substring matching
//!
//! The matcher answers one question: does a pattern occur in a text?
//! It builds a last-occurrence table for the pattern, then slides the
//! pattern over the text from left to right, comparing each window right to
//! left. On a mismatch of `pattern[j]` against text symbol `c` the window
//! moves by `max(1, j - last(j, c))`, where `last(j, c)` is the highest
//! index `<= j` holding `c` (or -1). No good-suffix rule is applied.
//!
//! Contract:
//! - An empty pattern is rejected with [`MatchError::EmptyPattern`].
//! - Pattern symbols outside the alphabet are rejected with
//!   [`MatchError::SymbolOutOfAlphabet`].
//! - Text symbols outside the alphabet never equal a pattern symbol and are
//!   shifted past like any symbol absent from the pattern.
//! - A dense table larger than [`MAX_DENSE_CELLS`] is rejected with
//!   [`MatchError::TableTooLarge`].
//! - Matching is exact: no case folding or normalization.

pub mod alphabet;
pub mod error;
pub mod scan;
pub mod table;

pub use alphabet::{Alphabet, Symbol};
pub use error::{MatchError, MatchResult};
pub use scan::{contains, contains_str, contains_with, MatcherConfig, PatternMatcher, ScanStats};
pub use table::{
    build_last_occurrence_table, DenseTable, LastOccurrence, SparseTable, Table, TableKind,
    MAX_DENSE_CELLS,
};
