//! Contract violations raised by the pattern matcher

use thiserror::Error;

/// Matcher errors (no I/O, only invalid input)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The pattern has no symbols
    #[error("pattern must contain at least one symbol")]
    EmptyPattern,

    /// A pattern symbol does not fit in the configured alphabet
    #[error(
        "pattern symbol {index} at position {position} is outside the alphabet of size {alphabet_size}"
    )]
    SymbolOutOfAlphabet {
        /// Index of the offending symbol
        index: usize,
        /// Position of the symbol in the pattern
        position: usize,
        /// Size of the alphabet in use
        alphabet_size: usize,
    },

    /// Alphabet of size zero
    #[error("alphabet size must be greater than 0")]
    InvalidAlphabet,

    /// A dense table of this shape would exceed the cell limit
    #[error("dense table of {rows} rows by {width} columns is too large")]
    TableTooLarge {
        /// Pattern length
        rows: usize,
        /// Alphabet size
        width: usize,
    },
}

/// Result type for matcher operations
pub type MatchResult<T> = Result<T, MatchError>;
