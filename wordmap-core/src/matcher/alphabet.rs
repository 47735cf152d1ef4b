//! Symbol alphabets for the last-occurrence tables

use super::error::{MatchError, MatchResult};

/// A symbol the matcher can index into a fixed-size table
pub trait Symbol: Copy + Eq + Send + Sync {
    /// Alphabet size used when the caller does not configure one
    const DEFAULT_ALPHABET: usize;

    /// Column of this symbol in a last-occurrence table
    fn index(self) -> usize;
}

impl Symbol for u8 {
    const DEFAULT_ALPHABET: usize = 256;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl Symbol for u16 {
    const DEFAULT_ALPHABET: usize = 1 << 16;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Unicode scalar values, compared as raw code points
impl Symbol for char {
    const DEFAULT_ALPHABET: usize = 0x11_0000;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Number of distinct symbols a table has columns for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    size: usize,
}

impl Alphabet {
    /// One column per byte value
    pub const BYTES: Alphabet = Alphabet { size: 256 };

    /// Create an alphabet with `size` symbols
    pub fn new(size: usize) -> MatchResult<Self> {
        if size == 0 {
            return Err(MatchError::InvalidAlphabet);
        }
        Ok(Self { size })
    }

    /// Default alphabet for a symbol type
    pub fn for_symbol<S: Symbol>() -> Self {
        Self {
            size: S::DEFAULT_ALPHABET,
        }
    }

    /// Number of symbols
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `symbol` has a column in this alphabet
    #[inline]
    pub fn contains<S: Symbol>(&self, symbol: S) -> bool {
        symbol.index() < self.size
    }

    /// Check that a pattern is non-empty and fits in this alphabet
    pub fn validate_pattern<S: Symbol>(&self, pattern: &[S]) -> MatchResult<()> {
        if pattern.is_empty() {
            return Err(MatchError::EmptyPattern);
        }

        match pattern.iter().position(|&symbol| !self.contains(symbol)) {
            Some(position) => Err(MatchError::SymbolOutOfAlphabet {
                index: pattern[position].index(),
                position,
                alphabet_size: self.size,
            }),
            None => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::BYTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabets() {
        assert_eq!(Alphabet::default().size(), 256);
        assert_eq!(Alphabet::for_symbol::<u8>(), Alphabet::BYTES);
        assert_eq!(Alphabet::for_symbol::<u16>().size(), 65_536);
        assert_eq!(Alphabet::for_symbol::<char>().size(), 0x11_0000);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Alphabet::new(0), Err(MatchError::InvalidAlphabet));
        assert_eq!(Alphabet::new(26).unwrap().size(), 26);
    }

    #[test]
    fn test_validate_pattern() {
        let ascii = Alphabet::new(128).unwrap();
        assert!(ascii.validate_pattern(b"hello").is_ok());
        assert_eq!(
            ascii.validate_pattern::<u8>(&[]),
            Err(MatchError::EmptyPattern)
        );

        let err = ascii.validate_pattern(&[b'a', 0xC3, 0xA9]).unwrap_err();
        assert_eq!(
            err,
            MatchError::SymbolOutOfAlphabet {
                index: 0xC3,
                position: 1,
                alphabet_size: 128,
            }
        );
    }

    #[test]
    fn test_char_symbols() {
        let alphabet = Alphabet::new(256).unwrap();
        assert!(alphabet.contains('é'));
        assert!(!alphabet.contains('世'));
    }
}
