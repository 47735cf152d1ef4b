//! Word frequency analysis around a bad-character substring matcher
//!
//! The heart of this crate is [`matcher`]: a Boyer-Moore style search that
//! uses only the bad-character rule to decide whether a pattern occurs in a
//! text. Around it, [`text`] tokenizes documents, drops short words and stop
//! words, counts and ranks what remains, and searches the counted words.
//!
//! # Architecture
//!
//! - **matcher**: pure substring test, no I/O
//! - **text**: tokenization, filtering, counting, ranking, word search
//! - **api**: configuration and the [`WordMap`] facade
//!
//! # Example
//!
//! ```rust
//! use wordmap_core::{contains_str, WordMap};
//!
//! assert!(contains_str("ana", "banana").unwrap());
//!
//! let word_map = WordMap::new();
//! let frequencies = word_map.count_text("Rivers bend. The river bends around the river stones.");
//! let top = frequencies.top(1);
//! assert_eq!(top[0].word, "river");
//! assert_eq!(top[0].count, 2);
//!
//! let hits = word_map.search("bend", &frequencies).unwrap();
//! assert_eq!(hits.len(), 2);
//! ```

pub mod api;
pub mod matcher;
pub mod text;

pub use api::{defaults, Config, ConfigBuilder, Error, Result, WordMap};
pub use matcher::{
    contains, contains_str, contains_with, Alphabet, MatchError, MatcherConfig, PatternMatcher,
    Symbol, TableKind,
};
pub use text::{StopWords, WordCount, WordFilter, WordFrequencies, WordSearch};
