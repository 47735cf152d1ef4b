//! Stop-word sets
//!
//! The default English set only lists words of four letters or more; the
//! word filter drops anything shorter before stop words are consulted.

use std::collections::HashSet;

#[rustfmt::skip]
const ENGLISH: &[&str] = &[
    "about", "above", "after", "again", "against", "aren", "because", "been",
    "before", "being", "below", "between", "both", "cannot", "could",
    "does", "doing", "down", "during", "each", "from", "further",
    "have", "haven", "having", "here", "herself", "himself",
    "into", "just", "more", "most", "myself", "only", "other",
    "ourselves", "over", "same", "shan", "should", "some", "such",
    "than", "that", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "under", "until", "very",
    "were", "what", "when", "where", "which", "while", "with", "would",
    "your", "yours", "yourself", "yourselves",
];

/// Immutable set of lowercase words excluded from counting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in English set
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// An empty set
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a set from arbitrary words, lowercased and trimmed
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parse one word per line; blank lines and `#` comments are skipped
    pub fn parse_list(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// A copy of this set with `extra` words added
    pub fn extended<I, W>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut words = self.words.clone();
        words.extend(Self::from_words(extra).words);
        Self { words }
    }

    /// Whether `word` (already lowercase) is a stop word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in alphabetical order
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}
