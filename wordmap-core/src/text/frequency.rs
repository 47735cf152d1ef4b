//! Word frequency counting and ranking

use super::filter::WordFilter;
use super::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::BufRead;

/// A word and the number of times it was counted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    /// The counted word
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

impl WordCount {
    /// Create a new entry
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Word occurrence counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
}

impl WordFrequencies {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word` as given
    pub fn add(&mut self, word: impl Into<String>) {
        *self.counts.entry(word.into()).or_insert(0) += 1;
    }

    /// Count already-normalized words
    pub fn count_words<I, W>(&mut self, words: I)
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        for word in words {
            self.add(word);
        }
    }

    /// Tokenize one line and count the tokens `filter` keeps
    pub fn count_line(&mut self, line: &str, filter: &WordFilter) {
        for token in tokenize(line) {
            if let Some(word) = filter.normalize(token) {
                self.add(word);
            }
        }
    }

    /// Count every line of `text`
    pub fn count_text(&mut self, text: &str, filter: &WordFilter) {
        for line in text.lines() {
            self.count_line(line, filter);
        }
    }

    /// Count a reader line by line
    pub fn count_reader<R: BufRead>(&mut self, reader: R, filter: &WordFilter) -> std::io::Result<()> {
        for line in reader.lines() {
            self.count_line(&line?, filter);
        }
        Ok(())
    }

    /// Add all counts from `other`
    pub fn merge(&mut self, other: WordFrequencies) {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return;
        }
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    /// Count for `word`, zero when absent
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing was counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Distinct words in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Iterate `(word, count)` in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// All words, most frequent first
    pub fn ranked(&self) -> Vec<WordCount> {
        rank(self.iter().map(|(word, count)| WordCount::new(word, count)))
    }

    /// The `n` most frequent words
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl FromIterator<(String, usize)> for WordFrequencies {
    fn from_iter<T: IntoIterator<Item = (String, usize)>>(iter: T) -> Self {
        let mut frequencies = Self::new();
        for (word, count) in iter {
            *frequencies.counts.entry(word).or_insert(0) += count;
        }
        frequencies
    }
}

/// Sort by count descending, then by word ascending
pub fn rank<I: IntoIterator<Item = WordCount>>(entries: I) -> Vec<WordCount> {
    let mut ranked: Vec<WordCount> = entries.into_iter().collect();
    ranked.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked
}
