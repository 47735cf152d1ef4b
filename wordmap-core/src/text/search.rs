//! Finding counted words that contain a query

use super::frequency::{rank, WordCount, WordFrequencies};
use crate::matcher::{MatchResult, MatcherConfig, PatternMatcher};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Vocabulary size above which candidates are tested in parallel
#[cfg(feature = "parallel")]
const PARALLEL_VOCABULARY: usize = 4096;

/// A query preprocessed once and tested against many candidate words
#[derive(Debug, Clone)]
pub struct WordSearch {
    matcher: PatternMatcher<u8>,
}

impl WordSearch {
    /// Prepare `query`, lowercased unless `case_sensitive`
    pub fn new(query: &str, case_sensitive: bool, config: &MatcherConfig) -> MatchResult<Self> {
        let query = if case_sensitive {
            query.to_string()
        } else {
            query.to_lowercase()
        };

        Ok(Self {
            matcher: PatternMatcher::with_config(query.as_bytes(), config)?,
        })
    }

    /// Whether `word` contains the query
    pub fn matches(&self, word: &str) -> bool {
        self.matcher.is_match_str(word)
    }

    /// Ranked words of `frequencies` that contain the query
    pub fn search(&self, frequencies: &WordFrequencies) -> Vec<WordCount> {
        rank(self.hits(frequencies))
    }

    #[cfg(feature = "parallel")]
    fn hits(&self, frequencies: &WordFrequencies) -> Vec<WordCount> {
        if frequencies.len() <= PARALLEL_VOCABULARY {
            return self.hits_sequential(frequencies);
        }

        let entries: Vec<(&str, usize)> = frequencies.iter().collect();
        entries
            .par_iter()
            .filter(|(word, _)| self.matches(word))
            .map(|&(word, count)| WordCount::new(word, count))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn hits(&self, frequencies: &WordFrequencies) -> Vec<WordCount> {
        self.hits_sequential(frequencies)
    }

    fn hits_sequential(&self, frequencies: &WordFrequencies) -> Vec<WordCount> {
        frequencies
            .iter()
            .filter(|(word, _)| self.matches(word))
            .map(|(word, count)| WordCount::new(word, count))
            .collect()
    }
}
