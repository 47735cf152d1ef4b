//! Main entry point tying counting, ranking and matching together

use crate::api::{Config, Error, Result};
use crate::matcher::{contains_with, PatternMatcher};
use crate::text::{WordCount, WordFrequencies, WordSearch};
use std::io::BufRead;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Word frequency and search processor
#[derive(Debug, Clone, Default)]
pub struct WordMap {
    config: Config,
}

impl WordMap {
    /// Create a processor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Count the words of one text
    pub fn count_text(&self, text: &str) -> WordFrequencies {
        let mut frequencies = WordFrequencies::new();
        frequencies.count_text(text, &self.config.filter);
        frequencies
    }

    /// Count the words of a reader, line by line
    pub fn count_reader<R: BufRead>(&self, reader: R) -> Result<WordFrequencies> {
        let mut frequencies = WordFrequencies::new();
        frequencies.count_reader(reader, &self.config.filter)?;
        Ok(frequencies)
    }

    /// Count several documents into one table
    #[cfg(feature = "parallel")]
    pub fn count_documents<D: AsRef<str> + Sync>(&self, documents: &[D]) -> Result<WordFrequencies> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads.unwrap_or_else(num_cpus::get))
            .build()
            .map_err(|e| Error::Parallel(e.to_string()))?;

        let frequencies = pool.install(|| {
            documents
                .par_iter()
                .map(|document| self.count_text(document.as_ref()))
                .reduce(WordFrequencies::new, |mut merged, part| {
                    merged.merge(part);
                    merged
                })
        });

        Ok(frequencies)
    }

    /// Count several documents into one table
    #[cfg(not(feature = "parallel"))]
    pub fn count_documents<D: AsRef<str>>(&self, documents: &[D]) -> Result<WordFrequencies> {
        let mut frequencies = WordFrequencies::new();
        for document in documents {
            frequencies.merge(self.count_text(document.as_ref()));
        }
        Ok(frequencies)
    }

    /// The `n` most frequent words of `text`
    pub fn top_words(&self, text: &str, n: usize) -> Vec<WordCount> {
        self.count_text(text).top(n)
    }

    /// Prepare `query` for searching counted words
    pub fn word_search(&self, query: &str) -> Result<WordSearch> {
        Ok(WordSearch::new(
            query,
            self.config.filter.case_sensitive,
            &self.config.matcher,
        )?)
    }

    /// Ranked counted words containing `query`
    pub fn search(&self, query: &str, frequencies: &WordFrequencies) -> Result<Vec<WordCount>> {
        Ok(self.word_search(query)?.search(frequencies))
    }

    /// Exact substring test with the configured alphabet and table layout
    pub fn contains(&self, pattern: &str, text: &str) -> Result<bool> {
        Ok(contains_with(
            pattern.as_bytes(),
            text.as_bytes(),
            &self.config.matcher,
        )?)
    }

    /// Preprocess `pattern` once for repeated matching
    pub fn matcher(&self, pattern: &str) -> Result<PatternMatcher<u8>> {
        PatternMatcher::with_config(pattern.as_bytes(), &self.config.matcher).map_err(Error::from)
    }
}
