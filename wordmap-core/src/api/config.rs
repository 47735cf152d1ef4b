//! Configuration API for word counting and matching

use crate::api::Error;
use crate::matcher::{MatcherConfig, TableKind};
use crate::text::{StopWords, WordFilter};

/// Default configuration constants
pub mod defaults {
    /// Minimum counted word length in characters
    pub const MIN_WORD_LEN: usize = crate::text::DEFAULT_MIN_WORD_LEN;

    /// Number of words reported by a top-N listing
    pub const TOP_WORDS: usize = 10;
}

/// Processing configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) matcher: MatcherConfig,
    pub(crate) filter: WordFilter,
    pub(crate) threads: Option<usize>, // None = all available threads
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Matcher settings
    pub fn matcher(&self) -> &MatcherConfig {
        &self.matcher
    }

    /// Word filter settings
    pub fn filter(&self) -> &WordFilter {
        &self.filter
    }

    /// Worker thread count (None = all available)
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.matcher.alphabet_size == Some(0) {
            return Err(Error::Configuration(
                "alphabet_size must be greater than 0".into(),
            ));
        }

        if self.filter.min_len == 0 {
            return Err(Error::Configuration(
                "min_word_len must be greater than 0".into(),
            ));
        }

        if self.threads == Some(0) {
            return Err(Error::Configuration(
                "threads must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    alphabet_size: Option<usize>,
    table: Option<TableKind>,
    min_word_len: Option<usize>,
    case_sensitive: Option<bool>,
    stop_words: Option<StopWords>,
    extra_stop_words: Vec<String>,
    threads: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the matcher alphabet size
    pub fn alphabet_size(mut self, size: usize) -> Self {
        self.alphabet_size = Some(size);
        self
    }

    /// Set the last-occurrence table layout
    pub fn table(mut self, kind: TableKind) -> Self {
        self.table = Some(kind);
        self
    }

    /// Set the minimum counted word length
    pub fn min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = Some(len);
        self
    }

    /// Keep word case when counting and searching
    pub fn case_sensitive(mut self, yes: bool) -> Self {
        self.case_sensitive = Some(yes);
        self
    }

    /// Replace the stop-word set
    pub fn stop_words(mut self, words: StopWords) -> Self {
        self.stop_words = Some(words);
        self
    }

    /// Add words to the stop-word set
    pub fn extra_stop_words<I, W>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.extra_stop_words
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if self.alphabet_size.is_some() {
            config.matcher.alphabet_size = self.alphabet_size;
        }

        if let Some(kind) = self.table {
            config.matcher.table = kind;
        }

        if let Some(len) = self.min_word_len {
            config.filter.min_len = len;
        }

        if let Some(yes) = self.case_sensitive {
            config.filter.case_sensitive = yes;
        }

        if let Some(words) = self.stop_words {
            config.filter.stop_words = words;
        }

        if !self.extra_stop_words.is_empty() {
            config.filter.stop_words = config.filter.stop_words.extended(&self.extra_stop_words);
        }

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}
