//! Deciding which tokens are counted, and under which key

use super::stop_words::StopWords;

/// Default minimum word length in characters
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// Length, stop-word and case rules applied to each token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFilter {
    /// Minimum token length in characters
    pub min_len: usize,
    /// Keep the original case as the counting key
    pub case_sensitive: bool,
    /// Words never counted
    pub stop_words: StopWords,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_WORD_LEN,
            case_sensitive: false,
            stop_words: StopWords::english(),
        }
    }
}

impl WordFilter {
    /// Counting key for `token`, or `None` if the token is dropped
    ///
    /// Stop words are always looked up by their lowercase form.
    pub fn normalize(&self, token: &str) -> Option<String> {
        if token.chars().count() < self.min_len {
            return None;
        }

        let lowercase = token.to_lowercase();
        if self.stop_words.contains(&lowercase) {
            return None;
        }

        if self.case_sensitive {
            Some(token.to_string())
        } else {
            Some(lowercase)
        }
    }
}
