//! Splitting lines into word tokens

use regex::Regex;
use std::sync::LazyLock;

/// Runs of anything other than ASCII letters, digits and underscore
static WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("word separator pattern is valid"));

/// Split a line into its non-empty word tokens
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    WORD_SEPARATOR
        .split(line)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<&str> {
        tokenize(line).collect()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(
            tokens("The quick brown fox."),
            vec!["The", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn test_punctuation_runs() {
        assert_eq!(
            tokens("  well--known, (often) cited...  "),
            vec!["well", "known", "often", "cited"]
        );
    }

    #[test]
    fn test_word_characters_kept() {
        assert_eq!(tokens("snake_case x86 it's"), vec!["snake_case", "x86", "it", "s"]);
    }

    #[test]
    fn test_non_ascii_letters_separate() {
        assert_eq!(tokens("naïve café"), vec!["na", "ve", "caf"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokens("").is_empty());
        assert!(tokens(" \t ,;. ").is_empty());
    }
}
