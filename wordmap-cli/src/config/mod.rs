//! Configuration module
//!
//! Settings are read from an optional TOML file. Command-line flags take
//! precedence over file values.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wordmap_core::{ConfigBuilder, StopWords, TableKind};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Matcher configuration
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Word filtering configuration
    #[serde(default)]
    pub words: WordsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Matcher-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MatchingConfig {
    /// Alphabet size for the last-occurrence table (absent = 256)
    pub alphabet_size: Option<usize>,

    /// Table layout: auto, dense or sparse
    pub table: TableKind,

    /// Keep word case when counting and searching
    pub case_sensitive: bool,
}

/// Word filtering configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WordsConfig {
    /// Minimum word length in characters
    pub min_length: usize,

    /// Replacement stop-word list (absent = built-in English list)
    pub stop_words: Option<Vec<String>>,

    /// Words added to the stop-word list
    pub extra_stop_words: Vec<String>,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            min_length: wordmap_core::defaults::MIN_WORD_LEN,
            stop_words: None,
            extra_stop_words: Vec::new(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Number of words listed by `top`
    pub top: usize,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            top: wordmap_core::defaults::TOP_WORDS,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e.message()))
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Core configuration builder seeded from the file values
    pub fn core_builder(&self) -> ConfigBuilder {
        let mut builder = ConfigBuilder::new()
            .table(self.matching.table)
            .case_sensitive(self.matching.case_sensitive)
            .min_word_len(self.words.min_length)
            .extra_stop_words(self.words.extra_stop_words.iter().cloned());

        if let Some(size) = self.matching.alphabet_size {
            builder = builder.alphabet_size(size);
        }

        if let Some(words) = &self.words.stop_words {
            builder = builder.stop_words(StopWords::from_words(words));
        }

        if self.performance.worker_threads > 0 {
            builder = builder.threads(Some(self.performance.worker_threads));
        }

        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.words.min_length, 4);
        assert_eq!(config.output.top, 10);
        assert_eq!(config.output.default_format, "text");
        assert_eq!(config.matching.table, TableKind::Auto);
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[matching]
table = "sparse"
case_sensitive = true

[words]
min_length = 3
extra_stop_words = ["lorem", "ipsum"]

[output]
top = 5
"#
        )
        .unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.matching.table, TableKind::Sparse);
        assert!(config.matching.case_sensitive);
        assert_eq!(config.matching.alphabet_size, None);
        assert_eq!(config.words.min_length, 3);
        assert_eq!(config.words.extra_stop_words, vec!["lorem", "ipsum"]);
        assert_eq!(config.output.top, 5);
        assert!(config.output.pretty_json);

        let core = config.core_builder().build().unwrap();
        assert_eq!(core.filter().min_len, 3);
        assert!(core.filter().stop_words.contains("lorem"));
        assert!(core.filter().stop_words.contains("about"));
    }

    #[test]
    fn test_replacement_stop_words() {
        let config: CliConfig = toml::from_str(
            r#"
[words]
stop_words = ["river"]

[performance]
worker_threads = 2
"#,
        )
        .unwrap();

        let core = config.core_builder().build().unwrap();
        assert_eq!(core.filter().stop_words.sorted(), vec!["river"]);
        assert_eq!(core.threads(), Some(2));
    }

    #[test]
    fn test_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[matching]\ntable = \"tree\"\n").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/wordmap.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
