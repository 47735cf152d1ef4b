//! Arguments and steps shared by the file-processing commands

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordmap_core::{StopWords, WordFrequencies, WordMap};

/// Input, filtering and output options
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "WORDMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum word length in characters
    #[arg(long, value_name = "N")]
    pub min_len: Option<usize>,

    /// Stop-word list, one word per line (replaces the built-in list)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Keep word case instead of lowercasing
    #[arg(long)]
    pub case_sensitive: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `word: count` per line
    Text,
    /// JSON array of ranked words
    Json,
    /// Markdown table
    Markdown,
}

impl InputArgs {
    /// Load the configuration file, if any
    pub fn load_config(&self) -> Result<CliConfig> {
        CliConfig::load_or_default(self.config.as_deref())
    }

    /// Build the processor from file values and command-line overrides
    pub fn word_map(&self, file_config: &CliConfig) -> Result<WordMap> {
        let mut builder = file_config.core_builder();

        if let Some(len) = self.min_len {
            builder = builder.min_word_len(len);
        }

        if self.case_sensitive {
            builder = builder.case_sensitive(true);
        }

        if let Some(path) = &self.stop_words {
            let content = FileReader::read_text(path).context("Failed to load stop words")?;
            let stop_words = StopWords::parse_list(&content);
            log::info!("Loaded {} stop words from {}", stop_words.len(), path.display());
            builder = builder.stop_words(stop_words);
        }

        if let Some(threads) = self.threads {
            builder = builder.threads(Some(threads));
        }

        Ok(WordMap::with_config(builder.build()?)?)
    }

    /// Read every input file and count its words
    pub fn count(&self, word_map: &WordMap, quiet: bool) -> Result<WordFrequencies> {
        let files = resolve_patterns(&self.input)?;

        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);
        let batch = FileReader::read_all(&files, |path| progress.file_completed(path));
        progress.finish();

        if batch.documents.is_empty() {
            return Err(CliError::NoReadableInput(files.len()).into());
        }
        if !batch.failed.is_empty() {
            log::warn!("Skipped {} unreadable file(s)", batch.failed.len());
        }

        let frequencies = word_map.count_documents(&batch.documents)?;
        log::info!(
            "Counted {} words ({} distinct) in {} file(s)",
            frequencies.total(),
            frequencies.len(),
            batch.documents.len()
        );

        Ok(frequencies)
    }

    /// Output format from the flag, else from the configuration file
    pub fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => <OutputFormat as ValueEnum>::from_str(&config.output.default_format, true)
                .map_err(|_| {
                    anyhow::Error::from(CliError::ConfigError(format!(
                        "unknown output format: {}",
                        config.output.default_format
                    )))
                }),
        }
    }

    /// Formatter writing to the output file or stdout
    pub fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match self.output_format(config)? {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
    }
}
