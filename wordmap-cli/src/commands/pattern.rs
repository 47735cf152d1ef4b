//! Direct substring test between two strings

use anyhow::Result;
use clap::Args;
use wordmap_core::{MatcherConfig, PatternMatcher, TableKind};

/// Arguments for the `match` command
#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Pattern to look for
    pub pattern: String,

    /// Text to search
    pub text: String,

    /// Compare ASCII letters case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Alphabet size of the last-occurrence table
    #[arg(long, value_name = "N")]
    pub alphabet_size: Option<usize>,

    /// Table layout: auto, dense or sparse
    #[arg(long, default_value = "auto")]
    pub table: TableKind,

    /// Also print the match offset and scan counters
    #[arg(long)]
    pub stats: bool,
}

impl MatchArgs {
    /// Print whether the pattern occurs in the text
    ///
    /// Returns the answer so the caller can pick the exit status.
    pub fn execute(&self) -> Result<bool> {
        let config = MatcherConfig {
            alphabet_size: self.alphabet_size,
            table: self.table,
        };

        let (pattern, text) = if self.ignore_case {
            (
                self.pattern.to_ascii_lowercase(),
                self.text.to_ascii_lowercase(),
            )
        } else {
            (self.pattern.clone(), self.text.clone())
        };

        let matcher = PatternMatcher::with_config(pattern.as_bytes(), &config)?;
        log::debug!(
            "Built {} table for a {}-byte pattern",
            matcher.table().kind(),
            pattern.len()
        );

        let stats = matcher.scan_stats(text.as_bytes());
        let found = stats.match_offset.is_some();

        println!("{found}");
        if self.stats {
            match stats.match_offset {
                Some(offset) => println!("offset: {offset}"),
                None => println!("offset: none"),
            }
            println!("alignments: {}", stats.alignments);
            println!("comparisons: {}", stats.comparisons);
        }

        Ok(found)
    }
}
