//! Most frequent words command

use super::common::InputArgs;
use crate::output::write_ranked;
use anyhow::Result;
use clap::Args;

/// Arguments for the `top` command
#[derive(Debug, Args)]
pub struct TopArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of words to list (default: from config, else 10)
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,
}

impl TopArgs {
    /// Count the input files and print the most frequent words
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let config = self.input.load_config()?;
        let word_map = self.input.word_map(&config)?;

        let frequencies = self.input.count(&word_map, quiet)?;
        let top = frequencies.top(self.count.unwrap_or(config.output.top));

        let title = format!(
            "Top {} most frequent words in this document are:",
            top.len()
        );
        let mut formatter = self.input.formatter(&config)?;
        write_ranked(formatter.as_mut(), &title, &top)
    }
}
