//! Word search command

use super::common::InputArgs;
use crate::output::write_ranked;
use anyhow::Result;
use clap::Args;

/// Arguments for the `search` command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Substring to look for inside counted words
    pub query: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum number of words to list (default: all)
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,
}

impl SearchArgs {
    /// Count the input files and list the words containing the query
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let config = self.input.load_config()?;
        let word_map = self.input.word_map(&config)?;

        // Reject a bad query before touching any file
        let search = word_map.word_search(&self.query)?;

        let frequencies = self.input.count(&word_map, quiet)?;
        let mut hits = search.search(&frequencies);
        let found = hits.len();
        if let Some(limit) = self.limit {
            hits.truncate(limit);
        }

        let title = format!("Words containing \"{}\" ({found} found):", self.query);
        let mut formatter = self.input.formatter(&config)?;
        write_ranked(formatter.as_mut(), &title, &hits)
    }
}
