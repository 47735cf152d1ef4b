//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::process::ExitCode;
use wordmap_core::StopWords;

pub mod common;
pub mod pattern;
pub mod search;
pub mod top;

pub use common::{InputArgs, OutputFormat};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the most frequent words of text files
    Top(top::TopArgs),

    /// List counted words containing a substring
    Search(search::SearchArgs),

    /// Test whether a pattern occurs in a text
    Match(pattern::MatchArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the built-in stop words
    StopWords,
}

impl Commands {
    /// Run the command
    ///
    /// `match` exits with 1 when the pattern is absent; every other
    /// successful run exits with 0.
    pub fn execute(&self, quiet: bool) -> Result<ExitCode> {
        match self {
            Commands::Top(args) => args.execute(quiet)?,
            Commands::Search(args) => args.execute(quiet)?,
            Commands::Match(args) => {
                return Ok(if args.execute()? {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(1)
                });
            }
            Commands::List { subcommand } => subcommand.execute(),
        }
        Ok(ExitCode::SUCCESS)
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text     - One 'word: count' per line");
                println!("  json     - JSON array with rank, word and count");
                println!("  markdown - Markdown table");
            }
            ListCommands::StopWords => {
                for word in StopWords::english().sorted() {
                    println!("{word}");
                }
            }
        }
    }
}

/// Initialize logging based on verbosity level
///
/// Call once, at startup.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();
}
