//! WordMap command-line interface

use clap::Parser;
use std::process::ExitCode;
use wordmap_cli::commands::{init_logging, Commands};

/// Word frequency and substring search over text files
#[derive(Debug, Parser)]
#[command(name = "wordmap", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress bars and log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    log::debug!("Arguments: {:?}", cli);

    match cli.command.execute(cli.quiet) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
