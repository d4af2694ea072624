#![deny(missing_docs)]

//! # OAS Filter CLI
//!
//! Command Line Interface for filtering OpenAPI documents.
//!
//! Supported Commands:
//! - `filter`: Load a document, apply the configured filters, write it back.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod error;
mod filter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI document filter")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence when set.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply filters to an OpenAPI document.
    Filter(filter::FilterArgs),
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Filter(args) => filter::execute(args)?,
    }

    Ok(())
}
