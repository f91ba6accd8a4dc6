//! Binary crate for the `surf` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Human-friendly output formatting

use std::process;

use clap::Parser;

mod cli;
mod logging;
mod output;

#[tokio::main]
async fn main() {
    let cmd = cli::Cli::parse();
    logging::init(cmd.verbose);

    if let Err(e) = cmd.run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
