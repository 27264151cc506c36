//! # gradle-mvn-repo CLI
//!
//! This is the binary entry point for the `gradle-mvn-repo` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Running the conversion and reporting errors to the user.
//!
//! The conversion itself lives in the library crate; the binary is a thin
//! wrapper around it.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
