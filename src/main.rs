//! wordtally - A CLI tool that tallies word frequencies in a text file
//!
//! wordtally provides:
//! - Tokenization of text into maximal word/separator runs
//! - Case-sensitive word frequency counting
//! - Report rendering as HTML (default), plain text, or JSON

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
