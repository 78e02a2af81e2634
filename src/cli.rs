//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// A virtual machine for the LC-3 instruction set architecture.
#[derive(Debug, Parser)]
#[command(name = "lc3-vm", version, about)]
pub struct Cli {
    /// Object image(s) to load, in order, before execution starts.
    #[arg(required = true)]
    pub images: Vec<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
