//! Command-line arguments for the demo.
//!
//! Seed, run count and output format for the roll demo, parsed with `clap`.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seed for the random roll. A fresh OS seed is used when omitted.
    #[clap(long)]
    pub seed: Option<u64>,

    /// How many composed calls to run.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub runs: u32,

    /// Print every outcome as JSON instead of the text report.
    #[clap(long)]
    pub json: bool,
}
