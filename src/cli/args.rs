// src/args.rs
use clap::Parser;

use crate::constants::DEFAULT_MIN_NOTES;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Minimum number of notes the collection must retain
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MIN_NOTES)]
    pub min_notes: usize,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
