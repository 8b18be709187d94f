// src/cli.rs
use clap::{ArgAction, Parser};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::report::Format;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the text files to analyze
    pub directory: PathBuf,

    /// Number of files processed together in one batch
    #[arg(short, long, default_value = "5")]
    pub batch_size: NonZeroUsize,

    /// Number of lines analyzed as one unit of work
    #[arg(short, long, default_value = "100")]
    pub chunk_size: NonZeroUsize,

    /// Threads per worker pool (defaults to available parallelism)
    #[arg(short = 'j', long)]
    pub workers: Option<NonZeroUsize>,

    /// Number of most frequent words to show per summary
    #[arg(short, long, default_value = "5")]
    pub top: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Stop after the first batch containing a file that failed
    #[arg(long)]
    pub fail_fast: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
