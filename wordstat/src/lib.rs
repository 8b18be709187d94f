// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;

use anyhow::{Context as _, Result};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub use crate::cli::Args;
pub use crate::config::Settings;
pub use crate::core::analyzer::analyze;
pub use crate::core::coordinator::BatchCoordinator;
pub use crate::core::file_processor::FileProcessor;
pub use crate::core::lines::{FsLineSource, LineSource};
pub use crate::core::scanner::list_files;
pub use crate::core::tokenizer::tokenize;
pub use crate::error::{FileError, WordstatError};
pub use crate::models::{BatchInfo, BatchReport, FileOutcome, RunSummary, Summary, TextStats, WorkerId};
pub use crate::report::{ConsoleReporter, Format, JsonReporter, Reporter, reporter_for};

/// Analyzes every regular file directly inside `dir`.
///
/// # Arguments
///
/// * `dir` - The directory whose files are analyzed
/// * `source` - Supplies the lines of each file
/// * `settings` - Batch, chunk and pool sizes
/// * `reporter` - Receives every finished batch and the grand total
///
/// # Returns
///
/// * `Ok(RunSummary)` - Totals of the run and the files that failed
///
/// # Errors
///
/// This function may return an error if:
/// * The directory does not exist or is not a directory
/// * The directory contains no regular files
/// * The worker pools cannot be created
/// * The reporter fails to write
/// * A file fails while `fail_fast` is set
#[inline]
pub fn analyze_directory<S, R>(
    dir: &Path,
    source: S,
    settings: &Settings,
    reporter: &mut R,
) -> Result<RunSummary>
where
    S: LineSource,
    R: Reporter + ?Sized,
{
    let files = list_files(dir)?;
    info!(directory = %dir.display(), files = files.len(), "found files");

    let coordinator = BatchCoordinator::new(source, settings)?;
    coordinator
        .run(&files, reporter)
        .with_context(|| format!("Failed to analyze directory: {}", dir.display()))
}

/// Runs the command line tool, writing the report to stdout.
///
/// # Errors
///
/// See [`run_with_output`].
#[inline]
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    run_with_output(&args, stdout.lock()).map(|_| ())
}

/// Runs the command line tool, writing the report to `out`.
///
/// An empty directory is not an error: a message is written and `Ok(None)`
/// is returned without processing anything.
///
/// # Errors
///
/// This function may return an error if:
/// * The directory does not exist or is not a directory
/// * The report cannot be written
/// * A file fails while `--fail-fast` is set
#[inline]
pub fn run_with_output<W: Write>(args: &Args, mut out: W) -> Result<Option<RunSummary>> {
    let settings = Settings::from(args);

    let outcome = {
        let mut reporter = reporter_for(settings.format, &mut out, settings.top);
        analyze_directory(&args.directory, FsLineSource, &settings, reporter.as_mut())
    };

    match outcome {
        Ok(summary) => Ok(Some(summary)),
        Err(err) => match err.downcast_ref::<WordstatError>() {
            Some(WordstatError::NoFiles(dir)) => {
                writeln!(out, "{}", WordstatError::NoFiles(dir.clone()))?;
                Ok(None)
            }
            _ => Err(err),
        },
    }
}
