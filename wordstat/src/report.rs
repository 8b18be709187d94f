// src/report.rs
pub mod console;
pub mod json;

use anyhow::Result;
use std::io::Write;

use crate::models::{BatchInfo, BatchReport, TextStats};

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Receives finished statistics, in run order.
///
/// Events for batch N are all delivered before any event of batch N+1.
/// Everything handed over is complete and no longer mutated.
pub trait Reporter {
    /// Called once before the first batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn run_started(&mut self, total_files: usize, batches: usize) -> Result<()>;

    /// Called before any file of the batch is submitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn batch_started(&mut self, info: &BatchInfo) -> Result<()>;

    /// Called after every file of the batch has completed.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn batch_finished(&mut self, report: &BatchReport) -> Result<()>;

    /// Called once with the grand total after the last batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn finished(&mut self, total: &TextStats) -> Result<()>;
}

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Builds the reporter for `format` writing to `out`.
#[inline]
pub fn reporter_for<'w, W: Write + 'w>(format: Format, out: W, top: usize) -> Box<dyn Reporter + 'w> {
    match format {
        Format::Text => Box::new(ConsoleReporter::new(out, top)),
        Format::Json => Box::new(JsonReporter::new(out, top)),
    }
}
