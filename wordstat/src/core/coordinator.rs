// src/core/coordinator.rs
use anyhow::Result;
use crossbeam_channel::unbounded;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::core::file_processor::FileProcessor;
use crate::core::lines::LineSource;
use crate::core::partition::{batch_count, batches};
use crate::core::pools::WorkerPools;
use crate::core::scanner::file_name;
use crate::error::{FileError, WordstatError, panic_message};
use crate::models::{BatchInfo, BatchReport, FileOutcome, RunSummary, TextStats, WorkerId};
use crate::report::Reporter;

/// Drives a run: files are split into batches, every batch is processed on
/// the file pool, and batches follow one another strictly in order.
#[derive(Debug)]
pub struct BatchCoordinator<S> {
    source: S,
    pools: WorkerPools,
    batch_size: usize,
    chunk_size: usize,
    fail_fast: bool,
}

impl<S: LineSource> BatchCoordinator<S> {
    /// Creates a coordinator and its two worker pools.
    ///
    /// # Errors
    ///
    /// Returns an error if a worker pool cannot be built.
    #[inline]
    pub fn new(source: S, settings: &Settings) -> Result<Self, WordstatError> {
        Ok(Self {
            source,
            pools: WorkerPools::new(settings.workers)?,
            batch_size: settings.batch_size.get(),
            chunk_size: settings.chunk_size.get(),
            fail_fast: settings.fail_fast,
        })
    }

    /// Processes `files` batch by batch and hands every finished batch, and
    /// finally the grand total, to `reporter`.
    ///
    /// A file that fails is logged, reported with its batch and left out of
    /// every total. When `fail_fast` is set the run stops after the batch
    /// containing the first failure has been reported.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// * The reporter fails to write
    /// * A file fails and `fail_fast` is set
    pub fn run<R: Reporter + ?Sized>(&self, files: &[PathBuf], reporter: &mut R) -> Result<RunSummary> {
        let batch_total = batch_count(files.len(), self.batch_size);
        info!(
            files = files.len(),
            batches = batch_total,
            workers = self.pools.workers(),
            "starting run"
        );
        reporter.run_started(files.len(), batch_total)?;

        let mut total = TextStats::new("All Files");
        let mut failed = Vec::new();

        for (info, batch) in batches(files, self.batch_size) {
            reporter.batch_started(&info)?;
            let report = self.process_batch(info, batch);

            // Single writer: only this thread ever touches the grand total.
            total.merge(report.stats.clone());
            for err in report.failures() {
                warn!(file = %err.path().display(), error = %err, "skipping file");
                failed.push(err.path().to_path_buf());
            }
            reporter.batch_finished(&report)?;
            info!(batch = info.index, lines = report.stats.lines, "batch complete");

            if self.fail_fast {
                if let Some(FileOutcome {
                    path,
                    result: Err(source),
                    ..
                }) = report.files.into_iter().find(|f| f.result.is_err())
                {
                    return Err(WordstatError::File { path, source }.into());
                }
            }
        }

        reporter.finished(&total)?;
        Ok(RunSummary {
            batches: batch_total,
            files: files.len(),
            failed,
            total,
        })
    }

    /// Submits every file of the batch to the file pool, waits for all of
    /// them and merges the successful ones into the batch accumulator.
    fn process_batch(&self, info: BatchInfo, batch: &[PathBuf]) -> BatchReport {
        let processor = FileProcessor::new(&self.source, &self.pools.chunks, self.chunk_size);
        let (tx, rx) = unbounded::<(usize, FileOutcome)>();

        self.pools.files.in_place_scope(|scope| {
            for (position, path) in batch.iter().enumerate() {
                let tx = tx.clone();
                let processor = &processor;
                scope.spawn(move |_| {
                    let worker = WorkerId::current();
                    let result = panic::catch_unwind(AssertUnwindSafe(|| processor.process(path)))
                        .unwrap_or_else(|payload| {
                            Err(FileError::Task {
                                path: path.clone(),
                                message: panic_message(payload.as_ref()),
                            })
                        });
                    let outcome = FileOutcome {
                        path: path.clone(),
                        name: file_name(path),
                        worker,
                        result,
                    };
                    // The receiver is held until the scope has joined.
                    let _ = tx.send((position, outcome));
                });
            }
        });
        drop(tx);

        let mut stats = TextStats::new(format!("Batch {}", info.index));
        let mut slots: Vec<Option<FileOutcome>> = batch.iter().map(|_| None).collect();

        // Completion order; the merge does not depend on it.
        for (position, outcome) in rx {
            if let Ok(file_stats) = &outcome.result {
                debug!(file = %outcome.name, worker = ?outcome.worker, "file complete");
                stats.merge(file_stats.clone());
            }
            if let Some(slot) = slots.get_mut(position) {
                *slot = Some(outcome);
            }
        }

        BatchReport {
            info,
            files: slots.into_iter().flatten().collect(),
            stats,
        }
    }
}
