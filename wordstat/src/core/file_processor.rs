// src/core/file_processor.rs
use crossbeam_channel::unbounded;
use rayon::ThreadPool;
use std::panic;
use std::path::Path;
use std::thread;
use tracing::debug;

use crate::core::analyzer::analyze;
use crate::core::lines::LineSource;
use crate::core::partition::Chunks;
use crate::core::scanner::file_name;
use crate::error::{FileError, panic_message};
use crate::models::TextStats;

/// Computes the statistics of one file by fanning its chunks out to the
/// chunk pool and merging the results.
#[derive(Debug)]
pub struct FileProcessor<'a, S> {
    source: &'a S,
    chunk_pool: &'a ThreadPool,
    chunk_size: usize,
    analyzer: fn(&[String]) -> TextStats,
}

impl<'a, S: LineSource> FileProcessor<'a, S> {
    #[inline]
    #[must_use]
    pub fn new(source: &'a S, chunk_pool: &'a ThreadPool, chunk_size: usize) -> Self {
        Self {
            source,
            chunk_pool,
            chunk_size: chunk_size.max(1),
            analyzer: analyze,
        }
    }

    /// Replaces the per-chunk analysis, so tests can make a chunk task fail.
    #[cfg(test)]
    fn with_analyzer(mut self, analyzer: fn(&[String]) -> TextStats) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Reads `path`, analyzes every chunk of lines on the chunk pool and
    /// returns the merged file statistics.
    ///
    /// Chunks are submitted as soon as they fill up. The call returns only
    /// after every submitted chunk has finished. The calling thread is the
    /// only one that touches the file accumulator.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// * The file cannot be opened or a line cannot be read. Chunks that
    ///   completed before the failure are discarded.
    /// * A chunk task panics.
    pub fn process(&self, path: &Path) -> Result<TextStats, FileError> {
        let lines = self.source.open(path).map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (tx, rx) = unbounded::<thread::Result<TextStats>>();
        let chunk_size = self.chunk_size;
        let analyzer = self.analyzer;

        let (submitted, read_error) = self.chunk_pool.in_place_scope(|scope| {
            let mut submitted = 0_usize;
            for chunk in Chunks::new(lines, chunk_size) {
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(err) => return (submitted, Some(err)),
                };
                let tx = tx.clone();
                submitted = submitted.saturating_add(1);
                scope.spawn(move |_| {
                    let result = panic::catch_unwind(move || analyzer(&chunk));
                    // The receiver is held until the scope has joined.
                    let _ = tx.send(result);
                });
            }
            (submitted, None)
        });
        drop(tx);

        if let Some(source) = read_error {
            return Err(FileError::Read {
                path: path.to_path_buf(),
                source,
            });
        }

        let mut stats = TextStats::new(file_name(path));
        for result in rx {
            match result {
                Ok(chunk) => stats.merge(chunk),
                Err(payload) => {
                    return Err(FileError::Task {
                        path: path.to_path_buf(),
                        message: panic_message(payload.as_ref()),
                    });
                }
            }
        }

        debug!(
            file = %path.display(),
            chunks = submitted,
            lines = stats.lines,
            "file analyzed"
        );
        Ok(stats)
    }
}
