// src/models/batch.rs
use std::fmt;
use std::path::PathBuf;

use crate::error::FileError;
use crate::models::TextStats;

/// Index of the file-pool worker that processed a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkerId(pub usize);

impl WorkerId {
    /// The worker running the current task, if called from inside a pool.
    #[inline]
    #[must_use]
    pub fn current() -> Option<Self> {
        rayon::current_thread_index().map(Self)
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file-worker-{}", self.0)
    }
}

/// Result of processing one file, tagged with the worker that ran it.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub name: String,
    pub worker: Option<WorkerId>,
    pub result: Result<TextStats, FileError>,
}

/// Position of a batch within the run. `first` and `last` are 1-based file
/// positions, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchInfo {
    pub index: usize,
    pub first: usize,
    pub last: usize,
    pub total_files: usize,
}

/// Everything known about a batch once all its files have completed.
#[derive(Debug)]
pub struct BatchReport {
    pub info: BatchInfo,
    /// Per-file outcomes in submission order.
    pub files: Vec<FileOutcome>,
    pub stats: TextStats,
}

impl BatchReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &TextStats> {
        self.files.iter().filter_map(|file| file.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileError> {
        self.files.iter().filter_map(|file| file.result.as_ref().err())
    }
}

/// What a finished run hands back to the caller.
#[derive(Debug)]
pub struct RunSummary {
    pub batches: usize,
    pub files: usize,
    pub failed: Vec<PathBuf>,
    pub total: TextStats,
}
