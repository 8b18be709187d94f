// src/core/pools.rs
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::num::NonZeroUsize;
use std::thread;

use crate::error::WordstatError;

/// The two independent worker pools: one runs whole files, the other runs
/// chunks of lines. Keeping them apart means a file waiting on its chunks
/// never occupies a slot that chunk work needs.
#[derive(Debug)]
pub struct WorkerPools {
    pub files: ThreadPool,
    pub chunks: ThreadPool,
}

impl WorkerPools {
    /// Builds both pools with `workers` threads each.
    ///
    /// # Errors
    ///
    /// Returns an error if the operating system refuses to spawn the threads.
    #[inline]
    pub fn new(workers: NonZeroUsize) -> Result<Self, WordstatError> {
        Ok(Self {
            files: build("file", workers)?,
            chunks: build("chunk", workers)?,
        })
    }

    #[inline]
    #[must_use]
    pub fn workers(&self) -> usize {
        self.files.current_num_threads()
    }
}

/// Host parallelism, falling back to a single worker when it is unknown.
#[inline]
#[must_use]
pub fn available_workers() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

fn build(name: &'static str, workers: NonZeroUsize) -> Result<ThreadPool, WordstatError> {
    ThreadPoolBuilder::new()
        .num_threads(workers.get())
        .thread_name(move |index| format!("{name}-worker-{index}"))
        .build()
        .map_err(|source| WordstatError::Pool { name, source })
}
