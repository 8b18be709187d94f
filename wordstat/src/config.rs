// src/config.rs
use std::num::NonZeroUsize;

use crate::cli::Args;
use crate::core::pools::available_workers;
use crate::report::Format;

#[expect(clippy::unwrap_used, reason = "Evaluated at compile time")]
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();
#[expect(clippy::unwrap_used, reason = "Evaluated at compile time")]
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = NonZeroUsize::new(100).unwrap();
pub const DEFAULT_TOP: usize = 5;

/// Resolved run configuration. Built once from the command line and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Files processed together before the next batch starts.
    pub batch_size: NonZeroUsize,
    /// Lines per unit of chunk-level work.
    pub chunk_size: NonZeroUsize,
    /// Threads in each of the two pools.
    pub workers: NonZeroUsize,
    pub top: usize,
    pub format: Format,
    pub fail_fast: bool,
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            workers: available_workers(),
            top: DEFAULT_TOP,
            format: Format::default(),
            fail_fast: false,
        }
    }
}

impl From<&Args> for Settings {
    #[inline]
    fn from(args: &Args) -> Self {
        Self {
            batch_size: args.batch_size,
            chunk_size: args.chunk_size,
            workers: args.workers.unwrap_or_else(available_workers),
            top: args.top,
            format: args.format,
            fail_fast: args.fail_fast,
        }
    }
}
