// src/core/lines.rs
use std::fs::File;
use std::io::{self, BufRead as _, BufReader};
use std::path::Path;

/// Supplies the lines of a file, one at a time.
///
/// Implementations must be shareable across the file pool; each call to
/// [`LineSource::open`] returns an independent line stream.
pub trait LineSource: Send + Sync {
    type Lines: Iterator<Item = io::Result<String>> + Send;

    /// Opens `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    fn open(&self, path: &Path) -> io::Result<Self::Lines>;
}

/// Reads UTF-8 files from disk through a buffered reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLineSource;

impl LineSource for FsLineSource {
    type Lines = io::Lines<BufReader<File>>;

    #[inline]
    fn open(&self, path: &Path) -> io::Result<Self::Lines> {
        let file = File::open(path)?;
        Ok(BufReader::new(file).lines())
    }
}
