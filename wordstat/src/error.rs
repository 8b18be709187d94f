// src/error.rs
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that stop a run before or between batches.
#[derive(Debug, Error)]
pub enum WordstatError {
    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("No files found in the directory: {}", .0.display())]
    NoFiles(PathBuf),

    #[error("Failed to list {}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to build {name} thread pool")]
    Pool {
        name: &'static str,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },

    #[error("Processing {} failed", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: FileError,
    },
}

/// Failure of a single file. Aborts that file's contribution only.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Task processing {} panicked: {message}", .path.display())]
    Task { path: PathBuf, message: String },
}

impl FileError {
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Task { path, .. } => path,
        }
    }
}

/// Turns a caught panic payload into something printable.
#[must_use]
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| String::from("unknown panic"))
}
