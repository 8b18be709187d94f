// src/core/scanner.rs
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::error::WordstatError;

/// Lists the regular files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. Symlinks are followed, so a link
/// to a regular file counts as a file. A link whose target is missing is not
/// a regular file and is skipped.
///
/// # Errors
///
/// This function returns an error if:
/// * `dir` does not exist
/// * `dir` is not a directory
/// * The directory cannot be read
/// * `dir` contains no regular files
#[inline]
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, WordstatError> {
    if !dir.exists() {
        return Err(WordstatError::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(WordstatError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_dangling_link(&err) => {
                warn!(path = ?err.path(), "skipping broken symlink");
                continue;
            }
            Err(source) => {
                return Err(WordstatError::Walk {
                    path: dir.to_path_buf(),
                    source,
                });
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(WordstatError::NoFiles(dir.to_path_buf()));
    }
    Ok(files)
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.depth() == 1
        && err
            .io_error()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

/// Display name of a file: its final path component.
#[inline]
#[must_use]
pub fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
