//! Archive routing: ensure the partition directory, then move the file
//!
//! Every failure here is contained as a [`RouteError`] and reported by the
//! dispatcher; one bad file must never stop the watch loop.

use crate::classify::Partition;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A move that could not be completed.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("failed to create partition directory {dir}: {source}")]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("destination already exists: {dest}")]
    Collision { dest: PathBuf },
    #[error("failed to move {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("source is a directory, not a file: {path}")]
    IsDirectory { path: PathBuf },
    #[error("source path has no file name: {path}")]
    NoFileName { path: PathBuf },
}

/// Moves accepted files into `archive_root/year/month/`, preserving the
/// original file name.
pub struct ArchiveRouter {
    archive_root: PathBuf,
}

impl ArchiveRouter {
    pub fn new(archive_root: impl Into<PathBuf>) -> Self {
        Self {
            archive_root: archive_root.into(),
        }
    }

    pub fn archive_root(&self) -> &Path {
        &self.archive_root
    }

    /// Move `source` into the partition directory, creating missing
    /// directory levels first.
    ///
    /// Directory creation is idempotent and safe under concurrent callers
    /// for the same or different partitions. An existing destination is a
    /// [`RouteError::Collision`]: `fs::rename` would silently replace it,
    /// which is not acceptable for an archive.
    pub fn route(&self, source: &Path, partition: &Partition) -> Result<PathBuf, RouteError> {
        let file_name = source.file_name().ok_or_else(|| RouteError::NoFileName {
            path: source.to_path_buf(),
        })?;

        // Only files are archived. A plain rename would happily relocate a
        // whole directory whose name happens to classify.
        if source.is_dir() {
            return Err(RouteError::IsDirectory {
                path: source.to_path_buf(),
            });
        }

        let dest_dir = self.archive_root.join(partition.relative_dir());
        fs::create_dir_all(&dest_dir).map_err(|source| RouteError::CreateDir {
            dir: dest_dir.clone(),
            source,
        })?;

        let dest = dest_dir.join(file_name);
        if dest.exists() {
            return Err(RouteError::Collision { dest });
        }

        fs::rename(source, &dest).map_err(|io_err| RouteError::Move {
            from: source.to_path_buf(),
            to: dest.clone(),
            source: io_err,
        })?;

        Ok(dest)
    }
}
