//! SnapshotRepository port
//!
//! Lets the application load and save whole-library snapshots without
//! knowing the on-disk format.

use std::path::{Path, PathBuf};

use crate::domain::entities::LibrarySnapshot;

/// Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("failed to access library file {path}: {message}")]
    AccessError { path: PathBuf, message: String },

    #[error("failed to serialize library: {message}")]
    SerializationError { message: String },

    #[error(
        "library file corrupted: {path}\n  → Fix: restore a backup or start over with `lendlib init`\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },

    #[error("library file {path} has format version {found}, expected {expected}")]
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    #[error("library file {path} failed its integrity check")]
    ChecksumMismatch { path: PathBuf },
}

/// Abstract repository for library snapshots
pub trait SnapshotRepository {
    /// Load a snapshot, or an empty one if nothing is stored at `path`
    fn load(&self, path: &Path) -> SnapshotResult<LibrarySnapshot>;

    /// Save a snapshot, replacing whatever is stored at `path`
    fn save(&self, snapshot: &LibrarySnapshot, path: &Path) -> SnapshotResult<()>;

    /// Whether anything is stored at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Load a snapshot, falling back to an empty one on any error
    fn load_or_new(&self, path: &Path) -> LibrarySnapshot {
        self.load(path).unwrap_or_default()
    }
}
