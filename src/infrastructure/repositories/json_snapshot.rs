//! JSON Snapshot Repository
//!
//! Persists the library as a single JSON document:
//!
//! ```json
//! { "version": 1, "saved_at": "...", "checksum": "sha256:...", "library": { ... } }
//! ```
//!
//! The checksum covers the compact serialization of `library`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::domain::entities::LibrarySnapshot;
use crate::domain::ports::{SnapshotError, SnapshotRepository, SnapshotResult};

/// Current on-disk format version
pub const FORMAT_VERSION: u32 = 1;

const CHECKSUM_PREFIX: &str = "sha256:";

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<L> {
    version: u32,
    saved_at: DateTime<Utc>,
    checksum: String,
    library: L,
}

/// Only the version, so old or future files fail with a clear error
/// instead of a parse error deep inside `library`.
#[derive(Debug, Deserialize)]
struct VersionHeader {
    version: u32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSnapshotRepository;

impl JsonSnapshotRepository {
    pub fn new() -> Self {
        Self
    }

    fn lock_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        path.with_file_name(name)
    }

    fn write_to_disk(&self, snapshot: &LibrarySnapshot, path: &Path) -> SnapshotResult<()> {
        let envelope = Envelope {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            checksum: checksum(snapshot)?,
            library: snapshot,
        };
        let content = serde_json::to_string_pretty(&envelope).map_err(|e| {
            SnapshotError::SerializationError {
                message: e.to_string(),
            }
        })?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| access(path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| access(path, e))?;
        tmp.persist(path).map_err(|e| access(path, e.error))?;
        Ok(())
    }
}

impl SnapshotRepository for JsonSnapshotRepository {
    fn load(&self, path: &Path) -> SnapshotResult<LibrarySnapshot> {
        if !path.exists() {
            return Ok(LibrarySnapshot::new());
        }

        let content = fs::read_to_string(path).map_err(|e| access(path, e))?;
        let corrupted = |e: serde_json::Error| SnapshotError::Corrupted {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let header: VersionHeader = serde_json::from_str(&content).map_err(corrupted)?;
        if header.version != FORMAT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                path: path.to_path_buf(),
                found: header.version,
                expected: FORMAT_VERSION,
            });
        }

        let envelope: Envelope<LibrarySnapshot> =
            serde_json::from_str(&content).map_err(corrupted)?;
        if checksum(&envelope.library)? != envelope.checksum {
            return Err(SnapshotError::ChecksumMismatch {
                path: path.to_path_buf(),
            });
        }

        Ok(envelope.library)
    }

    fn save(&self, snapshot: &LibrarySnapshot, path: &Path) -> SnapshotResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| access(path, e))?;
        }

        let lock_path = Self::lock_path(path);
        let lock_file = fs::File::create(&lock_path).map_err(|e| access(&lock_path, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| access(&lock_path, e))?;

        let result = self.write_to_disk(snapshot, path);

        let _ = lock_file.unlock();
        result
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn access(path: &Path, e: std::io::Error) -> SnapshotError {
    SnapshotError::AccessError {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn checksum(snapshot: &LibrarySnapshot) -> SnapshotResult<String> {
    let bytes = serde_json::to_vec(snapshot).map_err(|e| SnapshotError::SerializationError {
        message: e.to_string(),
    })?;
    Ok(format!("{}{:x}", CHECKSUM_PREFIX, Sha256::digest(&bytes)))
}
