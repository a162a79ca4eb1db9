//! Library Session Use Case
//!
//! Loads the engine from a snapshot repository, lets a command run against
//! it, and writes it back only when something changed.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::application::LibraryEngine;
use crate::domain::ports::{SnapshotError, SnapshotRepository};
use crate::error::LibraryError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// The stored snapshot cannot be rebuilt into a consistent engine
    #[error("library file {path} is inconsistent: {source}")]
    Inconsistent {
        path: PathBuf,
        #[source]
        source: LibraryError,
    },
}

/// A library stored at one path, behind a snapshot repository
pub struct LibrarySession<R>
where
    R: SnapshotRepository,
{
    repo: R,
    path: PathBuf,
}

impl<R> LibrarySession<R>
where
    R: SnapshotRepository,
{
    pub fn new(repo: R, path: impl Into<PathBuf>) -> Self {
        Self {
            repo,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a library has been saved at this path
    pub fn exists(&self) -> bool {
        self.repo.exists(&self.path)
    }

    /// Load the engine. A missing file yields an empty library.
    pub fn open(&self) -> Result<LibraryEngine, SessionError> {
        let snapshot = self.repo.load(&self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            users = snapshot.users.len(),
            works = snapshot.works.len(),
            day = snapshot.current_date,
            "loaded library"
        );
        LibraryEngine::from_snapshot(snapshot).map_err(|source| SessionError::Inconsistent {
            path: self.path.clone(),
            source,
        })
    }

    /// Save the engine if it changed. Returns whether anything was written.
    pub fn commit(&self, engine: &mut LibraryEngine) -> Result<bool, SessionError> {
        if !engine.is_dirty() {
            tracing::debug!(path = %self.path.display(), "library unchanged, not saving");
            return Ok(false);
        }
        self.repo.save(&engine.snapshot(), &self.path)?;
        engine.mark_clean();
        tracing::info!(path = %self.path.display(), "saved library");
        Ok(true)
    }

    /// Save the engine unconditionally
    pub fn save(&self, engine: &mut LibraryEngine) -> Result<(), SessionError> {
        self.repo.save(&engine.snapshot(), &self.path)?;
        engine.mark_clean();
        tracing::info!(path = %self.path.display(), "saved library");
        Ok(())
    }
}
