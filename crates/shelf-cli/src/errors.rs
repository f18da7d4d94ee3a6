//! CLI error types the menu loop reports without ending the session.

use std::fmt;
use std::path::PathBuf;

use shelf_core::ShelfError;

/// Errors that are shown to the user while the menu keeps running.
#[derive(Debug)]
pub enum CliError {
    /// The library changed in memory but the snapshot write failed.
    PersistFailed { path: PathBuf, source: ShelfError },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::PersistFailed { path, source } => write!(
                f,
                "Could not save library to {}: {}\nChanges are kept in memory for this session but are not on disk.",
                path.display(),
                source
            ),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::PersistFailed { source, .. } => Some(source),
        }
    }
}

impl CliError {
    pub fn persist_failed(path: impl Into<PathBuf>, source: ShelfError) -> Self {
        CliError::PersistFailed {
            path: path.into(),
            source,
        }
    }
}
