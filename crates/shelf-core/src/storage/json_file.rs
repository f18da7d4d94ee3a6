//! JSON snapshot file store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

use super::traits::LibraryStore;
use crate::error::Result;
use crate::fs::write_atomic;
use crate::library::Library;

const INDENT: &[u8] = b"    ";

/// Library persisted as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encode a library the way it is written to disk.
    pub fn encode(library: &Library) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        library.serialize(&mut serializer)?;
        Ok(buffer)
    }
}

impl LibraryStore for JsonFileStore {
    fn load(&self) -> Library {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot found, starting empty");
                return Library::new();
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "snapshot unreadable, starting empty");
                return Library::new();
            }
        };

        match serde_json::from_str::<Library>(&contents) {
            Ok(library) => {
                debug!(path = %self.path.display(), books = library.len(), "loaded snapshot");
                library
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "snapshot corrupt, starting empty");
                Library::new()
            }
        }
    }

    fn save(&self, library: &Library) -> Result<()> {
        let encoded = Self::encode(library)?;
        write_atomic(&self.path, &encoded)?;
        debug!(path = %self.path.display(), books = library.len(), "saved snapshot");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
