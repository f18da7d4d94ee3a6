//! Storage trait definition.

use std::path::Path;

use crate::error::Result;
use crate::library::Library;

/// Snapshot store for a whole library.
///
/// Implementations must ensure:
/// - `save` replaces the previous snapshot in full
/// - `load` after a successful `save` returns an equal library, in order
pub trait LibraryStore {
    /// Load the persisted library.
    ///
    /// A missing or unreadable snapshot yields an empty library; the
    /// cause is logged but never returned.
    fn load(&self) -> Library;

    /// Persist the full library, overwriting the previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if the snapshot cannot be written, or
    /// `ShelfError::Serialization` if encoding fails.
    fn save(&self, library: &Library) -> Result<()>;

    /// Where the snapshot lives, for user-facing messages.
    fn location(&self) -> &Path;
}
