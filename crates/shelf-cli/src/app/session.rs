//! The menu loop's state: the in-memory library and its store.

use tracing::{debug, info};

use shelf_core::{Book, Library, LibraryStore};

use crate::errors::CliError;

/// In-memory library bound to the store it was loaded from.
///
/// Mutations change memory first and then rewrite the whole snapshot.
/// When the write fails the change stays in memory and
/// `CliError::PersistFailed` is returned.
pub struct Session<S: LibraryStore> {
    store: S,
    library: Library,
}

impl<S: LibraryStore> Session<S> {
    /// Load the library from `store`.
    pub fn open(store: S) -> Self {
        let library = store.load();
        info!(
            path = %store.location().display(),
            books = library.len(),
            "library loaded"
        );
        Self { store, library }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a book and persist.
    pub fn add(&mut self, book: Book) -> Result<(), CliError> {
        debug!(title = %book.title, "adding book");
        self.library.add(book);
        self.persist()
    }

    /// Remove the first book with a matching title and persist.
    ///
    /// Returns `Ok(None)` without touching the store when nothing matched.
    pub fn remove(&mut self, title: &str) -> Result<Option<Book>, CliError> {
        match self.library.remove_by_title(title) {
            Some(book) => {
                debug!(title = %book.title, "removed book");
                self.persist()?;
                Ok(Some(book))
            }
            None => {
                debug!(title, "no book to remove");
                Ok(None)
            }
        }
    }

    fn persist(&self) -> Result<(), CliError> {
        self.store
            .save(&self.library)
            .map_err(|err| CliError::persist_failed(self.store.location(), err))
    }
}
