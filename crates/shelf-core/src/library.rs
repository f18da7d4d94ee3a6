//! The in-memory book collection.

use serde::{Deserialize, Serialize};

use crate::book::Book;

/// Ordered collection of books.
///
/// Insertion order is preserved and titles are not required to be unique.
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Library {
    books: Vec<Book>,
}

/// Read-status summary for a non-empty library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadStats {
    pub total: usize,
    pub read: usize,
}

impl ReadStats {
    /// Share of books marked read, in percent.
    pub fn percentage(&self) -> f64 {
        self.read as f64 / self.total as f64 * 100.0
    }
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Append a book at the end.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Remove the first book whose title matches case-insensitively.
    ///
    /// Returns the removed book, or `None` if nothing matched (the
    /// collection is left untouched).
    pub fn remove_by_title(&mut self, title: &str) -> Option<Book> {
        let index = self.books.iter().position(|book| book.title_matches(title))?;
        Some(self.books.remove(index))
    }

    /// Books whose title or author contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.mentions(&needle))
            .collect()
    }

    /// Read-status summary, or `None` for an empty library.
    pub fn stats(&self) -> Option<ReadStats> {
        if self.books.is_empty() {
            return None;
        }
        Some(ReadStats {
            total: self.books.len(),
            read: self.books.iter().filter(|book| book.read).count(),
        })
    }
}

impl From<Vec<Book>> for Library {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}
