//! The book record stored in a library.

use std::fmt;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfError};

/// One catalog entry.
///
/// Field order matches the snapshot layout on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title, used as the lookup key for removal
    pub title: String,

    /// Author name
    pub author: String,

    /// Publication year
    pub year: i64,

    /// Free-form genre label
    pub genre: String,

    /// Whether the book has been read
    pub read: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    /// Build a book from raw prompt answers.
    ///
    /// Text fields are trimmed. The year must parse as an integer and the
    /// read answer is coerced with [`parse_read_status`].
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Validation` if the year is not an integer.
    pub fn from_input(
        title: &str,
        author: &str,
        year: &str,
        genre: &str,
        read: &str,
    ) -> Result<Self> {
        let year = parse_year(year)?;
        Ok(Self::new(
            title.trim(),
            author.trim(),
            year,
            genre.trim(),
            parse_read_status(read),
        ))
    }

    /// Case-insensitive exact comparison against the title.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Case-insensitive substring match against title or author.
    ///
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }

    /// Read status as shown to the user.
    pub fn read_label(&self) -> &'static str {
        if self.read {
            "Yes"
        } else {
            "No"
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}, Genre: {}, Read: {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.read_label()
        )
    }
}

/// Parse a publication year.
///
/// Accepts an optional sign and `_` separators between digits.
pub fn parse_year(value: &str) -> Result<i64> {
    let trimmed = value.trim();
    let digits = strip_digit_separators(trimmed)
        .ok_or_else(|| invalid_year(trimmed, "expected a whole number"))?;
    digits.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            invalid_year(trimmed, "out of range")
        }
        _ => invalid_year(trimmed, "expected a whole number"),
    })
}

fn invalid_year(value: &str, reason: &str) -> ShelfError {
    ShelfError::Validation(format!("Invalid year \"{}\" ({})", value, reason))
}

/// Drop `_` separators that sit between two digits; any other `_` is rejected.
fn strip_digit_separators(value: &str) -> Option<String> {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i > 0 && chars[i - 1].is_ascii_digit();
        let after = chars.get(i + 1).is_some_and(|next| next.is_ascii_digit());
        if !(before && after) {
            return None;
        }
    }
    Some(out)
}

/// Coerce a yes/no answer: only "yes" (any case) counts as read.
pub fn parse_read_status(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("yes")
}
