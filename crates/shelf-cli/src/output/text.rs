//! Plain-text rendering of books and read statistics.

use std::io::{self, BufRead, Write};

use shelf_core::{Book, ReadStats};

use crate::helpers::Console;
use crate::ui::Tone;

/// Shown by listing and statistics when there is nothing to report.
pub const EMPTY_LIBRARY: &str = "No books in the library.";

/// Write a blank line, a heading, then one line per book.
pub fn write_book_list<'a, R, W>(
    console: &mut Console<R, W>,
    heading: &str,
    books: impl IntoIterator<Item = &'a Book>,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    console.blank()?;
    console.tone(Tone::Heading, heading)?;
    for book in books {
        console.say(&book.to_string())?;
    }
    Ok(())
}

/// Total and read counts, percentage to two decimals.
pub fn stats_lines(stats: &ReadStats) -> [String; 2] {
    [
        format!("Total Books: {}", stats.total),
        format!(
            "Books Read: {} ({:.2}%)",
            stats.read,
            stats.percentage()
        ),
    ]
}
