//! Output formatting for book listings and statistics.

mod text;

pub use text::{stats_lines, write_book_list, EMPTY_LIBRARY};
