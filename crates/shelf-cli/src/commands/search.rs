use std::io::{BufRead, Write};

use shelf_core::LibraryStore;

use crate::app::Session;
use crate::helpers::Console;
use crate::output::write_book_list;
use crate::ui::Tone;

pub fn handle_search<S, R, W>(session: &Session<S>, console: &mut Console<R, W>) -> anyhow::Result<()>
where
    S: LibraryStore,
    R: BufRead,
    W: Write,
{
    let Some(query) = console.ask("Enter title or author to search: ")? else {
        return Ok(());
    };

    let matches = session.library().search(&query);
    if matches.is_empty() {
        console.tone(Tone::Warning, "No matching books found.")?;
    } else {
        write_book_list(console, "Search Results:", matches)?;
    }
    console.blank()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{console, output, MemoryStore};
    use shelf_core::Book;

    fn session() -> Session<MemoryStore> {
        Session::open(MemoryStore::with_books(vec![
            Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", true),
            Book::new("Emma", "Jane Austen", 1815, "Classic", false),
        ]))
    }

    #[test]
    fn test_search_by_author() {
        let mut c = console("AUSTEN\n");
        handle_search(&session(), &mut c).unwrap();
        assert_eq!(
            output(c),
            "Enter title or author to search: \nSearch Results:\n\
             Title: Emma, Author: Jane Austen, Year: 1815, Genre: Classic, Read: No\n\n"
        );
    }

    #[test]
    fn test_search_no_match() {
        let mut c = console("tolkien\n");
        handle_search(&session(), &mut c).unwrap();
        assert!(output(c).ends_with("No matching books found.\n\n"));
    }

    #[test]
    fn test_search_does_not_persist() {
        let session = session();
        let mut c = console("dune\n");
        handle_search(&session, &mut c).unwrap();
        assert_eq!(session.store().saves(), 0);
    }
}
