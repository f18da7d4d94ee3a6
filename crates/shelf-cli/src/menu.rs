//! The interactive menu loop.

use std::io::{BufRead, Write};

use tracing::debug;

use shelf_core::LibraryStore;

use crate::app::Session;
use crate::commands::{handle_add, handle_list, handle_remove, handle_search, handle_stats};
use crate::constants::APP_TITLE;
use crate::errors::CliError;
use crate::helpers::Console;
use crate::ui::Tone;

const MENU_ITEMS: [&str; 6] = [
    "1. Add a book",
    "2. Remove a book",
    "3. Search for a book",
    "4. Display all books",
    "5. Display statistics",
    "6. Exit",
];

/// One menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Search,
    Display,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// Match a trimmed answer against the numbered choices.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "1" => Some(Self::Add),
            "2" => Some(Self::Remove),
            "3" => Some(Self::Search),
            "4" => Some(Self::Display),
            "5" => Some(Self::Statistics),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Show the menu and dispatch until Exit or end of input.
///
/// Save failures are reported and the loop continues; terminal I/O errors
/// end it.
pub fn run<S, R, W>(session: &mut Session<S>, console: &mut Console<R, W>) -> anyhow::Result<()>
where
    S: LibraryStore,
    R: BufRead,
    W: Write,
{
    loop {
        console.tone(Tone::Heading, APP_TITLE)?;
        for item in MENU_ITEMS {
            console.say(item)?;
        }

        let Some(answer) = console.ask("Enter your choice: ")? else {
            debug!("input closed at menu");
            return Ok(());
        };

        let result = match MenuChoice::parse(&answer) {
            Some(MenuChoice::Add) => handle_add(session, console),
            Some(MenuChoice::Remove) => handle_remove(session, console),
            Some(MenuChoice::Search) => handle_search(session, console),
            Some(MenuChoice::Display) => handle_list(session, console),
            Some(MenuChoice::Statistics) => handle_stats(session, console),
            Some(MenuChoice::Exit) => {
                console.say("Exiting the program. Goodbye!")?;
                return Ok(());
            }
            None => {
                debug!(answer = %answer, "unrecognized menu choice");
                console.tone(
                    Tone::Warning,
                    "Invalid choice. Please enter a number between 1 and 6.",
                )?;
                console.blank()?;
                Ok(())
            }
        };

        if let Err(err) = result {
            let err = err.downcast::<CliError>()?;
            console.tone(Tone::Error, &format!("Error: {}", err))?;
            console.blank()?;
        }

        if console.at_eof() {
            debug!("input closed during command");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{console, output, MemoryStore};
    use shelf_core::Book;

    const MENU: &str = "Personal Library Manager\n\
                        1. Add a book\n\
                        2. Remove a book\n\
                        3. Search for a book\n\
                        4. Display all books\n\
                        5. Display statistics\n\
                        6. Exit\n\
                        Enter your choice: ";

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("01"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_exit_prints_farewell() {
        let mut session = Session::open(MemoryStore::default());
        let mut c = console("6\n");
        run(&mut session, &mut c).unwrap();
        assert_eq!(output(c), format!("{}Exiting the program. Goodbye!\n", MENU));
    }

    #[test]
    fn test_invalid_choice_keeps_looping() {
        let mut session = Session::open(MemoryStore::default());
        let mut c = console("9\n 6 \n");
        run(&mut session, &mut c).unwrap();
        assert_eq!(
            output(c),
            format!(
                "{menu}Invalid choice. Please enter a number between 1 and 6.\n\n{menu}Exiting the program. Goodbye!\n",
                menu = MENU
            )
        );
    }

    #[test]
    fn test_eof_ends_loop_without_farewell() {
        let mut session = Session::open(MemoryStore::default());
        let mut c = console("4\n");
        run(&mut session, &mut c).unwrap();
        let out = output(c);
        assert!(out.contains("No books in the library."));
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn test_scenario_add_reject_remove_stats() {
        let mut session = Session::open(MemoryStore::default());
        let script = "1\nDune\nHerbert\n1965\nSci-Fi\nyes\n\
                      1\nDune\nHerbert\nabc\nSci-Fi\nyes\n\
                      2\ndune\n\
                      5\n\
                      6\n";
        let mut c = console(script);

        run(&mut session, &mut c).unwrap();

        assert!(session.library().is_empty());
        assert_eq!(session.store().saves(), 2);
        let out = output(c);
        assert!(out.contains("Book added successfully!"));
        assert!(out.contains("Book not added."));
        assert!(out.contains("Book removed successfully!"));
        assert!(out.contains("Enter your choice: No books in the library.\n"));
    }

    #[test]
    fn test_save_failure_is_reported_and_loop_continues() {
        let mut session = Session::open(MemoryStore::failing());
        let mut c = console("1\nDune\nHerbert\n1965\nSci-Fi\nyes\n4\n6\n");

        run(&mut session, &mut c).unwrap();

        let out = output(c);
        assert!(out.contains("Error: Could not save library to readonly/library.json"));
        assert!(out.contains("Title: Dune, Author: Herbert"));
        assert!(out.ends_with("Exiting the program. Goodbye!\n"));
    }

    #[test]
    fn test_statistics_idempotent() {
        let mut session = Session::open(MemoryStore::with_books(vec![
            Book::new("Dune", "Herbert", 1965, "Sci-Fi", true),
            Book::new("Emma", "Austen", 1815, "Classic", false),
        ]));
        let mut c = console("5\n5\n6\n");
        run(&mut session, &mut c).unwrap();

        let out = output(c);
        let block = "\nTotal Books: 2\nBooks Read: 1 (50.00%)\n\n";
        assert_eq!(out.matches(block).count(), 2);
    }
}
