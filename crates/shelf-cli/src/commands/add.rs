use std::io::{BufRead, Write};

use shelf_core::{Book, LibraryStore, ShelfError};

use crate::app::Session;
use crate::helpers::Console;
use crate::ui::Tone;

const PROMPTS: [&str; 5] = [
    "Enter book title: ",
    "Enter author: ",
    "Enter publication year: ",
    "Enter genre: ",
    "Have you read this book? (yes/no): ",
];

/// Prompt for all five fields, then validate and append.
///
/// A bad year aborts before anything is added or saved.
pub fn handle_add<S, R, W>(
    session: &mut Session<S>,
    console: &mut Console<R, W>,
) -> anyhow::Result<()>
where
    S: LibraryStore,
    R: BufRead,
    W: Write,
{
    let mut answers = Vec::with_capacity(PROMPTS.len());
    for prompt in PROMPTS {
        match console.ask(prompt)? {
            Some(answer) => answers.push(answer),
            None => return Ok(()),
        }
    }

    let book = match Book::from_input(
        &answers[0],
        &answers[1],
        &answers[2],
        &answers[3],
        &answers[4],
    ) {
        Ok(book) => book,
        Err(ShelfError::Validation(message)) => {
            console.tone(Tone::Warning, &format!("{}. Book not added.", message))?;
            console.blank()?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    session.add(book)?;
    console.tone(Tone::Success, "Book added successfully!")?;
    console.blank()?;
    Ok(())
}
