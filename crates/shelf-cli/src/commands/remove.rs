use std::io::{BufRead, Write};

use shelf_core::LibraryStore;

use crate::app::Session;
use crate::helpers::Console;
use crate::ui::Tone;

pub fn handle_remove<S, R, W>(
    session: &mut Session<S>,
    console: &mut Console<R, W>,
) -> anyhow::Result<()>
where
    S: LibraryStore,
    R: BufRead,
    W: Write,
{
    let Some(title) = console.ask("Enter the title of the book to remove: ")? else {
        return Ok(());
    };

    if session.remove(&title)?.is_some() {
        console.tone(Tone::Success, "Book removed successfully!")?;
    } else {
        console.tone(Tone::Warning, "Book not found.")?;
    }
    console.blank()?;
    Ok(())
}
