use std::io::{BufRead, Write};

use shelf_core::LibraryStore;

use crate::app::Session;
use crate::helpers::Console;
use crate::output::{write_book_list, EMPTY_LIBRARY};

pub fn handle_list<S, R, W>(session: &Session<S>, console: &mut Console<R, W>) -> anyhow::Result<()>
where
    S: LibraryStore,
    R: BufRead,
    W: Write,
{
    let library = session.library();
    if library.is_empty() {
        console.say(EMPTY_LIBRARY)?;
    } else {
        write_book_list(console, "Library Collection:", library)?;
    }
    console.blank()?;
    Ok(())
}
