use std::io::{BufRead, Write};

use shelf_core::LibraryStore;

use crate::app::Session;
use crate::helpers::Console;
use crate::output::{stats_lines, EMPTY_LIBRARY};

pub fn handle_stats<S, R, W>(session: &Session<S>, console: &mut Console<R, W>) -> anyhow::Result<()>
where
    S: LibraryStore,
    R: BufRead,
    W: Write,
{
    let Some(stats) = session.library().stats() else {
        console.say(EMPTY_LIBRARY)?;
        console.blank()?;
        return Ok(());
    };

    console.blank()?;
    for line in stats_lines(&stats) {
        console.say(&line)?;
    }
    console.blank()?;
    Ok(())
}
