//! Shelf CLI - a personal library manager.
//!
//! Runs an interactive menu over a book catalog persisted as
//! `library.json` in the working directory.

mod app;
mod cli;
mod commands;
mod constants;
mod errors;
mod helpers;
mod menu;
mod output;
#[cfg(test)]
mod testing;
mod ui;

use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use shelf_core::JsonFileStore;

use crate::app::Session;
use crate::cli::Cli;
use crate::constants::{DEFAULT_LOG_FILTER, LIBRARY_FILE};
use crate::helpers::Console;
use crate::ui::UiContext;

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let mut session = Session::open(JsonFileStore::new(LIBRARY_FILE));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), UiContext::from_env());
    menu::run(&mut session, &mut console)
}
