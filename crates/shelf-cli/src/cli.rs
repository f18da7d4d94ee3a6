use clap::Parser;

use shelf_core::VERSION;

/// Shelf - a personal library manager
///
/// Runs an interactive menu over the book catalog stored in `library.json`
/// in the current directory. Set RUST_LOG to see diagnostic logs on stderr.
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {}
