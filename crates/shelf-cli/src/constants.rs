//! Constants used throughout the CLI.

/// Snapshot file, relative to the working directory.
pub const LIBRARY_FILE: &str = "library.json";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Title printed above the menu.
pub const APP_TITLE: &str = "Personal Library Manager";
