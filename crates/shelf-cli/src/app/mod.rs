//! Application state for the Shelf CLI.

mod session;

pub use session::Session;
