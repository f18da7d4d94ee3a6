//! Snapshot storage for the library.
//!
//! The whole library is read once at startup and rewritten in full after
//! every mutation. `LibraryStore` is the seam the CLI works against;
//! `JsonFileStore` is the file-backed implementation.

mod json_file;
mod traits;

pub use json_file::JsonFileStore;
pub use traits::LibraryStore;
