//! # Shelf Core
//!
//! Core library for Shelf - a small, file-backed personal library manager.
//!
//! This crate provides the book catalog model and the snapshot storage,
//! independent of the interactive CLI.
//!
//! ## Architecture
//!
//! - **book**: The `Book` record and construction from raw text input
//! - **library**: The ordered in-memory collection and its queries
//! - **storage**: Snapshot store trait and the JSON file implementation
//! - **fs**: Atomic file replacement helpers

pub mod book;
pub mod error;
pub mod fs;
pub mod library;
pub mod storage;

pub use book::Book;
pub use error::{Result, ShelfError};
pub use library::{Library, ReadStats};
pub use storage::{JsonFileStore, LibraryStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
