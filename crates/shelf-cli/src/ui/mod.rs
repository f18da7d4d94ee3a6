//! UI primitives for the Shelf CLI.
//!
//! - **Context**: Environment detection (TTY, color)
//! - **Theme**: Tones and styling for status messages

mod context;
mod theme;

pub use context::UiContext;
pub use theme::{styled, Tone};
