//! Line-oriented terminal input and output.

mod input;

pub use input::Console;
