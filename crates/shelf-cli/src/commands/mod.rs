//! Handlers for each menu command.

mod add;
mod list;
mod remove;
mod search;
mod stats;

pub use add::handle_add;
pub use list::handle_list;
pub use remove::handle_remove;
pub use search::handle_search;
pub use stats::handle_stats;
