//! CLI command implementations.

pub mod list;
pub mod serve;

pub use list::ListCommand;
pub use serve::ServeCommand;
