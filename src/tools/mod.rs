/// MCP tools for the mood journal
///
/// This module contains all the MCP tools that external clients can call
/// to log moods, read the journal and get statistics.

pub mod list;
pub mod log;
pub mod note;
pub mod summary;
pub mod trend;

// Re-export tool functions for easy access
pub use list::*;
pub use log::*;
pub use note::*;
pub use summary::*;
pub use trend::*;
