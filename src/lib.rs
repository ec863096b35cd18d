//! Deterministic note directory naming library
//!
//! This library derives a canonical, sortable, collision-resistant name
//! from a title, optional keywords and a timestamp, and creates a
//! directory with that name under a configured base directory.

mod cli;
mod config;
mod errors;
mod helper;
mod identifier;
mod keywords;
mod note;
mod slug;
mod storage;
mod types;

// Re-export key components
pub use cli::*;
pub use config::*;
pub use errors::*;
pub use helper::*;
pub use identifier::*;
pub use keywords::*;
pub use note::*;
pub use slug::*;
pub use storage::*;
pub use types::*;
