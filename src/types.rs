//! Core shared types for the dirnote application.
//!
//! This module contains the crate-wide `Result` alias and the CLI command
//! surface.

use clap::Subcommand;

use crate::DirnoteError;

/// A specialized Result type for dirnote operations.
pub type Result<T> = std::result::Result<T, DirnoteError>;

/// Available subcommands for the dirnote application
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note directory
    New {
        /// Title of the note
        #[clap(short = 'T', long)]
        title: Option<String>,

        /// Keywords to attach to the name (comma-separated)
        #[clap(short = 'k', long)]
        keywords: Option<String>,

        /// Date for the identifier, "YYYY-MM-DD[ HH:MM[:SS]]" (default: now)
        #[clap(short, long)]
        date: Option<String>,
    },

    /// Print the name a `new` invocation would use, without creating anything
    Name {
        /// Title of the note
        #[clap(short = 'T', long)]
        title: Option<String>,

        /// Keywords to attach to the name (comma-separated)
        #[clap(short = 'k', long)]
        keywords: Option<String>,

        /// Date for the identifier, "YYYY-MM-DD[ HH:MM[:SS]]" (default: now)
        #[clap(short, long)]
        date: Option<String>,
    },

    /// List known keywords (configured plus inferred from existing names)
    Keywords,

    /// Show the effective configuration
    Config,
}
