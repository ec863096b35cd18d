//! Error types for the dirnote application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur while building names and creating note directories.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the dirnote application.
#[derive(Error, Debug)]
pub enum DirnoteError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The supplied date text did not match an accepted format.
    #[error("Invalid date format: {input:?} (expected YYYY-MM-DD, YYYY-MM-DD HH:MM or YYYY-MM-DD HH:MM:SS)")]
    InvalidDateFormat { input: String },

    /// The target directory already exists.
    #[error("Directory already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// The filesystem refused the operation.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Base directory creation or access failed.
    #[error("Failed to create or access directory: {path}")]
    DirectoryError { path: PathBuf },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}
