//! Error types for the regfind-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the regfind library.
#[derive(Error, Debug)]
pub enum FinderError {
    /// Input rejected before normalization.
    #[error("validation error: {0}")]
    Validation(String),

    /// Reference data resolution error.
    #[error("resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by region resolvers.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Reference data file could not be loaded.
    #[error("failed to load reference data from {}: {reason}", path.display())]
    Reference { path: PathBuf, reason: String },

    /// Reference data is malformed.
    #[error("failed to parse reference data: {0}")]
    Parse(String),

    /// The backing store failed while answering a lookup.
    #[error("resolver backend failed: {0}")]
    Backend(String),
}

/// Result type for the regfind library.
pub type Result<T> = std::result::Result<T, FinderError>;
