//! Unified error types for dirdiff-html.
//!
//! Configuration problems (bad exclude patterns, unreadable assets) are
//! rejected before any traversal starts so a report is never generated
//! from half-valid configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dirdiff-html operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DirDiffError {
    /// Exclusion pattern rejected at compile time
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Template, stylesheet or script asset could not be read
    #[error("Failed to read asset {path:?}: {source}")]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Template rendering failed, e.g. a referenced slot was not supplied.
    /// The underlying error names the offending slot.
    #[error("Template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience result alias used throughout the library.
pub type Result<T> = std::result::Result<T, DirDiffError>;
