//! Error types for shoal-cli

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for shoal-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in shoal-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the social graph
    #[error(transparent)]
    Graph(#[from] shoal_core::Error),

    /// Unrecognised line in strict mode
    #[error("Unrecognised command: {text:?}")]
    Parse {
        /// Offending line, without its terminator
        text: String,
    },

    /// I/O error on a specific path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Lines failed while running or checking instance files
    #[error("{count} line(s) failed")]
    LinesFailed {
        /// Number of failed lines across all files
        count: usize,
    },

    /// JSON output error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Wraps an I/O error with the path it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
