//! Error types for the DDIG CLI
//!
//! Errors here are user-facing: messages say what went wrong and, where
//! possible, how to fix it.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// Ingest pipeline failed (download or normalization)
    #[error(transparent)]
    Ingest(#[from] ddig_ingest::IngestError),

    /// Bulk output writing failed
    #[error(transparent)]
    Writer(#[from] ddig_graph::WriterError),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables.")]
    Config(String),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
