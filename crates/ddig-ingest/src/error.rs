//! Error types for DDIG ingest
//!
//! Preprocessing is a one-shot batch transform: every error here is fatal
//! to the operation that raised it, with no retry or partial result.

use thiserror::Error;

/// Result type alias for ingest operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Error type for ingest operations
#[derive(Error, Debug)]
pub enum IngestError {
    /// Source file is unreadable
    #[error("File operation failed: {0}. Check the path exists and you have read permissions.")]
    Io(#[from] std::io::Error),

    /// Source table is malformed
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Source table is missing a required column
    #[error("Missing required column '{column}' in '{file}'. Expected DDInterID_A, Drug_A, DDInterID_B, Drug_B and Level.")]
    MissingColumn { file: String, column: String },

    /// Filename suffix code is not in the fixed category map
    #[error("Unrecognized category code '{code}' in '{file}'. Known codes: A, B, D, H, L, P, R, V.")]
    UnknownCategoryCode { file: String, code: String },

    /// HTTP request failed
    #[error("Network request failed: {0}. Check your internet connection.")]
    Http(#[from] reqwest::Error),

    /// Download completed with a non-success status
    #[error("Download of '{url}' failed with status {status}")]
    Download { url: String, status: reqwest::StatusCode },

    /// Cache metadata sidecar is unreadable
    #[error("Failed to parse cache metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error propagated from shared utilities
    #[error(transparent)]
    Common(#[from] ddig_common::DdigError),
}

impl IngestError {
    /// Create a missing-column error
    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    /// Create an unknown-category-code error
    pub fn unknown_category_code(file: impl Into<String>, code: impl Into<String>) -> Self {
        Self::UnknownCategoryCode {
            file: file.into(),
            code: code.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
