//! DDIG Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the DDIG workspace.
//!
//! # Overview
//!
//! This crate provides common functionality used across all DDIG workspace
//! members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: Centralized tracing initialization
//! - **Checksums**: Download integrity verification utilities
//! - **Types**: The node/edge record shapes exchanged between the
//!   normalizer and the graph writer
//!
//! # Example
//!
//! ```no_run
//! use ddig_common::Result;
//! use ddig_common::checksum::{compute_file_checksum, ChecksumAlgorithm};
//!
//! fn verify_download(path: &str) -> Result<()> {
//!     let checksum = compute_file_checksum(path, ChecksumAlgorithm::Sha256)?;
//!     tracing::info!(%checksum, "download verified");
//!     Ok(())
//! }
//! ```

pub mod checksum;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{DdigError, Result};
pub use types::{EdgeRecord, NodeRecord, Properties};
