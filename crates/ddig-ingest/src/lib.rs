//! DDIG Ingest Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Normalizes the DDInter per-category drug-drug-interaction tables into
//! node and edge record streams for bulk graph loading.
//!
//! # Components
//!
//! - **registry**: closed enumerations of node/edge types and fields, and
//!   resolution of caller-supplied subsets
//! - **categories**: the fixed file-suffix-code to therapeutic-class map
//! - **adapter**: the [`adapter::DdInterAdapter`] normalizer — eager
//!   preprocessing, lazy record emission
//! - **resource**: download and caching of the upstream CSV files
//!
//! # Example
//!
//! ```no_run
//! use ddig_ingest::adapter::DdInterAdapter;
//! use ddig_ingest::registry::SelectionOverrides;
//!
//! fn main() -> ddig_ingest::Result<()> {
//!     let paths = ["data/ddinter_downloads_code_A.csv"];
//!     let adapter = DdInterAdapter::from_paths(&paths, SelectionOverrides::default())?;
//!     for node in adapter.nodes() {
//!         println!("{} {:?}", node.id, node.properties);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod categories;
pub mod error;
pub mod registry;
pub mod resource;

// Re-export commonly used types
pub use adapter::DdInterAdapter;
pub use error::{IngestError, Result};
pub use resource::{Downloader, Resource};
