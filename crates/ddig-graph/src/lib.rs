//! DDIG Graph Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Persists normalized node and edge record streams as Neo4j bulk-import
//! CSV files, and generates the companion `neo4j-admin` import call.
//!
//! # Example
//!
//! ```no_run
//! use ddig_common::NodeRecord;
//! use ddig_graph::BatchWriter;
//!
//! fn main() -> ddig_graph::Result<()> {
//!     let mut writer = BatchWriter::new("./graph")?;
//!     let nodes = vec![NodeRecord::new("DDInter1", "drug").with_property("name", "Aspirin")];
//!     writer.write_nodes(nodes.into_iter())?;
//!     writer.write_import_call()?;
//!     writer.summary();
//!     Ok(())
//! }
//! ```

pub mod writer;

// Re-export commonly used types
pub use writer::{BatchWriter, Result, WriterError};
