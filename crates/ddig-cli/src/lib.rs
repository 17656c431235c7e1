//! DDIG CLI Library
//!
//! Command-line interface for building the DDInter drug-drug-interaction
//! graph:
//!
//! - **Graph Building**: Fetch, normalize, and write bulk-import files
//!   (`ddig build`)
//! - **Downloading**: Populate the local cache (`ddig fetch`)
//! - **Cache Management**: Clear cached downloads (`ddig clean`)

pub mod commands;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// DDIG - DDInter Drug-Drug Interaction Graph Builder
#[derive(Parser, Debug)]
#[command(name = "ddig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print CLI reference as markdown and exit
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the interaction graph: fetch, normalize, write bulk files
    Build {
        /// Local interaction tables to use instead of downloading
        #[arg(short, long)]
        input: Vec<PathBuf>,

        /// Output directory for bulk-import files
        #[arg(short, long, env = "DDIG_OUTPUT_DIR", default_value = "./graph")]
        output: PathBuf,

        /// Force re-download even if cached
        #[arg(short, long)]
        force: bool,
    },

    /// Download and cache the DDInter tables
    Fetch {
        /// Force re-download even if cached
        #[arg(short, long)]
        force: bool,
    },

    /// Clean cached downloads
    Clean {
        /// Remove all cached files
        #[arg(short, long)]
        all: bool,
    },
}
