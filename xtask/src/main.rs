//! Build automation tasks for DDIG
//!
//! This tool provides various automation tasks for the DDIG project,
//! including:
//! - Generating CLI documentation from source code
//! - Future build-related tasks

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for DDIG", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate CLI documentation in markdown format
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    // Generate markdown from clap definitions
    let markdown = clap_markdown::help_markdown::<ddig_cli::Cli>();

    let content = format!(
        r#"---
title: CLI Reference
description: Complete command reference for the DDIG CLI
---

# DDIG CLI Reference

This documentation is auto-generated from the CLI source code. Last updated: {}.

## Overview

DDIG builds a drug-drug-interaction knowledge graph from the DDInter
per-category download tables: it fetches and caches the CSV files,
normalizes them into drug nodes and interaction edges, and writes
Neo4j bulk-import files plus the `neo4j-admin` import call.

## Installation

### From Source

```bash
git clone https://github.com/ddig-dev/ddig.git
cd ddig
cargo install --path crates/ddig-cli
```

## Quick Start

```bash
# Download the DDInter tables into the local cache
ddig fetch

# Build the bulk-import files
ddig build --output ./graph

# Load them into Neo4j
cd graph && ./neo4j-admin-import.sh
```

## Commands

{}

## Environment Variables

- `DDIG_CACHE_DIR` - Download cache directory (default: platform cache dir)
- `DDIG_OUTPUT_DIR` - Output directory for bulk files (default: `./graph`)
- `LOG_LEVEL` - Logging level (e.g., `debug`, `info`, `warn`, `error`)

---

*This documentation is automatically generated from the CLI source code. To update, run `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    // Create output directory if it doesn't exist
    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    // Write the markdown file
    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("✅ Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
