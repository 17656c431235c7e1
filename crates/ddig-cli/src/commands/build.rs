//! `ddig build` command implementation
//!
//! Runs the full pipeline: fetch (or take local paths), normalize, write
//! bulk-import files and the import call.

use crate::config::Config;
use crate::error::Result;
use colored::Colorize;
use ddig_graph::BatchWriter;
use ddig_ingest::adapter::DdInterAdapter;
use ddig_ingest::registry::SelectionOverrides;
use ddig_ingest::{Downloader, Resource};
use std::path::PathBuf;

/// Build the interaction graph
pub async fn run(input: Vec<PathBuf>, output: PathBuf, force: bool) -> Result<()> {
    let paths = if input.is_empty() {
        let config = Config::from_env()?;

        println!("{} Fetching DDInter tables...", "→".cyan());
        let downloader = Downloader::new(config.cache_dir());
        downloader.fetch(&Resource::ddinter(), force).await?
    } else {
        input
    };

    println!(
        "{} Normalizing {} interaction table(s)...",
        "→".cyan(),
        paths.len()
    );
    let adapter = DdInterAdapter::from_paths(&paths, SelectionOverrides::default())?;

    let mut writer = BatchWriter::new(&output)?;
    let nodes = writer.write_nodes(adapter.nodes())?;
    let edges = writer.write_edges(adapter.edges())?;
    let script = writer.write_import_call()?;
    writer.summary();

    println!(
        "{} {} drug node(s), {} interaction edge(s)",
        "✓".green(),
        nodes,
        edges
    );
    println!("{} Bulk files written to {}", "✓".green().bold(), output.display());
    println!("  Import call: {}", script.display());

    Ok(())
}
