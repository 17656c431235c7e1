//! `ddig fetch` command implementation
//!
//! Downloads and caches the DDInter tables without building anything.

use crate::config::Config;
use crate::error::Result;
use colored::Colorize;
use ddig_ingest::{Downloader, Resource};

/// Fetch the DDInter tables into the cache
pub async fn run(force: bool) -> Result<()> {
    let config = Config::from_env()?;

    println!("{} Fetching DDInter tables...", "→".cyan());
    let downloader = Downloader::new(config.cache_dir());
    let paths = downloader.fetch(&Resource::ddinter(), force).await?;

    println!("{} {} file(s) cached", "✓".green(), paths.len());
    for path in &paths {
        println!("  {}", path.display());
    }

    Ok(())
}
