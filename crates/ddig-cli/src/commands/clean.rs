//! `ddig clean` command implementation
//!
//! Cleans cached downloads.

use crate::config::Config;
use crate::error::Result;
use colored::Colorize;
use std::path::Path;
use walkdir::WalkDir;

/// Clean the download cache
pub fn run(all: bool) -> Result<()> {
    let config = Config::from_env()?;
    let cache_dir = config.cache_dir();

    if !cache_dir.exists() {
        println!("Cache is empty");
        return Ok(());
    }

    let size = dir_size(cache_dir);

    if all {
        std::fs::remove_dir_all(cache_dir)?;
        println!("{} Cleared cache at {}", "✓".green(), cache_dir.display());
        println!("  Freed: {}", format_bytes(size));
    } else {
        println!("Use --all to clear all cached downloads");
        println!("  Current cache size: {}", format_bytes(size));
    }

    Ok(())
}

/// Total size of all files under a directory
fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.metadata().ok())
        .filter(|metadata| metadata.is_file())
        .map(|metadata| metadata.len())
        .sum()
}

/// Format bytes into a human-readable string
fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}
