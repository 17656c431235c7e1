//! Configuration management for the DDIG CLI
//!
//! Handles CLI settings like the download cache location.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Download cache directory
    pub cache_dir: PathBuf,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Result<Self> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| CliError::config("Could not determine cache directory"))?
            .join("ddig");

        Ok(Self {
            cache_dir,
            verbose: false,
        })
    }

    /// Load config from environment variables
    ///
    /// Environment variables:
    /// - `DDIG_CACHE_DIR`: Download cache directory
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new()?;

        if let Ok(cache) = std::env::var("DDIG_CACHE_DIR") {
            config.cache_dir = PathBuf::from(cache);
        }

        Ok(config)
    }

    /// Get the cache directory path
    pub fn cache_dir(&self) -> &PathBuf {
        &self.cache_dir
    }

    /// Enable verbose output
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cache_dir_is_namespaced() {
        let config = Config::new().unwrap();
        assert!(config.cache_dir().ends_with("ddig"));
        assert!(!config.verbose);
    }
}
