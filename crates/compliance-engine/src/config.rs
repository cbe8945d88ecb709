//! Scanner configuration
//!
//! Loaded from TOML; every field has a default so an empty file is valid.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Settings for the scan pipeline around the analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// How long a stored scan is served from cache (default: 24)
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u32,
    /// Fetch timeout enforced by the page source (default: 15)
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ScannerConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    ///
    /// # Example
    ///
    /// ```no_run
    /// use compliance_engine::config::ScannerConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = ScannerConfig::from_file("scanner.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use compliance_engine::config::ScannerConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = ScannerConfig::from_str("cache_ttl_hours = 6")?;
    /// assert_eq!(config.cache_ttl_hours, 6);
    /// assert_eq!(config.timeout_seconds, 15);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.cache_ttl_hours as i64)
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            cache_ttl_hours: default_cache_ttl_hours(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_cache_ttl_hours() -> u32 {
    24
}

fn default_timeout_seconds() -> u64 {
    15
}
