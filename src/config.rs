//! Configuration for Roster
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, RosterError};

/// Main configuration for a Roster instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Number of buckets in the record store
    pub bucket_count: usize,

    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// File used by `Roster::open`, `Roster::save` and `Roster::reload`.
    /// Extension selects the delimiter: `.csv` (comma) or `.txt` (pipe).
    pub data_file: PathBuf,

    /// How often a long-running caller should re-save `data_file`.
    ///
    /// Caller-facing setting only: nothing in this crate reads it apart from
    /// `validate()`. The library keeps no timer; an interactive front end
    /// drives its own save loop from this value.
    pub autosave_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket_count: 100,
            data_file: PathBuf::from("students.txt"),
            autosave_interval: Duration::from_secs(300), // 5 minutes
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the configuration can back a working roster
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(RosterError::Config(
                "bucket_count must be at least 1".to_string(),
            ));
        }

        if self.autosave_interval.is_zero() {
            return Err(RosterError::Config(
                "autosave_interval must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of store buckets
    pub fn bucket_count(mut self, count: usize) -> Self {
        self.config.bucket_count = count;
        self
    }

    /// Set the default data file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the autosave interval
    pub fn autosave_interval(mut self, interval: Duration) -> Self {
        self.config.autosave_interval = interval;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
