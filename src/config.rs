//! Configuration for Stockroom
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default inventory file name, resolved against the working directory
pub const DEFAULT_INVENTORY_FILE: &str = "instruments.csv";

/// Main configuration for a Stockroom instance
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted inventory file.
    /// Read once at startup, overwritten once at shutdown.
    pub inventory_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_FILE),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the inventory file path
    pub fn inventory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.inventory_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
