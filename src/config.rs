//! Configuration management
//!
//! Loads and saves the display, sweep and default parameter settings as
//! JSON. A missing settings file yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::WaveResult;
use crate::params::{DisplayConfig, InputLimits, SweepConfig, WaveParams};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Physics parameters used when no value is given on the command line
    pub defaults: WaveParams,

    /// Time-domain table resolution
    pub display: DisplayConfig,

    /// Frequency response sweep
    pub sweep: SweepConfig,

    /// Control ranges for out-of-range warnings
    pub limits: InputLimits,
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> WaveResult<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&contents)?;
            config.validate()?;
            log::info!("Loaded settings from {}", path.display());
            Ok(config)
        } else {
            // Return default if file doesn't exist
            log::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    ///
    /// Invalid settings are rejected before anything is written.
    pub fn save(&self, path: &Path) -> WaveResult<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Check default parameters, display and sweep constants
    pub fn validate(&self) -> WaveResult<()> {
        self.defaults.validate()?;
        self.display.validate()?;
        self.sweep.validate()?;
        Ok(())
    }

    /// Copy with new default parameters and display, validated
    pub fn with_overrides(&self, defaults: WaveParams, display: DisplayConfig) -> WaveResult<Self> {
        let config = Self {
            defaults,
            display,
            ..self.clone()
        };
        config.validate()?;
        Ok(config)
    }

    /// Get default settings file path (in current directory)
    pub fn default_path() -> PathBuf {
        PathBuf::from("wave_interference.json")
    }
}
