//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::params::{DisplayConfig, WaveParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wave-interference")]
#[command(about = "Superposition of a sine wave with its inverted, delayed copy", long_about = None)]
pub struct Args {
    /// Frequency of wave 1 (Hz)
    #[arg(short, long, value_name = "HZ")]
    pub frequency: Option<f64>,

    /// Propagation speed (m/s)
    #[arg(short, long, value_name = "M_PER_S")]
    pub speed: Option<f64>,

    /// Path length difference travelled by wave 2 (meters)
    #[arg(short, long, value_name = "METERS")]
    pub length: Option<f64>,

    /// Show this many periods of wave 1 instead of the fixed window
    #[arg(long, value_name = "N")]
    pub periods: Option<f64>,

    /// Number of time samples in the table
    #[arg(long, value_name = "N")]
    pub samples: Option<usize>,

    /// Number of table rows to print
    #[arg(long, value_name = "N", default_value = "10")]
    pub rows: usize,

    /// Also sweep the frequency response for the same delay
    #[arg(long)]
    pub response: bool,

    /// Settings file (JSON)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the effective settings to this file and continue
    #[arg(long, value_name = "PATH")]
    pub save_config: Option<PathBuf>,
}

impl Args {
    /// Settings file to load (explicit path or the default location)
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(AppConfig::default_path)
    }

    /// Physics parameters: command line overrides settings defaults
    pub fn wave_params(&self, config: &AppConfig) -> WaveParams {
        let defaults = config.defaults;
        WaveParams::new(
            self.frequency.unwrap_or(defaults.frequency_hz),
            self.speed.unwrap_or(defaults.speed_m_per_s),
            self.length.unwrap_or(defaults.path_difference_m),
        )
    }

    /// Display resolution: command line overrides settings
    pub fn display(&self, config: &AppConfig) -> DisplayConfig {
        let mut display = config.display;
        if let Some(samples) = self.samples {
            display.sample_count = samples;
        }
        if let Some(periods) = self.periods {
            display = DisplayConfig::periods(display.sample_count, periods);
        }
        display
    }
}
