//! Time grid resolution and window for the interference table.

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, WaveError, WaveResult};

/// Extent of the displayed time window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    /// Fixed length in seconds, independent of the wave parameters
    Seconds(f64),

    /// Number of periods of wave 1; window length scales with 1/f
    Periods(f64),
}

impl Window {
    /// Resolve the window length in seconds for a given frequency (Hz)
    pub fn length_s(&self, frequency_hz: f64) -> WaveResult<f64> {
        match *self {
            Window::Seconds(seconds) => require_positive("window_s", seconds),
            Window::Periods(periods) => {
                let periods = require_positive("window_periods", periods)?;
                let frequency_hz = require_positive("frequency_hz", frequency_hz)?;
                Ok(periods / frequency_hz)
            }
        }
    }
}

/// Display resolution of the time-domain table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of time samples (grid points, >= 1)
    /// 1000 points give a smooth curve at typical chart widths
    pub sample_count: usize,

    /// Time window covered by the grid
    /// 50 ms = two periods at the default 40 Hz
    pub window: Window,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sample_count: 1000,
            window: Window::Seconds(0.050),
        }
    }
}

impl DisplayConfig {
    /// Display showing a fixed number of periods of wave 1
    pub fn periods(sample_count: usize, periods: f64) -> Self {
        Self {
            sample_count,
            window: Window::Periods(periods),
        }
    }

    pub fn validate(&self) -> WaveResult<()> {
        if self.sample_count == 0 {
            return Err(WaveError::invalid("sample_count", 0.0, "must be >= 1"));
        }
        match self.window {
            Window::Seconds(seconds) => require_positive("window_s", seconds)?,
            Window::Periods(periods) => require_positive("window_periods", periods)?,
        };
        Ok(())
    }
}
