//! Frequency response sweep configuration.

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, WaveError, WaveResult};

/// Frequency range and analysis window of the comb-filter sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Lowest swept frequency (Hz)
    pub start_hz: f64,

    /// Highest swept frequency (Hz, inclusive)
    pub end_hz: f64,

    /// Number of swept frequencies
    /// 481 points over 20..500 Hz = 1 Hz steps
    pub points: usize,

    /// Length of the RMS analysis window (seconds)
    /// 100 ms holds at least two periods of the lowest frequency
    pub analysis_window_s: f64,

    /// Time samples per analysis window
    pub analysis_samples: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_hz: 20.0,
            end_hz: 500.0,
            points: 481,
            analysis_window_s: 0.1,
            analysis_samples: 1000,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> WaveResult<()> {
        require_positive("start_hz", self.start_hz)?;
        require_positive("end_hz", self.end_hz)?;
        if self.end_hz < self.start_hz {
            return Err(WaveError::invalid("end_hz", self.end_hz, "must be >= start_hz"));
        }
        if self.points == 0 {
            return Err(WaveError::invalid("points", 0.0, "must be >= 1"));
        }
        require_positive("analysis_window_s", self.analysis_window_s)?;
        if self.analysis_samples == 0 {
            return Err(WaveError::invalid("analysis_samples", 0.0, "must be >= 1"));
        }
        Ok(())
    }

    /// Swept frequencies, evenly spaced and including both ends
    pub fn frequencies(&self) -> impl Iterator<Item = f64> + '_ {
        let step = if self.points > 1 {
            (self.end_hz - self.start_hz) / (self.points - 1) as f64
        } else {
            0.0
        };
        (0..self.points).map(move |i| self.start_hz + step * i as f64)
    }
}
