//! Evenly spaced time grid over the display window.

use crate::error::{require_positive, WaveError, WaveResult};

/// Ordered time samples t_0 < t_1 < ... < t_{n-1} over [0, window]
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    pub times: Vec<f64>,
}

impl TimeGrid {
    /// Create grid of `sample_count` points spanning `[0, window_s]`
    ///
    /// Both ends are included. A single-point grid is `[0]`.
    pub fn new(sample_count: usize, window_s: f64) -> WaveResult<Self> {
        if sample_count == 0 {
            return Err(WaveError::invalid("sample_count", 0.0, "must be >= 1"));
        }
        let window_s = require_positive("window_s", window_s)?;

        let times = if sample_count == 1 {
            vec![0.0]
        } else {
            let last = (sample_count - 1) as f64;
            (0..sample_count)
                .map(|i| window_s * (i as f64 / last))
                .collect()
        };

        Ok(Self { times })
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Spacing between consecutive samples (0 for a single-point grid)
    pub fn spacing_s(&self) -> f64 {
        match self.times.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }
}
