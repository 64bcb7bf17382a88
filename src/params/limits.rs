//! Recommended input ranges of the interactive controls.

use serde::{Deserialize, Serialize};

use super::WaveParams;

/// Inclusive range with a display unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Control ranges offered by the front end
///
/// These are advisory. The evaluator only enforces physical validity
/// (see `WaveParams::validate`) and never clamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Frequency control range (Hz)
    pub frequency_hz: Bounds,

    /// Speed control range (m/s)
    pub speed_m_per_s: Bounds,

    /// Path length difference control range (meters)
    pub path_difference_m: Bounds,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            frequency_hz: Bounds::new(20.0, 200.0),
            speed_m_per_s: Bounds::new(300.0, 1000.0),
            path_difference_m: Bounds::new(0.0, 5.0),
        }
    }
}

impl InputLimits {
    /// Names and values of parameters outside their control range
    pub fn out_of_range(&self, params: &WaveParams) -> Vec<(&'static str, f64, Bounds)> {
        let checks = [
            ("frequency_hz", params.frequency_hz, self.frequency_hz),
            ("speed_m_per_s", params.speed_m_per_s, self.speed_m_per_s),
            (
                "path_difference_m",
                params.path_difference_m,
                self.path_difference_m,
            ),
        ];
        checks
            .into_iter()
            .filter(|(_, value, bounds)| !bounds.contains(*value))
            .collect()
    }
}
