//! Physics inputs of the two-wave system.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{
    require_finite, require_non_negative, require_positive, WaveError, WaveResult,
};

/// Amplitude of both waves (fixed, no external control)
pub const AMPLITUDE: f64 = 1.0;

/// Physics parameters of the original and delayed wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// Frequency of wave 1 (Hz, > 0)
    pub frequency_hz: f64,

    /// Propagation speed (m/s, > 0)
    /// 343 m/s = speed of sound in dry air at 20 °C
    pub speed_m_per_s: f64,

    /// Extra distance travelled by wave 2 (meters, >= 0)
    pub path_difference_m: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            frequency_hz: 40.0,
            speed_m_per_s: 343.0,
            path_difference_m: 0.0,
        }
    }
}

impl WaveParams {
    pub fn new(frequency_hz: f64, speed_m_per_s: f64, path_difference_m: f64) -> Self {
        Self {
            frequency_hz,
            speed_m_per_s,
            path_difference_m,
        }
    }

    /// Check f > 0, v > 0 and L >= 0 (all finite)
    ///
    /// ω and τ must also be finite, and τ may only be zero when L is.
    pub fn validate(&self) -> WaveResult<()> {
        require_positive("frequency_hz", self.frequency_hz)?;
        require_positive("speed_m_per_s", self.speed_m_per_s)?;
        require_non_negative("path_difference_m", self.path_difference_m)?;

        require_finite("angular_frequency", self.angular_frequency())?;
        let delay_s = require_finite("delay_s", self.delay_s())?;
        if delay_s == 0.0 && self.path_difference_m > 0.0 {
            return Err(WaveError::invalid(
                "delay_s",
                delay_s,
                "underflows to zero for a non-zero path difference",
            ));
        }
        Ok(())
    }

    /// Angular frequency ω = 2πf (rad/s)
    pub fn angular_frequency(&self) -> f64 {
        2.0 * PI * self.frequency_hz
    }

    /// Period of wave 1 (seconds)
    pub fn period_s(&self) -> f64 {
        1.0 / self.frequency_hz
    }

    /// Propagation delay τ = L / v (seconds)
    ///
    /// Only meaningful on validated parameters; `validate` rejects v <= 0
    /// so this never divides by zero on the evaluator path.
    pub fn delay_s(&self) -> f64 {
        self.path_difference_m / self.speed_m_per_s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let params = WaveParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.delay_s(), 0.0);
    }

    #[test]
    fn test_delay_linear_in_length_inverse_in_speed() {
        let base = WaveParams::new(100.0, 340.0, 1.7);
        let double_length = WaveParams::new(100.0, 340.0, 3.4);
        let double_speed = WaveParams::new(100.0, 680.0, 1.7);

        assert_eq!(base.delay_s(), 1.7 / 340.0);
        assert!((double_length.delay_s() - 2.0 * base.delay_s()).abs() < 1e-15);
        assert!((double_speed.delay_s() - 0.5 * base.delay_s()).abs() < 1e-15);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(WaveParams::new(0.0, 343.0, 0.0).validate().is_err());
        assert!(WaveParams::new(-5.0, 343.0, 0.0).validate().is_err());
        assert!(WaveParams::new(40.0, 0.0, 0.0).validate().is_err());
        assert!(WaveParams::new(40.0, -343.0, 0.0).validate().is_err());
        assert!(WaveParams::new(40.0, 343.0, -0.1).validate().is_err());
        assert!(WaveParams::new(f64::NAN, 343.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_rejects_derived_overflow_and_underflow() {
        // τ = 1e10 / 1e-300 overflows
        assert!(WaveParams::new(40.0, 1e-300, 1e10).validate().is_err());
        // ω = 2π · 1e308 overflows
        assert!(WaveParams::new(1e308, 343.0, 0.0).validate().is_err());
        // τ = 1e-300 / 1e300 underflows to zero although L > 0
        assert!(WaveParams::new(40.0, 1e300, 1e-300).validate().is_err());
    }

    #[test]
    fn test_angular_frequency() {
        let params = WaveParams::new(1.0, 1.0, 0.0);
        assert!((params.angular_frequency() - 2.0 * PI).abs() < 1e-12);
        assert_eq!(params.period_s(), 1.0);
    }
}
