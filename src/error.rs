//! Error types for parameter validation and configuration.

use thiserror::Error;

/// Errors raised by the evaluator, the sweep and the config layer
#[derive(Error, Debug)]
pub enum WaveError {
    /// A physics or display parameter is outside its valid domain
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WaveError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        WaveError::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// True for the `InvalidParameter` class
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, WaveError::InvalidParameter { .. })
    }
}

pub type WaveResult<T> = Result<T, WaveError>;

/// Require a finite value strictly greater than zero
pub(crate) fn require_positive(name: &'static str, value: f64) -> WaveResult<f64> {
    if !value.is_finite() {
        return Err(WaveError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(WaveError::invalid(name, value, "must be > 0"));
    }
    Ok(value)
}

/// Require a finite value (derived quantities that may overflow)
pub(crate) fn require_finite(name: &'static str, value: f64) -> WaveResult<f64> {
    if !value.is_finite() {
        return Err(WaveError::invalid(name, value, "overflows to a non-finite value"));
    }
    Ok(value)
}

/// Require a finite value greater than or equal to zero
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> WaveResult<f64> {
    if !value.is_finite() {
        return Err(WaveError::invalid(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(WaveError::invalid(name, value, "must be >= 0"));
    }
    Ok(value)
}
