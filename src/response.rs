//! Comb-filter frequency response of the summed wave.
//!
//! For a fixed delay, each swept frequency is evaluated over a short time
//! window and the RMS of the sum is compared against the RMS of wave 1
//! alone (1/√2 for unit amplitude). Everything stays in the time domain.

use std::f64::consts::{PI, SQRT_2};

use crate::error::{require_finite, require_non_negative, WaveResult};
use crate::interference::{sample_at, TimeGrid};
use crate::params::{SweepConfig, WaveParams, AMPLITUDE};

/// Offset keeping the logarithm finite at full cancellation
pub const LEVEL_EPSILON: f64 = 1e-9;

/// Minimum depth below the loudest point for a local minimum to count as a notch (dB)
pub const NOTCH_DEPTH_DB: f64 = 20.0;

/// Level of the summed wave at one frequency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsePoint {
    /// Swept frequency (Hz)
    pub frequency_hz: f64,

    /// Level relative to wave 1 alone (dB)
    pub level_db: f64,
}

/// RMS of a unit sine wave, the 0 dB reference
pub fn reference_rms() -> f64 {
    AMPLITUDE / SQRT_2
}

/// Convert an RMS value to dB relative to wave 1
pub fn level_db(rms: f64) -> f64 {
    20.0 * ((rms + LEVEL_EPSILON) / reference_rms()).log10()
}

/// Root mean square of the summed wave at one frequency
fn sum_rms(frequency_hz: f64, delay_s: f64, grid: &TimeGrid) -> f64 {
    let omega = 2.0 * PI * frequency_hz;
    let mean_square = grid
        .times
        .iter()
        .map(|&t| sample_at(omega, delay_s, t).sum.powi(2))
        .sum::<f64>()
        / grid.len() as f64;
    mean_square.sqrt()
}

/// Sweep the configured frequency range for a fixed delay (seconds)
pub fn frequency_response(delay_s: f64, sweep: &SweepConfig) -> WaveResult<Vec<ResponsePoint>> {
    let delay_s = require_non_negative("delay_s", delay_s)?;
    sweep.validate()?;

    let grid = TimeGrid::new(sweep.analysis_samples, sweep.analysis_window_s)?;
    require_finite(
        "phase_rad",
        2.0 * PI * sweep.end_hz * (sweep.analysis_window_s + delay_s),
    )?;

    log::debug!(
        "Sweeping {}..{} Hz ({} points) for tau={:.6} s",
        sweep.start_hz,
        sweep.end_hz,
        sweep.points,
        delay_s
    );

    Ok(sweep
        .frequencies()
        .map(|frequency_hz| ResponsePoint {
            frequency_hz,
            level_db: level_db(sum_rms(frequency_hz, delay_s, &grid)),
        })
        .collect())
}

/// Sweep using the delay implied by `params` (τ = L / v)
pub fn response_for(params: &WaveParams, sweep: &SweepConfig) -> WaveResult<Vec<ResponsePoint>> {
    params.validate()?;
    frequency_response(params.delay_s(), sweep)
}

/// Comb notches, ordered by frequency
///
/// A notch is a local minimum at least `NOTCH_DEPTH_DB` below the loudest
/// point. Shallower minima are window ripple of the RMS estimate. The first
/// and last swept frequencies count when they are below their only neighbour.
pub fn notches(points: &[ResponsePoint]) -> Vec<ResponsePoint> {
    let loudest = points
        .iter()
        .map(|p| p.level_db)
        .fold(f64::NEG_INFINITY, f64::max);
    let threshold = loudest - NOTCH_DEPTH_DB;

    points
        .iter()
        .enumerate()
        .filter(|&(i, p)| {
            let below_prev = i == 0 || p.level_db < points[i - 1].level_db;
            let below_next = points
                .get(i + 1)
                .map_or(true, |next| p.level_db <= next.level_db);
            below_prev && below_next && p.level_db < threshold
        })
        .map(|(_, p)| *p)
        .collect()
}
