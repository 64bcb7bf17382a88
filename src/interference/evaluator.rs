//! Closed-form evaluation of the two waves and their superposition.

use super::grid::TimeGrid;
use super::table::{SampleRow, SampleTable};
use crate::error::{require_finite, WaveResult};
use crate::params::{DisplayConfig, WaveParams, AMPLITUDE};

/// Amplitudes of wave 1, wave 2 and their sum at time `t`
///
/// # Arguments
/// * `omega` - Angular frequency (rad/s)
/// * `delay_s` - Delay of the inverted wave (seconds)
/// * `time_s` - Sample time (seconds)
pub fn sample_at(omega: f64, delay_s: f64, time_s: f64) -> SampleRow {
    let wave1 = AMPLITUDE * (omega * time_s).sin();
    let wave2 = -AMPLITUDE * (omega * (time_s - delay_s)).sin();
    SampleRow {
        time_s,
        wave1,
        wave2,
        sum: wave1 + wave2,
    }
}

/// Evaluate both waves and their sum over the display grid
///
/// Parameters are validated before the delay is computed, so invalid
/// input yields `InvalidParameter` and no rows.
pub fn evaluate(params: &WaveParams, display: &DisplayConfig) -> WaveResult<SampleTable> {
    params.validate()?;
    display.validate()?;

    let omega = params.angular_frequency();
    let delay_s = params.delay_s();
    let window_s = display.window.length_s(params.frequency_hz)?;
    let grid = TimeGrid::new(display.sample_count, window_s)?;

    // Largest phase ω·(t − τ) in magnitude; sin(±inf) is NaN
    require_finite("phase_rad", omega * (window_s + delay_s))?;

    log::debug!(
        "Evaluating f={} Hz, v={} m/s, L={} m: tau={:.6} s over {} samples / {} s",
        params.frequency_hz,
        params.speed_m_per_s,
        params.path_difference_m,
        delay_s,
        grid.len(),
        window_s
    );

    let rows = grid
        .times
        .iter()
        .map(|&t| sample_at(omega, delay_s, t))
        .collect();

    Ok(SampleTable {
        params: *params,
        rows,
        delay_s,
        delay_ms: delay_s * 1000.0,
        window_s,
    })
}

/// Evaluate with the default display resolution
pub fn evaluate_default(
    frequency_hz: f64,
    speed_m_per_s: f64,
    path_difference_m: f64,
) -> WaveResult<SampleTable> {
    let params = WaveParams::new(frequency_hz, speed_m_per_s, path_difference_m);
    evaluate(&params, &DisplayConfig::default())
}
