//! Superposition of a sine wave with its inverted, delayed copy.

mod evaluator;
mod grid;
mod table;

// Re-export public types
pub use evaluator::{evaluate, evaluate_default, sample_at};
pub use grid::TimeGrid;
pub use table::{SampleRow, SampleTable};

/// The three plotted series
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaveKind {
    Original,
    InvertedDelayed,
    Sum,
}

impl WaveKind {
    pub const ALL: [WaveKind; 3] = [WaveKind::Original, WaveKind::InvertedDelayed, WaveKind::Sum];

    /// Legend label of the series
    pub fn label(&self) -> &'static str {
        match self {
            WaveKind::Original => "Wave 1 (Original)",
            WaveKind::InvertedDelayed => "Wave 2 (Inverted & Delayed)",
            WaveKind::Sum => "Wave 3 (Sum)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DisplayConfig, WaveParams, Window};

    const EPS: f64 = 1e-12;

    fn display(sample_count: usize, window_s: f64) -> DisplayConfig {
        DisplayConfig {
            sample_count,
            window: Window::Seconds(window_s),
        }
    }

    #[test]
    fn test_sum_is_exact_superposition() {
        let params = WaveParams::new(73.0, 343.0, 1.3);
        let table = evaluate(&params, &DisplayConfig::default()).unwrap();

        assert_eq!(table.len(), 1000);
        for row in &table.rows {
            assert_eq!(row.sum, row.wave1 + row.wave2);
        }
    }

    #[test]
    fn test_zero_path_difference_cancels() {
        let table = evaluate_default(1.0, 343.0, 0.0).unwrap();

        assert_eq!(table.delay_s, 0.0);
        assert_eq!(table.delay_ms, 0.0);

        let first = table.rows[0];
        assert_eq!(first.time_s, 0.0);
        assert_eq!(first.wave1, 0.0);
        assert_eq!(first.wave2, 0.0);
        assert_eq!(first.sum, 0.0);

        assert!(table.rows.iter().all(|row| row.sum.abs() < EPS));
        assert!(table.peak(WaveKind::Sum) < EPS);
    }

    #[test]
    fn test_half_second_delay_scenario() {
        let params = WaveParams::new(1.0, 1.0, 0.5);
        let table = evaluate(&params, &display(3, 1.0)).unwrap();

        assert_eq!(table.delay_s, 0.5);
        assert_eq!(table.delay_ms, 500.0);

        let mid = table.rows[1];
        assert_eq!(mid.time_s, 0.5);
        assert_eq!(mid.wave2, 0.0);
        assert!(mid.wave1.abs() < EPS);
        assert!(mid.sum.abs() < EPS);

        // wave2(t) = -sin(2π(t - 0.5)) by direct substitution
        for row in &table.rows {
            let expected = -(2.0 * std::f64::consts::PI * (row.time_s - 0.5)).sin();
            assert!((row.wave2 - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_doubling_frequency_halves_period() {
        let period = |frequency_hz: f64| {
            let params = WaveParams::new(frequency_hz, 343.0, 0.0);
            let table = evaluate(&params, &display(10_001, 1.0)).unwrap();
            let crossings = table.upward_zero_crossings(WaveKind::Original);
            assert!(crossings.len() >= 2);
            (crossings[crossings.len() - 1] - crossings[0]) / (crossings.len() - 1) as f64
        };

        let slow = period(10.0);
        let fast = period(20.0);
        assert!((slow - 0.1).abs() < 1e-6);
        assert!((fast - slow / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_input_produces_no_rows() {
        for (f, v, l) in [
            (0.0, 343.0, 0.0),
            (40.0, 0.0, 0.0),
            (40.0, -1.0, 0.0),
            (40.0, 343.0, -0.5),
        ] {
            let err = evaluate_default(f, v, l).unwrap_err();
            assert!(err.is_invalid_parameter(), "({f}, {v}, {l}) -> {err}");
        }
    }

    #[test]
    fn test_rejects_overflowing_delay() {
        let params = WaveParams::new(40.0, 1e-300, 1e10);
        let err = evaluate(&params, &DisplayConfig::default()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_rejects_overflowing_angular_frequency() {
        let params = WaveParams::new(1e308, 343.0, 0.0);
        let err = evaluate(&params, &DisplayConfig::default()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_rejects_delay_underflow_to_zero() {
        let params = WaveParams::new(40.0, 1e300, 1e-300);
        let err = evaluate(&params, &DisplayConfig::default()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_rejects_overflowing_phase() {
        // ω and τ are finite on their own, ω·τ is not
        let params = WaveParams::new(1e200, 1.0, 1e200);
        let err = evaluate(&params, &DisplayConfig::default()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_extreme_valid_input_stays_finite() {
        let params = WaveParams::new(1e6, 1e-3, 1e3);
        let table = evaluate(&params, &display(64, 1e-3)).unwrap();
        assert!(table.delay_s.is_finite());
        assert!(table
            .rows
            .iter()
            .all(|row| row.wave1.is_finite() && row.wave2.is_finite() && row.sum.is_finite()));
    }

    #[test]
    fn test_periods_window_scales_with_frequency() {
        let display = DisplayConfig::periods(200, 4.0);
        let slow = evaluate(&WaveParams::new(20.0, 343.0, 0.0), &display).unwrap();
        let fast = evaluate(&WaveParams::new(40.0, 343.0, 0.0), &display).unwrap();

        assert!((slow.window_s - 0.2).abs() < EPS);
        assert!((fast.window_s - 0.1).abs() < EPS);
        assert!((slow.rows.last().unwrap().time_s - 0.2).abs() < EPS);
    }

    #[test]
    fn test_constructive_delay_doubles_amplitude() {
        // Half a period of delay turns the inverted copy back in phase
        let params = WaveParams::new(50.0, 1.0, 0.01);
        let table = evaluate(&params, &display(2001, 0.04)).unwrap();

        let peak = table.peak(WaveKind::Sum);
        assert!((peak - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_series_follow_row_order() {
        let table = evaluate_default(40.0, 343.0, 1.0).unwrap();
        for kind in WaveKind::ALL {
            let series: Vec<_> = table.series(kind).collect();
            assert_eq!(series.len(), table.len());
            assert!(series.windows(2).all(|pair| pair[1].0 > pair[0].0));
        }
        assert_eq!(WaveKind::Sum.label(), "Wave 3 (Sum)");
    }
}
