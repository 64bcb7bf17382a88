//! Tabular output of the evaluator: one row per time sample.

use super::WaveKind;
use crate::params::WaveParams;

/// Amplitudes of the three waves at one time sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow {
    /// Time (seconds)
    pub time_s: f64,

    /// A·sin(ωt)
    pub wave1: f64,

    /// −A·sin(ω(t − τ))
    pub wave2: f64,

    /// wave1 + wave2
    pub sum: f64,
}

impl SampleRow {
    pub fn amplitude(&self, kind: WaveKind) -> f64 {
        match kind {
            WaveKind::Original => self.wave1,
            WaveKind::InvertedDelayed => self.wave2,
            WaveKind::Sum => self.sum,
        }
    }
}

/// Sampled time grid with the three wave sequences and the delay
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    /// Parameters the table was computed from
    pub params: WaveParams,

    /// Rows ordered by increasing time
    pub rows: Vec<SampleRow>,

    /// Propagation delay τ (seconds)
    pub delay_s: f64,

    /// Propagation delay τ (milliseconds, for display)
    pub delay_ms: f64,

    /// Length of the sampled window (seconds)
    pub window_s: f64,
}

impl SampleTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (time, amplitude) pairs of one wave, for a plotting component
    pub fn series(&self, kind: WaveKind) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.rows.iter().map(move |row| (row.time_s, row.amplitude(kind)))
    }

    /// Largest absolute amplitude of one wave over the window
    pub fn peak(&self, kind: WaveKind) -> f64 {
        self.rows
            .iter()
            .map(|row| row.amplitude(kind).abs())
            .fold(0.0, f64::max)
    }

    /// Times where a wave crosses zero with positive slope
    ///
    /// Crossing times are linearly interpolated between neighbouring samples.
    pub fn upward_zero_crossings(&self, kind: WaveKind) -> Vec<f64> {
        self.rows
            .windows(2)
            .filter_map(|pair| {
                let (a, b) = (pair[0].amplitude(kind), pair[1].amplitude(kind));
                if a <= 0.0 && b > 0.0 {
                    let fraction = -a / (b - a);
                    Some(pair[0].time_s + fraction * (pair[1].time_s - pair[0].time_s))
                } else {
                    None
                }
            })
            .collect()
    }
}
