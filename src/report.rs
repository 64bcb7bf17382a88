//! Plain-text rendering of the sample table and frequency response.

use crate::interference::{SampleTable, WaveKind};
use crate::response::{notches, ResponsePoint};

/// Chart title line
pub fn title(table: &SampleTable) -> String {
    format!(
        "Interference (Frequency: {} Hz, Length: {:.2} m, Delay: {:.2} ms)",
        table.params.frequency_hz, table.params.path_difference_m, table.delay_ms
    )
}

/// Summary of the time-domain table followed by its first `rows` rows
pub fn format_table(table: &SampleTable, rows: usize) -> String {
    let mut lines = vec![
        title(table),
        format!(
            "Samples: {} over {:.2} ms",
            table.len(),
            table.window_s * 1000.0
        ),
    ];
    lines.extend(
        WaveKind::ALL
            .iter()
            .map(|kind| format!("  peak |{}| = {:.4}", kind.label(), table.peak(*kind))),
    );

    lines.push(String::new());
    lines.push(format!(
        "{:>12} {:>12} {:>12} {:>12}",
        "Time (s)", "Wave 1", "Wave 2", "Sum"
    ));
    lines.extend(table.rows.iter().take(rows).map(|row| {
        format!(
            "{:>12.6} {:>12.6} {:>12.6} {:>12.6}",
            row.time_s, row.wave1, row.wave2, row.sum
        )
    }));
    if table.len() > rows {
        lines.push(format!("... {} more rows", table.len() - rows));
    }

    finish(lines)
}

/// Summary of the frequency response followed by its first `rows` points
pub fn format_response(points: &[ResponsePoint], delay_ms: f64, rows: usize) -> String {
    let mut lines = vec![format!("Frequency Response (τ = {:.2} ms)", delay_ms)];

    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.level_db), hi.max(p.level_db))
        });
    if !points.is_empty() {
        lines.push(format!("Level range: {:.2} dB .. {:.2} dB", min, max));
    }

    let found = notches(points);
    if !found.is_empty() {
        let list: Vec<String> = found
            .iter()
            .take(5)
            .map(|p| format!("{:.1} Hz", p.frequency_hz))
            .collect();
        lines.push(format!("Notches: {}", list.join(", ")));
    }

    lines.push(String::new());
    lines.push(format!("{:>16} {:>12}", "Frequency (Hz)", "SPL (dB)"));
    lines.extend(
        points
            .iter()
            .take(rows)
            .map(|point| format!("{:>16.1} {:>12.2}", point.frequency_hz, point.level_db)),
    );
    if points.len() > rows {
        lines.push(format!("... {} more rows", points.len() - rows));
    }

    finish(lines)
}

/// Join lines, newline-terminated
fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
