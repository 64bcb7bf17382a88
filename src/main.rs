//! Wave Interference - superposition of two sine waves
//!
//! Wave 2 is an inverted copy of wave 1, delayed by the time it takes to
//! travel an extra path length. Their sum shows destructive or
//! constructive interference.

use anyhow::{Context, Result};
use clap::Parser;

use wave_interference::cli::Args;
use wave_interference::config::AppConfig;
use wave_interference::interference::evaluate;
use wave_interference::report;
use wave_interference::response::frequency_response;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config_path = args.config_path();
    let config = AppConfig::load(&config_path)
        .with_context(|| format!("Failed to load settings from {}", config_path.display()))?;

    let params = args.wave_params(&config);
    let display = args.display(&config);

    for (name, value, bounds) in config.limits.out_of_range(&params) {
        log::warn!(
            "{} = {} is outside the control range {}..{}",
            name,
            value,
            bounds.min,
            bounds.max
        );
    }

    let table = evaluate(&params, &display).context("Cannot evaluate waves")?;

    if let Some(path) = &args.save_config {
        config
            .with_overrides(params, display)
            .and_then(|effective| effective.save(path))
            .with_context(|| format!("Failed to save settings to {}", path.display()))?;
        log::info!("Saved settings to {}", path.display());
    }

    print!("{}", report::format_table(&table, args.rows));

    if args.response {
        let points = frequency_response(table.delay_s, &config.sweep)
            .context("Cannot compute frequency response")?;
        println!();
        print!("{}", report::format_response(&points, table.delay_ms, args.rows));
    }

    Ok(())
}
