//! SigLab CLI — compute one signal from a CSV bar file and print it as JSON.
//!
//! Usage:
//!   siglab --bars bars.csv --symbol QQQ --horizon swing --source csv
//!
//! The CSV needs Date,Open,High,Low,Close columns (Volume optional), one bar
//! per row, oldest first. Any chart rendering or rationale text is downstream
//! of the printed JSON.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use serde::Deserialize;
use siglab_core::domain::{Bar, Horizon};
use siglab_core::engine::compute_signal;

#[derive(Parser)]
#[command(
    name = "siglab",
    about = "SigLab CLI — one bar series in, one trading signal out"
)]
struct Cli {
    /// Path to a CSV bar file (Date,Open,High,Low,Close[,Volume], oldest first).
    #[arg(long)]
    bars: PathBuf,

    /// Instrument symbol to stamp on the signal (e.g., QQQ).
    #[arg(long)]
    symbol: String,

    /// Horizon: short, swing, or position.
    #[arg(long, default_value = "swing")]
    horizon: Horizon,

    /// Provenance tag passed through into the signal (e.g., the data source).
    #[arg(long)]
    source: Option<String>,
}

/// One CSV row. Accepts both capitalized (Yahoo-style export) and lowercase
/// headers.
#[derive(Debug, Deserialize)]
struct CsvBar {
    #[serde(alias = "Date")]
    date: NaiveDate,
    #[serde(alias = "Open")]
    open: f64,
    #[serde(alias = "High")]
    high: f64,
    #[serde(alias = "Low")]
    low: f64,
    #[serde(alias = "Close")]
    close: f64,
    #[serde(default, alias = "Volume")]
    volume: Option<u64>,
}

fn load_bars(path: &Path) -> Result<Vec<Bar>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open bar file {}", path.display()))?;

    let mut bars: Vec<Bar> = Vec::new();
    for (i, row) in reader.deserialize::<CsvBar>().enumerate() {
        let row = row.with_context(|| format!("bad CSV row {}", i + 1))?;
        let bar = Bar {
            date: row.date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        };
        if !bar.is_sane() {
            bail!("insane OHLC values in row {} ({})", i + 1, bar.date);
        }
        if let Some(prev) = bars.last() {
            if bar.date <= prev.date {
                bail!(
                    "bars out of order: {} follows {} (rows must be oldest first with unique dates)",
                    bar.date,
                    prev.date
                );
            }
        }
        bars.push(bar);
    }

    if bars.is_empty() {
        bail!("no bars in {}", path.display());
    }
    Ok(bars)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bars = load_bars(&cli.bars)?;
    let mut signal = compute_signal(&bars, &cli.symbol, cli.horizon)?;
    if let Some(source) = cli.source {
        signal = signal.with_source(source);
    }

    println!("{}", serde_json::to_string_pretty(&signal)?);
    Ok(())
}
