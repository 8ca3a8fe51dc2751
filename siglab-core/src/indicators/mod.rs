//! Concrete indicator implementations.
//!
//! All indicators implement the `Indicator` trait: bar history in, numeric
//! series out, same length as the input, with the first `lookback()` positions
//! `f64::NAN` (warm-up). They are computed once per engine call and read at
//! the last bar.
//!
//! The landmark triad (key mark, upper zone, lower zone) is exposed as
//! separate named instances per band, keeping the single-series trait
//! unchanged.

pub mod atr;
pub mod ema;
pub mod landmarks;
pub mod rsi;

pub use atr::Atr;
pub use ema::Ema;
pub use landmarks::{Landmark, LandmarkBand};
pub use rsi::Rsi;

use crate::domain::Bar;

/// Trait for indicators.
///
/// Indicators are pure functions over the bar series: no state survives a
/// `compute` call, and the value at bar t depends only on bars 0..=t.
pub trait Indicator: Send + Sync {
    /// Human-readable name (e.g., "ema_20", "atr_14").
    fn name(&self) -> &str;

    /// Number of bars before the indicator produces valid output.
    fn lookback(&self) -> usize;

    /// Compute the indicator for the entire bar series.
    ///
    /// Returns a `Vec<f64>` of the same length as `bars`, with the first
    /// `lookback()` values `f64::NAN`.
    fn compute(&self, bars: &[Bar]) -> Vec<f64>;
}

/// Create synthetic bars from close prices for testing.
///
/// Generates plausible OHLC: open = prev_close (or close for first bar),
/// high = max(open,close) + 0.5, low = min(open,close) - 0.5.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 0.5,
                low: open.min(close) - 0.5,
                close,
                volume: Some(1000),
            }
        })
        .collect()
}

/// Create bars from explicit (open, high, low, close) tuples.
#[cfg(test)]
pub fn make_ohlc_bars(data: &[(f64, f64, f64, f64)]) -> Vec<Bar> {
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    data.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| Bar {
            date: base_date + chrono::Duration::days(i as i64),
            open,
            high,
            low,
            close,
            volume: Some(1000),
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
