//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * close[t] + (1 - alpha) * EMA[t-1]
//! with alpha = 2 / (period + 1).
//! Seed: EMA[0] = close[0] — the first output equals the first input, there is
//! no separate seed window, so the series is defined from the very first bar.
//! Lookback: 0.

use super::Indicator;
use crate::domain::Bar;

#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    name: String,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "EMA period must be >= 1");
        Self {
            period,
            name: format!("ema_{period}"),
        }
    }
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        ema_of_series(&closes, self.period)
    }
}

/// Compute EMA over a pre-extracted f64 slice.
///
/// Used by the ATR warm-up fill, which smooths the true-range series rather
/// than closes. Leading NaN positions are skipped; the first finite value
/// seeds the recursion.
pub fn ema_of_series(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if n == 0 || period == 0 {
        return result;
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut prev: Option<f64> = None;

    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            // Before the seed: stay NaN. (The engine never feeds interior
            // NaNs; true-range series are NaN only at index 0.)
            continue;
        }
        let next = match prev {
            None => v,
            Some(p) => alpha * v + (1.0 - alpha) * p,
        };
        result[i] = next;
        prev = Some(next);
    }

    result
}
