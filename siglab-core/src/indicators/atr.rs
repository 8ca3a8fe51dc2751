//! Average True Range (ATR).
//!
//! True Range: max(high-low, |high-prev_close|, |low-prev_close|), undefined
//! at bar 0 (no previous close).
//!
//! Averaging uses a simple moving average over a window shrunk for short
//! series: w = min(period, max(ATR_MIN_WINDOW, n/2)). Positions where the SMA
//! window is not yet full are filled with an exponential average (span = w) of
//! the same true-range series, so ATR is defined from bar 1 onward on any
//! series length.
//! Lookback: 1.

use super::ema::ema_of_series;
use super::Indicator;
use crate::domain::Bar;

/// Smallest SMA window the short-series shrink may produce.
pub const ATR_MIN_WINDOW: usize = 5;

#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
    name: String,
}

impl Atr {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "ATR period must be >= 1");
        Self {
            period,
            name: format!("atr_{period}"),
        }
    }
}

/// The SMA window actually used for a series of `n` bars.
pub fn effective_window(period: usize, n: usize) -> usize {
    period.min(ATR_MIN_WINDOW.max(n / 2))
}

/// Compute the True Range series. TR[0] is NaN (no previous close).
pub fn true_range(bars: &[Bar]) -> Vec<f64> {
    let n = bars.len();
    let mut tr = vec![f64::NAN; n];
    for i in 1..n {
        let h = bars[i].high;
        let l = bars[i].low;
        let pc = bars[i - 1].close;
        tr[i] = (h - l).max((h - pc).abs()).max((l - pc).abs());
    }
    tr
}

impl Indicator for Atr {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let tr = true_range(bars);
        let mut result = vec![f64::NAN; n];
        if n < 2 {
            return result;
        }

        let w = effective_window(self.period, n);
        let fill = ema_of_series(&tr, w);

        // SMA over the last w true ranges; the window is full once it no
        // longer reaches back to the undefined TR[0].
        let mut window_sum = 0.0;
        for i in 1..n {
            window_sum += tr[i];
            if i > w {
                window_sum -= tr[i - w];
            }
            result[i] = if i >= w {
                window_sum / w as f64
            } else {
                fill[i]
            };
        }

        result
    }
}
