//! Relative Strength Index (RSI).
//!
//! Per-bar gain/loss split, each side smoothed with a Wilder exponential mean
//! (alpha = 1/period) seeded at the first change.
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! Lookback: 1 (the first bar has no change).
//!
//! Convention: when avg_loss is zero the ratio is undefined and RSI is pinned
//! at `RSI_NEUTRAL` (50), not 100. A pure-gain stretch therefore reads as
//! neutral rather than maximally overbought.

use super::Indicator;
use crate::domain::Bar;

/// RSI value when the gain/loss ratio is undefined (zero average loss).
pub const RSI_NEUTRAL: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "RSI period must be >= 1");
        Self {
            period,
            name: format!("rsi_{period}"),
        }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];
        if n < 2 {
            return result;
        }

        let alpha = 1.0 / self.period as f64;
        let mut avg_gain = 0.0;
        let mut avg_loss = 0.0;

        for i in 1..n {
            let change = bars[i].close - bars[i - 1].close;
            let gain = if change > 0.0 { change } else { 0.0 };
            let loss = if change < 0.0 { -change } else { 0.0 };

            if i == 1 {
                // Exponential mean seeded at the first observation.
                avg_gain = gain;
                avg_loss = loss;
            } else {
                avg_gain = alpha * gain + (1.0 - alpha) * avg_gain;
                avg_loss = alpha * loss + (1.0 - alpha) * avg_loss;
            }

            result[i] = if avg_loss == 0.0 {
                RSI_NEUTRAL
            } else {
                let rs = avg_gain / avg_loss;
                100.0 - 100.0 / (1.0 + rs)
            };
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_bars};

    #[test]
    fn rsi_zero_loss_pins_neutral() {
        // Strictly rising closes: avg_loss stays 0, so RSI is 50 at every
        // defined position — the explicit convention, not 100.
        let bars = make_bars(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0]);
        let result = Rsi::new(3).compute(&bars);
        assert!(result[0].is_nan());
        for &v in &result[1..] {
            assert_approx(v, RSI_NEUTRAL, 1e-9);
        }
    }

    #[test]
    fn rsi_constant_series_is_neutral() {
        let bars = make_bars(&[100.0; 10]);
        let result = Rsi::new(14).compute(&bars);
        for &v in &result[1..] {
            assert_approx(v, RSI_NEUTRAL, 1e-9);
        }
    }

    #[test]
    fn rsi_all_losses_reads_zero() {
        let bars = make_bars(&[105.0, 104.0, 103.0, 102.0, 101.0]);
        let result = Rsi::new(3).compute(&bars);
        // avg_gain stays 0 while avg_loss is positive: rs = 0, RSI = 0.
        for &v in &result[1..] {
            assert_approx(v, 0.0, 1e-9);
        }
    }

    #[test]
    fn rsi_3_known_values() {
        // Closes: 10, 11, 10.5. Changes: +1.0, -0.5. alpha = 1/3.
        // avg_gain: seed 1.0, then (1/3)*0 + (2/3)*1.0 = 2/3
        // avg_loss: seed 0.0, then (1/3)*0.5 + (2/3)*0 = 1/6
        // rs = (2/3)/(1/6) = 4, RSI = 100 - 100/5 = 80
        let bars = make_bars(&[10.0, 11.0, 10.5]);
        let result = Rsi::new(3).compute(&bars);
        assert_approx(result[1], RSI_NEUTRAL, 1e-9); // first change is a pure gain
        assert_approx(result[2], 80.0, 1e-9);
    }

    #[test]
    fn rsi_bounds() {
        let bars = make_bars(&[100.0, 105.0, 98.0, 110.0, 95.0, 115.0, 90.0, 120.0]);
        let result = Rsi::new(3).compute(&bars);
        for (i, &v) in result.iter().enumerate() {
            if !v.is_nan() {
                assert!(
                    (0.0..=100.0).contains(&v),
                    "RSI out of bounds at bar {i}: {v}"
                );
            }
        }
    }

    #[test]
    fn rsi_lookback() {
        assert_eq!(Rsi::new(14).lookback(), 1);
    }
}
