//! Landmark levels — a one-bar-lagged reference triad.
//!
//! From the previous bar's high/low/close:
//!   key_mark   = (H + L + C) / 3
//!   upper_zone = 2 * key_mark - L
//!   lower_zone = 2 * key_mark - H
//!
//! Analogous to floor-trader pivot levels. Undefined at the very first bar.
//! Each band is a separate named `Indicator` instance.

use super::Indicator;
use crate::domain::Bar;

/// Which landmark series a `Landmark` instance computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkBand {
    KeyMark,
    UpperZone,
    LowerZone,
}

#[derive(Debug, Clone)]
pub struct Landmark {
    band: LandmarkBand,
}

impl Landmark {
    pub fn new(band: LandmarkBand) -> Self {
        Self { band }
    }
}

impl Indicator for Landmark {
    fn name(&self) -> &str {
        match self.band {
            LandmarkBand::KeyMark => "key_mark",
            LandmarkBand::UpperZone => "upper_zone",
            LandmarkBand::LowerZone => "lower_zone",
        }
    }

    fn lookback(&self) -> usize {
        1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        let n = bars.len();
        let mut result = vec![f64::NAN; n];
        for i in 1..n {
            let prev = &bars[i - 1];
            let key_mark = (prev.high + prev.low + prev.close) / 3.0;
            result[i] = match self.band {
                LandmarkBand::KeyMark => key_mark,
                LandmarkBand::UpperZone => 2.0 * key_mark - prev.low,
                LandmarkBand::LowerZone => 2.0 * key_mark - prev.high,
            };
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_ohlc_bars, DEFAULT_EPSILON};

    #[test]
    fn landmarks_lag_one_bar() {
        // Bar 0: H=105, L=95, C=100 → key_mark 100, upper 105, lower 95,
        // all read at bar 1.
        let bars = make_ohlc_bars(&[
            (100.0, 105.0, 95.0, 100.0),
            (100.0, 110.0, 99.0, 108.0),
        ]);

        let km = Landmark::new(LandmarkBand::KeyMark).compute(&bars);
        let uz = Landmark::new(LandmarkBand::UpperZone).compute(&bars);
        let lz = Landmark::new(LandmarkBand::LowerZone).compute(&bars);

        assert!(km[0].is_nan());
        assert!(uz[0].is_nan());
        assert!(lz[0].is_nan());
        assert_approx(km[1], 100.0, DEFAULT_EPSILON);
        assert_approx(uz[1], 105.0, DEFAULT_EPSILON);
        assert_approx(lz[1], 95.0, DEFAULT_EPSILON);
    }

    #[test]
    fn landmarks_asymmetric_bar() {
        // Bar 0: H=106, L=100, C=103 → key_mark (106+100+103)/3 = 103
        // upper = 2*103 - 100 = 106, lower = 2*103 - 106 = 100
        let bars = make_ohlc_bars(&[
            (101.0, 106.0, 100.0, 103.0),
            (103.0, 104.0, 102.0, 103.5),
        ]);
        assert_approx(
            Landmark::new(LandmarkBand::KeyMark).compute(&bars)[1],
            103.0,
            DEFAULT_EPSILON,
        );
        assert_approx(
            Landmark::new(LandmarkBand::UpperZone).compute(&bars)[1],
            106.0,
            DEFAULT_EPSILON,
        );
        assert_approx(
            Landmark::new(LandmarkBand::LowerZone).compute(&bars)[1],
            100.0,
            DEFAULT_EPSILON,
        );
    }

    #[test]
    fn landmark_names_and_lookback() {
        assert_eq!(Landmark::new(LandmarkBand::KeyMark).name(), "key_mark");
        assert_eq!(Landmark::new(LandmarkBand::UpperZone).name(), "upper_zone");
        assert_eq!(Landmark::new(LandmarkBand::LowerZone).name(), "lower_zone");
        assert_eq!(Landmark::new(LandmarkBand::KeyMark).lookback(), 1);
    }
}
