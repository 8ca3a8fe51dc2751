//! Engine — one bounded pass from a bar series to a `Signal`.
//!
//! Indicators are computed once over the full series, read at the last bar
//! with warm-up fallbacks applied, then fed through the decision policy and
//! level constructor. The `Signal` constructor is the single rounding and
//! validation boundary. No I/O, no randomness, no state across calls.

use crate::domain::{Bar, Horizon, Signal, SignalError};
use crate::indicators::rsi::RSI_NEUTRAL;
use crate::indicators::{Atr, Ema, Indicator, Landmark, LandmarkBand, Rsi};
use crate::levels::build_levels;
use crate::policy::{decide, trend_state, PolicyInputs};

pub const EMA_FAST_SPAN: usize = 20;
pub const EMA_MID_SPAN: usize = 50;
pub const EMA_SLOW_SPAN: usize = 200;
pub const RSI_PERIOD: usize = 14;
pub const ATR_PERIOD: usize = 14;

/// Indicator readings at the last bar, warm-up fallbacks already applied:
/// a still-undefined ATR reads 0, RSI reads neutral, and the landmark triad
/// collapses onto the last close.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSnapshot {
    pub ema_fast: f64,
    pub ema_mid: f64,
    pub ema_slow: f64,
    pub rsi: f64,
    pub atr: f64,
    pub key_mark: f64,
    pub upper_zone: f64,
    pub lower_zone: f64,
}

/// Last value of a series, or `fallback` while it is still NaN (warm-up).
fn last_or(series: &[f64], fallback: f64) -> f64 {
    match series.last() {
        Some(&v) if v.is_finite() => v,
        _ => fallback,
    }
}

/// Compute one signal for `symbol` at `horizon` from a chronologically
/// ordered bar series.
///
/// The only error is an empty series. Short series degrade through the
/// indicator warm-up fills; a degenerate ATR forces WAIT. The returned
/// `Signal` always satisfies the confidence and level-ordering invariants.
pub fn compute_signal(
    bars: &[Bar],
    symbol: &str,
    horizon: Horizon,
) -> Result<Signal, SignalError> {
    if bars.is_empty() {
        return Err(SignalError::EmptyBars);
    }

    let close = bars[bars.len() - 1].close;

    let ema_fast = Ema::new(EMA_FAST_SPAN).compute(bars);
    let ema_mid = Ema::new(EMA_MID_SPAN).compute(bars);
    let ema_slow = Ema::new(EMA_SLOW_SPAN).compute(bars);
    let rsi = Rsi::new(RSI_PERIOD).compute(bars);
    let atr = Atr::new(ATR_PERIOD).compute(bars);
    let key_mark = Landmark::new(LandmarkBand::KeyMark).compute(bars);
    let upper_zone = Landmark::new(LandmarkBand::UpperZone).compute(bars);
    let lower_zone = Landmark::new(LandmarkBand::LowerZone).compute(bars);

    let snapshot = IndicatorSnapshot {
        ema_fast: last_or(&ema_fast, close),
        ema_mid: last_or(&ema_mid, close),
        ema_slow: last_or(&ema_slow, close),
        rsi: last_or(&rsi, RSI_NEUTRAL),
        atr: last_or(&atr, 0.0),
        key_mark: last_or(&key_mark, close),
        upper_zone: last_or(&upper_zone, close),
        lower_zone: last_or(&lower_zone, close),
    };

    let trend = trend_state(&ema_fast, &ema_mid, &ema_slow);
    let preset = horizon.preset();
    let decision = decide(
        PolicyInputs {
            close,
            key_mark: snapshot.key_mark,
            rsi: snapshot.rsi,
            atr: snapshot.atr,
        },
        trend,
        &preset,
    );
    let levels = build_levels(decision.action, close, snapshot.atr, &preset);

    Signal::new(
        symbol,
        horizon,
        decision.action,
        decision.confidence,
        levels,
        snapshot.key_mark,
        snapshot.upper_zone,
        snapshot.lower_zone,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Action;
    use crate::indicators::make_bars;

    #[test]
    fn empty_series_is_an_input_error() {
        let err = compute_signal(&[], "QQQ", Horizon::Swing).unwrap_err();
        assert!(matches!(err, SignalError::EmptyBars));
    }

    #[test]
    fn single_bar_waits_with_neutral_confidence() {
        // No previous bar: landmarks fall back to the close, ATR to 0,
        // so pos_vs_key is 0 and the degenerate guard yields WAIT.
        let bars = make_bars(&[100.0]);
        let sig = compute_signal(&bars, "QQQ", Horizon::Short).unwrap();
        assert_eq!(sig.action, Action::Wait);
        assert_eq!(sig.confidence, 0.5);
        assert_eq!(sig.entry, 100.0);
        assert_eq!(sig.tp1, 100.0);
        assert_eq!(sig.tp2, 100.0);
        assert_eq!(sig.sl, 100.0);
        assert_eq!(sig.key_mark, 100.0);
    }

    #[test]
    fn entry_is_the_last_close() {
        let bars = make_bars(&[100.0, 101.0, 102.0, 101.5, 103.25]);
        let sig = compute_signal(&bars, "AAPL", Horizon::Swing).unwrap();
        assert_eq!(sig.entry, 103.25);
        assert_eq!(sig.symbol, "AAPL");
        assert_eq!(sig.horizon, Horizon::Swing);
    }
}
