//! Decision policy — trend+momentum-gated action selection.
//!
//! A direction is only tradeable when three gates agree: the EMA ladder is
//! stacked and the mid EMA is sloping the same way, price sits on the right
//! side of the key mark, and RSI is not already stretched in that direction.
//! Anything else is WAIT. ATR <= 0 forces WAIT regardless of the gates.

use crate::domain::{Action, HorizonPreset};

/// RSI ceiling for long bias: above this the upside is considered stretched.
pub const RSI_UPPER_GATE: f64 = 68.0;
/// RSI floor for short bias: below this the downside is considered stretched.
pub const RSI_LOWER_GATE: f64 = 32.0;
/// ATR multiple normalizing the price-vs-key-mark distance in directional confidence.
pub const CONF_ATR_DIVISOR: f64 = 2.8;
/// ATR multiple normalizing the same distance in WAIT confidence.
pub const WAIT_CONF_ATR_DIVISOR: f64 = 4.0;
/// Bars over which the mid EMA must be rising (falling) to call a trend.
pub const TREND_SLOPE_BARS: usize = 5;

/// Trend reading from the EMA ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendState {
    Bullish,
    Bearish,
    Flat,
}

/// Latest-bar inputs to the policy, warm-up fallbacks already applied.
#[derive(Debug, Clone, Copy)]
pub struct PolicyInputs {
    pub close: f64,
    pub key_mark: f64,
    pub rsi: f64,
    pub atr: f64,
}

/// Action plus the confidence the policy assigns to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub action: Action,
    pub confidence: f64,
}

/// Read the trend off the EMA ladder at the last bar.
///
/// Bullish: fast > mid > slow and the mid EMA above its value
/// `TREND_SLOPE_BARS - 1` bars back. Bearish mirrors. With fewer than
/// `TREND_SLOPE_BARS` bars the slope is unknowable and the trend is Flat.
pub fn trend_state(ema_fast: &[f64], ema_mid: &[f64], ema_slow: &[f64]) -> TrendState {
    let n = ema_mid.len();
    if n < TREND_SLOPE_BARS {
        return TrendState::Flat;
    }
    let last = n - 1;
    let fast = ema_fast[last];
    let mid = ema_mid[last];
    let slow = ema_slow[last];
    let mid_then = ema_mid[n - TREND_SLOPE_BARS];

    if fast > mid && mid > slow && mid > mid_then {
        TrendState::Bullish
    } else if fast < mid && mid < slow && mid < mid_then {
        TrendState::Bearish
    } else {
        TrendState::Flat
    }
}

/// Confidence for a candidate direction, sign = +1 for long, -1 for short.
///
/// Blends a distance term (how far price sits past the key mark, in ATRs)
/// with the preset's trend weight when the trend agrees with the direction.
fn directional_confidence(
    sign: f64,
    pos_vs_key: f64,
    atr: f64,
    trend: TrendState,
    trend_weight: f64,
) -> f64 {
    let base = if atr <= 0.0 {
        0.5
    } else {
        (0.5 + sign * pos_vs_key / (CONF_ATR_DIVISOR * atr)).clamp(0.0, 1.0)
    };
    let trend_agrees = (trend == TrendState::Bullish && sign > 0.0)
        || (trend == TrendState::Bearish && sign < 0.0);
    let trend_part = if trend_agrees { trend_weight } else { 0.0 };
    (0.5 * base + 0.5 * trend_part).clamp(0.0, 1.0)
}

/// Map the latest snapshot to an action and confidence.
pub fn decide(inputs: PolicyInputs, trend: TrendState, preset: &HorizonPreset) -> Decision {
    let pos_vs_key = inputs.close - inputs.key_mark;
    let rsi_bias_up = inputs.rsi <= RSI_UPPER_GATE;
    let rsi_bias_down = inputs.rsi >= RSI_LOWER_GATE;

    let buy_bias = trend == TrendState::Bullish && pos_vs_key >= 0.0 && rsi_bias_up;
    let short_bias = trend == TrendState::Bearish && pos_vs_key <= 0.0 && rsi_bias_down;

    if buy_bias && inputs.atr > 0.0 {
        Decision {
            action: Action::Buy,
            confidence: directional_confidence(
                1.0,
                pos_vs_key,
                inputs.atr,
                trend,
                preset.trend_weight,
            ),
        }
    } else if short_bias && inputs.atr > 0.0 {
        Decision {
            action: Action::Short,
            confidence: directional_confidence(
                -1.0,
                pos_vs_key,
                inputs.atr,
                trend,
                preset.trend_weight,
            ),
        }
    } else {
        let confidence = if inputs.atr > 0.0 {
            (0.5 + pos_vs_key / (WAIT_CONF_ATR_DIVISOR * inputs.atr)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        Decision {
            action: Action::Wait,
            confidence,
        }
    }
}
