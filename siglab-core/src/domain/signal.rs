//! Signal — the immutable engine output.
//!
//! A `Signal` is assembled exactly once per engine call and never mutated.
//! Construction is the single rounding boundary (all prices and the
//! confidence go to 2 decimals) and validates the ordering and confidence
//! invariants, so a `Signal` that exists is a `Signal` that holds them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Horizon;

/// Trading action recommended by the decision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Short,
    Wait,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Short => "SHORT",
            Action::Wait => "WAIT",
        }
    }
}

/// Entry/target/stop levels produced by the level constructor.
///
/// Raw (unrounded) prices; rounding happens when the `Signal` is assembled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levels {
    pub entry: f64,
    pub tp1: f64,
    pub tp2: f64,
    pub sl: f64,
}

/// Errors from signal construction.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("empty bar series")]
    EmptyBars,
    #[error("confidence {confidence} outside [0, 1]")]
    ConfidenceOutOfRange { confidence: f64 },
    #[error(
        "levels violate {action} ordering: tp2={tp2} tp1={tp1} entry={entry} sl={sl}"
    )]
    LevelOrdering {
        action: &'static str,
        entry: f64,
        tp1: f64,
        tp2: f64,
        sl: f64,
    },
}

/// One trading decision for one instrument at one horizon.
///
/// Invariants, checked at construction:
/// - confidence ∈ [0, 1]
/// - BUY:   tp2 >= tp1 >= entry >= sl
/// - SHORT: tp2 <= tp1 <= entry <= sl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub symbol: String,
    pub horizon: Horizon,
    pub action: Action,
    pub confidence: f64,
    pub entry: f64,
    pub tp1: f64,
    pub tp2: f64,
    pub sl: f64,
    pub key_mark: f64,
    pub upper_zone: f64,
    pub lower_zone: f64,
    /// Provenance tag passed through from the caller, never computed here.
    pub source: Option<String>,
}

/// Round a price or confidence to 2 decimals. The engine computes at full
/// precision; only the assembled `Signal` carries rounded values.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl Signal {
    /// Assemble a signal, rounding every numeric field to 2 decimals and
    /// validating the invariants.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        symbol: impl Into<String>,
        horizon: Horizon,
        action: Action,
        confidence: f64,
        levels: Levels,
        key_mark: f64,
        upper_zone: f64,
        lower_zone: f64,
    ) -> Result<Self, SignalError> {
        let confidence = round2(confidence);
        if !(0.0..=1.0).contains(&confidence) {
            return Err(SignalError::ConfidenceOutOfRange { confidence });
        }

        let entry = round2(levels.entry);
        let tp1 = round2(levels.tp1);
        let tp2 = round2(levels.tp2);
        let sl = round2(levels.sl);

        let ordered = match action {
            Action::Buy => tp2 >= tp1 && tp1 >= entry && entry >= sl,
            Action::Short => tp2 <= tp1 && tp1 <= entry && entry <= sl,
            // WAIT levels are informative, not a trade recommendation.
            Action::Wait => true,
        };
        if !ordered {
            return Err(SignalError::LevelOrdering {
                action: action.as_str(),
                entry,
                tp1,
                tp2,
                sl,
            });
        }

        Ok(Self {
            symbol: symbol.into(),
            horizon,
            action,
            confidence,
            entry,
            tp1,
            tp2,
            sl,
            key_mark: round2(key_mark),
            upper_zone: round2(upper_zone),
            lower_zone: round2(lower_zone),
            source: None,
        })
    }

    /// Attach the caller-supplied provenance tag.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buy_levels() -> Levels {
        Levels {
            entry: 100.0,
            tp1: 101.5,
            tp2: 103.0,
            sl: 98.5,
        }
    }

    #[test]
    fn signal_rounds_at_the_boundary() {
        let levels = Levels {
            entry: 100.004,
            tp1: 101.256,
            tp2: 103.333,
            sl: 98.499,
        };
        let sig = Signal::new(
            "QQQ",
            Horizon::Swing,
            Action::Buy,
            0.8251,
            levels,
            99.987,
            104.555,
            95.001,
        )
        .unwrap();
        assert_eq!(sig.entry, 100.0);
        assert_eq!(sig.tp1, 101.26);
        assert_eq!(sig.tp2, 103.33);
        assert_eq!(sig.sl, 98.5);
        assert_eq!(sig.confidence, 0.83);
        assert_eq!(sig.key_mark, 99.99);
        assert_eq!(sig.upper_zone, 104.56);
        assert_eq!(sig.lower_zone, 95.0);
    }

    #[test]
    fn signal_rejects_confidence_out_of_range() {
        let err = Signal::new(
            "QQQ",
            Horizon::Short,
            Action::Buy,
            1.2,
            buy_levels(),
            100.0,
            101.0,
            99.0,
        )
        .unwrap_err();
        assert!(matches!(err, SignalError::ConfidenceOutOfRange { .. }));
    }

    #[test]
    fn signal_rejects_buy_ordering_violation() {
        let levels = Levels {
            entry: 100.0,
            tp1: 99.0, // target below entry
            tp2: 103.0,
            sl: 98.5,
        };
        let err = Signal::new(
            "QQQ",
            Horizon::Swing,
            Action::Buy,
            0.6,
            levels,
            100.0,
            101.0,
            99.0,
        )
        .unwrap_err();
        assert!(matches!(err, SignalError::LevelOrdering { .. }));
    }

    #[test]
    fn signal_rejects_short_ordering_violation() {
        let levels = Levels {
            entry: 100.0,
            tp1: 98.5,
            tp2: 97.0,
            sl: 99.0, // stop below entry on a short
        };
        let err = Signal::new(
            "QQQ",
            Horizon::Swing,
            Action::Short,
            0.6,
            levels,
            100.0,
            101.0,
            99.0,
        )
        .unwrap_err();
        assert!(matches!(err, SignalError::LevelOrdering { .. }));
    }

    #[test]
    fn signal_allows_degenerate_wait_levels() {
        // ATR 0 collapses all WAIT levels onto the entry.
        let levels = Levels {
            entry: 100.0,
            tp1: 100.0,
            tp2: 100.0,
            sl: 100.0,
        };
        let sig = Signal::new(
            "QQQ",
            Horizon::Short,
            Action::Wait,
            0.5,
            levels,
            100.0,
            100.0,
            100.0,
        )
        .unwrap();
        assert_eq!(sig.action, Action::Wait);
    }

    #[test]
    fn action_serde_casing() {
        assert_eq!(serde_json::to_string(&Action::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&Action::Wait).unwrap(), "\"WAIT\"");
        let a: Action = serde_json::from_str("\"SHORT\"").unwrap();
        assert_eq!(a, Action::Short);
    }

    #[test]
    fn source_is_pass_through() {
        let sig = Signal::new(
            "QQQ",
            Horizon::Swing,
            Action::Buy,
            0.7,
            buy_levels(),
            100.0,
            101.0,
            99.0,
        )
        .unwrap();
        assert_eq!(sig.source, None);
        let tagged = sig.with_source("yahoo");
        assert_eq!(tagged.source.as_deref(), Some("yahoo"));
        // Serialized form always carries the field, null when absent.
        let json = serde_json::to_string(&tagged).unwrap();
        assert!(json.contains("\"source\":\"yahoo\""));
    }
}
