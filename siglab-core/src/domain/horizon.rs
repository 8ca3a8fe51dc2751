//! Horizon — trade-duration regime selecting a parameter preset.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trade-duration regime. Each horizon selects a fixed preset of target/stop
/// multipliers and a trend weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    Short,
    Swing,
    Position,
}

/// Per-horizon parameters: ATR multipliers for the two targets and the stop,
/// plus the weight the trend term carries in the confidence blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonPreset {
    pub tp1_mult: f64,
    pub tp2_mult: f64,
    pub sl_mult: f64,
    pub trend_weight: f64,
}

impl Horizon {
    /// The parameter preset for this horizon.
    pub fn preset(&self) -> HorizonPreset {
        match self {
            Horizon::Short => HorizonPreset {
                tp1_mult: 0.6,
                tp2_mult: 1.2,
                sl_mult: 0.9,
                trend_weight: 0.6,
            },
            Horizon::Swing => HorizonPreset {
                tp1_mult: 0.8,
                tp2_mult: 1.6,
                sl_mult: 1.0,
                trend_weight: 0.65,
            },
            Horizon::Position => HorizonPreset {
                tp1_mult: 1.0,
                tp2_mult: 2.2,
                sl_mult: 1.4,
                trend_weight: 0.7,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Horizon::Short => "short",
            Horizon::Swing => "swing",
            Horizon::Position => "position",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Horizon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Horizon::Short),
            "swing" => Ok(Horizon::Swing),
            "position" => Ok(Horizon::Position),
            other => Err(format!(
                "unknown horizon '{other}' (expected short, swing, or position)"
            )),
        }
    }
}
