//! Level constructor — entry/target/stop prices for the chosen action.
//!
//! Deltas are ATR multiples from the horizon preset, floored at a minimum
//! absolute move so a near-zero ATR cannot produce zero-width targets, then
//! clamped so the ordering invariant holds by construction:
//! BUY tp2 >= tp1 >= entry >= sl, SHORT mirrored.

use crate::domain::{Action, HorizonPreset, Levels};

/// Minimum absolute distance of tp1 and sl from the entry.
pub const MIN_LEVEL_MOVE: f64 = 0.01;
/// Minimum absolute distance of tp2 from the entry.
pub const MIN_STRETCH_MOVE: f64 = 0.02;

/// WAIT levels are informative only: a symmetric sketch around the entry.
pub const WAIT_TP1_MULT: f64 = 0.6;
pub const WAIT_TP2_MULT: f64 = 1.2;
pub const WAIT_SL_MULT: f64 = 0.9;

/// Build levels for `action` with entry at the last close.
pub fn build_levels(action: Action, entry: f64, atr: f64, preset: &HorizonPreset) -> Levels {
    match action {
        Action::Buy => {
            let tp1 = entry + (preset.tp1_mult * atr).max(MIN_LEVEL_MOVE);
            let tp2 = entry + (preset.tp2_mult * atr).max(MIN_STRETCH_MOVE);
            let sl = entry - (preset.sl_mult * atr).max(MIN_LEVEL_MOVE);
            let tp1 = tp1.max(entry);
            let tp2 = tp2.max(tp1);
            let sl = sl.min(entry);
            Levels {
                entry,
                tp1,
                tp2,
                sl,
            }
        }
        Action::Short => {
            let tp1 = entry - (preset.tp1_mult * atr).max(MIN_LEVEL_MOVE);
            let tp2 = entry - (preset.tp2_mult * atr).max(MIN_STRETCH_MOVE);
            let sl = entry + (preset.sl_mult * atr).max(MIN_LEVEL_MOVE);
            let tp1 = tp1.min(entry);
            let tp2 = tp2.min(tp1);
            let sl = sl.max(entry);
            Levels {
                entry,
                tp1,
                tp2,
                sl,
            }
        }
        Action::Wait => Levels {
            entry,
            tp1: entry + WAIT_TP1_MULT * atr,
            tp2: entry + WAIT_TP2_MULT * atr,
            sl: entry - WAIT_SL_MULT * atr,
        },
    }
}
