//! SigLab Core — bar series in, trading signal out.
//!
//! One synchronous, stateless pass turns a chronological OHLC bar series into
//! a decision for one instrument at one horizon:
//! - Indicator engine (EMA ladder, RSI, ATR, lagged landmark levels)
//! - Decision policy (trend+momentum-gated action and confidence)
//! - Level constructor (entry/targets/stop with ordering guarantees)
//! - Signal assembler (immutable result, rounded once at the boundary)
//!
//! The UI, data loading, and rationale text live in other crates; this one
//! performs no I/O and holds no state across calls.

pub mod domain;
pub mod engine;
pub mod indicators;
pub mod levels;
pub mod policy;
