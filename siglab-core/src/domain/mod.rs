//! Domain types: bars in, signals out.

pub mod bar;
pub mod horizon;
pub mod signal;

pub use bar::Bar;
pub use horizon::{Horizon, HorizonPreset};
pub use signal::{Action, Levels, Signal, SignalError};
