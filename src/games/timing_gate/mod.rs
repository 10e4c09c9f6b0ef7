//! Timing Gate: rhythmic tap accuracy.

pub mod logic;
pub mod types;

pub use logic::{process_input, process_tick, start};
pub use types::{GateInput, GatePhase, TimingGateGame};
