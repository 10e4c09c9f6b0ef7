//! Signal Divide: rule-based binary sorting under time pressure.

pub mod logic;
pub mod types;

pub use logic::{process_input, process_tick, start};
pub use types::{
    DivideInput, DividePhase, Signal, SignalColor, SignalDivideGame, SignalRule, SignalShape,
    SignalSize,
};
