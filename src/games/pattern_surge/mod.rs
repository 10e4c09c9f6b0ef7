//! Pattern Surge: memorize-and-repeat.

pub mod logic;
pub mod types;

pub use logic::{process_input, process_tick, start};
pub use types::{PatternSurgeGame, SurgeInput, SurgePhase, SYMBOLS};
