//! The three mini-game engines: Pattern Surge, Timing Gate, Signal Divide.
//!
//! Each engine is a UI-agnostic phase state machine driven by
//! `process_tick` (wall-clock deltas in milliseconds) and `process_input`
//! (discrete player actions). A play-through fills `result` exactly once;
//! abandoning a game emits nothing.

pub mod pattern_surge;
pub mod signal_divide;
pub mod timing_gate;

pub use pattern_surge::{PatternSurgeGame, SurgeInput, SurgePhase};
pub use signal_divide::{
    DivideInput, DividePhase, Signal, SignalColor, SignalDivideGame, SignalRule, SignalShape,
    SignalSize,
};
pub use timing_gate::{GateInput, GatePhase, TimingGateGame};

use crate::core::types::{Difficulty, GameType, LevelResult};

/// A currently active mini-game. Only one can be active at a time.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    PatternSurge(PatternSurgeGame),
    TimingGate(TimingGateGame),
    SignalDivide(SignalDivideGame),
}

impl ActiveGame {
    /// Start a fresh play-through of `game_type` at the given level.
    pub fn new(game_type: GameType, difficulty: Difficulty, level: u32) -> Self {
        match game_type {
            GameType::PatternSurge => {
                Self::PatternSurge(PatternSurgeGame::new(difficulty, level))
            }
            GameType::TimingGate => Self::TimingGate(TimingGateGame::new(difficulty, level)),
            GameType::SignalDivide => {
                Self::SignalDivide(SignalDivideGame::new(difficulty, level))
            }
        }
    }

    pub fn game_type(&self) -> GameType {
        match self {
            Self::PatternSurge(_) => GameType::PatternSurge,
            Self::TimingGate(_) => GameType::TimingGate,
            Self::SignalDivide(_) => GameType::SignalDivide,
        }
    }

    /// The finished result, if the play-through is over.
    pub fn result(&self) -> Option<LevelResult> {
        match self {
            Self::PatternSurge(g) => g.result,
            Self::TimingGate(g) => g.result,
            Self::SignalDivide(g) => g.result,
        }
    }
}

/// Shared score formula: accuracy scaled by a speed bonus that decays with
/// the per-unit time (whole elapsed seconds for Pattern Surge, seconds per
/// gate/signal for the other two).
pub fn compute_score(accuracy: f64, time_per_unit: f64) -> u32 {
    (accuracy * 100.0 * (1.0 + 1.0 / time_per_unit.max(1.0))) as u32
}
