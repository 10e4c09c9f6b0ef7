//! Timing Gate data structures.
//!
//! A sweeping indicator crosses a row of fixed gates; the player taps when
//! the indicator sits inside the current gate's hit zone. Letting the
//! indicator wrap past the end of the track records a miss.

use crate::core::types::{Difficulty, LevelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Ready,
    Countdown,
    Playing,
    Result,
}

/// Input actions for Timing Gate (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateInput {
    /// Attempt the current gate at the indicator's present position.
    Tap,
}

/// Full Timing Gate game state for one level attempt.
#[derive(Debug, Clone)]
pub struct TimingGateGame {
    pub difficulty: Difficulty,
    pub level: u32,
    pub phase: GatePhase,
    /// Gate centers, evenly spaced in (0, 1).
    pub gate_positions: Vec<f64>,
    /// Indicator position in [0, 1); wraps to 0 at the end of the track.
    pub indicator_position: f64,
    /// Index of the gate being attempted.
    pub current_gate: usize,
    /// Hit/miss per attempted gate, in order.
    pub hits: Vec<bool>,
    pub countdown: u8,

    // Cached per-level parameters
    pub gate_count: usize,
    /// Hit-zone width in track units; the tap window is `hit_zone / 400`
    /// on the 0-1 scale.
    pub hit_zone: f64,
    /// Indicator speed; the track advances `speed / 1000` per 16 ms tick.
    pub speed: f64,

    pub(crate) phase_elapsed_ms: u64,
    pub(crate) play_elapsed_ms: u64,

    pub result: Option<LevelResult>,
}

impl TimingGateGame {
    pub fn new(difficulty: Difficulty, level: u32) -> Self {
        let gate_count = Self::gate_count_for(difficulty, level);
        Self {
            difficulty,
            level,
            phase: GatePhase::Ready,
            gate_positions: Self::gate_positions_for(gate_count),
            indicator_position: 0.0,
            current_gate: 0,
            hits: Vec::new(),
            countdown: 3,
            gate_count,
            hit_zone: Self::hit_zone_for(difficulty, level),
            speed: Self::speed_for(difficulty, level),
            phase_elapsed_ms: 0,
            play_elapsed_ms: 0,
            result: None,
        }
    }

    /// Gates per level: 3 base, +2 per difficulty tier, +1 every other
    /// level, capped at 10.
    pub fn gate_count_for(difficulty: Difficulty, level: u32) -> usize {
        let base = 3 + 2 * difficulty.index() + ((level as usize).saturating_sub(1)) / 2;
        base.min(10)
    }

    /// Hit-zone width: 60 base, -10 per difficulty tier, -5 every third
    /// level, floored at 30.
    pub fn hit_zone_for(difficulty: Difficulty, level: u32) -> f64 {
        let reduction = 10.0 * difficulty.index() as f64
            + 5.0 * (((level as usize).saturating_sub(1)) / 3) as f64;
        (60.0 - reduction).max(30.0)
    }

    /// Indicator speed: 2.0 base, +0.5 per difficulty tier, +0.3 every
    /// other level, capped at 5.0.
    pub fn speed_for(difficulty: Difficulty, level: u32) -> f64 {
        let speed = 2.0
            + 0.5 * difficulty.index() as f64
            + 0.3 * (((level as usize).saturating_sub(1)) / 2) as f64;
        speed.min(5.0)
    }

    /// Gate centers at i/(n+1) for i in 1..=n.
    pub fn gate_positions_for(gate_count: usize) -> Vec<f64> {
        let spacing = 1.0 / (gate_count + 1) as f64;
        (1..=gate_count).map(|i| i as f64 * spacing).collect()
    }

    /// Tap window on the 0-1 track scale.
    pub fn hit_threshold(&self) -> f64 {
        self.hit_zone / 400.0
    }

    pub fn play_elapsed_secs(&self) -> f64 {
        self.play_elapsed_ms as f64 / 1000.0
    }
}
