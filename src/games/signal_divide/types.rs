//! Signal Divide data structures.
//!
//! Signals arrive one at a time and must be sorted left or right according
//! to a rule shown before play begins. Higher levels widen the rule pool.

use crate::core::types::{Difficulty, LevelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividePhase {
    Ready,
    ShowingRule,
    Countdown,
    Playing,
    Result,
}

/// Input actions for Signal Divide (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivideInput {
    SortLeft,
    SortRight,
}

/// The sorting rule in effect for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalRule {
    Color,
    Shape,
    Size,
}

impl SignalRule {
    pub const ALL: [SignalRule; 3] = [SignalRule::Color, SignalRule::Shape, SignalRule::Size];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Color => "Sort by Color",
            Self::Shape => "Sort by Shape",
            Self::Size => "Sort by Size",
        }
    }

    pub fn left_zone_label(&self) -> &'static str {
        match self {
            Self::Color => "Gold",
            Self::Shape => "Round",
            Self::Size => "Small",
        }
    }

    pub fn right_zone_label(&self) -> &'static str {
        match self {
            Self::Color => "Cyan",
            Self::Shape => "Angular",
            Self::Size => "Large",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Color => "Gold signals go LEFT, Cyan signals go RIGHT",
            Self::Shape => "Round shapes go LEFT, Angular shapes go RIGHT",
            Self::Size => "Small signals go LEFT, Large signals go RIGHT",
        }
    }

    /// Rules available at a level: 1-2 color only, 3-4 add shape, 5+ all.
    pub fn available_for_level(level: u32) -> &'static [SignalRule] {
        match level {
            0..=2 => &[SignalRule::Color],
            3..=4 => &[SignalRule::Color, SignalRule::Shape],
            _ => &Self::ALL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalColor {
    Gold,
    Cyan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalShape {
    Circle,
    Square,
    Triangle,
    Hexagon,
}

impl SignalShape {
    pub const ALL: [SignalShape; 4] = [
        SignalShape::Circle,
        SignalShape::Square,
        SignalShape::Triangle,
        SignalShape::Hexagon,
    ];

    pub fn is_round(&self) -> bool {
        matches!(self, Self::Circle | Self::Hexagon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalSize {
    Small,
    Large,
}

/// One signal to sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signal {
    pub color: SignalColor,
    pub shape: SignalShape,
    pub size: SignalSize,
}

impl Signal {
    /// True when the left zone is the correct choice under `rule`.
    pub fn belongs_left(&self, rule: SignalRule) -> bool {
        match rule {
            SignalRule::Color => self.color == SignalColor::Gold,
            SignalRule::Shape => self.shape.is_round(),
            SignalRule::Size => self.size == SignalSize::Small,
        }
    }
}

/// Full Signal Divide game state for one level attempt.
#[derive(Debug, Clone)]
pub struct SignalDivideGame {
    pub difficulty: Difficulty,
    pub level: u32,
    pub phase: DividePhase,
    pub rule: SignalRule,
    pub signals: Vec<Signal>,
    /// Index of the signal being presented.
    pub current_index: usize,
    pub correct_sorts: usize,
    pub countdown: u8,
    /// Seconds remaining on the rule card.
    pub rule_countdown: u8,

    pub signal_count: usize,

    pub(crate) phase_elapsed_ms: u64,
    pub(crate) play_elapsed_ms: u64,

    pub result: Option<LevelResult>,
}

impl SignalDivideGame {
    pub fn new(difficulty: Difficulty, level: u32) -> Self {
        Self {
            difficulty,
            level,
            phase: DividePhase::Ready,
            rule: SignalRule::Color,
            signals: Vec::new(),
            current_index: 0,
            correct_sorts: 0,
            countdown: 3,
            rule_countdown: 3,
            signal_count: Self::signal_count_for(difficulty, level),
            phase_elapsed_ms: 0,
            play_elapsed_ms: 0,
            result: None,
        }
    }

    /// Signals per level: 5 base, +3 per difficulty tier, +1 per level,
    /// capped at 15.
    pub fn signal_count_for(difficulty: Difficulty, level: u32) -> usize {
        let base = 5 + 3 * difficulty.index() + (level as usize).saturating_sub(1);
        base.min(15)
    }

    pub fn play_elapsed_secs(&self) -> f64 {
        self.play_elapsed_ms as f64 / 1000.0
    }
}
