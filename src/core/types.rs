//! Core data model: difficulties, game types, ranks, and level results.

use serde::{Deserialize, Serialize};

/// Difficulty tiers shared by all three mini-games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Calm,
    Focused,
    Intense,
}

impl Difficulty {
    /// All difficulties in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Calm, Difficulty::Focused, Difficulty::Intense];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Calm)
    }

    /// Position in `ALL`; feeds the per-level scaling formulas.
    pub fn index(&self) -> usize {
        match self {
            Self::Calm => 0,
            Self::Focused => 1,
            Self::Intense => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Focused => "Focused",
            Self::Intense => "Intense",
        }
    }

    /// Number of levels in this difficulty track.
    pub fn level_count(&self) -> u32 {
        match self {
            Self::Calm => 10,
            Self::Focused => 15,
            Self::Intense => 20,
        }
    }

    /// Scales display/reaction windows: lower is faster.
    pub fn speed_multiplier(&self) -> f64 {
        match self {
            Self::Calm => 1.0,
            Self::Focused => 0.75,
            Self::Intense => 0.5,
        }
    }
}

/// The three mini-games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    PatternSurge,
    TimingGate,
    SignalDivide,
}

impl GameType {
    /// All game types in hub display order.
    pub const ALL: [GameType; 3] = [
        GameType::PatternSurge,
        GameType::TimingGate,
        GameType::SignalDivide,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PatternSurge => "Pattern Surge",
            Self::TimingGate => "Timing Gate",
            Self::SignalDivide => "Signal Divide",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::PatternSurge => "⚡",
            Self::TimingGate => "⏱",
            Self::SignalDivide => "⎇",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::PatternSurge => "Observe and reproduce the sequence",
            Self::TimingGate => "Release pulses at the perfect moment",
            Self::SignalDivide => "Sort signals into correct zones",
        }
    }

    pub fn detailed_description(&self) -> &'static str {
        match self {
            Self::PatternSurge => {
                "Watch the illuminated symbols carefully, then recreate the exact \
                 sequence under time pressure. Patterns grow more complex as you advance."
            }
            Self::TimingGate => {
                "Energy pulses flow through gates. Tap precisely when indicators align \
                 to channel the energy forward. Precision matters more than speed."
            }
            Self::SignalDivide => {
                "Incoming signals must be sorted into the correct zones based on the \
                 rules shown before each level. Rules evolve as you progress."
            }
        }
    }
}

/// Lifetime player rank, derived from total completed levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerRank {
    Initiate,
    Apprentice,
    Adept,
    Keeper,
    Warden,
    Master,
    ArcMaster,
    StormSovereign,
}

impl PlayerRank {
    /// All ranks in ascending order.
    pub const ALL: [PlayerRank; 8] = [
        PlayerRank::Initiate,
        PlayerRank::Apprentice,
        PlayerRank::Adept,
        PlayerRank::Keeper,
        PlayerRank::Warden,
        PlayerRank::Master,
        PlayerRank::ArcMaster,
        PlayerRank::StormSovereign,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Initiate => "Initiate",
            Self::Apprentice => "Apprentice",
            Self::Adept => "Adept",
            Self::Keeper => "Keeper",
            Self::Warden => "Warden",
            Self::Master => "Master",
            Self::ArcMaster => "Arc Master",
            Self::StormSovereign => "Storm Sovereign",
        }
    }

    /// Completed levels required to hold this rank.
    ///
    /// The top two tiers share the 135 threshold; `rank_for` resolves the
    /// tie toward Storm Sovereign, so Arc Master is never produced by level
    /// count alone.
    pub fn required_levels(&self) -> u32 {
        match self {
            Self::Initiate => 0,
            Self::Apprentice => 10,
            Self::Adept => 25,
            Self::Keeper => 50,
            Self::Warden => 80,
            Self::Master => 110,
            Self::ArcMaster => 135,
            Self::StormSovereign => 135,
        }
    }

    /// Derive the rank for a completed-level total: the highest tier whose
    /// threshold is met, scanning from the top.
    pub fn rank_for(total_completed: u32) -> Self {
        for rank in Self::ALL.iter().rev() {
            if total_completed >= rank.required_levels() {
                return *rank;
            }
        }
        Self::Initiate
    }

    /// The next rank up, if any.
    pub fn next(&self) -> Option<Self> {
        let index = Self::ALL.iter().position(|r| r == self)?;
        Self::ALL.get(index + 1).copied()
    }
}

/// Outcome of a single level attempt. Transient: produced by an engine,
/// consumed by the progress pipeline, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelResult {
    pub success: bool,
    /// Fraction of correct actions, 0.0 - 1.0.
    pub accuracy: f64,
    /// Seconds spent in the active phase.
    pub time_elapsed: f64,
    pub score: u32,
}
