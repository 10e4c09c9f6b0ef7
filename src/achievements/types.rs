//! Achievement identifiers, unlock state, and the evaluation context.

use crate::core::progress::ProgressStore;
use crate::core::stats::PlayerStats;
use crate::core::types::{Difficulty, GameType, LevelResult, PlayerRank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for each achievement. Persisted by string id so old
/// saves survive catalog changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    FirstSurge,
    PerfectTiming,
    SignalMaster,
    Streak5,
    Streak10,
    AllCalm,
    AllFocused,
    AllIntense,
    FirstRank,
    MasterRank,
}

impl AchievementId {
    /// All ids in catalog order.
    pub const ALL: [AchievementId; 10] = [
        AchievementId::FirstSurge,
        AchievementId::PerfectTiming,
        AchievementId::SignalMaster,
        AchievementId::Streak5,
        AchievementId::Streak10,
        AchievementId::AllCalm,
        AchievementId::AllFocused,
        AchievementId::AllIntense,
        AchievementId::FirstRank,
        AchievementId::MasterRank,
    ];

    /// Stable string id used in the save format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstSurge => "first_surge",
            Self::PerfectTiming => "perfect_timing",
            Self::SignalMaster => "signal_master",
            Self::Streak5 => "streak_5",
            Self::Streak10 => "streak_10",
            Self::AllCalm => "all_calm",
            Self::AllFocused => "all_focused",
            Self::AllIntense => "all_intense",
            Self::FirstRank => "first_rank",
            Self::MasterRank => "master_rank",
        }
    }

    /// Parse a persisted string id. Unknown ids map to `None` and are
    /// dropped on load.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.iter().find(|a| a.as_str() == id).copied()
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// One completed (or failed) level attempt, as seen by the unlock rules.
#[derive(Debug, Clone, Copy)]
pub struct LevelEvent {
    pub game_type: GameType,
    pub difficulty: Difficulty,
    pub level: u32,
    pub result: LevelResult,
    /// True when this attempt completed the level for the first time.
    pub newly_completed: bool,
}

/// Everything an unlock predicate may look at. Stats and progress are
/// post-update; rank is the freshly derived value.
pub struct UnlockContext<'a> {
    pub stats: &'a PlayerStats,
    pub progress: &'a ProgressStore,
    pub rank: PlayerRank,
    pub event: &'a LevelEvent,
}

/// Mutable unlock state for the whole catalog.
#[derive(Debug, Clone, Default)]
pub struct Achievements {
    /// Unlocked ids mapped to their unix unlock timestamps.
    unlocked: HashMap<AchievementId, i64>,
}

impl Achievements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    pub fn unlocked_date(&self, id: AchievementId) -> Option<i64> {
        self.unlocked.get(&id).copied()
    }

    /// Unlock an achievement. Returns true if newly unlocked; unlocking an
    /// already-unlocked achievement is a no-op.
    pub fn unlock(&mut self, id: AchievementId, now: i64) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(id, now);
        true
    }

    /// Restore a persisted unlock without treating it as new.
    pub(crate) fn restore(&mut self, id: AchievementId, unlocked_at: i64) {
        self.unlocked.insert(id, unlocked_at);
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    pub fn total_count(&self) -> usize {
        AchievementId::ALL.len()
    }

    /// Unlock fraction, 0.0 - 1.0.
    pub fn unlock_percentage(&self) -> f64 {
        self.unlocked_count() as f64 / self.total_count() as f64
    }

    /// Run every unlock rule against the context, unlocking whatever newly
    /// qualifies. Returns the ids unlocked by this evaluation.
    pub fn evaluate(&mut self, ctx: &UnlockContext, now: i64) -> Vec<AchievementId> {
        let mut newly = Vec::new();
        for rule in super::data::UNLOCK_RULES {
            if !self.is_unlocked(rule.id) && (rule.predicate)(ctx) && self.unlock(rule.id, now) {
                newly.push(rule.id);
            }
        }
        newly
    }

    pub fn clear(&mut self) {
        self.unlocked.clear();
    }
}
