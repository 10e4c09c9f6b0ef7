//! Static achievement catalog and the declarative unlock-rule table.

use super::types::{AchievementDef, AchievementId, UnlockContext};
use crate::core::types::{Difficulty, GameType, PlayerRank};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstSurge,
        title: "Storm Awakened",
        description: "Complete your first Pattern Surge level",
        icon: "⚡",
    },
    AchievementDef {
        id: AchievementId::PerfectTiming,
        title: "Precision Strike",
        description: "Achieve 100% accuracy in Timing Gate",
        icon: "◎",
    },
    AchievementDef {
        id: AchievementId::SignalMaster,
        title: "Signal Conductor",
        description: "Complete 10 Signal Divide levels",
        icon: "〜",
    },
    AchievementDef {
        id: AchievementId::Streak5,
        title: "Momentum Builder",
        description: "Achieve a 5-level streak",
        icon: "🔥",
    },
    AchievementDef {
        id: AchievementId::Streak10,
        title: "Unstoppable Force",
        description: "Achieve a 10-level streak",
        icon: "⚡",
    },
    AchievementDef {
        id: AchievementId::AllCalm,
        title: "Calm Navigator",
        description: "Complete all Calm difficulty levels",
        icon: "🍃",
    },
    AchievementDef {
        id: AchievementId::AllFocused,
        title: "Focused Mind",
        description: "Complete all Focused difficulty levels",
        icon: "👁",
    },
    AchievementDef {
        id: AchievementId::AllIntense,
        title: "Storm Conqueror",
        description: "Complete all Intense difficulty levels",
        icon: "🌀",
    },
    AchievementDef {
        id: AchievementId::FirstRank,
        title: "Rising Power",
        description: "Reach Apprentice rank",
        icon: "↑",
    },
    AchievementDef {
        id: AchievementId::MasterRank,
        title: "Arc Master",
        description: "Reach Arc Master rank",
        icon: "👑",
    },
];

/// Look up the static definition for an id.
pub fn get_achievement_def(id: AchievementId) -> &'static AchievementDef {
    ALL_ACHIEVEMENTS
        .iter()
        .find(|def| def.id == id)
        .expect("every AchievementId has a catalog entry")
}

/// One row of the unlock table: an id and the predicate that earns it.
pub struct UnlockRule {
    pub id: AchievementId,
    pub predicate: fn(&UnlockContext) -> bool,
}

fn all_difficulty_complete(ctx: &UnlockContext, difficulty: Difficulty) -> bool {
    GameType::ALL
        .iter()
        .all(|&game| ctx.progress.is_track_complete(game, difficulty))
}

fn first_surge(ctx: &UnlockContext) -> bool {
    ctx.event.game_type == GameType::PatternSurge && ctx.event.newly_completed
}

fn perfect_timing(ctx: &UnlockContext) -> bool {
    ctx.event.game_type == GameType::TimingGate && ctx.event.result.accuracy >= 1.0
}

fn signal_master(ctx: &UnlockContext) -> bool {
    ctx.progress.completed_for_game(GameType::SignalDivide) >= 10
}

fn streak_5(ctx: &UnlockContext) -> bool {
    ctx.stats.current_streak >= 5
}

fn streak_10(ctx: &UnlockContext) -> bool {
    ctx.stats.current_streak >= 10
}

fn all_calm(ctx: &UnlockContext) -> bool {
    all_difficulty_complete(ctx, Difficulty::Calm)
}

fn all_focused(ctx: &UnlockContext) -> bool {
    all_difficulty_complete(ctx, Difficulty::Focused)
}

fn all_intense(ctx: &UnlockContext) -> bool {
    all_difficulty_complete(ctx, Difficulty::Intense)
}

fn first_rank(ctx: &UnlockContext) -> bool {
    ctx.rank >= PlayerRank::Apprentice
}

// The duplicate 135-level threshold means rank derivation skips Arc Master,
// so this predicate never holds through play. Kept to match the catalog;
// `unlock_achievement` can still set it directly.
fn master_rank(ctx: &UnlockContext) -> bool {
    ctx.rank == PlayerRank::ArcMaster
}

/// The full unlock table, evaluated after every level event. Predicates
/// read post-update state, so ordering within the table does not matter.
pub const UNLOCK_RULES: &[UnlockRule] = &[
    UnlockRule { id: AchievementId::FirstSurge, predicate: first_surge },
    UnlockRule { id: AchievementId::PerfectTiming, predicate: perfect_timing },
    UnlockRule { id: AchievementId::SignalMaster, predicate: signal_master },
    UnlockRule { id: AchievementId::Streak5, predicate: streak_5 },
    UnlockRule { id: AchievementId::Streak10, predicate: streak_10 },
    UnlockRule { id: AchievementId::AllCalm, predicate: all_calm },
    UnlockRule { id: AchievementId::AllFocused, predicate: all_focused },
    UnlockRule { id: AchievementId::AllIntense, predicate: all_intense },
    UnlockRule { id: AchievementId::FirstRank, predicate: first_rank },
    UnlockRule { id: AchievementId::MasterRank, predicate: master_rank },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_id() {
        assert_eq!(ALL_ACHIEVEMENTS.len(), AchievementId::ALL.len());
        for id in AchievementId::ALL {
            assert_eq!(get_achievement_def(id).id, id);
        }
    }

    #[test]
    fn test_rule_table_covers_every_id() {
        assert_eq!(UNLOCK_RULES.len(), AchievementId::ALL.len());
        for id in AchievementId::ALL {
            assert!(UNLOCK_RULES.iter().any(|r| r.id == id));
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        for (i, a) in ALL_ACHIEVEMENTS.iter().enumerate() {
            for b in &ALL_ACHIEVEMENTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_titles_match_catalog() {
        assert_eq!(get_achievement_def(AchievementId::FirstSurge).title, "Storm Awakened");
        assert_eq!(get_achievement_def(AchievementId::MasterRank).title, "Arc Master");
    }
}
