//! The game manager: one explicitly constructed service object owning the
//! progress store, player stats, achievement state, and derived rank.
//!
//! Every completed level attempt flows through `update_progress`, which runs
//! the full transaction in order: progress record → stats aggregates → rank
//! derivation → achievement table. State is saved after each mutation when
//! the manager was loaded from disk; saves are fire-and-forget.

use crate::achievements::{self, AchievementId, Achievements, LevelEvent, UnlockContext};
use crate::constants::{ONBOARDING_FILE, PROGRESS_FILE, STATS_FILE};
use crate::core::progress::{GameProgress, ProgressStore};
use crate::core::stats::PlayerStats;
use crate::core::types::{Difficulty, GameType, LevelResult, PlayerRank};
use crate::utils::persistence;
use chrono::Utc;

pub struct GameManager {
    progress: ProgressStore,
    stats: PlayerStats,
    achievements: Achievements,
    current_rank: PlayerRank,
    onboarding_complete: bool,
    /// Save after every mutation. Off for in-memory managers (tests, sim).
    autosave: bool,
}

impl GameManager {
    /// Fresh in-memory manager; nothing touches the disk.
    pub fn new() -> Self {
        Self {
            progress: ProgressStore::new(),
            stats: PlayerStats::new(),
            achievements: Achievements::new(),
            current_rank: PlayerRank::Initiate,
            onboarding_complete: false,
            autosave: false,
        }
    }

    /// Load persisted state from ~/.surge/, falling back to defaults for
    /// any record that is absent or corrupt. Enables autosave.
    pub fn load() -> Self {
        let stats: PlayerStats = persistence::load_json_or_default(STATS_FILE);
        let progress: ProgressStore = persistence::load_json_or_default(PROGRESS_FILE);
        let achievements = achievements::load_achievements();
        let onboarding_complete: bool = persistence::load_json_or_default(ONBOARDING_FILE);

        // Rank is derived, never trusted from disk
        let current_rank = PlayerRank::rank_for(stats.total_levels_completed);

        Self {
            progress,
            stats,
            achievements,
            current_rank,
            onboarding_complete,
            autosave: true,
        }
    }

    // =========================================================================
    // Progress
    // =========================================================================

    /// The progress record for a track, created with defaults on first
    /// access. Never fails.
    pub fn get_progress(&mut self, game_type: GameType, difficulty: Difficulty) -> &GameProgress {
        self.progress.get_progress(game_type, difficulty)
    }

    /// Apply one level result: the full progress → stats → rank →
    /// achievements transaction. Returns the achievements unlocked by this
    /// event.
    pub fn update_progress(
        &mut self,
        game_type: GameType,
        difficulty: Difficulty,
        level: u32,
        result: &LevelResult,
    ) -> Vec<AchievementId> {
        let now = Utc::now().timestamp();

        let newly_completed = self
            .progress
            .get_progress_mut(game_type, difficulty)
            .apply_result(level, result);

        self.stats
            .record_attempt(newly_completed, result.success, result.accuracy);

        self.current_rank = PlayerRank::rank_for(self.stats.total_levels_completed);

        let event = LevelEvent {
            game_type,
            difficulty,
            level,
            result: *result,
            newly_completed,
        };
        let ctx = UnlockContext {
            stats: &self.stats,
            progress: &self.progress,
            rank: self.current_rank,
            event: &event,
        };
        let unlocked = self.achievements.evaluate(&ctx, now);

        self.autosave();
        unlocked
    }

    /// Record a session start: one hub entry, not one level attempt.
    pub fn record_session(&mut self) {
        self.stats.record_session(Utc::now().timestamp());
        self.autosave();
    }

    // =========================================================================
    // Achievements
    // =========================================================================

    pub fn is_achievement_unlocked(&self, id: AchievementId) -> bool {
        self.achievements.is_unlocked(id)
    }

    /// Directly unlock an achievement (non-gameplay flows). Idempotent.
    /// Returns true if newly unlocked.
    pub fn unlock_achievement(&mut self, id: AchievementId) -> bool {
        let newly = self.achievements.unlock(id, Utc::now().timestamp());
        if newly {
            self.autosave();
        }
        newly
    }

    // =========================================================================
    // Derived queries
    // =========================================================================

    /// Completed fraction of the whole 90-level grid.
    pub fn overall_progress(&self) -> f64 {
        let mut total = 0u32;
        let mut completed = 0usize;
        for &game in &GameType::ALL {
            for &difficulty in &Difficulty::ALL {
                total += difficulty.level_count();
                completed += self.progress.completed_count(game, difficulty);
            }
        }
        if total == 0 {
            return 0.0;
        }
        completed as f64 / total as f64
    }

    /// Completed fraction across one game's three difficulty tracks.
    pub fn game_overall_progress(&self, game_type: GameType) -> f64 {
        let mut total = 0u32;
        let mut completed = 0usize;
        for &difficulty in &Difficulty::ALL {
            total += difficulty.level_count();
            completed += self.progress.completed_count(game_type, difficulty);
        }
        if total == 0 {
            return 0.0;
        }
        completed as f64 / total as f64
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn achievements(&self) -> &Achievements {
        &self.achievements
    }

    pub fn progress_store(&self) -> &ProgressStore {
        &self.progress
    }

    pub fn current_rank(&self) -> PlayerRank {
        self.current_rank
    }

    // =========================================================================
    // Onboarding
    // =========================================================================

    pub fn onboarding_complete(&self) -> bool {
        self.onboarding_complete
    }

    pub fn set_onboarding_complete(&mut self, complete: bool) {
        self.onboarding_complete = complete;
        if self.autosave {
            persistence::save_json(ONBOARDING_FILE, &self.onboarding_complete).ok();
        }
    }

    // =========================================================================
    // Reset & persistence
    // =========================================================================

    /// Restore stats, progress, achievements, and rank to their fresh-state
    /// values and delete the persisted copies. The onboarding flag survives.
    pub fn reset_all_progress(&mut self) {
        self.stats = PlayerStats::new();
        self.progress.clear();
        self.achievements.clear();
        self.current_rank = PlayerRank::Initiate;

        if self.autosave {
            persistence::delete_save(STATS_FILE).ok();
            persistence::delete_save(PROGRESS_FILE).ok();
            persistence::delete_save(crate::constants::ACHIEVEMENTS_FILE).ok();
        }
    }

    /// Write all three records to disk.
    pub fn save(&self) -> std::io::Result<()> {
        persistence::save_json(STATS_FILE, &self.stats)?;
        persistence::save_json(PROGRESS_FILE, &self.progress)?;
        achievements::save_achievements(&self.achievements)?;
        Ok(())
    }

    fn autosave(&self) {
        if self.autosave {
            self.save().ok();
        }
    }
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(success: bool, accuracy: f64, time: f64) -> LevelResult {
        LevelResult {
            success,
            accuracy,
            time_elapsed: time,
            score: if success { 100 } else { 0 },
        }
    }

    /// Complete `count` distinct levels, spreading them across the grid so
    /// no track overflows its level count.
    fn complete_levels(manager: &mut GameManager, count: u32) {
        let mut done = 0;
        'outer: for &difficulty in &Difficulty::ALL {
            for &game in &GameType::ALL {
                for level in 1..=difficulty.level_count() {
                    if done >= count {
                        break 'outer;
                    }
                    manager.update_progress(game, difficulty, level, &result(true, 1.0, 2.0));
                    done += 1;
                }
            }
        }
        assert_eq!(done, count, "grid too small for requested completions");
    }

    #[test]
    fn test_fresh_manager() {
        let mut manager = GameManager::new();
        assert_eq!(manager.current_rank(), PlayerRank::Initiate);
        assert_eq!(manager.overall_progress(), 0.0);
        assert!(!manager.onboarding_complete());

        let p = manager.get_progress(GameType::PatternSurge, Difficulty::Calm);
        assert_eq!(p.current_level, 1);
        assert!(p.completed_levels.is_empty());
    }

    #[test]
    fn test_first_completion_scenario() {
        let mut manager = GameManager::new();
        let unlocked = manager.update_progress(
            GameType::PatternSurge,
            Difficulty::Calm,
            1,
            &result(true, 1.0, 2.0),
        );

        let p = manager.get_progress(GameType::PatternSurge, Difficulty::Calm);
        assert_eq!(p.current_level, 2);
        assert_eq!(p.completed_levels, vec![1]);
        assert_eq!(p.best_accuracy, 1.0);
        assert_eq!(p.best_time, Some(2.0));

        assert_eq!(manager.stats().total_levels_completed, 1);
        assert_eq!(manager.stats().current_streak, 1);
        assert!(unlocked.contains(&AchievementId::FirstSurge));
        assert!(manager.is_achievement_unlocked(AchievementId::FirstSurge));
    }

    #[test]
    fn test_update_idempotence_for_completion() {
        let mut manager = GameManager::new();
        let r = result(true, 0.9, 3.0);
        manager.update_progress(GameType::TimingGate, Difficulty::Calm, 1, &r);
        let before = manager.stats().total_levels_completed;

        let better = result(true, 0.95, 2.0);
        manager.update_progress(GameType::TimingGate, Difficulty::Calm, 1, &better);

        assert_eq!(manager.stats().total_levels_completed, before);
        let p = manager.get_progress(GameType::TimingGate, Difficulty::Calm);
        assert_eq!(p.completed_levels, vec![1]);
        assert_eq!(p.best_accuracy, 0.95);
        assert_eq!(p.best_time, Some(2.0));
        assert_eq!(manager.stats().accuracy_count, 2);
    }

    #[test]
    fn test_rank_recomputed_after_updates() {
        let mut manager = GameManager::new();
        complete_levels(&mut manager, 10);
        assert_eq!(manager.current_rank(), PlayerRank::Apprentice);
        assert!(manager.is_achievement_unlocked(AchievementId::FirstRank));

        complete_levels(&mut manager, 0);
        assert_eq!(manager.current_rank(), PlayerRank::Apprentice);
    }

    #[test]
    fn test_streak_achievements() {
        let mut manager = GameManager::new();
        complete_levels(&mut manager, 5);
        assert!(manager.is_achievement_unlocked(AchievementId::Streak5));
        assert!(!manager.is_achievement_unlocked(AchievementId::Streak10));

        // A failure resets the streak without revoking the unlock
        manager.update_progress(
            GameType::PatternSurge,
            Difficulty::Calm,
            9,
            &result(false, 0.2, 4.0),
        );
        assert_eq!(manager.stats().current_streak, 0);
        assert!(manager.is_achievement_unlocked(AchievementId::Streak5));
    }

    #[test]
    fn test_overall_progress_fraction() {
        let mut manager = GameManager::new();
        complete_levels(&mut manager, 9);
        // 9 of 135 total levels
        assert!((manager.overall_progress() - 9.0 / 135.0).abs() < 1e-9);
    }

    #[test]
    fn test_game_overall_progress() {
        let mut manager = GameManager::new();
        manager.update_progress(GameType::SignalDivide, Difficulty::Calm, 1, &result(true, 1.0, 2.0));
        // 1 of SignalDivide's 45 levels
        assert!((manager.game_overall_progress(GameType::SignalDivide) - 1.0 / 45.0).abs() < 1e-9);
        assert_eq!(manager.game_overall_progress(GameType::TimingGate), 0.0);
    }

    #[test]
    fn test_direct_unlock_idempotent() {
        let mut manager = GameManager::new();
        assert!(manager.unlock_achievement(AchievementId::MasterRank));
        assert!(!manager.unlock_achievement(AchievementId::MasterRank));
        assert!(manager.is_achievement_unlocked(AchievementId::MasterRank));
    }

    #[test]
    fn test_reset_all_progress() {
        let mut manager = GameManager::new();
        complete_levels(&mut manager, 12);
        manager.set_onboarding_complete(true);
        assert_ne!(manager.current_rank(), PlayerRank::Initiate);

        manager.reset_all_progress();

        assert_eq!(manager.stats().total_levels_completed, 0);
        assert_eq!(manager.stats().current_streak, 0);
        assert_eq!(manager.current_rank(), PlayerRank::Initiate);
        assert_eq!(manager.achievements().unlocked_count(), 0);
        assert_eq!(manager.overall_progress(), 0.0);
        // Onboarding is not part of the progress reset
        assert!(manager.onboarding_complete());
    }

    #[test]
    fn test_perfect_timing_requires_timing_gate() {
        let mut manager = GameManager::new();
        manager.update_progress(GameType::PatternSurge, Difficulty::Calm, 1, &result(true, 1.0, 2.0));
        assert!(!manager.is_achievement_unlocked(AchievementId::PerfectTiming));

        manager.update_progress(GameType::TimingGate, Difficulty::Calm, 1, &result(true, 1.0, 2.0));
        assert!(manager.is_achievement_unlocked(AchievementId::PerfectTiming));
    }
}
