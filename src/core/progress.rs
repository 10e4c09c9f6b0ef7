//! Per-track progress records and the store that maps (game, difficulty)
//! pairs to them.

use crate::core::types::{Difficulty, GameType, LevelResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Completion and best-performance state for one (game, difficulty) track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameProgress {
    pub game_type: GameType,
    pub difficulty: Difficulty,
    /// Next level to play, 1-based. Capped at the track's level count.
    pub current_level: u32,
    /// Completed levels in completion order. Membership is checked before
    /// insertion, so entries are unique.
    pub completed_levels: Vec<u32>,
    /// Highest accuracy seen on this track, including failed attempts.
    pub best_accuracy: f64,
    /// Fastest attempt in seconds. Failed attempts count too; see the
    /// progress-update rules.
    #[serde(default)]
    pub best_time: Option<f64>,
}

impl GameProgress {
    pub fn new(game_type: GameType, difficulty: Difficulty) -> Self {
        Self {
            game_type,
            difficulty,
            current_level: 1,
            completed_levels: Vec::new(),
            best_accuracy: 0.0,
            best_time: None,
        }
    }

    /// True when every level of the track has been completed.
    pub fn is_complete(&self) -> bool {
        self.completed_levels.len() as u32 >= self.difficulty.level_count()
    }

    /// Completed fraction, 0.0 - 1.0.
    pub fn progress_percentage(&self) -> f64 {
        self.completed_levels.len() as f64 / self.difficulty.level_count() as f64
    }

    /// Apply one level result. Returns true if `level` was completed for
    /// the first time.
    ///
    /// Best accuracy and best time update on every attempt, success or not.
    pub fn apply_result(&mut self, level: u32, result: &LevelResult) -> bool {
        let newly_completed = result.success && !self.completed_levels.contains(&level);
        if newly_completed {
            self.completed_levels.push(level);
            self.current_level = (level + 1).min(self.difficulty.level_count());
        }

        if result.accuracy > self.best_accuracy {
            self.best_accuracy = result.accuracy;
        }

        self.best_time = Some(match self.best_time {
            Some(best) => best.min(result.time_elapsed),
            None => result.time_elapsed,
        });

        newly_completed
    }
}

/// Owns every `GameProgress` record, keyed by `"{game}_{difficulty}"`.
/// Records are created lazily with defaults on first access.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressStore {
    records: HashMap<String, GameProgress>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(game_type: GameType, difficulty: Difficulty) -> String {
        format!("{}_{}", game_type.name(), difficulty.name())
    }

    /// The record for a track, created with defaults if absent.
    pub fn get_progress(&mut self, game_type: GameType, difficulty: Difficulty) -> &GameProgress {
        self.records
            .entry(Self::key(game_type, difficulty))
            .or_insert_with(|| GameProgress::new(game_type, difficulty))
    }

    pub(crate) fn get_progress_mut(
        &mut self,
        game_type: GameType,
        difficulty: Difficulty,
    ) -> &mut GameProgress {
        self.records
            .entry(Self::key(game_type, difficulty))
            .or_insert_with(|| GameProgress::new(game_type, difficulty))
    }

    /// Completed-level count for a track without creating the record.
    pub fn completed_count(&self, game_type: GameType, difficulty: Difficulty) -> usize {
        self.records
            .get(&Self::key(game_type, difficulty))
            .map(|p| p.completed_levels.len())
            .unwrap_or(0)
    }

    /// True when the track exists and all its levels are complete.
    pub fn is_track_complete(&self, game_type: GameType, difficulty: Difficulty) -> bool {
        self.completed_count(game_type, difficulty) as u32 >= difficulty.level_count()
    }

    /// Completed levels summed over every difficulty of one game.
    pub fn completed_for_game(&self, game_type: GameType) -> usize {
        Difficulty::ALL
            .iter()
            .map(|&d| self.completed_count(game_type, d))
            .sum()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
