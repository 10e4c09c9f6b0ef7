//! Process-wide player statistics aggregated across every level attempt.

use serde::{Deserialize, Serialize};

/// Lifetime aggregate stats. Mutated only through the manager's update
/// pipeline and `record_session`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    pub total_sessions_played: u32,
    pub total_levels_completed: u32,
    /// Consecutive first-time completions; reset by any failed attempt.
    pub current_streak: u32,
    pub best_streak: u32,
    /// Running sum of attempt accuracies, paired with `accuracy_count`.
    pub total_accuracy: f64,
    pub accuracy_count: u32,
    /// Unix timestamp of the last session start.
    #[serde(default)]
    pub last_played: Option<i64>,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean accuracy over all attempts, 0 when none recorded.
    pub fn average_accuracy(&self) -> f64 {
        if self.accuracy_count == 0 {
            return 0.0;
        }
        self.total_accuracy / self.accuracy_count as f64
    }

    /// Fold one level attempt into the aggregates.
    ///
    /// `newly_completed` is the progress store's first-time-success verdict;
    /// only those attempts grow the totals and the streak. A failed attempt
    /// breaks the streak; re-clearing an old level changes neither.
    pub fn record_attempt(&mut self, newly_completed: bool, success: bool, accuracy: f64) {
        if newly_completed {
            self.total_levels_completed += 1;
            self.current_streak += 1;
            if self.current_streak > self.best_streak {
                self.best_streak = self.current_streak;
            }
        } else if !success {
            self.current_streak = 0;
        }

        self.total_accuracy += accuracy;
        self.accuracy_count += 1;
    }

    /// Mark a session start (one hub entry, not one level).
    pub fn record_session(&mut self, now: i64) {
        self.total_sessions_played += 1;
        self.last_played = Some(now);
    }
}
