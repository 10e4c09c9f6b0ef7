//! Simulation report generation.

use super::runner::RunStats;
use crate::core::types::PlayerRank;
use std::fmt::Write;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,

    pub avg_attempts: f64,
    pub avg_levels_completed: f64,
    pub avg_best_streak: f64,
    pub avg_accuracy: f64,
    pub avg_achievements: f64,
    pub avg_overall_progress: f64,

    /// Runs finishing at each rank, in ascending rank order.
    pub rank_distribution: Vec<(PlayerRank, u32)>,

    /// Individual run stats for detailed analysis.
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let denom = (num_runs as f64).max(1.0);

        let avg_attempts = runs.iter().map(|r| r.attempts as f64).sum::<f64>() / denom;
        let avg_levels_completed =
            runs.iter().map(|r| r.levels_completed as f64).sum::<f64>() / denom;
        let avg_best_streak = runs.iter().map(|r| r.best_streak as f64).sum::<f64>() / denom;
        let avg_accuracy = runs.iter().map(|r| r.average_accuracy).sum::<f64>() / denom;
        let avg_achievements =
            runs.iter().map(|r| r.achievements_unlocked as f64).sum::<f64>() / denom;
        let avg_overall_progress =
            runs.iter().map(|r| r.overall_progress).sum::<f64>() / denom;

        let rank_distribution = PlayerRank::ALL
            .iter()
            .map(|&rank| {
                let count = runs.iter().filter(|r| r.final_rank == rank).count() as u32;
                (rank, count)
            })
            .collect();

        Self {
            num_runs,
            avg_attempts,
            avg_levels_completed,
            avg_best_streak,
            avg_accuracy,
            avg_achievements,
            avg_overall_progress,
            rank_distribution,
            run_stats: runs,
        }
    }

    /// Human-readable summary for the CLI.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        writeln!(out, "═══════════════════════════════════════════════").unwrap();
        writeln!(out, "  SIMULATION RESULTS ({} runs)", self.num_runs).unwrap();
        writeln!(out, "═══════════════════════════════════════════════").unwrap();
        writeln!(out).unwrap();
        writeln!(out, "Per-player averages:").unwrap();
        writeln!(out, "  Attempts:          {:.1}", self.avg_attempts).unwrap();
        writeln!(out, "  Levels completed:  {:.1}", self.avg_levels_completed).unwrap();
        writeln!(out, "  Best streak:       {:.1}", self.avg_best_streak).unwrap();
        writeln!(out, "  Accuracy:          {:.1}%", self.avg_accuracy * 100.0).unwrap();
        writeln!(out, "  Achievements:      {:.1} / 10", self.avg_achievements).unwrap();
        writeln!(
            out,
            "  Overall progress:  {:.1}%",
            self.avg_overall_progress * 100.0
        )
        .unwrap();
        writeln!(out).unwrap();
        writeln!(out, "Final rank distribution:").unwrap();
        for (rank, count) in &self.rank_distribution {
            if *count == 0 {
                continue;
            }
            let pct = *count as f64 / (self.num_runs as f64).max(1.0) * 100.0;
            writeln!(out, "  {:<16} {:>4}  ({:.0}%)", rank.name(), count, pct).unwrap();
        }

        out
    }
}
