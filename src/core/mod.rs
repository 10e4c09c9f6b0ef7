//! Core progression pipeline: data model, progress store, player stats,
//! and the manager that ties them to rank derivation and achievements.

pub mod manager;
pub mod progress;
pub mod stats;
pub mod types;

pub use manager::GameManager;
pub use progress::{GameProgress, ProgressStore};
pub use stats::PlayerStats;
pub use types::{Difficulty, GameType, LevelResult, PlayerRank};
