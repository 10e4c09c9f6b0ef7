//! Surge - reflex & memory mini-game collection core.
//!
//! Three tick-driven mini-game engines (Pattern Surge, Timing Gate,
//! Signal Divide) produce level results that flow through a shared
//! progress / stats / rank / achievement pipeline. Front ends consume the
//! pipeline's state; this crate carries no rendering.

pub mod achievements;
pub mod build_info;
pub mod constants;
pub mod core;
pub mod games;
pub mod simulator;
pub mod utils;

pub use crate::core::manager::GameManager;
pub use crate::core::types::{Difficulty, GameType, LevelResult, PlayerRank};
pub use achievements::AchievementId;
pub use constants::TICK_INTERVAL_MS;
