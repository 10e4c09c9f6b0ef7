//! Achievement save format: an array of per-id records merged into the
//! current catalog on load.
//!
//! Unknown persisted ids are dropped; catalog ids missing from the save
//! start locked. This keeps old saves working across catalog changes.

use super::types::{AchievementId, Achievements};
use serde::{Deserialize, Serialize};

/// Persisted unlock record for one achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAchievement {
    pub id: String,
    pub is_unlocked: bool,
    #[serde(default)]
    pub unlocked_at: Option<i64>,
}

/// Flatten the unlock state into the save array, one entry per catalog id.
pub fn to_saved(achievements: &Achievements) -> Vec<SavedAchievement> {
    AchievementId::ALL
        .iter()
        .map(|&id| SavedAchievement {
            id: id.as_str().to_string(),
            is_unlocked: achievements.is_unlocked(id),
            unlocked_at: achievements.unlocked_date(id),
        })
        .collect()
}

/// Merge persisted records into a fresh catalog state.
pub fn from_saved(saved: &[SavedAchievement]) -> Achievements {
    let mut achievements = Achievements::new();
    for record in saved {
        let Some(id) = AchievementId::parse(&record.id) else {
            continue;
        };
        if record.is_unlocked {
            achievements.restore(id, record.unlocked_at.unwrap_or(0));
        }
    }
    achievements
}

/// Load achievements from the save directory, defaulting to all-locked on
/// absent or corrupt data.
pub fn load_achievements() -> Achievements {
    let saved: Vec<SavedAchievement> =
        crate::utils::persistence::load_json_or_default(crate::constants::ACHIEVEMENTS_FILE);
    from_saved(&saved)
}

/// Save achievements to the save directory.
pub fn save_achievements(achievements: &Achievements) -> std::io::Result<()> {
    crate::utils::persistence::save_json(
        crate::constants::ACHIEVEMENTS_FILE,
        &to_saved(achievements),
    )
}
