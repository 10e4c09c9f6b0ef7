//! Shared timing constants and save-file names.

/// Engine tick interval in milliseconds. Callers drive `process_tick` at
/// this cadence; the indicator/physics constants below assume it.
pub const TICK_INTERVAL_MS: u64 = 16;

/// Duration of one countdown step ("3... 2... 1...").
pub const COUNTDOWN_STEP_MS: u64 = 1000;

/// Base time a Pattern Surge symbol stays lit, before the difficulty
/// speed multiplier is applied.
pub const SYMBOL_DISPLAY_MS: u64 = 800;

/// Dark gap between two Pattern Surge symbol flashes.
pub const SYMBOL_GAP_MS: u64 = 200;

/// Pause between the last flash and the start of the input phase.
pub const PRE_INPUT_DELAY_MS: u64 = 500;

/// Minimum fraction of hits/correct sorts required to pass a
/// Timing Gate or Signal Divide level.
pub const PASS_THRESHOLD: f64 = 0.6;

// Save-file names under ~/.surge/
pub const STATS_FILE: &str = "stats.json";
pub const PROGRESS_FILE: &str = "progress.json";
pub const ACHIEVEMENTS_FILE: &str = "achievements.json";
pub const ONBOARDING_FILE: &str = "onboarding.json";
