//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated players
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Probability the bot takes the correct action (0.0 - 1.0)
    pub skill: f64,

    /// Sessions each simulated player sits down for
    pub sessions_per_run: u32,

    /// Level attempts per session
    pub levels_per_session: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run detail)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            skill: 0.85,
            sessions_per_run: 20,
            levels_per_session: 10,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config: a handful of short, reproducible runs.
    pub fn smoke_test() -> Self {
        Self {
            num_runs: 5,
            seed: Some(42),
            sessions_per_run: 3,
            levels_per_session: 5,
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Config for checking how far a flawless player gets.
    pub fn perfect_player(num_runs: u32) -> Self {
        Self {
            num_runs,
            skill: 1.0,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.num_runs, 100);
        assert!(config.seed.is_none());
        assert!(config.skill > 0.0 && config.skill <= 1.0);
    }

    #[test]
    fn test_smoke_test_config_is_seeded() {
        let config = SimConfig::smoke_test();
        assert!(config.seed.is_some());
        assert!(config.num_runs <= 10);
    }

    #[test]
    fn test_perfect_player_config() {
        let config = SimConfig::perfect_player(7);
        assert_eq!(config.num_runs, 7);
        assert_eq!(config.skill, 1.0);
    }
}
