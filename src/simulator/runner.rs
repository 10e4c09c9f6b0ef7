//! Simulation runner: a bot plays the real engines through the real
//! manager pipeline, so simulated numbers match actual game behavior.

use super::config::SimConfig;
use super::report::SimReport;
use crate::constants::TICK_INTERVAL_MS;
use crate::core::manager::GameManager;
use crate::core::types::{Difficulty, GameType, LevelResult};
use crate::games::{pattern_surge, signal_divide, timing_gate};
use crate::games::{
    DivideInput, DividePhase, GateInput, GatePhase, PatternSurgeGame, SignalDivideGame,
    SurgeInput, SurgePhase, TimingGateGame,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound on ticks for one level attempt; a bot that somehow stalls
/// abandons the level (which, like a real abandon, reports nothing).
const MAX_TICKS_PER_LEVEL: u32 = 200_000;

/// Ticks the bot "thinks" before each tap or sort.
const DECISION_TICKS: u32 = 15;

/// Final state of one simulated player.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub attempts: u32,
    pub levels_completed: u32,
    pub best_streak: u32,
    pub average_accuracy: f64,
    pub final_rank: crate::core::types::PlayerRank,
    pub achievements_unlocked: usize,
    pub overall_progress: f64,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed + run_idx as u64),
            None => StdRng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} completed, streak {}, rank {}, {} achievements",
                run_idx + 1,
                config.num_runs,
                run_stats.levels_completed,
                run_stats.best_streak,
                run_stats.final_rank.name(),
                run_stats.achievements_unlocked
            );
        }

        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs)
}

/// Simulate one player's whole lifetime of sessions.
fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut manager = GameManager::new();

    for _ in 0..config.sessions_per_run {
        manager.record_session();

        // One track per session, like a player opening a game detail view
        let game_type = GameType::ALL[rng.gen_range(0..GameType::ALL.len())];
        let difficulty = Difficulty::ALL[rng.gen_range(0..Difficulty::ALL.len())];

        for _ in 0..config.levels_per_session {
            let level = manager.get_progress(game_type, difficulty).current_level;
            if let Some(result) = play_level(game_type, difficulty, level, config.skill, rng) {
                manager.update_progress(game_type, difficulty, level, &result);
            }
        }
    }

    RunStats {
        attempts: manager.stats().accuracy_count,
        levels_completed: manager.stats().total_levels_completed,
        best_streak: manager.stats().best_streak,
        average_accuracy: manager.stats().average_accuracy(),
        final_rank: manager.current_rank(),
        achievements_unlocked: manager.achievements().unlocked_count(),
        overall_progress: manager.overall_progress(),
    }
}

/// Play one level of the given game with the bot, returning the engine's
/// result (None if the attempt was abandoned).
pub fn play_level<R: Rng>(
    game_type: GameType,
    difficulty: Difficulty,
    level: u32,
    skill: f64,
    rng: &mut R,
) -> Option<LevelResult> {
    match game_type {
        GameType::PatternSurge => play_pattern_surge(difficulty, level, skill, rng),
        GameType::TimingGate => play_timing_gate(difficulty, level, skill, rng),
        GameType::SignalDivide => play_signal_divide(difficulty, level, skill, rng),
    }
}

fn play_pattern_surge<R: Rng>(
    difficulty: Difficulty,
    level: u32,
    skill: f64,
    rng: &mut R,
) -> Option<LevelResult> {
    let mut game = PatternSurgeGame::new(difficulty, level);
    pattern_surge::start(&mut game, rng);

    let mut ticks = 0;
    while game.result.is_none() && ticks < MAX_TICKS_PER_LEVEL {
        ticks += 1;
        pattern_surge::process_tick(&mut game, TICK_INTERVAL_MS);

        if game.phase == SurgePhase::Input {
            for _ in 0..DECISION_TICKS {
                pattern_surge::process_tick(&mut game, TICK_INTERVAL_MS);
            }
            let expected = game.pattern[game.player_input.len()];
            let tap = if rng.gen_bool(skill) {
                expected
            } else {
                (expected + 1) % game.symbol_count
            };
            pattern_surge::process_input(&mut game, SurgeInput::Symbol(tap));
        }
    }
    game.result
}

fn play_timing_gate<R: Rng>(
    difficulty: Difficulty,
    level: u32,
    skill: f64,
    rng: &mut R,
) -> Option<LevelResult> {
    let mut game = TimingGateGame::new(difficulty, level);
    timing_gate::start(&mut game);

    // Decide up front which gates the bot will land
    let intents: Vec<bool> = (0..game.gate_count).map(|_| rng.gen_bool(skill)).collect();

    let mut ticks = 0;
    while game.result.is_none() && ticks < MAX_TICKS_PER_LEVEL {
        ticks += 1;
        timing_gate::process_tick(&mut game, TICK_INTERVAL_MS);

        if game.phase != GatePhase::Playing || game.current_gate >= game.gate_count {
            continue;
        }
        let gate_pos = game.gate_positions[game.current_gate];
        let distance = (game.indicator_position - gate_pos).abs();

        if intents[game.current_gate] {
            // Wait for the indicator to sit well inside the window
            if distance <= game.hit_threshold() * 0.5 {
                timing_gate::process_input(&mut game, GateInput::Tap);
            }
        } else if game.indicator_position < gate_pos && distance > game.hit_threshold() * 1.5 {
            // Deliberate early tap: consumes the gate as a miss
            timing_gate::process_input(&mut game, GateInput::Tap);
        }
    }
    game.result
}

fn play_signal_divide<R: Rng>(
    difficulty: Difficulty,
    level: u32,
    skill: f64,
    rng: &mut R,
) -> Option<LevelResult> {
    let mut game = SignalDivideGame::new(difficulty, level);
    signal_divide::start(&mut game, rng);

    let mut ticks = 0;
    while game.result.is_none() && ticks < MAX_TICKS_PER_LEVEL {
        ticks += 1;
        signal_divide::process_tick(&mut game, TICK_INTERVAL_MS);

        if game.phase == DividePhase::Playing && game.current_index < game.signals.len() {
            for _ in 0..DECISION_TICKS {
                signal_divide::process_tick(&mut game, TICK_INTERVAL_MS);
            }
            let correct_left = game.signals[game.current_index].belongs_left(game.rule);
            let choose_left = if rng.gen_bool(skill) {
                correct_left
            } else {
                !correct_left
            };
            let input = if choose_left {
                DivideInput::SortLeft
            } else {
                DivideInput::SortRight
            };
            signal_divide::process_input(&mut game, input);
        }
    }
    game.result
}
