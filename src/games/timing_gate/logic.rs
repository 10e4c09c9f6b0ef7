//! Timing Gate game logic: indicator sweep, tap resolution, and scoring.

use super::types::{GateInput, GatePhase, TimingGateGame};
use crate::constants::{COUNTDOWN_STEP_MS, PASS_THRESHOLD, TICK_INTERVAL_MS};
use crate::core::types::LevelResult;
use crate::games::compute_score;

/// Begin the play-through: enter the countdown. Gate positions are fixed
/// at construction; nothing here is random.
pub fn start(game: &mut TimingGateGame) {
    if game.phase != GatePhase::Ready {
        return;
    }
    game.phase = GatePhase::Countdown;
    game.countdown = 3;
    game.phase_elapsed_ms = 0;
}

/// Advance the state machine by `delta_ms` of wall-clock time.
pub fn process_tick(game: &mut TimingGateGame, delta_ms: u64) {
    match game.phase {
        GatePhase::Ready | GatePhase::Result => {}
        GatePhase::Countdown => {
            game.phase_elapsed_ms += delta_ms;
            while game.phase_elapsed_ms >= COUNTDOWN_STEP_MS && game.countdown > 0 {
                game.phase_elapsed_ms -= COUNTDOWN_STEP_MS;
                game.countdown -= 1;
            }
            if game.countdown == 0 {
                game.phase = GatePhase::Playing;
                game.indicator_position = 0.0;
                game.play_elapsed_ms = 0;
            }
        }
        GatePhase::Playing => {
            game.play_elapsed_ms += delta_ms;
            advance_indicator(game, delta_ms);
        }
    }
}

fn advance_indicator(game: &mut TimingGateGame, delta_ms: u64) {
    game.indicator_position +=
        (game.speed / 1000.0) * (delta_ms as f64 / TICK_INTERVAL_MS as f64);

    if game.indicator_position >= 1.0 {
        game.indicator_position = 0.0;

        // Wrapping past the end without a tap misses the current gate
        if game.current_gate < game.gate_count {
            game.hits.push(false);
            game.current_gate += 1;

            if game.current_gate >= game.gate_count {
                complete(game);
            }
        }
    }
}

/// Handle a tap: hit iff the indicator is within the hit window of the
/// current gate. Either way the gate is consumed.
pub fn process_input(game: &mut TimingGateGame, input: GateInput) {
    if game.phase != GatePhase::Playing || game.current_gate >= game.gate_count {
        return;
    }
    let GateInput::Tap = input;

    let gate_pos = game.gate_positions[game.current_gate];
    let distance = (game.indicator_position - gate_pos).abs();
    let is_hit = distance <= game.hit_threshold();

    game.hits.push(is_hit);
    game.current_gate += 1;

    if game.current_gate >= game.gate_count {
        complete(game);
    }
}

fn complete(game: &mut TimingGateGame) {
    game.phase = GatePhase::Result;
    let elapsed = game.play_elapsed_secs();
    let hit_count = game.hits.iter().filter(|&&h| h).count();
    let accuracy = hit_count as f64 / game.gate_count as f64;
    let success = accuracy >= PASS_THRESHOLD;
    let score = if success {
        compute_score(accuracy, elapsed / game.gate_count as f64)
    } else {
        0
    };

    game.result = Some(LevelResult {
        success,
        accuracy,
        time_elapsed: elapsed,
        score,
    });
}
