//! Pattern Surge game logic: sequence generation, phase progression, and
//! input handling.

use super::types::{PatternSurgeGame, SurgeInput, SurgePhase};
use crate::constants::{COUNTDOWN_STEP_MS, PRE_INPUT_DELAY_MS, SYMBOL_GAP_MS};
use crate::core::types::LevelResult;
use crate::games::compute_score;
use rand::Rng;

/// Begin the play-through: generate the pattern and enter the countdown.
pub fn start<R: Rng>(game: &mut PatternSurgeGame, rng: &mut R) {
    if game.phase != SurgePhase::Ready {
        return;
    }
    game.pattern = (0..game.pattern_length)
        .map(|_| rng.gen_range(0..game.symbol_count))
        .collect();
    game.phase = SurgePhase::Countdown;
    game.countdown = 3;
    game.phase_elapsed_ms = 0;
}

/// Advance the state machine by `delta_ms` of wall-clock time.
pub fn process_tick(game: &mut PatternSurgeGame, delta_ms: u64) {
    match game.phase {
        SurgePhase::Ready | SurgePhase::Result => {}
        SurgePhase::Countdown => {
            game.phase_elapsed_ms += delta_ms;
            while game.phase_elapsed_ms >= COUNTDOWN_STEP_MS && game.countdown > 0 {
                game.phase_elapsed_ms -= COUNTDOWN_STEP_MS;
                game.countdown -= 1;
            }
            if game.countdown == 0 {
                begin_showing(game);
            }
        }
        SurgePhase::Showing => {
            game.phase_elapsed_ms += delta_ms;
            advance_showing(game);
        }
        SurgePhase::Input => {
            game.input_elapsed_ms += delta_ms;
        }
    }
}

fn begin_showing(game: &mut PatternSurgeGame) {
    game.phase = SurgePhase::Showing;
    game.showing_index = 0;
    game.active_symbol = Some(game.pattern[0]);
    game.symbol_visible = true;
    game.phase_elapsed_ms = 0;
}

fn advance_showing(game: &mut PatternSurgeGame) {
    if game.showing_index >= game.pattern.len() {
        // All symbols shown; brief pause before input opens
        if game.phase_elapsed_ms >= PRE_INPUT_DELAY_MS {
            begin_input(game);
        }
        return;
    }

    if game.symbol_visible {
        if game.phase_elapsed_ms >= game.display_ms {
            game.active_symbol = None;
            game.symbol_visible = false;
            game.phase_elapsed_ms = 0;
        }
    } else if game.phase_elapsed_ms >= SYMBOL_GAP_MS {
        game.showing_index += 1;
        game.phase_elapsed_ms = 0;
        if game.showing_index < game.pattern.len() {
            game.active_symbol = Some(game.pattern[game.showing_index]);
            game.symbol_visible = true;
        }
    }
}

fn begin_input(game: &mut PatternSurgeGame) {
    game.phase = SurgePhase::Input;
    game.player_input.clear();
    game.input_elapsed_ms = 0;
}

/// Handle a symbol tap. The first wrong tap ends the attempt immediately.
pub fn process_input(game: &mut PatternSurgeGame, input: SurgeInput) {
    if game.phase != SurgePhase::Input {
        return;
    }
    let SurgeInput::Symbol(index) = input;

    let expected = game.pattern[game.player_input.len()];
    if index == expected {
        game.player_input.push(index);
        if game.player_input.len() == game.pattern.len() {
            complete(game, true);
        }
    } else {
        complete(game, false);
    }
}

fn complete(game: &mut PatternSurgeGame, success: bool) {
    game.phase = SurgePhase::Result;
    let elapsed = game.input_elapsed_secs();
    let accuracy = if success {
        game.player_input.len() as f64 / game.pattern.len() as f64
    } else {
        game.player_input.len() as f64 / (game.pattern.len() + 1) as f64
    };
    let score = if success {
        compute_score(accuracy, elapsed)
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
