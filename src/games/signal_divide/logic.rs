//! Signal Divide game logic: signal generation, rule selection, sorting.

use super::types::{
    DivideInput, DividePhase, Signal, SignalColor, SignalDivideGame, SignalRule, SignalShape,
    SignalSize,
};
use crate::constants::{COUNTDOWN_STEP_MS, PASS_THRESHOLD};
use crate::core::types::LevelResult;
use crate::games::compute_score;
use rand::Rng;

/// Begin the play-through: generate signals, draw a rule from the level's
/// pool, and show the rule card.
pub fn start<R: Rng>(game: &mut SignalDivideGame, rng: &mut R) {
    if game.phase != DividePhase::Ready {
        return;
    }

    game.signals = (0..game.signal_count).map(|_| random_signal(rng)).collect();
    game.rule = select_rule(game.level, rng);
    game.current_index = 0;
    game.correct_sorts = 0;
    game.phase = DividePhase::ShowingRule;
    game.rule_countdown = 3;
    game.phase_elapsed_ms = 0;
}

fn random_signal<R: Rng>(rng: &mut R) -> Signal {
    Signal {
        color: if rng.gen::<bool>() {
            SignalColor::Gold
        } else {
            SignalColor::Cyan
        },
        shape: SignalShape::ALL[rng.gen_range(0..SignalShape::ALL.len())],
        size: if rng.gen::<bool>() {
            SignalSize::Small
        } else {
            SignalSize::Large
        },
    }
}

/// Draw a rule from the pool the level unlocks.
pub fn select_rule<R: Rng>(level: u32, rng: &mut R) -> SignalRule {
    let pool = SignalRule::available_for_level(level);
    pool[rng.gen_range(0..pool.len())]
}

/// Advance the state machine by `delta_ms` of wall-clock time.
pub fn process_tick(game: &mut SignalDivideGame, delta_ms: u64) {
    match game.phase {
        DividePhase::Ready | DividePhase::Result => {}
        DividePhase::ShowingRule => {
            game.phase_elapsed_ms += delta_ms;
            while game.phase_elapsed_ms >= COUNTDOWN_STEP_MS && game.rule_countdown > 0 {
                game.phase_elapsed_ms -= COUNTDOWN_STEP_MS;
                game.rule_countdown -= 1;
            }
            if game.rule_countdown == 0 {
                game.phase = DividePhase::Countdown;
                game.countdown = 3;
            }
        }
        DividePhase::Countdown => {
            game.phase_elapsed_ms += delta_ms;
            while game.phase_elapsed_ms >= COUNTDOWN_STEP_MS && game.countdown > 0 {
                game.phase_elapsed_ms -= COUNTDOWN_STEP_MS;
                game.countdown -= 1;
            }
            if game.countdown == 0 {
                game.phase = DividePhase::Playing;
                game.play_elapsed_ms = 0;
            }
        }
        DividePhase::Playing => {
            game.play_elapsed_ms += delta_ms;
        }
    }
}

/// Sort the current signal. Wrong choices still consume the signal; the
/// level always runs through all of them.
pub fn process_input(game: &mut SignalDivideGame, input: DivideInput) {
    if game.phase != DividePhase::Playing || game.current_index >= game.signals.len() {
        return;
    }

    let chose_left = input == DivideInput::SortLeft;
    let signal = game.signals[game.current_index];
    if chose_left == signal.belongs_left(game.rule) {
        game.correct_sorts += 1;
    }
    game.current_index += 1;

    if game.current_index >= game.signals.len() {
        complete(game);
    }
}

fn complete(game: &mut SignalDivideGame) {
    game.phase = DividePhase::Result;
    let elapsed = game.play_elapsed_secs();
    let accuracy = game.correct_sorts as f64 / game.signal_count as f64;
    let success = accuracy >= PASS_THRESHOLD;
    let score = if success {
        compute_score(accuracy, elapsed / game.signal_count as f64)
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
