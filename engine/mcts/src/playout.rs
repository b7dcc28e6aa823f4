//! Random playouts to the end of the game.
//!
//! Both playouts loop instead of recursing, so long games cannot overflow
//! the stack.

use engine_core::game_utils::{score_sign_value, simultaneous_status_value, status_value};
use engine_core::random::{pick, random_alternating_action};
use engine_core::{AlternatingState, Player, SimultaneousState};
use rand_chacha::ChaCha20Rng;

/// Value in `{0, 0.5, 1}` of a finished alternating game for the acting
/// player, or `None` if it is still in progress.
#[inline]
pub fn terminal_value<S: AlternatingState>(state: &S) -> Option<f64> {
    if state.is_done() {
        status_value(state.winning_status())
    } else {
        None
    }
}

/// Play uniformly random moves until the game ends.
///
/// Returns the result for whoever was to move in `state`: 1 for a win,
/// 0.5 for a draw and 0 for a loss. A state with no legal actions before
/// the game is over is scored by the sign of its score.
pub fn playout<S: AlternatingState>(mut state: S, rng: &mut ChaCha20Rng) -> f64 {
    let mut flipped = false;
    let value = loop {
        if let Some(value) = terminal_value(&state) {
            break value;
        }
        match random_alternating_action(&state, rng) {
            Some(action) => state.advance(action),
            None => break score_sign_value(state.score()),
        }
        flipped = !flipped;
    };
    if flipped {
        1.0 - value
    } else {
        value
    }
}

/// Play uniformly random move pairs until the game ends.
///
/// Returns the result for the first player. A state where either player
/// has no legal action before the game is over counts as a draw.
pub fn simultaneous_playout<S: SimultaneousState>(mut state: S, rng: &mut ChaCha20Rng) -> f64 {
    loop {
        if let Some(value) = simultaneous_status_value(state.winning_status()) {
            return value;
        }
        let first = pick(&state.legal_actions(Player::First), rng);
        let second = pick(&state.legal_actions(Player::Second), rng);
        match (first, second) {
            (Some(first), Some(second)) => state.advance(first, second),
            _ => return 0.5,
        }
    }
}
