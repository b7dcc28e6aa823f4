//! Play loops: run one game to the end with the given AIs.
//!
//! An AI that answers `None` while legal moves exist is overruled with the
//! first legal move and a warning. A side left with no legal move at all
//! ends the game where it stands, and an unfinished two-player game counts
//! as a draw.

use engine_core::game_utils::{first_player_win_rate_point, simultaneous_first_player_win_rate_point};
use engine_core::{
    Action, AlternatingState, Player, ScoreType, SimultaneousState, SinglePlayerState,
};
use rand_chacha::ChaCha20Rng;
use tracing::{trace, warn};

use crate::registry::{AlternatingAi, SimultaneousAi, SingleAi};

/// The AI's choice, or the first legal action if it had none.
pub(crate) fn choose_or_first(choice: Option<Action>, legal: &[Action]) -> Option<Action> {
    match choice {
        Some(action) => Some(action),
        None => {
            let fallback = legal.first().copied();
            if fallback.is_some() {
                warn!(?fallback, "AI returned no action, playing first legal action");
            }
            fallback
        }
    }
}

/// Play a single-player game to the end and return its final score.
pub fn play_single<S: SinglePlayerState>(
    mut state: S,
    ai: &SingleAi<S>,
    rng: &mut ChaCha20Rng,
) -> ScoreType {
    let mut turns = 0u32;
    while !state.is_done() {
        let legal = state.legal_actions();
        let Some(action) = choose_or_first(ai(&state, rng), &legal) else {
            break;
        };
        state.advance(action);
        turns += 1;
    }
    trace!(turns, score = state.game_score(), "single-player game finished");
    state.game_score()
}

/// Play an alternating game with `ais[0]` moving first.
///
/// Returns the first mover's result: 1.0 win, 0.5 draw, 0.0 loss.
pub fn play_alternating<S: AlternatingState>(
    mut state: S,
    ais: [&AlternatingAi<S>; 2],
    rng: &mut ChaCha20Rng,
) -> f64 {
    let mut ply = 0usize;
    while !state.is_done() {
        let legal = state.legal_actions();
        let Some(action) = choose_or_first(ais[ply % 2](&state, rng), &legal) else {
            break;
        };
        state.advance(action);
        ply += 1;
    }

    let point = first_player_win_rate_point(&state);
    trace!(ply, point, "alternating game finished");
    point
}

/// Play a simultaneous game with `ais[0]` in the first seat.
///
/// Returns the first seat's result: 1.0 win, 0.5 draw, 0.0 loss.
pub fn play_simultaneous<S: SimultaneousState>(
    mut state: S,
    ais: [&SimultaneousAi<S>; 2],
    rng: &mut ChaCha20Rng,
) -> f64 {
    let mut turns = 0u32;
    while !state.is_done() {
        let mut joint = [0; 2];
        for player in Player::ALL {
            let legal = state.legal_actions(player);
            let choice = ais[player.index()](&state, player, rng);
            match choose_or_first(choice, &legal) {
                Some(action) => joint[player.index()] = action,
                None => {
                    let point = simultaneous_first_player_win_rate_point(&state);
                    trace!(turns, point, stuck = ?player, "simultaneous game stuck");
                    return point;
                }
            }
        }
        state.advance(joint[0], joint[1]);
        turns += 1;
    }
    let point = simultaneous_first_player_win_rate_point(&state);
    trace!(turns, point, "simultaneous game finished");
    point
}
