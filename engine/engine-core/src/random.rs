//! Uniform random move selection shared by playouts and baseline AIs.

use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::state::{Action, AlternatingState, Player, SimultaneousState, SinglePlayerState};

/// Pick one action uniformly, or `None` if there are none.
#[inline]
pub fn pick(actions: &[Action], rng: &mut ChaCha20Rng) -> Option<Action> {
    if actions.is_empty() {
        None
    } else {
        Some(actions[rng.gen_range(0..actions.len())])
    }
}

pub fn random_single_action<S: SinglePlayerState>(
    state: &S,
    rng: &mut ChaCha20Rng,
) -> Option<Action> {
    pick(&state.legal_actions(), rng)
}

pub fn random_alternating_action<S: AlternatingState>(
    state: &S,
    rng: &mut ChaCha20Rng,
) -> Option<Action> {
    pick(&state.legal_actions(), rng)
}

pub fn random_simultaneous_action<S: SimultaneousState>(
    state: &S,
    player: Player,
    rng: &mut ChaCha20Rng,
) -> Option<Action> {
    pick(&state.legal_actions(player), rng)
}
