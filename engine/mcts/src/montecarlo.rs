//! Primitive Monte Carlo: flat random playouts from each root move.

use engine_core::random::pick;
use engine_core::{Action, AlternatingState, Player, SimultaneousState};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::playout::{playout, simultaneous_playout};

/// Pick the move whose random playouts win most often on average.
///
/// The `playouts` budget is dealt to the legal actions round-robin, so
/// with fewer playouts than actions the tail actions get none and are not
/// considered. Returns `None` when there is no legal action or no playout.
pub fn primitive_monte_carlo_action<S: AlternatingState>(
    state: &S,
    playouts: u32,
    rng: &mut ChaCha20Rng,
) -> Option<Action> {
    let legal_actions = state.legal_actions();
    if legal_actions.is_empty() {
        return None;
    }
    let mut values = vec![0.0f64; legal_actions.len()];
    let mut counts = vec![0u32; legal_actions.len()];

    for cnt in 0..playouts as usize {
        let index = cnt % legal_actions.len();
        let mut next = state.clone();
        next.advance(legal_actions[index]);
        values[index] += 1.0 - playout(next, rng);
        counts[index] += 1;
    }

    let mut best: Option<(f64, Action)> = None;
    for ((&action, &value), &count) in legal_actions.iter().zip(&values).zip(&counts) {
        if count == 0 {
            continue;
        }
        let mean = value / count as f64;
        if best.map_or(true, |(best_mean, _)| mean > best_mean) {
            best = Some((mean, action));
        }
    }

    debug!(playouts, best = ?best, "primitive monte carlo finished");
    best.map(|(_, action)| action)
}

/// Primitive Monte Carlo for one seat of a simultaneous game.
///
/// Every legal action of `player` gets `playouts_per_action` trials, each
/// pairing it with a uniformly random opponent action and playing the rest
/// out at random. Values are from `player`'s view. Returns `None` when
/// `player` has no legal action or the budget is zero.
pub fn simultaneous_primitive_monte_carlo_action<S: SimultaneousState>(
    state: &S,
    player: Player,
    playouts_per_action: u32,
    rng: &mut ChaCha20Rng,
) -> Option<Action> {
    if playouts_per_action == 0 {
        return None;
    }
    let my_actions = state.legal_actions(player);
    let opp_actions = state.legal_actions(player.opponent());

    let mut best: Option<(f64, Action)> = None;
    for &action in &my_actions {
        let mut value = 0.0;
        for _ in 0..playouts_per_action {
            let first_value = match pick(&opp_actions, rng) {
                Some(opp_action) => {
                    let mut next = state.clone();
                    match player {
                        Player::First => next.advance(action, opp_action),
                        Player::Second => next.advance(opp_action, action),
                    }
                    simultaneous_playout(next, rng)
                }
                // Opponent cannot move: no trial to play.
                None => 0.5,
            };
            value += match player {
                Player::First => first_value,
                Player::Second => 1.0 - first_value,
            };
        }
        if best.map_or(true, |(best_value, _)| value > best_value) {
            best = Some((value, action));
        }
    }

    debug!(?player, playouts_per_action, best = ?best, "simultaneous monte carlo finished");
    best.map(|(_, action)| action)
}
