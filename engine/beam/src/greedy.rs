//! One-ply lookahead.

use engine_core::{Action, ScoreType, SinglePlayerState, INF};

/// Legal action whose successor has the highest `evaluate_score`.
///
/// Ties go to the earliest action in `legal_actions` order. Returns `None`
/// when there is no legal action.
pub fn greedy_action<S: SinglePlayerState>(state: &S) -> Option<Action> {
    let mut best_score: ScoreType = -INF;
    let mut best_action = None;
    for action in state.legal_actions() {
        let mut next = state.clone();
        next.advance(action);
        let score = next.evaluate_score();
        if score > best_score {
            best_score = score;
            best_action = Some(action);
        }
    }
    best_action
}
