//! Exhaustive negamax search.

use engine_core::{Action, AlternatingState, ScoreType, INF};

/// Best score reachable by the acting player within `depth` plies.
///
/// Returns the state's own score at the horizon, on a finished game, or when
/// the acting player has no legal move.
pub fn mini_max_score<S: AlternatingState>(state: &S, depth: u32) -> ScoreType {
    if state.is_done() || depth == 0 {
        return state.score();
    }
    let legal_actions = state.legal_actions();
    if legal_actions.is_empty() {
        return state.score();
    }

    let mut best_score = -INF;
    for action in legal_actions {
        let mut next = state.clone();
        next.advance(action);
        let score = -mini_max_score(&next, depth - 1);
        if score > best_score {
            best_score = score;
        }
    }
    best_score
}

/// Action with the best minimax score, searching `depth` plies below each
/// root move. `None` if there is no legal move.
pub fn mini_max_action<S: AlternatingState>(state: &S, depth: u32) -> Option<Action> {
    let mut best_action = None;
    let mut best_score = -INF;
    for action in state.legal_actions() {
        let mut next = state.clone();
        next.advance(action);
        let score = -mini_max_score(&next, depth);
        if score > best_score {
            best_action = Some(action);
            best_score = score;
        }
    }
    best_action
}
