//! Negamax with alpha-beta pruning.

use engine_core::{Action, AlternatingState, ScoreType, INF};

/// Alpha-beta score within the window `(alpha, beta)`.
///
/// Children are searched in `legal_actions` order. The search stops as soon
/// as `alpha >= beta`, since the opponent already has a better option
/// elsewhere.
pub fn alpha_beta_score<S: AlternatingState>(
    state: &S,
    mut alpha: ScoreType,
    beta: ScoreType,
    depth: u32,
) -> ScoreType {
    if state.is_done() || depth == 0 {
        return state.score();
    }
    let legal_actions = state.legal_actions();
    if legal_actions.is_empty() {
        return state.score();
    }

    for action in legal_actions {
        let mut next = state.clone();
        next.advance(action);
        let score = -alpha_beta_score(&next, -beta, -alpha, depth - 1);
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            return alpha;
        }
    }
    alpha
}

/// Action chosen by alpha-beta, identical to [`mini_max_action`] at the
/// same depth.
///
/// [`mini_max_action`]: crate::mini_max_action
pub fn alpha_beta_action<S: AlternatingState>(state: &S, depth: u32) -> Option<Action> {
    let mut best_action = None;
    let mut alpha = -INF;
    let beta = INF;
    for action in state.legal_actions() {
        let mut next = state.clone();
        next.advance(action);
        let score = -alpha_beta_score(&next, -beta, -alpha, depth);
        if score > alpha {
            best_action = Some(action);
            alpha = score;
        }
    }
    best_action
}
