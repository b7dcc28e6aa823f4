//! Layered beam search.
//!
//! Each layer keeps the `beam_width` best candidates by `evaluate_score`
//! and expands all of them into the next layer. The answer is the root move
//! that leads to the best candidate of the last layer built.

use engine_core::{Action, SinglePlayerState, TimeKeeper};
use tracing::debug;

use crate::frontier::{candidate_frontier, Candidate, CandidateFrontier};

/// Expand up to `beam_width` candidates from `now` into a fresh layer.
///
/// Stops early and returns `None` when `keeper` has expired.
fn next_layer<S: SinglePlayerState>(
    now: &mut CandidateFrontier<S>,
    beam_width: usize,
    keeper: Option<&TimeKeeper>,
) -> Option<CandidateFrontier<S>> {
    let mut next = candidate_frontier();
    for _ in 0..beam_width {
        if keeper.is_some_and(TimeKeeper::is_time_over) {
            return None;
        }
        let Some(candidate) = now.pop() else {
            break;
        };
        candidate.expand_into(&mut next);
    }
    Some(next)
}

fn run<S: SinglePlayerState>(
    state: &S,
    beam_width: usize,
    beam_depth: Option<u32>,
    keeper: Option<&TimeKeeper>,
) -> Option<Candidate<S>> {
    let mut now = candidate_frontier();
    now.push(Candidate::root(state.clone()));
    let mut best: Option<Candidate<S>> = None;
    let mut layers = 0u32;

    while beam_depth.map_or(true, |depth| layers < depth) {
        let Some(next) = next_layer(&mut now, beam_width, keeper) else {
            debug!(layers, "beam search out of time");
            break;
        };
        now = next;
        layers += 1;
        let Some(top) = now.peek() else {
            // Nothing to expand; the previous best stands.
            break;
        };
        best = Some(top.clone());
        if top.state.is_done() {
            break;
        }
    }

    if let Some(best) = &best {
        debug!(
            layers,
            evaluated_score = best.evaluated_score,
            first_action = ?best.first_action,
            "beam search finished"
        );
    }
    best
}

/// Best candidate of the last layer built by [`beam_search_action`].
pub fn beam_search_best<S: SinglePlayerState>(
    state: &S,
    beam_width: usize,
    beam_depth: u32,
) -> Option<Candidate<S>> {
    run(state, beam_width, Some(beam_depth), None)
}

/// Beam search to a fixed number of layers.
///
/// Stops early once the best candidate is a finished game. Returns `None`
/// when `beam_width` or `beam_depth` is zero, or the root has no legal
/// action.
pub fn beam_search_action<S: SinglePlayerState>(
    state: &S,
    beam_width: usize,
    beam_depth: u32,
) -> Option<Action> {
    beam_search_best(state, beam_width, beam_depth)?.first_action
}

/// Beam search with no depth limit, building layers until
/// `time_threshold_ms` elapses or the best candidate is a finished game.
///
/// The deadline is checked before every expansion. Returns the answer of the
/// last complete layer, or `None` if not even the first layer finished.
pub fn beam_search_action_with_time<S: SinglePlayerState>(
    state: &S,
    beam_width: usize,
    time_threshold_ms: u64,
) -> Option<Action> {
    let keeper = TimeKeeper::new(time_threshold_ms);
    run(state, beam_width, None, Some(&keeper))?.first_action
}
