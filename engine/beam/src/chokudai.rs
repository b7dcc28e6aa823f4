//! Chokudai search: beam search spread thin across many sweeps.
//!
//! One frontier is kept per depth. A sweep walks every depth in turn and
//! moves up to `beam_width` candidates one layer deeper. Because the
//! frontiers persist between sweeps, later sweeps pick up candidates that
//! an earlier, narrower pass left behind.

use engine_core::{Action, SinglePlayerState, TimeKeeper};
use tracing::debug;

use crate::frontier::{candidate_frontier, Candidate, CandidateFrontier};

struct Layers<S> {
    beams: Vec<CandidateFrontier<S>>,
}

impl<S: SinglePlayerState> Layers<S> {
    fn new(state: &S, beam_depth: u32) -> Self {
        let mut beams: Vec<CandidateFrontier<S>> =
            (0..=beam_depth).map(|_| candidate_frontier()).collect();
        beams[0].push(Candidate::root(state.clone()));
        Self { beams }
    }

    /// One pass over all depths. Returns `false` if `keeper` expired
    /// part-way through.
    fn sweep(&mut self, beam_width: usize, keeper: Option<&TimeKeeper>) -> bool {
        for t in 0..self.beams.len() - 1 {
            if keeper.is_some_and(TimeKeeper::is_time_over) {
                return false;
            }
            let (shallow, deep) = self.beams.split_at_mut(t + 1);
            let now = &mut shallow[t];
            let next = &mut deep[0];
            for _ in 0..beam_width {
                match now.peek() {
                    None => break,
                    // A finished game stays where it is.
                    Some(top) if top.state.is_done() => break,
                    Some(_) => {}
                }
                if let Some(candidate) = now.pop() {
                    candidate.expand_into(next);
                }
            }
        }
        true
    }

    /// Root move of the best candidate in the deepest non-empty frontier.
    fn best_first_action(&self) -> Option<Action> {
        self.beams
            .iter()
            .rev()
            .find_map(|beam| beam.peek())
            .and_then(|top| top.first_action)
    }
}

/// Chokudai search for a fixed number of sweeps.
///
/// Returns `None` when nothing got past the root: zero width, depth or
/// sweeps, or no legal action.
pub fn chokudai_search_action<S: SinglePlayerState>(
    state: &S,
    beam_width: usize,
    beam_depth: u32,
    beam_number: u32,
) -> Option<Action> {
    let mut layers = Layers::new(state, beam_depth);
    for _ in 0..beam_number {
        layers.sweep(beam_width, None);
    }
    let action = layers.best_first_action();
    debug!(beam_number, ?action, "chokudai search finished");
    action
}

/// Chokudai search sweeping until `time_threshold_ms` elapses.
///
/// The deadline is checked before every layer, so a sweep may stop part-way;
/// the candidates it already moved still count.
pub fn chokudai_search_action_with_time<S: SinglePlayerState>(
    state: &S,
    beam_width: usize,
    beam_depth: u32,
    time_threshold_ms: u64,
) -> Option<Action> {
    let keeper = TimeKeeper::new(time_threshold_ms);
    let mut layers = Layers::new(state, beam_depth);
    let mut sweeps = 0u32;
    while !keeper.is_time_over() && layers.sweep(beam_width, Some(&keeper)) {
        sweeps += 1;
    }
    let action = layers.best_first_action();
    debug!(sweeps, ?action, "chokudai search out of time");
    action
}
