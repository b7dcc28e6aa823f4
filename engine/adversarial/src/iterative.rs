//! Time-bounded iterative deepening over alpha-beta.
//!
//! The deadline is checked on entry to every node and after every child, so
//! a deep search overrunning its budget unwinds within one node expansion.
//! A depth that runs out of time is discarded whole: its partial result may
//! be wrong, so the answer from the previous completed depth is kept.

use engine_core::{Action, AlternatingState, ScoreType, TimeKeeper, INF};
use thiserror::Error;
use tracing::{debug, trace};

/// The deadline passed before the search finished.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("search deadline passed")]
pub struct DeadlineExceeded;

/// Alpha-beta state for one depth-limited pass under a deadline.
struct DeadlineSearch<'a> {
    keeper: &'a TimeKeeper,
    /// Whether some unfinished game was cut off by the depth limit
    reached_horizon: bool,
}

impl DeadlineSearch<'_> {
    fn check(&self) -> Result<(), DeadlineExceeded> {
        if self.keeper.is_time_over() {
            Err(DeadlineExceeded)
        } else {
            Ok(())
        }
    }

    fn score<S: AlternatingState>(
        &mut self,
        state: &S,
        mut alpha: ScoreType,
        beta: ScoreType,
        depth: u32,
    ) -> Result<ScoreType, DeadlineExceeded> {
        self.check()?;
        if state.is_done() {
            return Ok(state.score());
        }
        if depth == 0 {
            self.reached_horizon = true;
            return Ok(state.score());
        }
        let legal_actions = state.legal_actions();
        if legal_actions.is_empty() {
            return Ok(state.score());
        }

        for action in legal_actions {
            let mut next = state.clone();
            next.advance(action);
            let score = -self.score(&next, -beta, -alpha, depth - 1)?;
            self.check()?;
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                return Ok(alpha);
            }
        }
        Ok(alpha)
    }

    fn action<S: AlternatingState>(
        &mut self,
        state: &S,
        depth: u32,
    ) -> Result<Option<Action>, DeadlineExceeded> {
        let mut best_action = None;
        let mut alpha = -INF;
        for action in state.legal_actions() {
            let mut next = state.clone();
            next.advance(action);
            let score = -self.score(&next, -INF, -alpha, depth)?;
            self.check()?;
            if score > alpha {
                best_action = Some(action);
                alpha = score;
            }
        }
        Ok(best_action)
    }
}

/// Alpha-beta action at a fixed depth, abandoned if `keeper` expires first.
///
/// On success the result equals [`alpha_beta_action`](crate::alpha_beta_action)
/// at the same depth.
pub fn alpha_beta_action_with_deadline<S: AlternatingState>(
    state: &S,
    depth: u32,
    keeper: &TimeKeeper,
) -> Result<Option<Action>, DeadlineExceeded> {
    DeadlineSearch {
        keeper,
        reached_horizon: false,
    }
    .action(state, depth)
}

/// Deepen alpha-beta one ply at a time until `time_threshold_ms` elapses.
///
/// Returns the action from the deepest depth that completed in time, or
/// `None` if not even depth 1 finished or there is no legal move. Stops early
/// once a depth searches every line to the end of the game, since deeper
/// passes would return the same answer.
pub fn iterative_deepening_action<S: AlternatingState>(
    state: &S,
    time_threshold_ms: u64,
) -> Option<Action> {
    let keeper = TimeKeeper::new(time_threshold_ms);
    let mut best_action = None;

    for depth in 1.. {
        let mut search = DeadlineSearch {
            keeper: &keeper,
            reached_horizon: false,
        };
        match search.action(state, depth) {
            Ok(action) => {
                trace!(depth, ?action, "iterative deepening depth complete");
                best_action = action;
                if !search.reached_horizon {
                    debug!(depth, ?best_action, "iterative deepening searched to game end");
                    break;
                }
            }
            Err(DeadlineExceeded) => {
                debug!(
                    completed_depth = depth - 1,
                    ?best_action,
                    elapsed_ms = keeper.elapsed_ms(),
                    "iterative deepening out of time"
                );
                break;
            }
        }
    }

    best_action
}
