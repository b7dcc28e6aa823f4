//! Heuristic search for single-agent score maximization.
//!
//! | Search | Budget | Entry point |
//! |--------|--------|-------------|
//! | Greedy | one ply | [`greedy_action`] |
//! | Beam | width x depth, or time | [`beam_search_action`], [`beam_search_action_with_time`] |
//! | Chokudai | width x depth x sweeps, or time | [`chokudai_search_action`], [`chokudai_search_action_with_time`] |
//! | Hill climbing | iterations | [`hill_climb`] |
//! | Simulated annealing | iterations, or time | [`simulated_annealing`], [`simulated_annealing_with_time`] |
//!
//! The tree searches rank states by [`SinglePlayerState::evaluate_score`]
//! and answer with the first move of the best line found, or `None` when
//! there is nothing to play. The local searches work on
//! [`LocalSearchState`] configurations and return the best one seen.
//!
//! [`SinglePlayerState::evaluate_score`]: engine_core::SinglePlayerState::evaluate_score
//! [`LocalSearchState`]: engine_core::LocalSearchState
//!
//! # Usage
//!
//! ```rust
//! use beam::{beam_search_action, greedy_action};
//! use games_maze::MazeState;
//!
//! let state = MazeState::<3, 4>::new(7, 4).unwrap();
//! assert!(greedy_action(&state).is_some());
//! assert!(beam_search_action(&state, 2, 4).is_some());
//! ```

pub mod annealing;
pub mod beam_search;
pub mod chokudai;
pub mod frontier;
pub mod greedy;

pub use annealing::{hill_climb, simulated_annealing, simulated_annealing_with_time};
pub use beam_search::{beam_search_action, beam_search_action_with_time, beam_search_best};
pub use chokudai::{chokudai_search_action, chokudai_search_action_with_time};
pub use frontier::{Candidate, Frontier};
pub use greedy::greedy_action;

#[cfg(test)]
mod tests;
