//! Adversarial tree search for alternating two-player zero-sum games.
//!
//! All three searches use the negamax convention: a state's score is always
//! read from the acting player's point of view, so a child's score is negated
//! on the way back up and one function serves both players.
//!
//! - [`mini_max_action`]: exhaustive search to a fixed depth
//! - [`alpha_beta_action`]: same result as minimax, pruning branches that
//!   cannot change it
//! - [`iterative_deepening_action`]: alpha-beta at depth 1, 2, 3, ... until a
//!   wall-clock deadline, keeping the last depth that finished
//!
//! Ties are broken toward the earliest action in `legal_actions` order; every
//! comparison is a strict `>`.
//!
//! # Usage
//!
//! ```rust
//! use adversarial::{alpha_beta_action, mini_max_action};
//! use games_maze::AlternateMazeState;
//!
//! let state = AlternateMazeState::<3, 3>::new(0, 4).unwrap();
//! assert_eq!(mini_max_action(&state, 3), alpha_beta_action(&state, 3));
//! ```

pub mod alpha_beta;
pub mod iterative;
pub mod minimax;

pub use alpha_beta::{alpha_beta_action, alpha_beta_score};
pub use iterative::{alpha_beta_action_with_deadline, iterative_deepening_action, DeadlineExceeded};
pub use minimax::{mini_max_action, mini_max_score};
