//! Monte Carlo search for two-player games.
//!
//! # Overview
//!
//! | Search | Games | Leaf value | Entry points |
//! |--------|-------|------------|--------------|
//! | Primitive Monte Carlo | alternating, simultaneous | random playout | [`primitive_monte_carlo_action`], [`simultaneous_primitive_monte_carlo_action`] |
//! | MCTS (UCB1) | alternating | random playout | [`mcts_action`], [`mcts_action_with_time`], [`simultaneous_mcts_action`] |
//! | Thunder | alternating | [`ScoreRateState::score_rate`] | [`thunder_action`], [`thunder_action_with_time`] |
//! | DUCT | simultaneous | random playout | [`duct_action`], [`duct_action_with_time`] |
//!
//! MCTS and Thunder share one search ([`MctsSearch`]) and differ only in
//! their [`MctsConfig`] preset and [`LeafEvaluator`]. Each simulation
//! descends by the configured selection rule, values the leaf, backs the
//! value up with the perspective flipped at every ply, and expands the leaf
//! once it has been visited `expand_threshold` times. The move played is
//! the root child with the most visits.
//!
//! Values are win rates in `[0, 1]`: 1 for a win, 0.5 for a draw, 0 for a
//! loss.
//!
//! [`ScoreRateState::score_rate`]: engine_core::ScoreRateState::score_rate
//!
//! # Usage
//!
//! ```rust
//! use games_maze::AlternateMazeState;
//! use mcts::{mcts_action, thunder_action};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let state = AlternateMazeState::<5, 5>::new(42, 10).unwrap();
//! let mut rng = ChaCha20Rng::seed_from_u64(0);
//! assert!(mcts_action(&state, 300, &mut rng).is_some());
//! assert!(thunder_action(&state, 300).is_some());
//! ```
//!
//! # Architecture
//!
//! ```text
//! +-------------------------------------------------+
//! |                 MctsSearch<S, E>                |
//! +-------------------------------------------------+
//! |  +--------------+          +-----------------+  |
//! |  | MctsTree<S>  |          | LeafEvaluator E |  |
//! |  |  (arena)     |          | rollout / rate  |  |
//! |  +------+-------+          +--------+--------+  |
//! |         |                           |           |
//! |         v                           v           |
//! |  select -> evaluate -> backpropagate -> expand  |
//! +-------------------------------------------------+
//! ```

pub mod config;
pub mod duct;
pub mod evaluator;
pub mod montecarlo;
pub mod node;
pub mod playout;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::{MctsConfig, Selection};
pub use duct::{duct_action, duct_action_with_time, DuctSearch};
pub use evaluator::{LeafEvaluator, RolloutEvaluator, ScoreRateEvaluator};
pub use montecarlo::{primitive_monte_carlo_action, simultaneous_primitive_monte_carlo_action};
pub use node::{MctsNode, NodeId};
pub use playout::{playout, simultaneous_playout};
pub use search::{
    mcts_action, mcts_action_with_time, simultaneous_mcts_action, thunder_action,
    thunder_action_with_time, MctsSearch, SearchResult,
};
pub use tree::{MctsTree, TreeStats};
