//! Maze games for the Labyrinth search engines
//!
//! Every game here is a small `Copy` struct over a const-generic grid, so the
//! searches can clone and advance millions of states without allocating.
//! Rewards are digits 0-9 scattered over the board; moving onto a reward
//! banks it and clears the cell.
//!
//! | Game | Contract | Used by |
//! |---|---|---|
//! | [`MazeState`] | `SinglePlayerState` | greedy, beam, chokudai |
//! | [`WallMazeState`] | `SinglePlayerState` (distance-aware evaluation) | beam |
//! | [`AutoMoveMazeState`] | `LocalSearchState` | hill climbing, simulated annealing |
//! | [`AlternateMazeState`] | `AlternatingState` + `ScoreRateState` | minimax family, MCTS, Thunder |
//! | [`SimultaneousMazeState`] | `SimultaneousState` | DUCT, primitive Monte Carlo |
//!
//! # Usage
//!
//! ```rust
//! use engine_core::SinglePlayerState;
//! use games_maze::MazeState;
//!
//! let mut state = MazeState::<3, 4>::new(121321, 4).expect("3x4 is a valid board");
//! while !state.is_done() {
//!     let action = state.legal_actions()[0];
//!     state.advance(action);
//! }
//! assert!(state.game_score() >= 0);
//! ```
//!
//! Actions are indices into [`DX`]/[`DY`]: 0 = +x, 1 = -x, 2 = +y, 3 = -y.

mod alternate;
mod auto_move;
mod error;
mod grid;
mod maze;
mod simultaneous;
mod wall_maze;

pub use alternate::AlternateMazeState;
pub use auto_move::AutoMoveMazeState;
pub use error::GameError;
pub use grid::{on_board_actions, Character, Coord, Points, ACTION_COUNT, DX, DY};
pub use maze::MazeState;
pub use simultaneous::SimultaneousMazeState;
pub use wall_maze::{WallMazeState, Walls};
