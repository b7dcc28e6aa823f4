//! Core traits and types for the Labyrinth search engines
//!
//! This crate provides the fundamental abstractions every search algorithm
//! is written against:
//! - `SinglePlayerState`, `AlternatingState`, `SimultaneousState`,
//!   `LocalSearchState`: capability contracts implemented by concrete games
//! - `TimeKeeper` / `TimeKeeperF64`: wall-clock deadlines for time-bounded searches
//! - `AlternatingView`: plays a simultaneous game as two alternating plies per turn
//! - `game_utils` / `random`: outcome values and uniform action sampling

pub mod adapter;
pub mod game_utils;
pub mod random;
pub mod state;
pub mod time_keeper;

// Re-export main types for convenience
pub use adapter::AlternatingView;
pub use state::{
    Action, AlternatingState, LocalSearchState, Player, ScoreRateState, ScoreType,
    SimultaneousState, SimultaneousStatus, SinglePlayerState, WinningStatus, INF,
};
pub use time_keeper::{TimeKeeper, TimeKeeperF64};
