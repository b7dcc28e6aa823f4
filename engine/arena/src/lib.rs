//! Driver surface for the Labyrinth search engines.
//!
//! Search crates only answer "which move?" for one position. This crate
//! plays whole games with them:
//! - [`Registry`]: label -> boxed AI, with presets built from a
//!   [`CentralConfig`](engine_config::CentralConfig)
//! - [`play_single`], [`play_alternating`], [`play_simultaneous`]: run one
//!   game to the end
//! - [`mean_score`], [`first_player_win_rate`], [`measure_latency`]:
//!   seeded aggregate statistics
//!
//! # Example
//!
//! ```
//! use arena::{first_player_win_rate, presets};
//! use engine_config::CentralConfig;
//! use games_maze::AlternateMazeState;
//!
//! let config = CentralConfig::default();
//! let registry = presets::alternating_registry::<AlternateMazeState<3, 3>>(&config);
//! let ais = [registry.get("alpha_beta")?, registry.get("random")?];
//! let rate = first_player_win_rate(ais, 4, 0, |seed| AlternateMazeState::new(seed, 4))?;
//! assert!((0.0..=1.0).contains(&rate));
//! # Ok::<(), arena::ArenaError>(())
//! ```

mod error;
pub mod play;
pub mod presets;
pub mod registry;
pub mod stats;

pub use error::ArenaError;
pub use play::{play_alternating, play_simultaneous, play_single};
pub use registry::{AlternatingAi, LocalSearchAi, Registry, SimultaneousAi, SingleAi};
pub use stats::{
    first_player_win_rate, mean_local_search_score, mean_score, measure_latency, sample_states,
    simultaneous_first_player_win_rate, Latency,
};

#[cfg(test)]
mod tests;
