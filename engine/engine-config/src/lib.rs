//! Centralized configuration loading from config.toml.
//!
//! Every search engine reads its tuning knobs (depths, widths, playout
//! budgets, deadlines) from one [`CentralConfig`], so the arena and the
//! benches agree on what "default MCTS" means.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`LABYRINTH_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml, embedded at compile time)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! LABYRINTH_<SECTION>_<KEY>=value
//!
//! Examples:
//!     LABYRINTH_COMMON_SEED=42
//!     LABYRINTH_BEAM_WIDTH=8
//!     LABYRINTH_MCTS_PLAYOUTS=1000
//!     LABYRINTH_DUCT_C=1.4
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;
