//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from a crate directory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by LABYRINTH_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied.
pub fn load_config() -> CentralConfig {
    if let Ok(path) = std::env::var("LABYRINTH_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from LABYRINTH_CONFIG: {}", path.display());
            return load_from_path(&path);
        }
        warn!(
            "LABYRINTH_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = PathBuf::from(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(&path);
        }
    }

    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
///
/// Unreadable or malformed files fall back to the built-in defaults.
pub fn load_from_path(path: &PathBuf) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (u32, u64, f64, etc.)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(v) =
            std::env::var($key).and_then(|s| s.parse().map_err(|_| std::env::VarError::NotPresent))
        {
            $config.$section.$field = v;
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: LABYRINTH_<SECTION>_<KEY>.
/// Values that fail to parse are ignored.
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.log_level, "LABYRINTH_COMMON_LOG_LEVEL");
    env_override!(config, common.seed, "LABYRINTH_COMMON_SEED", parse);

    // Arena
    env_override!(config, arena.games, "LABYRINTH_ARENA_GAMES", parse);

    // Adversarial
    env_override!(
        config,
        adversarial.depth,
        "LABYRINTH_ADVERSARIAL_DEPTH",
        parse
    );
    env_override!(
        config,
        adversarial.time_threshold_ms,
        "LABYRINTH_ADVERSARIAL_TIME_THRESHOLD_MS",
        parse
    );

    // Beam
    env_override!(config, beam.width, "LABYRINTH_BEAM_WIDTH", parse);
    env_override!(config, beam.depth, "LABYRINTH_BEAM_DEPTH", parse);
    env_override!(
        config,
        beam.time_threshold_ms,
        "LABYRINTH_BEAM_TIME_THRESHOLD_MS",
        parse
    );

    // Chokudai
    env_override!(config, chokudai.width, "LABYRINTH_CHOKUDAI_WIDTH", parse);
    env_override!(config, chokudai.depth, "LABYRINTH_CHOKUDAI_DEPTH", parse);
    env_override!(
        config,
        chokudai.beam_number,
        "LABYRINTH_CHOKUDAI_BEAM_NUMBER",
        parse
    );
    env_override!(
        config,
        chokudai.time_threshold_ms,
        "LABYRINTH_CHOKUDAI_TIME_THRESHOLD_MS",
        parse
    );

    // Annealing
    env_override!(
        config,
        annealing.iterations,
        "LABYRINTH_ANNEALING_ITERATIONS",
        parse
    );
    env_override!(
        config,
        annealing.start_temp,
        "LABYRINTH_ANNEALING_START_TEMP",
        parse
    );
    env_override!(
        config,
        annealing.end_temp,
        "LABYRINTH_ANNEALING_END_TEMP",
        parse
    );
    env_override!(
        config,
        annealing.time_threshold_ms,
        "LABYRINTH_ANNEALING_TIME_THRESHOLD_MS",
        parse
    );

    // Monte Carlo
    env_override!(
        config,
        montecarlo.playouts,
        "LABYRINTH_MONTECARLO_PLAYOUTS",
        parse
    );

    // MCTS
    env_override!(config, mcts.playouts, "LABYRINTH_MCTS_PLAYOUTS", parse);
    env_override!(config, mcts.c, "LABYRINTH_MCTS_C", parse);
    env_override!(
        config,
        mcts.expand_threshold,
        "LABYRINTH_MCTS_EXPAND_THRESHOLD",
        parse
    );
    env_override!(
        config,
        mcts.time_threshold_ms,
        "LABYRINTH_MCTS_TIME_THRESHOLD_MS",
        parse
    );

    // Thunder
    env_override!(
        config,
        thunder.playouts,
        "LABYRINTH_THUNDER_PLAYOUTS",
        parse
    );
    env_override!(
        config,
        thunder.time_threshold_ms,
        "LABYRINTH_THUNDER_TIME_THRESHOLD_MS",
        parse
    );

    // DUCT
    env_override!(config, duct.playouts, "LABYRINTH_DUCT_PLAYOUTS", parse);
    env_override!(config, duct.c, "LABYRINTH_DUCT_C", parse);
    env_override!(
        config,
        duct.expand_threshold,
        "LABYRINTH_DUCT_EXPAND_THRESHOLD",
        parse
    );
    env_override!(
        config,
        duct.time_threshold_ms,
        "LABYRINTH_DUCT_TIME_THRESHOLD_MS",
        parse
    );

    config
}
