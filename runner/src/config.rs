//! Command-line configuration for the match runner.
//!
//! Defaults come from the central config (config.toml plus `LABYRINTH_*`
//! overrides); CLI arguments take priority.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use engine_config::{load_config, CentralConfig};
use once_cell::sync::Lazy;
use tracing::level_filters::LevelFilter;

// Load central config once at startup
pub static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

fn default_games() -> u32 {
    CENTRAL_CONFIG.arena.games
}

fn default_seed() -> u64 {
    CENTRAL_CONFIG.common.seed
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

/// Which board family to play on.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    /// Single-player 30x30 maze, 100 turns
    Maze,
    /// Alternating two-player 5x5 maze, 10 turns
    Alternate,
    /// Simultaneous two-player 5x5 maze, 20 turns
    Simultaneous,
    /// 5x5 placement puzzle for three auto-moving characters, 5 turns
    Placement,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "labyrinth")]
#[command(about = "Labyrinth - play seeded matches between search AIs")]
#[command(
    long_about = "Plays repeated seeded games between AIs from the preset registries and
reports mean score or win rate.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Board family
    #[arg(long, value_enum, default_value_t = Game::Alternate)]
    pub game: Game,

    /// AI under test (a preset label such as alpha_beta, mcts or duct)
    #[arg(long)]
    pub ai: String,

    /// Opponent label for two-player games
    #[arg(long, default_value = "random")]
    pub opponent: String,

    /// Number of boards to play
    #[arg(long, default_value_t = default_games())]
    pub games: u32,

    /// Seed for boards and AI randomness
    #[arg(long, default_value_t = default_seed())]
    pub seed: u64,

    /// Time `--ai` on this many sampled positions instead of playing
    /// (alternate only)
    #[arg(long)]
    pub latency: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.ai.is_empty() {
            return Err(anyhow!("ai cannot be empty"));
        }

        if self.games == 0 {
            return Err(anyhow!("games must be greater than 0"));
        }

        if self.latency.is_some() && self.game != Game::Alternate {
            return Err(anyhow!("--latency is only supported for --game alternate"));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            game: Game::Alternate,
            ai: "alpha_beta".into(),
            opponent: "random".into(),
            games: 10,
            seed: 0,
            latency: None,
            log_level: "info".into(),
        }
    }

    #[test]
    fn validate_accepts_base_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_games() {
        let mut config = base_config();
        config.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_latency_outside_alternate() {
        let mut config = base_config();
        config.game = Game::Maze;
        config.latency = Some(10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_log_level() {
        let mut config = base_config();
        config.log_level = "loud".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_cli_arguments() {
        let config = Config::parse_from([
            "labyrinth",
            "--game",
            "simultaneous",
            "--ai",
            "duct",
            "--games",
            "3",
        ]);
        assert_eq!(config.game, Game::Simultaneous);
        assert_eq!(config.ai, "duct");
        assert_eq!(config.opponent, "random");
        assert_eq!(config.games, 3);
    }
}
