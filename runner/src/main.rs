//! Labyrinth - seeded match runner for the search engines
//!
//! Builds the preset registries from the central config, plays the chosen
//! AI against an opponent (or alone, for single-player boards) and prints
//! the aggregate result.

use anyhow::Result;
use clap::Parser;
use games_maze::{AlternateMazeState, AutoMoveMazeState, MazeState, SimultaneousMazeState};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::info;

mod config;

use crate::config::{Config, Game, CENTRAL_CONFIG};

type Maze = MazeState<30, 30>;
type Alternate = AlternateMazeState<5, 5>;
type Simultaneous = SimultaneousMazeState<5, 5>;
type Placement = AutoMoveMazeState<5, 5, 3>;

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let central = &*CENTRAL_CONFIG;
    let (games, seed) = (config.games, config.seed);

    match config.game {
        Game::Maze => {
            let registry = arena::presets::single_player_registry::<Maze>(central);
            let mean = arena::mean_score(registry.get(&config.ai)?, games, seed, |s| {
                Maze::new(s, 100)
            })?;
            println!("{} mean score over {} boards: {:.2}", config.ai, games, mean);
        }
        Game::Alternate => {
            let registry = arena::presets::score_rate_registry::<Alternate>(central);
            let ai = registry.get(&config.ai)?;
            if let Some(count) = config.latency {
                let states = arena::sample_states(count, 10, seed, |s| Alternate::new(s, 10))?;
                let mut rng = ChaCha20Rng::seed_from_u64(seed);
                let latency = arena::measure_latency(&states, |state| ai(state, &mut rng));
                println!(
                    "{} mean latency over {} positions: {:.3} ms",
                    config.ai,
                    latency.calls,
                    latency.mean_ms()
                );
                return Ok(());
            }
            let ais = [ai, registry.get(&config.opponent)?];
            let rate = arena::first_player_win_rate(ais, games, seed, |s| Alternate::new(s, 10))?;
            println!(
                "{} vs {} win rate over {} games: {:.3}",
                config.ai,
                config.opponent,
                2 * games,
                rate
            );
        }
        Game::Simultaneous => {
            let registry = arena::presets::simultaneous_registry::<Simultaneous>(central);
            let ais = [registry.get(&config.ai)?, registry.get(&config.opponent)?];
            let rate = arena::simultaneous_first_player_win_rate(ais, games, seed, |s| {
                Simultaneous::new(s, 20)
            })?;
            println!(
                "{} vs {} win rate over {} games: {:.3}",
                config.ai,
                config.opponent,
                2 * games,
                rate
            );
        }
        Game::Placement => {
            let registry = arena::presets::local_search_registry::<Placement>(central);
            let mean = arena::mean_local_search_score(registry.get(&config.ai)?, games, seed, |s| {
                Placement::new(s, 5)
            })?;
            println!("{} mean score over {} boards: {:.2}", config.ai, games, mean);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;

    init_tracing(&config.log_level)?;
    info!(
        game = ?config.game,
        ai = %config.ai,
        games = config.games,
        seed = config.seed,
        "Starting match runner"
    );

    run(&config)
}
