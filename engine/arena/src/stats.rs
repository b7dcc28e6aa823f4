//! Aggregate statistics over repeated seeded games.
//!
//! Game `i` of a run is built from board seed `seed + i`; every AI in the
//! run draws from one `ChaCha20Rng` seeded with `seed`, so a run is fully
//! reproducible.

use std::time::{Duration, Instant};

use engine_core::random::random_alternating_action;
use engine_core::{Action, AlternatingState, LocalSearchState, SimultaneousState, SinglePlayerState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::info;

use crate::error::ArenaError;
use crate::play::{play_alternating, play_simultaneous, play_single};
use crate::registry::{AlternatingAi, LocalSearchAi, SimultaneousAi, SingleAi};

fn build<S, E, F>(make: &mut F, seed: u64) -> Result<S, ArenaError>
where
    F: FnMut(u64) -> Result<S, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    make(seed).map_err(|e| ArenaError::Setup {
        seed,
        source: e.into(),
    })
}

fn require_games(games: u32) -> Result<(), ArenaError> {
    if games == 0 {
        return Err(ArenaError::NoGames);
    }
    Ok(())
}

/// Mean final score of `ai` over `games` single-player boards.
pub fn mean_score<S, E, F>(
    ai: &SingleAi<S>,
    games: u32,
    seed: u64,
    mut make: F,
) -> Result<f64, ArenaError>
where
    S: SinglePlayerState,
    F: FnMut(u64) -> Result<S, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    require_games(games)?;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut total = 0i64;
    for i in 0..games {
        let state = build(&mut make, seed.wrapping_add(i as u64))?;
        total += play_single(state, ai, &mut rng);
    }
    let mean = total as f64 / games as f64;
    info!(games, mean, "mean score");
    Ok(mean)
}

/// Mean score of the configurations `ai` produces for `games` boards.
pub fn mean_local_search_score<S, E, F>(
    ai: &LocalSearchAi<S>,
    games: u32,
    seed: u64,
    mut make: F,
) -> Result<f64, ArenaError>
where
    S: LocalSearchState,
    F: FnMut(u64) -> Result<S, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    require_games(games)?;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut total = 0i64;
    for i in 0..games {
        let state = build(&mut make, seed.wrapping_add(i as u64))?;
        total += ai(&state, &mut rng).score();
    }
    let mean = total as f64 / games as f64;
    info!(games, mean, "mean local search score");
    Ok(mean)
}

/// Win rate of `ais[0]` against `ais[1]` in an alternating game.
///
/// Each board is played twice with the seats swapped, so `2 * games` games
/// are played in total. Draws count half.
pub fn first_player_win_rate<S, E, F>(
    ais: [&AlternatingAi<S>; 2],
    games: u32,
    seed: u64,
    mut make: F,
) -> Result<f64, ArenaError>
where
    S: AlternatingState,
    F: FnMut(u64) -> Result<S, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    require_games(games)?;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut total = 0.0;
    for i in 0..games {
        let base = build(&mut make, seed.wrapping_add(i as u64))?;
        total += play_alternating(base.clone(), ais, &mut rng);
        total += 1.0 - play_alternating(base, [ais[1], ais[0]], &mut rng);
    }
    let rate = total / (2 * games) as f64;
    info!(games, rate, "alternating win rate");
    Ok(rate)
}

/// Win rate of `ais[0]` against `ais[1]` in a simultaneous game, seats
/// swapped on every board as in [`first_player_win_rate`].
pub fn simultaneous_first_player_win_rate<S, E, F>(
    ais: [&SimultaneousAi<S>; 2],
    games: u32,
    seed: u64,
    mut make: F,
) -> Result<f64, ArenaError>
where
    S: SimultaneousState,
    F: FnMut(u64) -> Result<S, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    require_games(games)?;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut total = 0.0;
    for i in 0..games {
        let base = build(&mut make, seed.wrapping_add(i as u64))?;
        total += play_simultaneous(base.clone(), ais, &mut rng);
        total += 1.0 - play_simultaneous(base, [ais[1], ais[0]], &mut rng);
    }
    let rate = total / (2 * games) as f64;
    info!(games, rate, "simultaneous win rate");
    Ok(rate)
}

/// Wall-clock cost of a decision function over a batch of states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    pub calls: usize,
    pub total: Duration,
}

impl Latency {
    /// Mean milliseconds per call, 0.0 for an empty batch.
    pub fn mean_ms(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            self.total.as_secs_f64() * 1e3 / self.calls as f64
        }
    }
}

/// Time one call of `decide` per state.
pub fn measure_latency<S, F>(states: &[S], mut decide: F) -> Latency
where
    F: FnMut(&S) -> Option<Action>,
{
    let start = Instant::now();
    for state in states {
        std::hint::black_box(decide(state));
    }
    let latency = Latency {
        calls: states.len(),
        total: start.elapsed(),
    };
    info!(
        calls = latency.calls,
        mean_ms = latency.mean_ms(),
        "decision latency"
    );
    latency
}

/// Mid-game positions for latency measurement.
///
/// Each state starts from a fresh board and is advanced by up to
/// `max_plies` uniformly random moves, stopping early if the game ends.
pub fn sample_states<S, E, F>(
    count: usize,
    max_plies: u32,
    seed: u64,
    mut make: F,
) -> Result<Vec<S>, ArenaError>
where
    S: AlternatingState,
    F: FnMut(u64) -> Result<S, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut states = Vec::with_capacity(count);
    for _ in 0..count {
        let mut state = build(&mut make, rng.gen())?;
        let plies = rng.gen_range(0..=max_plies);
        for _ in 0..plies {
            if state.is_done() {
                break;
            }
            match random_alternating_action(&state, &mut rng) {
                Some(action) => state.advance(action),
                None => break,
            }
        }
        states.push(state);
    }
    Ok(states)
}
