//! Local search over complete configurations.
//!
//! Both searches start from a random configuration drawn with
//! [`LocalSearchState::init`] and probe one [`LocalSearchState::transition`]
//! per iteration.

use engine_core::{LocalSearchState, ScoreType, TimeKeeperF64};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

/// Hill climbing: keep a neighbor only if it strictly beats the current one.
///
/// `state` supplies the fixed part of the problem; its configuration is
/// replaced by `init` before the first iteration.
pub fn hill_climb<S: LocalSearchState>(state: &S, iterations: u32, rng: &mut ChaCha20Rng) -> S {
    let mut now_state = state.clone();
    now_state.init(rng);
    let mut best_score = now_state.score();

    for _ in 0..iterations {
        let mut next_state = now_state.clone();
        next_state.transition(rng);
        let next_score = next_state.score();
        if next_score > best_score {
            best_score = next_score;
            now_state = next_state;
        }
    }

    debug!(iterations, best_score, "hill climb finished");
    now_state
}

/// Metropolis acceptance: improvements always, setbacks with probability
/// `exp(delta / temp)`.
fn accepts(now_score: ScoreType, next_score: ScoreType, temp: f64, rng: &mut ChaCha20Rng) -> bool {
    if next_score > now_score {
        return true;
    }
    let probability = ((next_score - now_score) as f64 / temp).exp();
    probability > rng.gen::<f64>()
}

/// Walk state for one annealing run, remembering the best configuration seen.
struct Anneal<S> {
    now_state: S,
    now_score: ScoreType,
    best_state: S,
    best_score: ScoreType,
}

impl<S: LocalSearchState> Anneal<S> {
    fn start(state: &S, rng: &mut ChaCha20Rng) -> Self {
        let mut now_state = state.clone();
        now_state.init(rng);
        let now_score = now_state.score();
        Self {
            best_state: now_state.clone(),
            best_score: now_score,
            now_state,
            now_score,
        }
    }

    fn step(&mut self, temp: f64, rng: &mut ChaCha20Rng) {
        let mut next_state = self.now_state.clone();
        next_state.transition(rng);
        let next_score = next_state.score();
        if next_score > self.best_score {
            self.best_score = next_score;
            self.best_state = next_state.clone();
        }
        if accepts(self.now_score, next_score, temp, rng) {
            self.now_score = next_score;
            self.now_state = next_state;
        }
    }
}

fn temperature(start_temp: f64, end_temp: f64, progress: f64) -> f64 {
    start_temp + (end_temp - start_temp) * progress
}

/// Simulated annealing for a fixed number of iterations.
///
/// The temperature falls linearly from `start_temp` at the first iteration
/// toward `end_temp` at the last. Returns the best configuration ever seen,
/// which need not be the final one.
pub fn simulated_annealing<S: LocalSearchState>(
    state: &S,
    iterations: u32,
    start_temp: f64,
    end_temp: f64,
    rng: &mut ChaCha20Rng,
) -> S {
    let mut anneal = Anneal::start(state, rng);
    for i in 0..iterations {
        let temp = temperature(start_temp, end_temp, i as f64 / iterations as f64);
        anneal.step(temp, rng);
    }
    debug!(
        iterations,
        best_score = anneal.best_score,
        "simulated annealing finished"
    );
    anneal.best_state
}

/// Simulated annealing until `time_threshold_ms` elapses.
///
/// Temperature follows elapsed time instead of the iteration count. At
/// least one iteration always runs.
pub fn simulated_annealing_with_time<S: LocalSearchState>(
    state: &S,
    time_threshold_ms: f64,
    start_temp: f64,
    end_temp: f64,
    rng: &mut ChaCha20Rng,
) -> S {
    let mut keeper = TimeKeeperF64::new(time_threshold_ms);
    let mut anneal = Anneal::start(state, rng);
    let mut iterations = 0u64;
    loop {
        let progress = if time_threshold_ms > 0.0 {
            keeper.now_time() / time_threshold_ms
        } else {
            1.0
        };
        anneal.step(temperature(start_temp, end_temp, progress), rng);
        iterations += 1;
        keeper.set_now_time();
        if keeper.is_time_over() {
            break;
        }
    }
    debug!(
        iterations,
        best_score = anneal.best_score,
        "simulated annealing out of time"
    );
    anneal.best_state
}
