//! Registries pre-populated from [`CentralConfig`].
//!
//! Labels ending in `_time` run against the section's `time_threshold_ms`
//! instead of a fixed budget.

use adversarial::{alpha_beta_action, iterative_deepening_action, mini_max_action};
use beam::{
    beam_search_action, beam_search_action_with_time, chokudai_search_action,
    chokudai_search_action_with_time, greedy_action, hill_climb, simulated_annealing,
    simulated_annealing_with_time,
};
use engine_config::CentralConfig;
use engine_core::random::{
    random_alternating_action, random_simultaneous_action, random_single_action,
};
use engine_core::{
    AlternatingState, LocalSearchState, Player, ScoreRateState, SimultaneousState,
    SinglePlayerState, TimeKeeper,
};
use mcts::{
    primitive_monte_carlo_action, simultaneous_mcts_action,
    simultaneous_primitive_monte_carlo_action, DuctSearch, MctsConfig, MctsSearch,
    RolloutEvaluator, ScoreRateEvaluator,
};
use rand_chacha::ChaCha20Rng;

use crate::registry::{AlternatingAi, LocalSearchAi, Registry, SimultaneousAi, SingleAi};

/// MCTS settings from the `[mcts]` section.
pub fn mcts_config(config: &CentralConfig) -> MctsConfig {
    MctsConfig::mcts()
        .with_playouts(config.mcts.playouts)
        .with_c(config.mcts.c)
        .with_expand_threshold(config.mcts.expand_threshold)
}

/// DUCT settings from the `[duct]` section.
pub fn duct_config(config: &CentralConfig) -> MctsConfig {
    MctsConfig::duct()
        .with_playouts(config.duct.playouts)
        .with_c(config.duct.c)
        .with_expand_threshold(config.duct.expand_threshold)
}

/// `random`, `greedy`, `beam`, `beam_time`, `chokudai`, `chokudai_time`.
pub fn single_player_registry<S: SinglePlayerState + 'static>(
    config: &CentralConfig,
) -> Registry<SingleAi<S>> {
    let (beam_width, beam_depth) = (config.beam.width, config.beam.depth);
    let beam_ms = config.beam.time_threshold_ms;
    let chokudai = &config.chokudai;
    let (chokudai_width, chokudai_depth) = (chokudai.width, chokudai.depth);
    let (beam_number, chokudai_ms) = (chokudai.beam_number, chokudai.time_threshold_ms);

    Registry::new()
        .with(
            "random",
            Box::new(|s: &S, rng: &mut ChaCha20Rng| random_single_action(s, rng)) as SingleAi<S>,
        )
        .with("greedy", Box::new(|s: &S, _: &mut ChaCha20Rng| greedy_action(s)))
        .with(
            "beam",
            Box::new(move |s: &S, _: &mut ChaCha20Rng| {
                beam_search_action(s, beam_width, beam_depth)
            }),
        )
        .with(
            "beam_time",
            Box::new(move |s: &S, _: &mut ChaCha20Rng| {
                beam_search_action_with_time(s, beam_width, beam_ms)
            }),
        )
        .with(
            "chokudai",
            Box::new(move |s: &S, _: &mut ChaCha20Rng| {
                chokudai_search_action(s, chokudai_width, chokudai_depth, beam_number)
            }),
        )
        .with(
            "chokudai_time",
            Box::new(move |s: &S, _: &mut ChaCha20Rng| {
                chokudai_search_action_with_time(s, chokudai_width, chokudai_depth, chokudai_ms)
            }),
        )
}

/// `random`, `minimax`, `alpha_beta`, `iterative_deepening`,
/// `primitive_monte_carlo`, `mcts`, `mcts_time`.
pub fn alternating_registry<S: AlternatingState + 'static>(
    config: &CentralConfig,
) -> Registry<AlternatingAi<S>> {
    let depth = config.adversarial.depth;
    let deepening_ms = config.adversarial.time_threshold_ms;
    let playouts = config.montecarlo.playouts;
    let search = mcts_config(config);
    let timed_search = search.clone();
    let mcts_ms = config.mcts.time_threshold_ms;

    Registry::new()
        .with(
            "random",
            Box::new(|s: &S, rng: &mut ChaCha20Rng| random_alternating_action(s, rng))
                as AlternatingAi<S>,
        )
        .with(
            "minimax",
            Box::new(move |s: &S, _: &mut ChaCha20Rng| mini_max_action(s, depth)),
        )
        .with(
            "alpha_beta",
            Box::new(move |s: &S, _: &mut ChaCha20Rng| alpha_beta_action(s, depth)),
        )
        .with(
            "iterative_deepening",
            Box::new(move |s: &S, _: &mut ChaCha20Rng| {
                iterative_deepening_action(s, deepening_ms)
            }),
        )
        .with(
            "primitive_monte_carlo",
            Box::new(move |s: &S, rng: &mut ChaCha20Rng| {
                primitive_monte_carlo_action(s, playouts, rng)
            }),
        )
        .with(
            "mcts",
            Box::new(move |s: &S, rng: &mut ChaCha20Rng| {
                MctsSearch::new(s.clone(), RolloutEvaluator::new(rng), search.clone())
                    .run()
                    .action
            }),
        )
        .with(
            "mcts_time",
            Box::new(move |s: &S, rng: &mut ChaCha20Rng| {
                let keeper = TimeKeeper::new(mcts_ms);
                MctsSearch::new(s.clone(), RolloutEvaluator::new(rng), timed_search.clone())
                    .run_until(&keeper)
                    .action
            }),
        )
}

/// Everything in [`alternating_registry`] plus `thunder` and `thunder_time`.
pub fn score_rate_registry<S: ScoreRateState + 'static>(
    config: &CentralConfig,
) -> Registry<AlternatingAi<S>> {
    let thunder = MctsConfig::thunder().with_playouts(config.thunder.playouts);
    let timed_thunder = thunder.clone();
    let thunder_ms = config.thunder.time_threshold_ms;

    alternating_registry(config)
        .with(
            "thunder",
            Box::new(move |s: &S, _: &mut ChaCha20Rng| {
                MctsSearch::new(s.clone(), ScoreRateEvaluator, thunder.clone())
                    .run()
                    .action
            }),
        )
        .with(
            "thunder_time",
            Box::new(move |s: &S, _: &mut ChaCha20Rng| {
                let keeper = TimeKeeper::new(thunder_ms);
                MctsSearch::new(s.clone(), ScoreRateEvaluator, timed_thunder.clone())
                    .run_until(&keeper)
                    .action
            }),
        )
}

/// `random`, `primitive_monte_carlo`, `mcts`, `duct`, `duct_time`.
///
/// `primitive_monte_carlo` spends the configured playouts on each action.
pub fn simultaneous_registry<S: SimultaneousState + 'static>(
    config: &CentralConfig,
) -> Registry<SimultaneousAi<S>> {
    let playouts = config.montecarlo.playouts;
    let mcts_playouts = config.mcts.playouts;
    let duct = duct_config(config);
    let timed_duct = duct.clone();
    let duct_ms = config.duct.time_threshold_ms;

    Registry::new()
        .with(
            "random",
            Box::new(|s: &S, player: Player, rng: &mut ChaCha20Rng| {
                random_simultaneous_action(s, player, rng)
            }) as SimultaneousAi<S>,
        )
        .with(
            "primitive_monte_carlo",
            Box::new(move |s: &S, player: Player, rng: &mut ChaCha20Rng| {
                simultaneous_primitive_monte_carlo_action(s, player, playouts, rng)
            }),
        )
        .with(
            "mcts",
            Box::new(move |s: &S, player: Player, rng: &mut ChaCha20Rng| {
                simultaneous_mcts_action(s, player, mcts_playouts, rng)
            }),
        )
        .with(
            "duct",
            Box::new(move |s: &S, player: Player, rng: &mut ChaCha20Rng| {
                DuctSearch::new(s.clone(), player, duct.clone(), rng)
                    .run()
                    .action
            }),
        )
        .with(
            "duct_time",
            Box::new(move |s: &S, player: Player, rng: &mut ChaCha20Rng| {
                let keeper = TimeKeeper::new(duct_ms);
                DuctSearch::new(s.clone(), player, timed_duct.clone(), rng)
                    .run_until(&keeper)
                    .action
            }),
        )
}

/// `hill_climb`, `simulated_annealing`, `simulated_annealing_time`.
pub fn local_search_registry<S: LocalSearchState + 'static>(
    config: &CentralConfig,
) -> Registry<LocalSearchAi<S>> {
    let iterations = config.annealing.iterations;
    let (start, end) = (config.annealing.start_temp, config.annealing.end_temp);
    let ms = config.annealing.time_threshold_ms as f64;

    Registry::new()
        .with(
            "hill_climb",
            Box::new(move |s: &S, rng: &mut ChaCha20Rng| hill_climb(s, iterations, rng))
                as LocalSearchAi<S>,
        )
        .with(
            "simulated_annealing",
            Box::new(move |s: &S, rng: &mut ChaCha20Rng| {
                simulated_annealing(s, iterations, start, end, rng)
            }),
        )
        .with(
            "simulated_annealing_time",
            Box::new(move |s: &S, rng: &mut ChaCha20Rng| {
                simulated_annealing_with_time(s, ms, start, end, rng)
            }),
        )
}
