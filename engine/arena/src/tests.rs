use std::time::Duration;

use engine_config::CentralConfig;
use engine_core::{AlternatingState, LocalSearchState, SinglePlayerState};
use games_maze::{AlternateMazeState, AutoMoveMazeState, MazeState, SimultaneousMazeState};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::*;

type Maze = MazeState<5, 5>;
type Alternate = AlternateMazeState<3, 3>;
type Simultaneous = SimultaneousMazeState<5, 5>;
type Placement = AutoMoveMazeState<5, 5, 3>;

fn small_config() -> CentralConfig {
    let mut config = CentralConfig::default();
    config.montecarlo.playouts = 100;
    config.mcts.playouts = 200;
    config.duct.playouts = 300;
    config.thunder.playouts = 200;
    config.annealing.iterations = 200;
    config
}

#[test]
fn test_preset_labels() {
    let config = small_config();
    assert_eq!(
        presets::single_player_registry::<Maze>(&config).names(),
        vec!["random", "greedy", "beam", "beam_time", "chokudai", "chokudai_time"]
    );
    assert_eq!(
        presets::score_rate_registry::<Alternate>(&config).names(),
        vec![
            "random",
            "minimax",
            "alpha_beta",
            "iterative_deepening",
            "primitive_monte_carlo",
            "mcts",
            "mcts_time",
            "thunder",
            "thunder_time",
        ]
    );
    assert_eq!(
        presets::simultaneous_registry::<Simultaneous>(&config).names(),
        vec!["random", "primitive_monte_carlo", "mcts", "duct", "duct_time"]
    );
    assert_eq!(
        presets::local_search_registry::<Placement>(&config).names(),
        vec!["hill_climb", "simulated_annealing", "simulated_annealing_time"]
    );
}

#[test]
fn test_unknown_preset_label() {
    let registry = presets::alternating_registry::<Alternate>(&small_config());
    assert!(matches!(
        registry.get("thunder"),
        Err(ArenaError::UnknownAi(name)) if name == "thunder"
    ));
}

#[test]
fn test_preset_configs_follow_sections() {
    let mut config = CentralConfig::default();
    config.mcts.c = 2.5;
    config.duct.expand_threshold = 0;

    let mcts = presets::mcts_config(&config);
    assert!((mcts.exploration() - 2.5).abs() < 1e-12);
    assert_eq!(mcts.playouts, 3000);

    let duct = presets::duct_config(&config);
    assert_eq!(duct.expand_threshold, 1);
    assert_eq!(duct.playouts, 1000);
}

#[test]
fn test_beam_preset_matches_direct_call() {
    let config = small_config();
    let registry = presets::single_player_registry::<Maze>(&config);
    let beam_ai = registry.get("beam").unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    for seed in 0..5 {
        let state = Maze::new(seed, 10).unwrap();
        assert_eq!(
            beam_ai(&state, &mut rng),
            beam::beam_search_action(&state, config.beam.width, config.beam.depth)
        );
    }
}

#[test]
fn test_play_single_runs_to_end() {
    let registry = presets::single_player_registry::<Maze>(&small_config());
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    let state = Maze::new(3, 10).unwrap();

    let score = play_single(state, registry.get("greedy").unwrap(), &mut rng);
    let mut replay = state;
    while !replay.is_done() {
        replay.advance(beam::greedy_action(&replay).unwrap());
    }
    assert_eq!(score, replay.game_score());
}

#[test]
fn test_greedy_mean_score_beats_random() {
    let registry = presets::single_player_registry::<Maze>(&small_config());
    let new_state = |seed| Maze::new(seed, 10);

    let greedy = mean_score(registry.get("greedy").unwrap(), 30, 0, new_state).unwrap();
    let random = mean_score(registry.get("random").unwrap(), 30, 0, new_state).unwrap();
    assert!(greedy > random, "greedy {greedy} vs random {random}");
}

#[test]
fn test_zero_games_is_an_error() {
    let registry = presets::single_player_registry::<Maze>(&small_config());
    let result = mean_score(registry.get("greedy").unwrap(), 0, 0, |seed| Maze::new(seed, 10));
    assert!(matches!(result, Err(ArenaError::NoGames)));

    let registry = presets::alternating_registry::<Alternate>(&small_config());
    let ais = [
        registry.get("random").unwrap(),
        registry.get("random").unwrap(),
    ];
    let result = first_player_win_rate(ais, 0, 0, |seed| Alternate::new(seed, 4));
    assert!(matches!(result, Err(ArenaError::NoGames)));
}

#[test]
fn test_board_errors_are_reported_with_seed() {
    let registry = presets::alternating_registry::<AlternateMazeState<3, 2>>(&small_config());
    let ais = [
        registry.get("random").unwrap(),
        registry.get("random").unwrap(),
    ];
    let result = first_player_win_rate(ais, 3, 7, |seed| AlternateMazeState::<3, 2>::new(seed, 4));
    match result {
        Err(ArenaError::Setup { seed, .. }) => assert_eq!(seed, 7),
        other => panic!("expected Setup error, got {other:?}"),
    }
}

#[test]
fn test_silent_ai_is_overruled_with_first_legal_action() {
    let silent: AlternatingAi<Alternate> = Box::new(|_: &Alternate, _: &mut ChaCha20Rng| None);
    let first: AlternatingAi<Alternate> =
        Box::new(|s: &Alternate, _: &mut ChaCha20Rng| s.legal_actions().first().copied());
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    for seed in 0..5 {
        let state = Alternate::new(seed, 4).unwrap();
        let overruled = play_alternating(state, [&silent, &silent], &mut rng);
        let explicit = play_alternating(state, [&first, &first], &mut rng);
        assert_eq!(overruled, explicit);
    }
}

#[test]
fn test_minimax_beats_random() {
    let registry = presets::alternating_registry::<Alternate>(&small_config());
    let ais = [
        registry.get("minimax").unwrap(),
        registry.get("random").unwrap(),
    ];
    let rate = first_player_win_rate(ais, 100, 0, |seed| Alternate::new(seed, 4)).unwrap();
    assert!(rate > 0.5, "minimax win rate {rate}");
}

#[test]
fn test_win_rate_against_itself_is_symmetric() {
    let registry = presets::alternating_registry::<Alternate>(&small_config());
    let ai = registry.get("alpha_beta").unwrap();
    let rate = first_player_win_rate([ai, ai], 10, 0, |seed| Alternate::new(seed, 4)).unwrap();
    assert!((rate - 0.5).abs() < 1e-12);
}

#[test]
fn test_thunder_preset_plays_full_games() {
    let registry = presets::score_rate_registry::<Alternate>(&small_config());
    let ais = [
        registry.get("thunder").unwrap(),
        registry.get("random").unwrap(),
    ];
    let rate = first_player_win_rate(ais, 10, 0, |seed| Alternate::new(seed, 4)).unwrap();
    assert!((0.0..=1.0).contains(&rate));
}

#[test]
fn test_duct_preset_beats_random() {
    let registry = presets::simultaneous_registry::<Simultaneous>(&small_config());
    let ais = [
        registry.get("duct").unwrap(),
        registry.get("random").unwrap(),
    ];
    let rate =
        simultaneous_first_player_win_rate(ais, 10, 0, |seed| Simultaneous::new(seed, 10)).unwrap();
    assert!(rate > 0.5, "duct win rate {rate}");
}

#[test]
fn test_play_simultaneous_is_reproducible() {
    let registry = presets::simultaneous_registry::<Simultaneous>(&small_config());
    let ais = [
        registry.get("primitive_monte_carlo").unwrap(),
        registry.get("random").unwrap(),
    ];
    let state = Simultaneous::new(5, 10).unwrap();

    let first = play_simultaneous(state, ais, &mut ChaCha20Rng::seed_from_u64(3));
    let second = play_simultaneous(state, ais, &mut ChaCha20Rng::seed_from_u64(3));
    assert_eq!(first, second);
    assert!([0.0, 0.5, 1.0].contains(&first));
}

#[test]
fn test_hill_climb_beats_random_placement() {
    let registry = presets::local_search_registry::<Placement>(&small_config());
    let random_placement: LocalSearchAi<Placement> =
        Box::new(|s: &Placement, rng: &mut ChaCha20Rng| {
            let mut placed = *s;
            placed.init(rng);
            placed
        });
    let new_state = |seed| Placement::new(seed, 10);

    let climbed =
        mean_local_search_score(registry.get("hill_climb").unwrap(), 20, 0, new_state).unwrap();
    let random = mean_local_search_score(&random_placement, 20, 0, new_state).unwrap();
    assert!(climbed >= random, "hill climb {climbed} vs random {random}");
}

#[test]
fn test_sample_states() {
    let new_state = |seed| Alternate::new(seed, 4);

    let fresh = sample_states(5, 0, 1, new_state).unwrap();
    assert_eq!(fresh.len(), 5);
    assert!(fresh.iter().all(|s| !s.is_done()));

    let a = sample_states(8, 4, 1, new_state).unwrap();
    let b = sample_states(8, 4, 1, new_state).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_measure_latency() {
    let states = sample_states(6, 2, 0, |seed| Alternate::new(seed, 4)).unwrap();
    let mut calls = 0;
    let latency = measure_latency(&states, |s| {
        calls += 1;
        adversarial::alpha_beta_action(s, 2)
    });
    assert_eq!(latency.calls, 6);
    assert_eq!(calls, 6);
    assert!(latency.mean_ms() >= 0.0);

    let latency = measure_latency(&states, |s| {
        std::thread::sleep(Duration::from_millis(2));
        s.legal_actions().first().copied()
    });
    assert!(latency.total >= Duration::from_millis(12));
    assert!(latency.mean_ms() >= 2.0);

    let empty: Vec<Alternate> = Vec::new();
    let latency = measure_latency(&empty, |_| None);
    assert_eq!(latency.calls, 0);
    assert_eq!(latency.mean_ms(), 0.0);
}
