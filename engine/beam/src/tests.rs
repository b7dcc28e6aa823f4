use super::*;
use engine_core::{LocalSearchState, SinglePlayerState};
use games_maze::{AutoMoveMazeState, Coord, MazeState, WallMazeState};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const CENTER: Coord = Coord::new(1, 1);

/// Left is worth more right away, but right leads to the 9 in the corner.
fn detour_board() -> MazeState<3, 3> {
    let points = [[0, 0, 0], [5, 0, 1], [0, 0, 9]];
    MazeState::from_parts(points, CENTER, 2).unwrap()
}

/// Play `choose` from `state` until the game ends.
fn play_out<S: SinglePlayerState>(mut state: S, choose: impl Fn(&S) -> Option<usize>) -> S {
    while !state.is_done() {
        match choose(&state) {
            Some(action) => state.advance(action),
            None => break,
        }
    }
    state
}

#[test]
fn test_greedy_takes_best_neighbor() {
    let points = [[0, 9, 0], [1, 0, 2], [0, 3, 0]];
    let state = MazeState::<3, 3>::from_parts(points, CENTER, 4).unwrap();
    assert_eq!(greedy_action(&state), Some(3));
}

#[test]
fn test_greedy_tie_break_is_directional() {
    // Right, left, down, up in that order.
    let points = [[0, 4, 0], [4, 0, 4], [0, 4, 0]];
    let state = MazeState::<3, 3>::from_parts(points, CENTER, 4).unwrap();
    assert_eq!(greedy_action(&state), Some(0));

    let points = [[0, 4, 0], [4, 0, 0], [0, 4, 0]];
    let state = MazeState::<3, 3>::from_parts(points, CENTER, 4).unwrap();
    assert_eq!(greedy_action(&state), Some(1));

    let points = [[0, 4, 0], [0, 0, 0], [0, 4, 0]];
    let state = MazeState::<3, 3>::from_parts(points, CENTER, 4).unwrap();
    assert_eq!(greedy_action(&state), Some(2));
}

#[test]
fn test_greedy_walk_on_small_board() {
    let points = [[2, 0, 0], [1, 0, 0], [0, 0, 0]];
    let state = MazeState::<3, 3>::from_parts(points, Coord::new(2, 0), 4).unwrap();
    // Up to 1, up to 2, then nothing left to take.
    let end = play_out(state, greedy_action);
    assert_eq!(end.game_score(), 3);
    assert_eq!(end.turn(), 4);
}

#[test]
fn test_greedy_follows_walls() {
    // Left looks closer to the reward but the wall makes it the long way.
    let points = [[5, 0, 0], [0, 0, 0], [0, 0, 0]];
    let walls = [
        [false, false, false],
        [true, true, false],
        [false, false, false],
    ];
    let state = WallMazeState::<3, 3>::from_parts(points, walls, Coord::new(2, 1), 8).unwrap();
    assert_eq!(greedy_action(&state), Some(0));
}

#[test]
fn test_greedy_without_moves() {
    let walls = [[false, true], [true, true]];
    let state = WallMazeState::<2, 2>::from_parts([[0; 2]; 2], walls, Coord::new(0, 0), 3).unwrap();
    assert_eq!(greedy_action(&state), None);
    assert_eq!(beam_search_action(&state, 2, 3), None);
    assert_eq!(chokudai_search_action(&state, 2, 3, 2), None);
}

#[test]
fn test_beam_looks_past_bait() {
    let state = detour_board();
    assert_eq!(greedy_action(&state), Some(1));
    assert_eq!(beam_search_action(&state, 1, 2), Some(1));
    assert_eq!(beam_search_action(&state, 2, 2), Some(0));
    // Stops at the end of the game regardless of depth.
    assert_eq!(beam_search_action(&state, 2, 10), Some(0));

    let best = beam_search_best(&state, 2, 2).unwrap();
    assert_eq!(best.evaluated_score, 10);
    assert!(best.state.is_done());
}

#[test]
fn test_beam_degenerate_budgets() {
    let state = detour_board();
    assert_eq!(beam_search_action(&state, 0, 2), None);
    assert_eq!(beam_search_action(&state, 2, 0), None);
}

#[test]
fn test_beam_width_never_beats_exhaustive() {
    for seed in 0..10 {
        let state = MazeState::<4, 4>::new(seed, 4).unwrap();
        let exhaustive = beam_search_best(&state, 256, 4).unwrap().evaluated_score;
        for width in [1, 2, 4, 16, 64] {
            let score = beam_search_best(&state, width, 4).unwrap().evaluated_score;
            assert!(score <= exhaustive, "seed {seed} width {width}");
        }
    }
}

#[test]
fn test_wider_beam_can_score_lower() {
    // A wider layer can push out the parent of the best line a narrower
    // layer would have kept.
    let mut drops = Vec::new();
    for seed in 0..200 {
        let state = MazeState::<5, 5>::new(seed, 6).unwrap();
        let scores: Vec<_> = (1..=12)
            .map(|width| beam_search_best(&state, width, 6).unwrap().evaluated_score)
            .collect();
        for (width, pair) in (2..).zip(scores.windows(2)) {
            if pair[1] < pair[0] {
                drops.push((seed, width));
            }
        }
    }
    assert!(!drops.is_empty());
}

#[test]
fn test_beam_is_deterministic() {
    let state = MazeState::<5, 5>::new(3, 6).unwrap();
    let first = beam_search_action(&state, 3, 4);
    for _ in 0..5 {
        assert_eq!(beam_search_action(&state, 3, 4), first);
    }
}

#[test]
fn test_beam_with_time_matches_fixed_depth_on_short_game() {
    let state = detour_board();
    assert_eq!(beam_search_action_with_time(&state, 2, 1_000), Some(0));
    assert_eq!(beam_search_action_with_time(&state, 2, 0), None);
}

#[test]
fn test_chokudai_more_sweeps_revisit_shallow_layers() {
    let state = detour_board();
    assert_eq!(chokudai_search_action(&state, 1, 2, 1), Some(1));
    assert_eq!(chokudai_search_action(&state, 1, 2, 2), Some(0));
    assert_eq!(chokudai_search_action(&state, 1, 2, 0), None);
}

#[test]
fn test_chokudai_with_time() {
    let state = detour_board();
    assert_eq!(chokudai_search_action_with_time(&state, 1, 2, 50), Some(0));
    assert_eq!(chokudai_search_action_with_time(&state, 1, 2, 0), None);
}

#[test]
fn test_searches_beat_random_walk_on_average() {
    let mut greedy_total = 0;
    let mut beam_total = 0;
    let mut chokudai_total = 0;
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let mut random_total = 0;
    for seed in 0..20 {
        let state = MazeState::<5, 5>::new(seed, 8).unwrap();
        greedy_total += play_out(state, greedy_action).game_score();
        beam_total += play_out(state, |s| beam_search_action(s, 4, 3)).game_score();
        chokudai_total += play_out(state, |s| chokudai_search_action(s, 1, 3, 4)).game_score();
        let mut random = state;
        while !random.is_done() {
            let action = engine_core::random::random_single_action(&random, &mut rng).unwrap();
            random.advance(action);
        }
        random_total += random.game_score();
    }
    assert!(greedy_total > random_total);
    assert!(beam_total > random_total);
    assert!(chokudai_total > random_total);
}

/// Initial configuration the local searches start from with `seed`.
fn initial_score(state: &AutoMoveMazeState<5, 5, 3>, seed: u64) -> i64 {
    let mut start = *state;
    start.init(&mut ChaCha20Rng::seed_from_u64(seed));
    start.score()
}

#[test]
fn test_hill_climb_never_loses_ground() {
    let state = AutoMoveMazeState::<5, 5, 3>::new(4, 10).unwrap();
    for seed in 0..5 {
        let start = initial_score(&state, seed);
        let climbed = hill_climb(&state, 200, &mut ChaCha20Rng::seed_from_u64(seed));
        assert!(climbed.score() >= start);
    }
}

#[test]
fn test_hill_climb_without_iterations_returns_start() {
    let state = AutoMoveMazeState::<5, 5, 3>::new(4, 10).unwrap();
    let mut start = state;
    start.init(&mut ChaCha20Rng::seed_from_u64(9));
    let climbed = hill_climb(&state, 0, &mut ChaCha20Rng::seed_from_u64(9));
    assert_eq!(climbed.characters(), start.characters());
}

#[test]
fn test_annealing_keeps_best_seen() {
    let state = AutoMoveMazeState::<5, 5, 3>::new(4, 10).unwrap();
    for seed in 0..5 {
        let start = initial_score(&state, seed);
        let annealed =
            simulated_annealing(&state, 500, 500.0, 10.0, &mut ChaCha20Rng::seed_from_u64(seed));
        assert!(annealed.score() >= start);
    }
}

#[test]
fn test_annealing_is_reproducible() {
    let state = AutoMoveMazeState::<5, 5, 3>::new(8, 10).unwrap();
    let a = simulated_annealing(&state, 300, 500.0, 10.0, &mut ChaCha20Rng::seed_from_u64(1));
    let b = simulated_annealing(&state, 300, 500.0, 10.0, &mut ChaCha20Rng::seed_from_u64(1));
    assert_eq!(a.characters(), b.characters());
}

#[test]
fn test_annealing_with_time() {
    let state = AutoMoveMazeState::<5, 5, 3>::new(4, 10).unwrap();
    let start = initial_score(&state, 2);
    let annealed =
        simulated_annealing_with_time(&state, 5.0, 500.0, 10.0, &mut ChaCha20Rng::seed_from_u64(2));
    assert!(annealed.score() >= start);
}
