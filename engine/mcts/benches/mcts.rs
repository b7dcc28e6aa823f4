//! Monte Carlo search benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p mcts`
//!
//! These benchmarks measure:
//! - MCTS against Thunder at equal simulation counts
//! - Tree operations (expansion, selection, backpropagation)
//! - Random playout throughput
//! - DUCT against primitive Monte Carlo on a simultaneous game

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use engine_core::Player;
use games_maze::{AlternateMazeState, SimultaneousMazeState};
use mcts::{
    duct_action, mcts_action, playout, simultaneous_primitive_monte_carlo_action, thunder_action,
    MctsTree, Selection,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// =============================================================================
// Full Search Benchmarks
// =============================================================================

fn bench_mcts_vs_thunder(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_vs_thunder");
    let state = AlternateMazeState::<5, 5>::new(42, 20).unwrap();

    for playouts in [100u32, 1000] {
        group.throughput(Throughput::Elements(playouts as u64));
        group.bench_with_input(BenchmarkId::new("mcts", playouts), &playouts, |b, &playouts| {
            let mut rng = ChaCha20Rng::seed_from_u64(0);
            b.iter(|| black_box(mcts_action(&state, playouts, &mut rng)));
        });
        group.bench_with_input(
            BenchmarkId::new("thunder", playouts),
            &playouts,
            |b, &playouts| {
                b.iter(|| black_box(thunder_action(&state, playouts)));
            },
        );
    }

    group.finish();
}

fn bench_simultaneous(c: &mut Criterion) {
    let mut group = c.benchmark_group("simultaneous");
    group.sample_size(20);
    let state = SimultaneousMazeState::<5, 5>::new(42, 20).unwrap();

    group.bench_function("duct_1000", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        b.iter(|| black_box(duct_action(&state, Player::First, 1000, &mut rng)));
    });
    group.bench_function("primitive_monte_carlo_250x4", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        b.iter(|| {
            black_box(simultaneous_primitive_monte_carlo_action(
                &state,
                Player::First,
                250,
                &mut rng,
            ))
        });
    });

    group.finish();
}

// =============================================================================
// Component Benchmarks
// =============================================================================

fn bench_playout(c: &mut Criterion) {
    let state = AlternateMazeState::<5, 5>::new(42, 20).unwrap();
    c.bench_function("playout_5x5_20_plies", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        b.iter(|| black_box(playout(state, &mut rng)));
    });
}

fn bench_tree_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_operations");
    let state = AlternateMazeState::<5, 5>::new(42, 20).unwrap();

    group.bench_function("expand_root", |b| {
        b.iter(|| {
            let mut tree = MctsTree::new(state);
            black_box(tree.expand(tree.root()))
        });
    });

    let mut tree = MctsTree::new(state);
    tree.expand(tree.root());
    let children: Vec<_> = tree.get(tree.root()).children.clone();
    for (i, &(_, id)) in children.iter().enumerate() {
        for _ in 0..=i {
            tree.backpropagate(id, 0.5);
        }
    }

    group.bench_function("select_child_ucb1", |b| {
        b.iter(|| black_box(tree.select_child(tree.root(), Selection::Ucb1 { c: 1.0 })));
    });
    group.bench_function("best_action", |b| {
        b.iter(|| black_box(tree.best_action()));
    });
    group.bench_function("backpropagate", |b| {
        let mut tree = MctsTree::new(state);
        tree.expand(tree.root());
        let leaf = tree.get(tree.root()).children[0].1;
        b.iter(|| tree.backpropagate(black_box(leaf), 1.0));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_mcts_vs_thunder,
    bench_simultaneous,
    bench_playout,
    bench_tree_operations
);
criterion_main!(benches);
