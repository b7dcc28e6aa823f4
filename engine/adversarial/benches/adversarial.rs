//! Adversarial search benchmarks.
//!
//! Run with: `cargo bench -p adversarial`
//!
//! Compares exhaustive minimax against alpha-beta on the same positions to
//! show how much work pruning saves as depth grows.

use adversarial::{alpha_beta_action, iterative_deepening_action, mini_max_action};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use games_maze::AlternateMazeState;

fn bench_minimax_vs_alpha_beta(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_vs_alpha_beta");
    let state = AlternateMazeState::<5, 5>::new(42, 20).unwrap();

    for depth in [2u32, 4, 6] {
        group.bench_with_input(BenchmarkId::new("minimax", depth), &depth, |b, &depth| {
            b.iter(|| black_box(mini_max_action(&state, depth)));
        });
        group.bench_with_input(BenchmarkId::new("alpha_beta", depth), &depth, |b, &depth| {
            b.iter(|| black_box(alpha_beta_action(&state, depth)));
        });
    }

    group.finish();
}

fn bench_iterative_deepening(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterative_deepening");
    group.sample_size(20);
    let state = AlternateMazeState::<5, 5>::new(42, 20).unwrap();

    for ms in [1u64, 5] {
        group.bench_with_input(BenchmarkId::new("time_ms", ms), &ms, |b, &ms| {
            b.iter(|| black_box(iterative_deepening_action(&state, ms)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_minimax_vs_alpha_beta, bench_iterative_deepening);
criterion_main!(benches);
