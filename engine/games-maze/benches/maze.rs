use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use engine_core::{AlternatingState, LocalSearchState, SimultaneousState, SinglePlayerState};
use games_maze::{AlternateMazeState, AutoMoveMazeState, MazeState, SimultaneousMazeState};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("maze_generate");
    group.bench_function("maze_30x30", |b| {
        b.iter_batched(
            || 42u64,
            |seed| MazeState::<30, 30>::new(seed, 100).unwrap(),
            BatchSize::SmallInput,
        );
    });
    group.bench_function("simultaneous_5x5", |b| {
        b.iter_batched(
            || 42u64,
            |seed| SimultaneousMazeState::<5, 5>::new(seed, 20).unwrap(),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_clone_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("maze_clone_advance");

    group.bench_function("single", |b| {
        let base = MazeState::<30, 30>::new(7, 100).unwrap();
        let action = base.legal_actions()[0];
        b.iter_batched(
            || base,
            |mut state| {
                state.advance(action);
                state
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("alternate", |b| {
        let base = AlternateMazeState::<5, 5>::new(7, 20).unwrap();
        let action = base.legal_actions()[0];
        b.iter_batched(
            || base,
            |mut state| {
                state.advance(action);
                state
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("simultaneous", |b| {
        let base = SimultaneousMazeState::<5, 5>::new(7, 20).unwrap();
        b.iter_batched(
            || base,
            |mut state| {
                state.advance(0, 1);
                state
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_auto_move_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_move_score");
    group.bench_function("5x5_3_characters", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut state = AutoMoveMazeState::<5, 5, 3>::new(0, 5).unwrap();
        state.init(&mut rng);
        b.iter(|| state.score());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_generate,
    bench_clone_advance,
    bench_auto_move_score
);
criterion_main!(benches);
