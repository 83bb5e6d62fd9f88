use criterion::{Criterion, criterion_group, criterion_main};
use eight_puzzle::puzzle::astar::AStar;
use eight_puzzle::puzzle::board::Board;
use eight_puzzle::puzzle::config::PuzzleConfig;
use eight_puzzle::puzzle::heuristic::manhattan_distance;
use eight_puzzle::puzzle::moves::successors;
use itertools::Itertools;
use std::hint::black_box;

fn scrambled_boards(count: usize, moves: usize, seed: u64) -> Vec<Board> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| Board::scrambled(moves, &mut rng))
        .collect_vec()
}

fn bench_fixed_instance(c: &mut Criterion) {
    c.bench_function("astar - fixed instance", |b| {
        b.iter(|| {
            let mut solver = AStar::new(PuzzleConfig::default());
            black_box(solver.solve());
        });
    });
}

fn bench_scrambled(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar - scrambled");

    for moves in [10, 20, 40] {
        let boards = scrambled_boards(16, moves, 0x5eed);
        group.bench_function(format!("{moves} moves"), |b| {
            b.iter(|| {
                for board in &boards {
                    let mut solver = AStar::new(PuzzleConfig::new(*board));
                    black_box(solver.solve());
                }
            });
        });
    }

    group.finish();
}

fn bench_exhaustion(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar - exhaustion");
    group.sample_size(10);

    let swapped = Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]).expect("valid board");
    group.bench_function("odd parity", |b| {
        b.iter(|| {
            let mut solver = AStar::new(PuzzleConfig::new(swapped));
            black_box(solver.solve());
        });
    });

    group.finish();
}

fn bench_primitives(c: &mut Criterion) {
    let boards = scrambled_boards(256, 30, 42);

    c.bench_function("heuristic - manhattan", |b| {
        b.iter(|| {
            for board in &boards {
                black_box(manhattan_distance(black_box(board)));
            }
        });
    });

    c.bench_function("moves - successors", |b| {
        b.iter(|| {
            for board in &boards {
                black_box(successors(black_box(board)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_fixed_instance,
    bench_scrambled,
    bench_exhaustion,
    bench_primitives
);
criterion_main!(benches);
