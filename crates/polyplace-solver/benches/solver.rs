//! Benchmarks for technique sweeps and whole-puzzle solving.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use polyplace_core::{Digit, Geometry, Grid};
use polyplace_solver::{
    Solver,
    technique::{HiddenSingle, NakedSingle, Technique as _},
};

const EASY: &str =
    "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79";
const HARD: &str =
    "8..........36......7..9.2...5...7.......457.....1...3...1....68..85...1..9....4..";

fn naked_single_grid() -> Grid {
    let mut grid = Grid::blank(Geometry::standard());
    for digit in Digit::all(9) {
        if digit != Digit::new(1) {
            grid.remove_candidate(0, digit);
        }
    }
    grid
}

fn hidden_single_grid() -> Grid {
    let mut grid = Grid::blank(Geometry::standard());
    for index in 0..9 {
        if index != 1 {
            grid.remove_candidate(index, Digit::new(2));
        }
    }
    grid
}

fn bench_naked_single_apply(c: &mut Criterion) {
    let puzzles = [
        ("naked_single", naked_single_grid()),
        ("empty", Grid::blank(Geometry::standard())),
    ];

    let technique = NakedSingle::new();

    for (param, grid) in puzzles {
        c.bench_with_input(
            BenchmarkId::new("naked_single_apply", param),
            &grid,
            |b, grid| {
                b.iter_batched_ref(
                    || hint::black_box(grid.clone()),
                    |grid| {
                        let changed = technique.apply(grid);
                        hint::black_box(changed)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_hidden_single_apply(c: &mut Criterion) {
    let puzzles = [
        ("hidden_single", hidden_single_grid()),
        ("empty", Grid::blank(Geometry::standard())),
    ];

    let technique = HiddenSingle::new();

    for (param, grid) in puzzles {
        c.bench_with_input(
            BenchmarkId::new("hidden_single_apply", param),
            &grid,
            |b, grid| {
                b.iter_batched_ref(
                    || hint::black_box(grid.clone()),
                    |grid| {
                        let changed = technique.apply(grid);
                        hint::black_box(changed)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_solve(c: &mut Criterion) {
    let puzzles: [(&str, Grid); 3] = [
        ("easy", EASY.parse().unwrap()),
        ("hard", HARD.parse().unwrap()),
        ("blank", Grid::blank(Geometry::standard())),
    ];

    let solver = Solver::new();

    for (param, grid) in &puzzles {
        c.bench_with_input(BenchmarkId::new("solve", *param), grid, |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(grid.clone()),
                |grid| {
                    let (solved, _stats) = solver.solve(grid);
                    hint::black_box(solved)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(
    benches,
    bench_naked_single_apply,
    bench_hidden_single_apply,
    bench_solve,
);
criterion_main!(benches);
