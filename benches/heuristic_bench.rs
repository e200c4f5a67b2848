use criterion::{black_box, criterion_group, criterion_main, Criterion};

use slide_puzzle_heuristic::config::SolverConfig;
use slide_puzzle_heuristic::heuristic::{linear_conflicts, manhattan_sum};
use slide_puzzle_heuristic::solver::solve;
use slide_puzzle_heuristic::{Board, Direction, Heuristic, ManhattanLinearConflict, StateArena};

// scrambled 15-puzzle
const FIFTEEN: &str = "4,4,4170e859cd32ab_6";

fn bench_root_evaluate(c: &mut Criterion) {
    let board: Board = FIFTEEN.parse().unwrap();
    let mut arena = StateArena::new();
    let root = arena.new_root(board);
    let heuristic = ManhattanLinearConflict;

    c.bench_function("evaluate_root_4x4", |b| {
        b.iter(|| heuristic.evaluate(black_box(arena.view(root).unwrap())))
    });
}

fn bench_incremental_evaluate(c: &mut Criterion) {
    let board: Board = FIFTEEN.parse().unwrap();
    let dir = board.legal_moves()[0];
    let mut arena = StateArena::new();
    let root = arena.new_root(board);
    let heuristic = ManhattanLinearConflict;
    arena.score(root, &heuristic).unwrap();
    let child = arena.spawn(root, dir).unwrap();

    c.bench_function("evaluate_child_4x4", |b| {
        b.iter(|| heuristic.evaluate(black_box(arena.view(child).unwrap())))
    });
}

fn bench_full_terms(c: &mut Criterion) {
    let board: Board = FIFTEEN.parse().unwrap();

    c.bench_function("manhattan_sum_4x4", |b| b.iter(|| manhattan_sum(black_box(&board))));
    c.bench_function("linear_conflicts_4x4", |b| b.iter(|| linear_conflicts(black_box(&board))));
}

fn bench_solve_8_puzzle(c: &mut Criterion) {
    let mut board = Board::goal(3).unwrap();
    for dir in [Direction::UP, Direction::LEFT, Direction::UP, Direction::LEFT, Direction::DOWN, Direction::RIGHT, Direction::DOWN, Direction::LEFT] {
        board.move_space(dir).unwrap();
    }
    let config = SolverConfig::default();

    c.bench_function("solve_3x3", |b| {
        b.iter(|| solve(black_box(&board), &ManhattanLinearConflict, &config))
    });
}

criterion_group!(
    benches,
    bench_root_evaluate,
    bench_incremental_evaluate,
    bench_full_terms,
    bench_solve_8_puzzle
);
criterion_main!(benches);
