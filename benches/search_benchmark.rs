use criterion::{criterion_group, criterion_main, Criterion};

use mnk::board::{Board, Coord};
use mnk::search::{alpha_beta, depth_limited, minimax, SearchContext};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("minimax empty 3x3", |b| b.iter(search_empty_3x3_minimax));
    c.bench_function("alpha beta empty 3x3", |b| {
        b.iter(search_empty_3x3_alpha_beta)
    });
    c.bench_function("alpha beta ordered empty 3x3", |b| {
        b.iter(search_empty_3x3_ordered)
    });
    c.bench_function("depth limited 5x5 depth 3", |b| {
        b.iter(search_5x5_depth_limited)
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn search_empty_3x3_minimax() {
    let board = Board::new(3, 3).unwrap();
    let result = minimax(&mut SearchContext::new(), &board);
    assert_eq!(result.value, 0);
}

fn search_empty_3x3_alpha_beta() {
    let board = Board::new(3, 3).unwrap();
    let result = alpha_beta(&mut SearchContext::new(), &board, false);
    assert_eq!(result.value, 0);
}

fn search_empty_3x3_ordered() {
    let board = Board::new(3, 3).unwrap();
    let result = alpha_beta(&mut SearchContext::new(), &board, true);
    assert_eq!(result.value, 0);
}

fn search_5x5_depth_limited() {
    let board = Board::new(5, 4).unwrap();
    let board = board.apply_move(Coord::new(2, 2)).unwrap();
    let result = depth_limited(&mut SearchContext::new(), &board, 3);
    assert!(result.best_move.is_some());
}
