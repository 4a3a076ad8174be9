//! Engine benchmarks.
//!
//! Criterion benchmarks for the hot paths a UI hits on every click.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use peg_triangle::{legal_paths, sources_with_moves, Board, Game, GameState, Pos};

fn bench_legal_paths(c: &mut Criterion) {
    let board = Board::start();

    c.bench_function("legal_paths_start_board", |b| {
        b.iter(|| black_box(legal_paths(black_box(&board))))
    });
}

fn bench_sources_with_moves(c: &mut Criterion) {
    let board = Board::start();

    c.bench_function("sources_with_moves_start_board", |b| {
        b.iter(|| black_box(sources_with_moves(black_box(&board))))
    });
}

fn bench_activate_opening(c: &mut Criterion) {
    let state = GameState::new_game();

    c.bench_function("activate_opening_jump", |b| {
        b.iter(|| black_box(state.activate(black_box(Pos::new(3)))))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("full_game_first_option_policy", |b| {
        b.iter(|| {
            let mut game = Game::new();
            while !game.state().is_done() {
                let at = match game.state() {
                    GameState::Idle { pick_options, .. } => pick_options[0],
                    GameState::Picked { move_options, .. } => move_options[0],
                    GameState::Done { .. } => break,
                };
                game.activate(at).expect("option sets are always valid");
            }
            black_box(game.state().remaining())
        })
    });
}

criterion_group!(
    benches,
    bench_legal_paths,
    bench_sources_with_moves,
    bench_activate_opening,
    bench_full_game,
);
criterion_main!(benches);
