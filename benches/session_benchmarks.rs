//! Benchmarks for move validation and session throughput.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use chess_session::board::{Board, Color, Square};
use chess_session::rules::{is_legal_move, legal_moves};
use chess_session::session::{GameSession, SessionOptions};
use chess_session::wire;

fn bench_legality(c: &mut Criterion) {
    let mut group = c.benchmark_group("legality");

    let board = Board::new();
    group.bench_function("pawn_push", |b| {
        b.iter(|| is_legal_move(black_box(&board), Color::White, Square(6, 4), Square(4, 4)))
    });

    let open = Board::from_rows(&[
        "r...k..r", "........", "........", "...Q....", "........", "........", "........",
        "R...K..R",
    ])
    .expect("valid rows");
    group.bench_function("queen_long_diagonal", |b| {
        b.iter(|| is_legal_move(black_box(&open), Color::White, Square(3, 3), Square(6, 6)))
    });

    group.bench_function("legal_moves_startpos", |b| {
        b.iter(|| black_box(legal_moves(black_box(&board), Color::White)))
    });

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    // Each batch starts from a fresh session so history stays four moves long.
    group.bench_function("knight_shuffle", |b| {
        let shuffle = [
            (Color::White, Square(7, 6), Square(5, 5)),
            (Color::Black, Square(0, 6), Square(2, 5)),
            (Color::White, Square(5, 5), Square(7, 6)),
            (Color::Black, Square(2, 5), Square(0, 6)),
        ];
        b.iter_batched(
            || GameSession::new(SessionOptions::default()),
            |mut session| {
                for &(color, from, to) in &shuffle {
                    let _ = black_box(session.propose_move(color, from, to));
                }
                session
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("wire_encode_startpos", |b| {
        let session = GameSession::new(SessionOptions::default());
        b.iter(|| black_box(wire::to_json(session.state())))
    });

    group.finish();
}

criterion_group!(benches, bench_legality, bench_session);
criterion_main!(benches);
