use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{collides, template, Board, Piece, Session};
use blockfall::types::{Command, ShapeId};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(12345);

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16));
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut board = Board::new();
    for x in 0..10 {
        board.set(x, 19, Some(ShapeId::J));
    }
    let matrix = template(ShapeId::T);

    c.bench_function("collides_mid_board", |b| {
        b.iter(|| collides(&board, black_box(&matrix), 4, 10))
    });
}

fn bench_rotation(c: &mut Criterion) {
    let matrix = template(ShapeId::I);

    c.bench_function("rotate_cw", |b| b.iter(|| black_box(&matrix).rotated_cw()));
}

fn bench_lock_and_clear(c: &mut Criterion) {
    c.bench_function("lock_with_quad_clear", |b| {
        b.iter(|| {
            let mut session = Session::new(1);
            for y in 16..20 {
                for x in 0..10 {
                    session.board_mut().set(x, y, Some(ShapeId::Z));
                }
            }
            session.set_active(Piece {
                x: 0,
                y: 14,
                ..Piece::new(ShapeId::O)
            });
            session.apply(Command::SoftDrop);
            black_box(session.score())
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = Session::new(12345);
    let mut snapshot = session.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(black_box(&mut snapshot));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_collides,
    bench_rotation,
    bench_lock_and_clear,
    bench_snapshot
);
criterion_main!(benches);
