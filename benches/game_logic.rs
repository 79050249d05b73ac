use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minewalk::core::{Actor, Board, Game};
use minewalk::term::BoardView;

fn bench_place_hazards(c: &mut Criterion) {
    c.bench_function("place_hazards_8x8_5", |b| {
        b.iter(|| {
            let mut board = Board::with_seed(8, 8, 12345).unwrap();
            board.place_hazards(black_box(5)).unwrap();
            board
        })
    });

    c.bench_function("place_hazards_fill_16x16", |b| {
        b.iter(|| {
            let mut board = Board::with_seed(16, 16, 12345).unwrap();
            board.place_hazards(black_box(256)).unwrap();
            board
        })
    });
}

fn bench_process_command(c: &mut Criterion) {
    let board = Board::with_seed(64, 64, 12345).unwrap();
    let mut game = Game::new(board, || Actor::with_lives(u32::MAX).unwrap(), 1).unwrap();

    c.bench_function("process_command_bounce", |b| {
        b.iter(|| {
            game.process_command(black_box("right")).unwrap();
            game.process_command(black_box("left")).unwrap();
        })
    });
}

fn bench_render_board(c: &mut Criterion) {
    let game = Game::new(Board::with_seed(8, 8, 12345).unwrap(), Actor::default, 5).unwrap();
    let snap = game.snapshot();
    let view = BoardView::revealed();

    c.bench_function("render_board_8x8", |b| b.iter(|| view.render(black_box(&snap))));
}

criterion_group!(
    benches,
    bench_place_hazards,
    bench_process_command,
    bench_render_board
);
criterion_main!(benches);
