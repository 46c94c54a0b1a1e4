use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flood_tetris::core::{
    all_templates, clear_region, try_move, try_rotate, Board, GameState, Piece,
};
use flood_tetris::types::{BOARD_HEIGHT, BOARD_WIDTH};

fn bench_step(c: &mut Criterion) {
    c.bench_function("game_step", |b| {
        let mut state = GameState::new(12345);
        b.iter(|| {
            if state.lost() {
                state.restart();
            }
            black_box(state.step());
        })
    });
}

fn bench_region_clear(c: &mut Criterion) {
    let template = &all_templates()[5];
    // Fill the whole board with the piece's color so the fill visits every cell.
    let mut full = Board::new();
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            full.set(x, y, Some(template.color));
        }
    }
    let mut piece = Piece::spawn(template);
    piece.y = 23;

    c.bench_function("clear_region_full_board", |b| {
        b.iter(|| {
            let mut board = full.clone();
            black_box(clear_region(&mut board, black_box(&piece)));
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let board = Board::new();
    let start = Piece::spawn(&all_templates()[11]).shifted(0, 10);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            let mut p = start.clone();
            black_box(try_move(&mut p, black_box(1), 0, &board));
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut near_wall = Piece::spawn(&all_templates()[6]).shifted(0, 10);
    near_wall.x = 7;

    c.bench_function("try_rotate_with_kick", |b| {
        b.iter(|| black_box(try_rotate(black_box(&near_wall), &board)))
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_region_clear,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
