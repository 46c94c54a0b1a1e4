//! Collision, movement and rotation tests

use flood_tetris::core::{
    all_templates, is_collided, rotate_shape, try_move, try_rotate, will_collide, Board, Piece,
};
use flood_tetris::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

const GREY: Color = Color::new(40, 40, 40);

fn spawn(index: usize) -> Piece {
    Piece::spawn(&all_templates()[index])
}

#[test]
fn test_any_cell_outside_the_board_collides() {
    let board = Board::new();
    for t in all_templates() {
        let p = Piece::spawn(t);
        let (w, h) = (p.width() as i8, p.height() as i8);

        assert!(!is_collided(&p, &board));
        assert!(is_collided(&p.shifted(-p.x - 1, 0), &board));
        assert!(is_collided(&p.shifted(BOARD_WIDTH as i8 - w - p.x + 1, 0), &board));
        assert!(is_collided(&p.shifted(0, -1), &board));
        assert!(is_collided(&p.shifted(0, BOARD_HEIGHT as i8 - h + 1), &board));
        assert!(!is_collided(&p.shifted(0, BOARD_HEIGHT as i8 - h), &board));
    }
}

#[test]
fn test_overlap_with_settled_block_collides() {
    let mut board = Board::new();
    let p = spawn(5).shifted(0, 10);
    board.set(p.x + 1, 11, Some(GREY));
    assert!(is_collided(&p, &board));
    assert!(will_collide(&p.shifted(0, -1), &board));
}

#[test]
fn test_will_collide_on_floor() {
    let board = Board::new();
    let p = spawn(5);
    assert!(!will_collide(&p, &board));
    assert!(will_collide(&p.shifted(0, 23), &board));
}

#[test]
fn test_move_stops_at_walls() {
    let board = Board::new();
    let mut p = spawn(5);

    let mut moves = 0;
    while try_move(&mut p, -1, 0, &board) {
        moves += 1;
    }
    assert_eq!(moves, 4);
    assert_eq!(p.x, 0);

    while try_move(&mut p, 1, 0, &board) {}
    assert_eq!(p.x, BOARD_WIDTH as i8 - 2);
}

#[test]
fn test_move_blocked_by_settled_cells() {
    let mut board = Board::new();
    board.set(3, 1, Some(GREY));
    let mut p = spawn(5);
    let before = p.clone();
    assert!(!try_move(&mut p, -1, 0, &board));
    assert_eq!(p, before);
}

#[test]
fn test_rotation_on_empty_board_is_cycle() {
    let board = Board::new();
    for t in all_templates() {
        let start = Piece::spawn(t).shifted(0, 8);
        let mut p = start.clone();
        for _ in 0..4 {
            assert!(rotate_shape(&mut p, &board));
        }
        assert_eq!(p, start);
    }
}

#[test]
fn test_first_succeeding_kick_wins() {
    let mut board = Board::new();
    // ####      .#
    // .#.#  ->  ##
    //           .#
    //           ##
    let p = spawn(2).shifted(0, 5);
    assert_eq!((p.x, p.y), (3, 5));
    // Blocks only the unshifted rotation; left and right kicks both fit.
    board.set(4, 5, Some(GREY));

    let left = p.rotated_cw().shifted(-1, 0);
    let right = p.rotated_cw().shifted(1, 0);
    assert!(is_collided(&p.rotated_cw(), &board));
    assert!(!is_collided(&left, &board));
    assert!(!is_collided(&right, &board));

    let (rotated, kick) = try_rotate(&p, &board).unwrap();
    assert_eq!(kick, (-1, 0));
    assert_eq!(rotated, left);
}

#[test]
fn test_right_kick_when_left_blocked() {
    let mut board = Board::new();
    let p = spawn(2).shifted(0, 5);
    board.set(4, 5, Some(GREY));
    board.set(2, 6, Some(GREY));

    let (rotated, kick) = try_rotate(&p, &board).unwrap();
    assert_eq!(kick, (1, 0));
    assert_eq!((rotated.x, rotated.y), (4, 5));
}

#[test]
fn test_upward_kick_is_last_resort() {
    let board = Board::new();
    // Horizontal bar on row 22: standing it up needs rows 22..=25, one past
    // the floor, and sideways kicks do not help.
    let p = spawn(6).rotated_cw().shifted(0, 22);
    assert_eq!((p.width(), p.height()), (4, 1));

    let (rotated, kick) = try_rotate(&p, &board).unwrap();
    assert_eq!(kick, (0, -1));
    assert_eq!((rotated.x, rotated.y), (p.x, 21));
    assert_eq!((rotated.width(), rotated.height()), (1, 4));
}

#[test]
fn test_failed_rotation_keeps_piece() {
    let mut board = Board::new();
    for y in 7..=8 {
        for x in 0..BOARD_WIDTH as i8 {
            if x != 5 {
                board.set(x, y, Some(GREY));
            }
        }
    }
    let mut p = spawn(6).shifted(0, 8);
    let before = p.clone();
    assert!(try_rotate(&p, &board).is_none());
    assert!(!rotate_shape(&mut p, &board));
    assert_eq!(p, before);
}
