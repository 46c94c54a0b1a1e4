//! Region clear tests

use flood_tetris::core::{all_templates, clear_region, Board, Piece, RegionClear};
use flood_tetris::types::Color;

const OTHER: Color = Color::new(1, 1, 1);

/// Settle `piece` into `board` and run the region clear, as the game does.
fn settle(board: &mut Board, piece: &Piece) -> RegionClear {
    board.settle(piece);
    clear_region(board, piece)
}

fn block_at(x: i8, y: i8) -> Piece {
    // ##
    // ##
    let mut p = Piece::spawn(&all_templates()[5]);
    p.x = x;
    p.y = y;
    p
}

#[test]
fn test_lone_piece_is_kept() {
    let mut board = Board::new();
    let p = block_at(0, 23);
    let r = settle(&mut board, &p);
    assert_eq!(
        r,
        RegionClear {
            region_size: 4,
            shape_blocks: 4,
            cleared: false
        }
    );
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_two_touching_same_color_pieces_clear() {
    let mut board = Board::new();
    settle(&mut board, &block_at(0, 23));
    let r = settle(&mut board, &block_at(2, 23));

    assert_eq!(r.region_size, 8);
    assert!(r.cleared);
    assert!(board.is_empty());
}

#[test]
fn test_union_reaches_through_existing_blocks() {
    let mut board = Board::new();
    let color = all_templates()[5].color;
    // A same-colored trail leading away from where the piece lands.
    for y in 10..=24 {
        board.set(9, y, Some(color));
    }
    board.set(5, 5, Some(color));

    let r = settle(&mut board, &block_at(7, 23));
    assert_eq!(r.region_size, 4 + 15);
    assert!(r.cleared);
    // Disconnected block of the same color survives.
    assert_eq!(board.filled_count(), 1);
    assert!(board.is_occupied(5, 5));
}

#[test]
fn test_other_colors_are_barriers() {
    let mut board = Board::new();
    board.set(2, 23, Some(OTHER));
    board.set(2, 24, Some(OTHER));
    settle(&mut board, &block_at(3, 23));

    let r = settle(&mut board, &block_at(0, 23));
    assert!(!r.cleared);
    assert_eq!(r.region_size, 4);
    assert_eq!(board.filled_count(), 10);
}

#[test]
fn test_diagonal_contact_does_not_connect() {
    let mut board = Board::new();
    settle(&mut board, &block_at(0, 21));
    let r = settle(&mut board, &block_at(2, 23));
    assert!(!r.cleared);
    assert_eq!(board.filled_count(), 8);
}

#[test]
fn test_different_color_piece_leaves_board_unchanged() {
    let mut board = Board::new();
    settle(&mut board, &block_at(0, 23));

    let mut square = Piece::spawn(&all_templates()[4]);
    square.x = 2;
    square.y = 23;
    let before = {
        let mut b = board.clone();
        b.settle(&square);
        b
    };
    let r = settle(&mut board, &square);
    assert!(!r.cleared);
    assert_eq!(r.shape_blocks, 3);
    assert_eq!(board, before);
}
