//! Collision and placement - bounds/overlap tests, movement and rotation
//!
//! All mutations follow build-candidate-then-commit: a candidate piece is
//! built and tested, and only an accepted candidate is written back.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Offsets tried, in order, when a rotation collides in place
pub const WALL_KICKS: [(i8, i8); 3] = [(-1, 0), (1, 0), (0, -1)];

/// Whether the piece's bounding box leaves the board or any occupied cell
/// overlaps a settled block.
///
/// The bounding box is tested as a whole, so a piece may not hang over an
/// edge even through empty mask cells.
pub fn is_collided(piece: &Piece, board: &Board) -> bool {
    let (x, y) = (piece.x as i16, piece.y as i16);
    if x < 0 || x + piece.width() as i16 > BOARD_WIDTH as i16 {
        return true;
    }
    if y < 0 || y + piece.height() as i16 > BOARD_HEIGHT as i16 {
        return true;
    }

    piece.cells().any(|(cx, cy)| board.is_occupied(cx, cy))
}

/// Whether the piece would collide one row lower
pub fn will_collide(piece: &Piece, board: &Board) -> bool {
    is_collided(&piece.shifted(0, 1), board)
}

/// Move the piece by (`dx`, `dy`) if the destination is free.
///
/// Returns false and leaves the piece untouched otherwise.
pub fn try_move(piece: &mut Piece, dx: i8, dy: i8, board: &Board) -> bool {
    let candidate = piece.shifted(dx, dy);
    if is_collided(&candidate, board) {
        return false;
    }
    *piece = candidate;
    true
}

/// Rotate the piece clockwise, falling back to [`WALL_KICKS`].
///
/// The first non-colliding candidate wins; returns the offset that was used.
/// `None` means every candidate collided and the piece is unchanged.
pub fn try_rotate(piece: &Piece, board: &Board) -> Option<(Piece, (i8, i8))> {
    let rotated = piece.rotated_cw();

    std::iter::once((0, 0))
        .chain(WALL_KICKS)
        .map(|(dx, dy)| (rotated.shifted(dx, dy), (dx, dy)))
        .find(|(candidate, _)| !is_collided(candidate, board))
}

/// Rotate the piece in place with wall kicks. Returns whether it rotated.
pub fn rotate_shape(piece: &mut Piece, board: &Board) -> bool {
    match try_rotate(piece, board) {
        Some((rotated, _)) => {
            *piece = rotated;
            true
        }
        None => false,
    }
}
