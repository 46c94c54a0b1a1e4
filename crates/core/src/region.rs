//! Region clear - flood fill from a freshly settled piece
//!
//! After a piece is written into the board, every cell of the same color that
//! is 4-connected to it forms a region. If that region is bigger than the
//! piece itself (it merged with blocks already on the board) the whole region
//! is removed.
//!
//! The fill uses a fixed-capacity queue and visited set sized to the board, so
//! it never allocates.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{BOARD_SIZE, BOARD_WIDTH};

/// 4-neighborhood as (dx, dy)
const NEIGHBORS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Outcome of one region-clear pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionClear {
    /// Cells reached by the flood fill, piece included
    pub region_size: usize,
    /// Occupied cells of the settled piece
    pub shape_blocks: usize,
    /// Whether the region was removed
    pub cleared: bool,
}

/// Flood-fill from the cells under `piece` and clear the region if it is
/// larger than the piece.
///
/// The piece must already be settled into `board`.
pub fn clear_region(board: &mut Board, piece: &Piece) -> RegionClear {
    let color = Some(piece.color);
    let mut visited = [false; BOARD_SIZE];
    let mut queue: ArrayVec<usize, BOARD_SIZE> = ArrayVec::new();

    for (x, y) in piece.cells() {
        if let Some(idx) = Board::index(x, y) {
            if !visited[idx] && board.at(idx) == color {
                visited[idx] = true;
                queue.push(idx);
            }
        }
    }

    // Breadth-first: `queue` only grows, `front` walks it.
    let mut front = 0;
    while front < queue.len() {
        let idx = queue[front];
        front += 1;

        let x = (idx % BOARD_WIDTH as usize) as i8;
        let y = (idx / BOARD_WIDTH as usize) as i8;
        for (dx, dy) in NEIGHBORS {
            let Some(n) = Board::index(x + dx, y + dy) else {
                continue;
            };
            if !visited[n] && board.at(n) == color {
                visited[n] = true;
                queue.push(n);
            }
        }
    }

    let region_size = queue.len();
    let shape_blocks = piece.block_count();
    let cleared = region_size > shape_blocks;

    if cleared {
        for &idx in &queue {
            board.clear_at(idx);
        }
    }

    RegionClear {
        region_size,
        shape_blocks,
        cleared,
    }
}
