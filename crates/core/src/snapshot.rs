//! Snapshot module - renderer-facing copy of the game state
//!
//! Filled by [`crate::GameState::snapshot_into`] once per frame so the view
//! never borrows the live state.

use crate::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Read-only view of everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<Piece>,
    pub next: Option<Piece>,
    pub running: bool,
    pub lost: bool,
    pub episode_id: u32,
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            running: true,
            lost: false,
            episode_id: 0,
            seed: 0,
        }
    }
}
