//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation core, the input mapping and the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 25 rows (indexed 0-24, top to bottom)
//! - **Spawn**: horizontally centered, `y = 0`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_INTERVAL_MS` | 300 | Gravity step interval |
//! | `FRAME_MS` | 16 | Control loop frame budget (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use flood_tetris_types::{Color, GameAction, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let action = GameAction::from_str("rotate").unwrap();
//! assert_eq!(action, GameAction::Rotate);
//!
//! assert_eq!(Color::new(1, 2, 3), Color::new(1, 2, 3));
//! assert_ne!(Color::new(1, 2, 3), Color::new(1, 2, 4));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 25);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (25 rows)
pub const BOARD_HEIGHT: u8 = 25;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

/// Gravity interval in milliseconds (one row per tick)
pub const TICK_INTERVAL_MS: u64 = 300;

/// Frame budget of the control loop in milliseconds
pub const FRAME_MS: u64 = 16;

/// Number of templates in the shape catalog
pub const NUM_SHAPES: usize = 12;

/// Largest mask a piece can carry (4x4 bounding box)
pub const MAX_MASK_CELLS: usize = 16;

/// 24-bit block color.
///
/// Colors are opaque to the simulation: the only operation the engine performs
/// on them is exact equality over all three channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Settled block of that color
pub type Cell = Option<Color>;

/// Commands the control loop feeds into the game state.
///
/// Each received command is applied once, immediately, independent of the
/// gravity tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise (with wall kicks)
    Rotate,
    /// Start a new session with an empty board
    Restart,
    /// Stop the control loop
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use flood_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("SOFTDROP"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "restart" => Some(GameAction::Restart),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// Core-side event emitted after a piece settles.
///
/// Consumed by the runner (logging) via `GameState::take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleEvent {
    /// Bounding-box position the piece settled at
    pub x: i8,
    pub y: i8,
    /// Cells reached by the flood fill, piece included
    pub region_size: usize,
    /// Occupied cells of the settled piece
    pub shape_blocks: usize,
    /// Whether the region was removed from the board
    pub cleared: bool,
    /// Whether this settlement ended the session
    pub lost: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_constants() {
        assert_eq!(BOARD_SIZE, 250);
        assert_eq!(TICK_INTERVAL_MS, 300);
        assert_eq!(NUM_SHAPES, 12);
    }

    #[test]
    fn action_string_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
            GameAction::Restart,
            GameAction::Quit,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
