//! Terminal game renderer.
//!
//! Draws snapshots into a plain framebuffer instead of using a widget
//! toolkit, then flushes only what changed to the terminal backend. Board
//! cells are two columns wide by default so blocks look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use flood_tetris_core as core;
pub use flood_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, MAX_CELL_HEIGHT, MAX_CELL_WIDTH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
