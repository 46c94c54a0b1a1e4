//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every key
//! press, including terminal auto-repeat, yields one action; releases are
//! ignored.

pub mod map;

pub use flood_tetris_types as types;

pub use map::{handle_key_event, should_quit};
