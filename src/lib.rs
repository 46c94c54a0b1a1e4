//! Flood Tetris (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package
//! re-exports them as `flood_tetris::{core,input,term,types}` and adds the
//! binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use flood_tetris_core as core;
pub use flood_tetris_input as input;
pub use flood_tetris_term as term;
pub use flood_tetris_types as types;

pub use config::{Cli, Config};
