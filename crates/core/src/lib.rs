//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: shape catalog, piece instances,
//! board, collision and rotation, the flood-fill region clear and the tick
//! driven state machine. It has no dependencies on terminal, input or I/O:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Testable**: every rule is exercised by unit tests next to the code
//! - **Allocation-free**: masks, the board and the flood-fill queue are
//!   fixed-capacity values
//!
//! # Module Structure
//!
//! - [`shapes`]: the twelve piece templates and their colors
//! - [`piece`]: piece instances, spawning and mask rotation
//! - [`board`]: 10x25 grid of settled colors
//! - [`collision`]: bounds/overlap tests, movement, rotation with wall kicks
//! - [`region`]: flood-fill region clear after a piece settles
//! - [`rng`]: seedable uniform shape picker
//! - [`game_state`]: tick clock, piece lifecycle, running/lost state
//! - [`snapshot`]: read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - Pieces fall one row every 300ms; input is applied immediately.
//! - Rotation is clockwise; when the rotated piece collides the kicks
//!   left, right and up are tried in that order.
//! - When a piece settles, same-colored blocks 4-connected to it are flood
//!   filled. If the region is larger than the piece, the region is removed.
//! - A piece that settles without ever leaving the top row ends the session.
//!
//! # Example
//!
//! ```
//! use flood_tetris_core::{GameState, StepOutcome};
//! use flood_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! // The first step spawns the active piece and the preview.
//! assert_eq!(game.step(), StepOutcome::Spawned);
//! assert!(game.next().is_some());
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // Gravity only advances once a full interval has passed.
//! assert!(!game.tick(100));
//! assert!(game.tick(300));
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod region;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use flood_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{is_collided, rotate_shape, try_move, try_rotate, will_collide, WALL_KICKS};
pub use game_state::{GameState, StepOutcome};
pub use piece::Piece;
pub use region::{clear_region, RegionClear};
pub use rng::{ShapePicker, SimpleRng};
pub use shapes::{all_templates, template_at, ShapeTemplate};
pub use snapshot::GameSnapshot;
