//! Game state module - manages the complete game state
//!
//! This module ties together the board, pieces, collision engine and region
//! clear. It owns the tick clock, the active/next piece lifecycle and the
//! running/lost flags.
//!
//! A session ends when a piece settles without ever having left the top row.
//! The board then stays frozen until [`GameAction::Restart`] starts a new
//! session.

use log::{debug, info};

use crate::board::Board;
use crate::collision::{rotate_shape, try_move, will_collide};
use crate::piece::Piece;
use crate::region::clear_region;
use crate::rng::ShapePicker;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, SettleEvent, TICK_INTERVAL_MS};

/// What a single simulation step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing happened (lost or stopped)
    Idle,
    /// A new active piece entered the board
    Spawned,
    /// The active piece moved down one row
    Fell,
    /// The active piece was written into the board
    Settled(SettleEvent),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    picker: ShapePicker,
    /// Timestamp (ms) of the last step driven by [`GameState::tick`]
    last_tick_ms: u64,
    running: bool,
    lost: bool,
    /// Monotonic session id (increments on restart)
    episode_id: u32,
    /// Last settlement (consumed by observers)
    last_event: Option<SettleEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a new game starting from a prepared board
    pub fn with_board(seed: u32, board: Board) -> Self {
        Self {
            board,
            active: None,
            next: None,
            picker: ShapePicker::new(seed),
            last_tick_ms: 0,
            running: true,
            lost: false,
            episode_id: 0,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn lost(&self) -> bool {
        self.lost
    }

    /// Whether input and gravity still have an effect
    pub fn playable(&self) -> bool {
        self.running && !self.lost
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.picker.seed()
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active.clone_from(&self.active);
        out.next.clone_from(&self.next);
        out.running = self.running;
        out.lost = self.lost;
        out.episode_id = self.episode_id;
        out.seed = self.picker.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last settlement event.
    pub fn take_last_event(&mut self) -> Option<SettleEvent> {
        self.last_event.take()
    }

    /// Advance gravity if at least one tick interval has passed since the
    /// last tick. `now_ms` is any monotonic millisecond clock.
    ///
    /// Returns true if a step ran.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.playable() {
            return false;
        }
        if now_ms.saturating_sub(self.last_tick_ms) < TICK_INTERVAL_MS {
            return false;
        }
        self.last_tick_ms = now_ms;
        self.step();
        true
    }

    /// Run one simulation step regardless of the clock
    pub fn step(&mut self) -> StepOutcome {
        if !self.playable() {
            return StepOutcome::Idle;
        }

        let Some(mut piece) = self.active.take() else {
            let promoted = match self.next.take() {
                Some(next) => next,
                None => self.spawn_piece(),
            };
            self.active = Some(promoted);
            self.next = Some(self.spawn_piece());
            return StepOutcome::Spawned;
        };

        if !will_collide(&piece, &self.board) {
            piece.y += 1;
            self.active = Some(piece);
            return StepOutcome::Fell;
        }

        StepOutcome::Settled(self.settle(piece))
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_active(-1, 0),
            GameAction::MoveRight => self.move_active(1, 0),
            GameAction::SoftDrop => self.move_active(0, 1),
            GameAction::Rotate => self.rotate_active(),
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Quit => {
                self.running = false;
                true
            }
        }
    }

    /// Start a new session: empty board, no pieces, not lost.
    ///
    /// The RNG stream continues, so the new session gets fresh pieces.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.next = None;
        self.lost = false;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!("session {} started", self.episode_id);
    }

    fn spawn_piece(&mut self) -> Piece {
        Piece::spawn(self.picker.pick())
    }

    fn move_active(&mut self, dx: i8, dy: i8) -> bool {
        if !self.playable() {
            return false;
        }
        match self.active.as_mut() {
            Some(piece) => try_move(piece, dx, dy, &self.board),
            None => false,
        }
    }

    fn rotate_active(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        match self.active.as_mut() {
            Some(piece) => rotate_shape(piece, &self.board),
            None => false,
        }
    }

    /// Write the piece into the board and run the region clear
    fn settle(&mut self, piece: Piece) -> SettleEvent {
        // Never left the top row: no room for anything after it.
        if piece.y == 0 {
            self.lost = true;
        }

        self.board.settle(&piece);
        let region = clear_region(&mut self.board, &piece);

        debug!(
            "settled at ({}, {}): region {} / piece {}{}",
            piece.x,
            piece.y,
            region.region_size,
            region.shape_blocks,
            if region.cleared { ", cleared" } else { "" }
        );
        if self.lost {
            info!("session {} lost", self.episode_id);
        }

        let event = SettleEvent {
            x: piece.x,
            y: piece.y,
            region_size: region.region_size,
            shape_blocks: region.shape_blocks,
            cleared: region.cleared,
            lost: self.lost,
        };
        self.last_event = Some(event);
        event
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
