//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BLOCK: char = '█';
const EMPTY: char = '·';
const LOST_TEXT: &str = "YOU LOST";

const KEY_HELP: [&str; 6] = [
    "←/a/h  left",
    "→/d/l  right",
    "↓/s/j  down",
    "↑/w/k  rotate",
    "n      new game",
    "q/Esc  quit",
];

/// Widest board cell, in terminal columns, the view will lay out.
pub const MAX_CELL_WIDTH: u16 = 8;
/// Tallest board cell, in terminal rows.
pub const MAX_CELL_HEIGHT: u16 = 4;

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Board, preview and help panel layout.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares the glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Where the board frame landed in the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    /// Cell sizes are clamped to `1..=MAX_CELL_WIDTH` and `1..=MAX_CELL_HEIGHT`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_WIDTH),
            cell_h: cell_h.clamp(1, MAX_CELL_HEIGHT),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame = self.board_frame(viewport);

        fb.fill_rect(
            frame.x.saturating_add(1),
            frame.y.saturating_add(1),
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG),
        );
        draw_border(
            fb,
            frame,
            CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG),
        );

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                self.draw_board_cell(fb, frame, x as u16, y as u16, *cell);
            }
        }

        if let Some(active) = &snap.active {
            for (x, y) in active.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.draw_board_cell(fb, frame, x as u16, y as u16, Some(active.color));
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.lost {
            draw_overlay_text(fb, frame, LOST_TEXT);
        }
    }

    /// Allocating convenience wrapper around [`Self::render_into`].
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal column/row of the top-left corner of board cell (x, y).
    pub fn cell_origin(&self, viewport: Viewport, x: u16, y: u16) -> (u16, u16) {
        self.cell_px(self.board_frame(viewport), x, y)
    }

    fn cell_px(&self, frame: Frame, x: u16, y: u16) -> (u16, u16) {
        (
            frame.x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w)),
            frame.y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h)),
        )
    }

    fn board_frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (BOARD_HEIGHT as u16).saturating_mul(self.cell_h).saturating_add(2);
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, cell: Cell) {
        let (ch, style) = match cell {
            Some(color) => (BLOCK, CellStyle::new(color.into(), PLAY_BG).bold()),
            None => (EMPTY, CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim()),
        };
        let (px, py) = self.cell_px(frame, x, y);
        fb.fill_rect(
            px,
            py,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(next) = &snap.next {
            self.draw_preview(fb, panel_x, y, next);
        }
        // Tallest template is four rows.
        y = y.saturating_add(4 * self.cell_h + 1);

        fb.put_str(panel_x, y, "GAME", label);
        y = y.saturating_add(1);
        fb.put_char(panel_x, y, '#', value);
        fb.put_u32(panel_x + 1, y, snap.episode_id, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.seed, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        let help = value.dim();
        for line in KEY_HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        let style = CellStyle::new(piece.color.into(), SCREEN_BG).bold();
        for row in 0..piece.height() {
            for col in 0..piece.width() {
                if piece.is_filled(col, row) {
                    fb.fill_rect(
                        x.saturating_add(col as u16 * self.cell_w),
                        y.saturating_add(row as u16 * self.cell_h),
                        self.cell_w,
                        self.cell_h,
                        BLOCK,
                        style,
                    );
                }
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x.saturating_add(w - 1), y.saturating_add(h - 1));

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for cx in x.saturating_add(1)..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y.saturating_add(1)..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(160, 30, 30)).bold();
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let y = frame.y.saturating_add(frame.h / 2);
    fb.put_str(x, y, text, style);

    let hint = "n: new game";
    let hint_w = hint.chars().count() as u16;
    let hx = frame.x.saturating_add(frame.w.saturating_sub(hint_w) / 2);
    fb.put_str(hx, y.saturating_add(1), hint, CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG));
}
