//! Piece module - runtime piece instances
//!
//! A [`Piece`] is an independent copy of a [`ShapeTemplate`]: it owns its mask,
//! so rotating it never touches the catalog.

use arrayvec::ArrayVec;

use crate::shapes::ShapeTemplate;
use crate::types::{Color, BOARD_WIDTH, MAX_MASK_CELLS};

/// Row-major occupancy mask owned by a piece
pub type Mask = ArrayVec<bool, MAX_MASK_CELLS>;

/// A falling (or previewed) piece.
///
/// Invariant: `mask.len() == width * height`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Bounding-box left column
    pub x: i8,
    /// Bounding-box top row
    pub y: i8,
    width: u8,
    height: u8,
    mask: Mask,
    pub color: Color,
}

impl Piece {
    /// Create a piece from a template, centered horizontally at the top row
    pub fn spawn(template: &ShapeTemplate) -> Self {
        let x = (BOARD_WIDTH / 2) as i8 - (template.width / 2) as i8;
        Self {
            x,
            y: 0,
            width: template.width,
            height: template.height,
            mask: template.mask.iter().copied().collect(),
            color: template.color,
        }
    }

    /// Build a piece from raw parts.
    ///
    /// Returns `None` if the mask does not have exactly `width * height`
    /// entries or does not fit in [`MAX_MASK_CELLS`].
    pub fn from_parts(x: i8, y: i8, width: u8, height: u8, mask: &[bool], color: Color) -> Option<Self> {
        let len = width as usize * height as usize;
        if mask.len() != len || len > MAX_MASK_CELLS {
            return None;
        }
        Some(Self {
            x,
            y,
            width,
            height,
            mask: mask.iter().copied().collect(),
            color,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Whether the mask cell at (`col`, `row`) is occupied
    #[inline]
    pub fn is_filled(&self, col: u8, row: u8) -> bool {
        col < self.width && row < self.height && self.mask[row as usize * self.width as usize + col as usize]
    }

    /// Number of occupied mask cells
    pub fn block_count(&self) -> usize {
        self.mask.iter().filter(|&&b| b).count()
    }

    /// Occupied cells as absolute board coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let w = self.width as usize;
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, &filled)| filled)
            .map(move |(i, _)| (self.x + (i % w) as i8, self.y + (i / w) as i8))
    }

    /// Same piece moved by (`dx`, `dy`)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Clockwise quarter turn of the mask, keeping the top-left corner.
    ///
    /// The rotated piece is `height` wide and `width` tall; its cell at row
    /// `j`, column `i` is the original cell at row `height - 1 - i`, column `j`.
    pub fn rotated_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut mask = Mask::new();
        for j in 0..w {
            for i in 0..h {
                mask.push(self.mask[(h - 1 - i) * w + j]);
            }
        }
        Self {
            x: self.x,
            y: self.y,
            width: self.height,
            height: self.width,
            mask,
            color: self.color,
        }
    }
}
