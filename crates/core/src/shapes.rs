//! Shape catalog - the twelve piece templates
//!
//! Templates are static data: a bounding box, a row-major occupancy mask and
//! a color derived from the template index.

use crate::types::{Color, NUM_SHAPES};

/// An immutable piece template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub width: u8,
    pub height: u8,
    /// Row-major occupancy, `width * height` entries
    pub mask: &'static [bool],
    pub color: Color,
}

impl ShapeTemplate {
    /// Number of occupied cells
    pub fn block_count(&self) -> usize {
        self.mask.iter().filter(|&&b| b).count()
    }
}

const O: bool = false;
const X: bool = true;

#[rustfmt::skip]
const MASK_0: [bool; 6] = [
    O, X, O,
    X, X, X,
];

#[rustfmt::skip]
const MASK_1: [bool; 8] = [
    X, X,
    O, X,
    O, X,
    O, X,
];

#[rustfmt::skip]
const MASK_2: [bool; 8] = [
    X, X, X, X,
    O, X, O, X,
];

#[rustfmt::skip]
const MASK_3: [bool; 9] = [
    X, O, O,
    X, X, O,
    O, X, X,
];

#[rustfmt::skip]
const MASK_4: [bool; 4] = [
    O, X,
    X, X,
];

#[rustfmt::skip]
const MASK_5: [bool; 4] = [
    X, X,
    X, X,
];

#[rustfmt::skip]
const MASK_6: [bool; 4] = [
    X,
    X,
    X,
    X,
];

#[rustfmt::skip]
const MASK_7: [bool; 9] = [
    X, O, O,
    X, X, X,
    O, O, X,
];

#[rustfmt::skip]
const MASK_8: [bool; 8] = [
    X, X, X, X,
    O, O, X, O,
];

#[rustfmt::skip]
const MASK_9: [bool; 12] = [
    O, X, O,
    O, X, X,
    O, X, O,
    X, X, O,
];

#[rustfmt::skip]
const MASK_10: [bool; 8] = [
    X, O, O, X,
    X, X, X, X,
];

#[rustfmt::skip]
const MASK_11: [bool; 12] = [
    O, X, O, O,
    X, X, X, X,
    O, O, X, O,
];

/// Color of the template at `index`.
///
/// Channels are computed in `u32` and truncated to 8 bits, so indices whose
/// sum passes 255 wrap around.
pub const fn template_color(index: usize) -> Color {
    let i = index as u32;
    Color::new(
        (80 + (i * 17) % 200) as u8,
        (80 + (i * 37) % 200) as u8,
        (80 + (i * 57) % 200) as u8,
    )
}

const fn template(index: usize, width: u8, height: u8, mask: &'static [bool]) -> ShapeTemplate {
    ShapeTemplate {
        width,
        height,
        mask,
        color: template_color(index),
    }
}

static TEMPLATES: [ShapeTemplate; NUM_SHAPES] = [
    template(0, 3, 2, &MASK_0),
    template(1, 2, 4, &MASK_1),
    template(2, 4, 2, &MASK_2),
    template(3, 3, 3, &MASK_3),
    template(4, 2, 2, &MASK_4),
    template(5, 2, 2, &MASK_5),
    template(6, 1, 4, &MASK_6),
    template(7, 3, 3, &MASK_7),
    template(8, 4, 2, &MASK_8),
    template(9, 3, 4, &MASK_9),
    template(10, 4, 2, &MASK_10),
    template(11, 4, 3, &MASK_11),
];

/// The full catalog, in index order.
pub fn all_templates() -> &'static [ShapeTemplate; NUM_SHAPES] {
    &TEMPLATES
}

/// Template at `index`, or `None` past the end of the catalog.
pub fn template_at(index: usize) -> Option<&'static ShapeTemplate> {
    TEMPLATES.get(index)
}
