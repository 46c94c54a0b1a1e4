//! RNG module - uniform shape selection
//!
//! Each new piece is drawn uniformly from the catalog. The generator is a
//! small seedable LCG so that a seed reproduces a whole session.

use crate::shapes::{all_templates, ShapeTemplate};
use crate::types::NUM_SHAPES;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG cycle
    /// with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws catalog indices uniformly in `[0, NUM_SHAPES)`.
#[derive(Debug, Clone)]
pub struct ShapePicker {
    rng: SimpleRng,
    seed: u32,
}

impl ShapePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Next catalog index
    pub fn pick_index(&mut self) -> usize {
        self.rng.next_range(NUM_SHAPES as u32) as usize
    }

    /// Next template
    pub fn pick(&mut self) -> &'static ShapeTemplate {
        &all_templates()[self.pick_index()]
    }

    /// Seed this picker was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for ShapePicker {
    fn default() -> Self {
        Self::new(1)
    }
}
