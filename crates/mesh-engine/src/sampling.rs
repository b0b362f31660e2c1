//! Color sampling strategies for the mesh patterns.
//!
//! The mesh patterns tag every lattice point (or hexagon) with one palette color.
//! Production renders draw uniformly at random; tests and reproducible exports can
//! swap in a deterministic strategy without touching the renderers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::paint::Color;
use crate::palette::Palette;

/// Picks the palette color for one lattice slot.
///
/// `slot` is the row-major index of the point or hexagon being colored. An empty
/// palette must yield black rather than panic.
pub trait ColorSampler {
    fn sample(&mut self, palette: &Palette, slot: usize) -> Color;
}

/// Uniform random pick from the palette, independent of position.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    /// Seeded from OS entropy; every render differs.
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSampler for RandomSampler {
    fn sample(&mut self, palette: &Palette, _slot: usize) -> Color {
        if palette.is_empty() {
            return Color::BLACK;
        }
        palette.get(self.rng.random_range(0..palette.len()))
    }
}

/// Deterministic pick: slot `i` takes palette color `i % len`.
#[derive(Debug, Copy, Clone, Default)]
pub struct PositionalSampler;

impl ColorSampler for PositionalSampler {
    fn sample(&mut self, palette: &Palette, slot: usize) -> Color {
        if palette.is_empty() {
            return Color::BLACK;
        }
        palette.get(slot % palette.len())
    }
}
