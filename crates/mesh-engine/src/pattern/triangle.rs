use crate::config::RenderConfig;
use crate::grid::Lattice;
use crate::sampling::ColorSampler;
use crate::surface::Surface;

use super::{PatternRenderer, fill_corner_gradient};

const STOPS: [f32; 3] = [0.0, 0.5, 1.0];

/// Two gradient triangles per lattice cell, split along the top-right to
/// bottom-left diagonal.
#[derive(Debug, Copy, Clone, Default)]
pub struct TrianglePattern;

impl PatternRenderer for TrianglePattern {
    fn render(
        &self,
        config: &RenderConfig,
        sampler: &mut dyn ColorSampler,
        surface: &mut dyn Surface,
    ) {
        let lattice = Lattice::build(config, sampler);
        for cell in lattice.cells() {
            fill_corner_gradient(
                surface,
                &[cell.top_left, cell.top_right, cell.bottom_left],
                &STOPS,
            );
            fill_corner_gradient(
                surface,
                &[cell.bottom_right, cell.bottom_left, cell.top_right],
                &STOPS,
            );
        }
    }
}
