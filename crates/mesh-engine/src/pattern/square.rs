use crate::config::RenderConfig;
use crate::grid::Lattice;
use crate::sampling::ColorSampler;
use crate::surface::Surface;

use super::{PatternRenderer, fill_corner_gradient};

const STOPS: [f32; 4] = [0.0, 0.33, 0.66, 1.0];

/// One gradient quad per lattice cell, graded along the top-left to
/// bottom-right diagonal.
#[derive(Debug, Copy, Clone, Default)]
pub struct SquarePattern;

impl PatternRenderer for SquarePattern {
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
                &[cell.top_left, cell.top_right, cell.bottom_right, cell.bottom_left],
                &STOPS,
            );
        }
    }
}
