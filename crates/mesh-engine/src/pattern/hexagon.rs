use core::f32::consts::FRAC_PI_3;

use crate::config::RenderConfig;
use crate::coords::{Rect, Vec2};
use crate::paint::Paint;
use crate::sampling::ColorSampler;
use crate::surface::Surface;

use super::PatternRenderer;

/// Solid hexagons on offset rows, one sampled color each.
///
/// Does not use the point lattice.
#[derive(Debug, Copy, Clone, Default)]
pub struct HexagonPattern;

impl PatternRenderer for HexagonPattern {
    fn render(
        &self,
        config: &RenderConfig,
        sampler: &mut dyn ColorSampler,
        surface: &mut dyn Surface,
    ) {
        let layout = HexLayout::new(config);
        let bounds = Rect::canvas(config.width, config.height);

        let mut drawn = 0usize;
        for (slot, center) in layout.candidates() {
            if !bounds.contains(center) {
                continue;
            }
            let color = sampler.sample(&config.palette, slot);
            surface.fill_polygon(&hexagon_points(center, layout.radius), &Paint::solid(color));
            drawn += 1;
        }

        log::debug!(
            "hexagon: drew {drawn} of {} candidates (r = {:.2})",
            layout.candidate_count(),
            layout.radius
        );
    }
}

/// Placement of hexagon centers for a config.
///
/// `radius = width / (2n)`; rows are `radius * sqrt(3)` apart, columns `3 * radius`
/// apart, and odd rows shift right by `1.5 * radius`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HexLayout {
    pub width: f32,
    pub radius: f32,
    pub vertical_spacing: f32,
    pub vertex_count: usize,
}

impl HexLayout {
    pub fn new(config: &RenderConfig) -> Self {
        let n = config.vertex_count as usize;
        let width = config.width as f32;
        let radius = width / (n.max(1) * 2) as f32;
        Self {
            width,
            radius,
            vertical_spacing: radius * 3f32.sqrt(),
            vertex_count: n,
        }
    }

    #[inline]
    pub fn center(&self, row: usize, col: usize) -> Vec2 {
        // x = 3r * col (+ 1.5r on odd rows) = (6 col + 3 odd) * width / 4n, so
        // centers that land exactly on the right edge compare exactly.
        let quarters = 6 * col + 3 * (row % 2);
        let denom = (4 * self.vertex_count.max(1)) as f32;
        Vec2::new(
            quarters as f32 * self.width / denom,
            row as f32 * self.vertical_spacing,
        )
    }

    /// Number of centers evaluated, drawn or not: `n^2`.
    #[inline]
    pub fn candidate_count(&self) -> usize {
        self.vertex_count * self.vertex_count
    }

    /// `(slot, center)` for every candidate, row-major.
    pub fn candidates(&self) -> impl Iterator<Item = (usize, Vec2)> + '_ {
        let n = self.vertex_count;
        (0..n).flat_map(move |row| (0..n).map(move |col| (row * n + col, self.center(row, col))))
    }
}

/// Six corners at 0°, 60°, ..., 300° around `center`.
pub fn hexagon_points(center: Vec2, radius: f32) -> [Vec2; 6] {
    core::array::from_fn(|i| {
        let angle = FRAC_PI_3 * i as f32;
        Vec2::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    })
}
