//! Point lattice shared by the triangle and square mesh patterns.

use crate::config::RenderConfig;
use crate::coords::Vec2;
use crate::paint::Color;
use crate::sampling::ColorSampler;

/// A lattice vertex: canvas position plus the palette color sampled for it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridPoint {
    pub position: Vec2,
    pub color: Color,
}

/// The four corners of one lattice cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cell {
    pub top_left: GridPoint,
    pub top_right: GridPoint,
    pub bottom_left: GridPoint,
    pub bottom_right: GridPoint,
}

/// `n x n` points in row-major order (`index = row * n + col`).
///
/// Rebuilt on every render; colors are re-sampled each time.
#[derive(Debug, Clone)]
pub struct Lattice {
    vertex_count: usize,
    points: Vec<GridPoint>,
}

impl Lattice {
    /// Lays points out `config.lattice_step()` apart starting at the origin and
    /// asks `sampler` for each point's color in row-major order.
    pub fn build(config: &RenderConfig, sampler: &mut dyn ColorSampler) -> Self {
        let n = config.vertex_count as usize;
        let step = config.lattice_step();

        let mut points = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let slot = row * n + col;
                points.push(GridPoint {
                    position: Vec2::new(col as f32 * step, row as f32 * step),
                    color: sampler.sample(&config.palette, slot),
                });
            }
        }

        Self { vertex_count: n, points }
    }

    #[inline]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    #[inline]
    pub fn point(&self, row: usize, col: usize) -> GridPoint {
        self.points[row * self.vertex_count + col]
    }

    /// Cells in row-major order; `(n - 1)^2` of them.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let span = self.vertex_count.saturating_sub(1);
        (0..span).flat_map(move |y| {
            (0..span).map(move |x| Cell {
                top_left: self.point(y, x),
                top_right: self.point(y, x + 1),
                bottom_left: self.point(y + 1, x),
                bottom_right: self.point(y + 1, x + 1),
            })
        })
    }
}
