use std::ops::RangeInclusive;

use crate::error::ConfigError;
use crate::palette::{MIN_COLORS, Palette};
use crate::pattern::Pattern;

/// Accepted lattice sizes.
pub const VERTEX_COUNT_RANGE: RangeInclusive<u32> = 3..=20;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_VERTEX_COUNT: u32 = 6;

/// Sole input of a render pass.
///
/// `vertex_count` only matters for the mesh patterns; the smooth pattern is driven
/// by the palette alone.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub vertex_count: u32,
    pub pattern: Pattern,
    pub palette: Palette,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            pattern: Pattern::Smooth,
            palette: Palette::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl RenderConfig {
    pub fn with_vertex_count(mut self, vertex_count: u32) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Checks the ranges the input layer is expected to enforce.
    ///
    /// The engine renders unvalidated configs too (degrading instead of failing);
    /// this is for front ends that want to reject bad input up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VERTEX_COUNT_RANGE.contains(&self.vertex_count) {
            return Err(ConfigError::VertexCount(self.vertex_count));
        }
        if self.palette.len() < MIN_COLORS {
            return Err(ConfigError::PaletteTooShort(self.palette.len()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Distance between neighbouring lattice points.
    ///
    /// Uses the larger canvas side for both axes, so on non-square canvases the
    /// lattice overshoots the shorter side.
    #[inline]
    pub fn lattice_step(&self) -> f32 {
        let span = self.width.max(self.height) as f32;
        span / self.vertex_count.saturating_sub(1).max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = RenderConfig::default();
        assert_eq!(c.validate(), Ok(()));
        assert_eq!((c.width, c.height), (800, 600));
        assert_eq!(c.pattern, Pattern::Smooth);
    }

    #[test]
    fn vertex_count_bounds() {
        let c = RenderConfig::default();
        assert!(c.clone().with_vertex_count(3).validate().is_ok());
        assert!(c.clone().with_vertex_count(20).validate().is_ok());
        assert_eq!(
            c.clone().with_vertex_count(2).validate(),
            Err(ConfigError::VertexCount(2))
        );
        assert_eq!(c.with_vertex_count(21).validate(), Err(ConfigError::VertexCount(21)));
    }

    #[test]
    fn short_palette_rejected() {
        let c = RenderConfig::default().with_palette(Palette::from_hex(["#ffffff"]));
        assert_eq!(c.validate(), Err(ConfigError::PaletteTooShort(1)));
    }

    #[test]
    fn empty_canvas_rejected() {
        let c = RenderConfig::default().with_size(0, 10);
        assert!(matches!(c.validate(), Err(ConfigError::EmptyCanvas { .. })));
    }

    #[test]
    fn lattice_step_uses_longest_side() {
        let c = RenderConfig::default().with_vertex_count(5);
        assert_eq!(c.lattice_step(), 200.0);
    }

    #[test]
    fn lattice_step_survives_degenerate_count() {
        let c = RenderConfig::default().with_vertex_count(1);
        assert!(c.lattice_step().is_finite());
    }
}
