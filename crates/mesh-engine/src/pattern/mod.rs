//! Pattern renderers.
//!
//! Every pattern is a unit struct implementing [`PatternRenderer`]; [`Pattern`] is
//! the tag that selects one at render time.
//!
//! | Pattern | Output |
//! |---------|--------|
//! | [`Pattern::Smooth`] | one full-canvas pixel upload (bilinear palette blend) |
//! | [`Pattern::Triangle`] | `2 * (n - 1)^2` gradient triangles over the lattice |
//! | [`Pattern::Square`] | `(n - 1)^2` gradient quads over the lattice |
//! | [`Pattern::Hexagon`] | up to `n^2` solid hexagons in offset rows |

mod hexagon;
mod smooth;
mod square;
mod triangle;

use core::fmt;
use core::str::FromStr;

use crate::config::RenderConfig;
use crate::error::ConfigError;
use crate::grid::GridPoint;
use crate::paint::{LinearGradient, Paint};
use crate::sampling::ColorSampler;
use crate::surface::Surface;

pub use hexagon::{HexLayout, HexagonPattern, hexagon_points};
pub use smooth::{PaletteGrid, SmoothPattern, rasterize_smooth};
pub use square::SquarePattern;
pub use triangle::TrianglePattern;

/// One way of turning a [`RenderConfig`] into draw calls.
///
/// Implementations draw onto an already-cleared surface and must not panic on
/// degenerate input (empty palette, tiny canvas).
pub trait PatternRenderer {
    fn render(
        &self,
        config: &RenderConfig,
        sampler: &mut dyn ColorSampler,
        surface: &mut dyn Surface,
    );
}

/// Pattern selector.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Pattern {
    #[default]
    Smooth,
    Triangle,
    Square,
    Hexagon,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Smooth,
        Pattern::Triangle,
        Pattern::Square,
        Pattern::Hexagon,
    ];

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Pattern::Smooth => "smooth",
            Pattern::Triangle => "triangle",
            Pattern::Square => "square",
            Pattern::Hexagon => "hexagon",
        }
    }

    /// The renderer behind this tag.
    #[inline]
    pub fn renderer(self) -> &'static dyn PatternRenderer {
        match self {
            Pattern::Smooth => &SmoothPattern,
            Pattern::Triangle => &TrianglePattern,
            Pattern::Square => &SquarePattern,
            Pattern::Hexagon => &HexagonPattern,
        }
    }

    /// Whether output depends on the color sampler.
    #[inline]
    pub const fn is_sampled(self) -> bool {
        !matches!(self, Pattern::Smooth)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Pattern::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownPattern(s.to_string()))
    }
}

/// Fills the polygon through `corners` with a linear gradient running from the
/// first corner to the third, one stop per corner at `offsets`.
///
/// This is a 1D gradient stretched over a 2D shape, not per-vertex interpolation.
pub(crate) fn fill_corner_gradient(
    surface: &mut dyn Surface,
    corners: &[GridPoint],
    offsets: &[f32],
) {
    debug_assert!(corners.len() >= 3 && corners.len() == offsets.len());

    let points: Vec<_> = corners.iter().map(|p| p.position).collect();
    let colors: Vec<_> = corners.iter().map(|p| p.color).collect();
    let gradient = LinearGradient::with_offsets(points[0], points[2], offsets, &colors);

    surface.fill_polygon(&points, &Paint::LinearGradient(gradient));
}
