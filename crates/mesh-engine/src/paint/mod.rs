//! Paint model shared between pattern renderers and surfaces.
//!
//! Scope:
//! - color representation (opaque 8-bit sRGB)
//! - paint sources (solid, linear gradient)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};

use crate::coords::Vec2;

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Returns false for paints a surface must skip (degenerate gradients).
    #[inline]
    pub fn is_drawable(&self) -> bool {
        match self {
            Paint::Solid(_) => true,
            Paint::LinearGradient(g) => g.is_valid(),
        }
    }

    /// Color of this paint at canvas position `p`.
    #[inline]
    pub fn color_at(&self, p: Vec2) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::LinearGradient(g) => g.sample(p),
        }
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(g: LinearGradient) -> Self {
        Paint::LinearGradient(g)
    }
}
