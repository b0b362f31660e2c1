//! Coordinate and geometry types shared by the pattern renderers and surfaces.
//!
//! Canonical space:
//! - canvas pixels
//! - origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
