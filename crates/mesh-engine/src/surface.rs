//! Drawing backend abstraction.
//!
//! Pattern renderers only ever talk to a [`Surface`]. The crate ships two:
//! [`Canvas`](crate::raster::Canvas) rasterizes into RGBA pixels, and
//! [`DrawList`](crate::scene::DrawList) records the calls for inspection.

use crate::coords::Vec2;
use crate::paint::Paint;
use crate::raster::PixelBuffer;

/// Sink for one render pass.
///
/// Coordinates are canvas pixels. Implementations must tolerate geometry that
/// lies partly or fully outside their bounds.
pub trait Surface {
    /// Drops everything drawn so far.
    fn clear(&mut self);

    /// Fills the closed polygon through `points` with `paint`.
    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint);

    /// Replaces pixels with `pixels`, anchored at the top-left corner.
    fn put_pixels(&mut self, pixels: &PixelBuffer);
}
