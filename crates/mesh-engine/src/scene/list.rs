use crate::coords::Vec2;
use crate::paint::Paint;
use crate::raster::PixelBuffer;
use crate::surface::Surface;

use super::DrawCmd;
use super::shapes::polygon::PolygonCmd;

/// Recorded draw stream for one render pass.
///
/// Implements [`Surface`] so a pattern can render into it headlessly; tests then
/// inspect the commands, or [`replay`](DrawList::replay) them onto a real canvas.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Polygon fills in paint order.
    pub fn polygons(&self) -> impl Iterator<Item = &PolygonCmd> {
        self.items.iter().filter_map(|cmd| match cmd {
            DrawCmd::Polygon(p) => Some(p),
            _ => None,
        })
    }

    /// Issues every recorded command against `surface`, after clearing it.
    pub fn replay(&self, surface: &mut dyn Surface) {
        surface.clear();
        for cmd in &self.items {
            match cmd {
                DrawCmd::Polygon(p) => surface.fill_polygon(&p.points, &p.paint),
                DrawCmd::Pixels(p) => surface.put_pixels(&p.pixels),
            }
        }
    }
}

impl Surface for DrawList {
    /// Forgets recorded items. Keeps allocated capacity for reuse.
    #[inline]
    fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        self.push_polygon(points.to_vec(), paint.clone());
    }

    #[inline]
    fn put_pixels(&mut self, pixels: &PixelBuffer) {
        self.push_pixels(pixels.clone());
    }
}
