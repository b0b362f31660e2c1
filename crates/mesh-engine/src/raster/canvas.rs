use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::coords::{Rect, Vec2};
use crate::paint::Paint;
use crate::surface::Surface;

use super::{PixelBuffer, Rgba8};

/// Software canvas.
///
/// Polygons are scan-converted without antialiasing: a pixel is covered when its
/// center lies inside the polygon (even-odd rule). Paint is evaluated at the pixel
/// center. Fills are opaque and overwrite what is underneath.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: PixelBuffer,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { pixels: PixelBuffer::new(width, height) }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Encodes the current contents as an RGBA8 PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(
                self.pixels.as_bytes(),
                self.width(),
                self.height(),
                ExtendedColorType::Rgba8,
            )
            .context("failed to encode canvas as PNG")?;
        Ok(out)
    }

    /// Rows whose centers may be covered by a shape with bounds `bounds`.
    fn row_range(&self, bounds: Rect) -> core::ops::Range<u32> {
        let first = (bounds.origin.y - 0.5).ceil().max(0.0) as u32;
        let end = (bounds.max().y - 0.5).ceil().max(0.0) as u32;
        first..end.min(self.height())
    }
}

impl Surface for Canvas {
    fn clear(&mut self) {
        self.pixels.fill(Rgba8::TRANSPARENT);
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        if points.len() < 3 || !paint.is_drawable() {
            log::debug!("skipping degenerate fill ({} points)", points.len());
            return;
        }

        let canvas = Rect::canvas(self.width(), self.height());
        let Some(bounds) = Rect::bounding(points).and_then(|b| canvas.intersect(b)) else {
            return;
        };

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in self.row_range(bounds) {
            let cy = y as f32 + 0.5;

            crossings.clear();
            for (i, &p) in points.iter().enumerate() {
                let q = points[(i + 1) % points.len()];
                // Edges shared by neighbouring shapes must yield bit-identical
                // crossings whichever way each shape walks them.
                let (a, b) = if (p.y, p.x) <= (q.y, q.x) { (p, q) } else { (q, p) };
                if (a.y <= cy) != (b.y <= cy) {
                    crossings.push(a.x + (cy - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f32::total_cmp);

            let width = self.width();
            let row = self.pixels.row_mut(y);
            for span in crossings.chunks_exact(2) {
                // Pixel x is covered when x + 0.5 lies in [span[0], span[1]).
                let x0 = (span[0] - 0.5).ceil().clamp(0.0, width as f32) as usize;
                let x1 = (span[1] - 0.5).ceil().clamp(0.0, width as f32) as usize;
                if x0 >= x1 {
                    continue;
                }

                match paint {
                    Paint::Solid(c) => row[x0..x1].fill(Rgba8::from(*c)),
                    _ => {
                        for (x, px) in (x0..x1).zip(&mut row[x0..x1]) {
                            let center = Vec2::new(x as f32 + 0.5, cy);
                            *px = Rgba8::from(paint.color_at(center));
                        }
                    }
                }
            }
        }
    }

    fn put_pixels(&mut self, pixels: &PixelBuffer) {
        if pixels.width() != self.width() || pixels.height() != self.height() {
            log::debug!(
                "put_pixels: {}x{} buffer onto {}x{} canvas, clipping",
                pixels.width(),
                pixels.height(),
                self.width(),
                self.height()
            );
        }
        self.pixels.blit(pixels);
    }
}
