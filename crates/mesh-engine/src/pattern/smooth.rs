use crate::config::RenderConfig;
use crate::paint::Color;
use crate::palette::Palette;
use crate::raster::{PixelBuffer, Rgba8};
use crate::sampling::ColorSampler;
use crate::surface::Surface;

use super::PatternRenderer;

/// Per-pixel bilinear blend of the palette laid out as a square grid.
///
/// Deterministic: the sampler is not consulted.
#[derive(Debug, Copy, Clone, Default)]
pub struct SmoothPattern;

impl PatternRenderer for SmoothPattern {
    fn render(
        &self,
        config: &RenderConfig,
        _sampler: &mut dyn ColorSampler,
        surface: &mut dyn Surface,
    ) {
        surface.put_pixels(&rasterize_smooth(config));
    }
}

/// Rasterizes the smooth pattern into a `width x height` buffer, alpha 255.
pub fn rasterize_smooth(config: &RenderConfig) -> PixelBuffer {
    let grid = PaletteGrid::new(&config.palette);
    let mut buf = PixelBuffer::new(config.width, config.height);

    let (w, h) = (config.width as f32, config.height as f32);
    for y in 0..config.height {
        let ny = y as f32 / h;
        for (x, px) in buf.row_mut(y).iter_mut().enumerate() {
            *px = Rgba8::from(grid.sample(x as f32 / w, ny));
        }
    }

    buf
}

/// Palette viewed as a row-major `size x size` grid of control colors.
///
/// `size = floor(sqrt(len))`. Colors past `size^2` are not part of the grid, and a
/// palette with fewer than four colors collapses to a 1x1 grid (flat fill with the
/// first color). Neighbour lookups clamp to the last row/column.
#[derive(Debug, Copy, Clone)]
pub struct PaletteGrid<'a> {
    palette: &'a Palette,
    size: usize,
}

impl<'a> PaletteGrid<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette, size: palette.len().isqrt().max(1) }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn at(&self, col: usize, row: usize) -> Color {
        self.palette.get(row * self.size + col)
    }

    /// Cell index and fractional offset along one axis for normalized `v`.
    #[inline]
    fn locate(&self, v: f32) -> (usize, usize, f32) {
        let last = self.size - 1;
        let scaled = v * last as f32;
        let cell = (scaled.floor().max(0.0) as usize).min(last);
        let ratio = scaled - cell as f32;
        (cell, (cell + 1).min(last), ratio)
    }

    /// Bilinear color at normalized `(x, y)` in `[0, 1]^2`.
    pub fn sample(&self, x: f32, y: f32) -> Color {
        let (x0, x1, xr) = self.locate(x);
        let (y0, y1, yr) = self.locate(y);

        let top = self.at(x0, y0).lerp(self.at(x1, y0), xr);
        let bottom = self.at(x0, y1).lerp(self.at(x1, y1), xr);
        top.lerp(bottom, yr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use crate::raster::Canvas;
    use crate::sampling::RandomSampler;
    use crate::scene::{DrawCmd, DrawList};

    fn quad_palette() -> Palette {
        Palette::from_hex(["#ff0000", "#00ff00", "#0000ff", "#ffffff"])
    }

    fn config(palette: Palette, w: u32, h: u32) -> RenderConfig {
        RenderConfig::default()
            .with_pattern(Pattern::Smooth)
            .with_palette(palette)
            .with_size(w, h)
    }

    fn close(a: Color, b: Color, tol: i16) -> bool {
        (a.r as i16 - b.r as i16).abs() <= tol
            && (a.g as i16 - b.g as i16).abs() <= tol
            && (a.b as i16 - b.b as i16).abs() <= tol
    }

    // ── grid ──────────────────────────────────────────────────────────────

    #[test]
    fn grid_size_is_floor_sqrt() {
        for (len, size) in [(2, 1), (3, 1), (4, 2), (5, 2), (8, 2), (9, 3), (16, 4)] {
            let p = Palette::new(vec![Color::WHITE; len]);
            assert_eq!(PaletteGrid::new(&p).size(), size, "len {len}");
        }
        assert_eq!(PaletteGrid::new(&Palette::new(vec![])).size(), 1);
    }

    #[test]
    fn sample_hits_control_colors_at_corners() {
        let p = quad_palette();
        let g = PaletteGrid::new(&p);
        assert_eq!(g.sample(0.0, 0.0), p.get(0));
        assert_eq!(g.sample(1.0, 0.0), p.get(1));
        assert_eq!(g.sample(0.0, 1.0), p.get(2));
        assert_eq!(g.sample(1.0, 1.0), p.get(3));
    }

    #[test]
    fn sample_center_is_average() {
        let p = Palette::from_hex(["#000000", "#000000", "#ffffff", "#ffffff"]);
        assert_eq!(PaletteGrid::new(&p).sample(0.5, 0.5), Color::rgb(128, 128, 128));
    }

    #[test]
    fn non_square_palette_never_reads_past_grid() {
        // 5 colors: 2x2 grid, the fifth color is ignored.
        let p = Palette::from_hex(["#000000", "#000000", "#000000", "#000000", "#ffffff"]);
        let g = PaletteGrid::new(&p);
        for i in 0..=10 {
            let v = i as f32 / 10.0;
            assert_eq!(g.sample(v, v), Color::BLACK);
        }
    }

    #[test]
    fn two_colors_fill_flat() {
        let p = Palette::from_hex(["#4338ca", "#ffffff"]);
        let g = PaletteGrid::new(&p);
        assert_eq!(g.sample(0.7, 0.2), Color::rgb(67, 56, 202));
    }

    #[test]
    fn empty_palette_is_black() {
        let p = Palette::new(vec![]);
        assert_eq!(PaletteGrid::new(&p).sample(0.3, 0.9), Color::BLACK);
    }

    // ── raster ────────────────────────────────────────────────────────────

    #[test]
    fn raster_corners_match_palette() {
        let p = quad_palette();
        let buf = rasterize_smooth(&config(p.clone(), 800, 600));
        assert_eq!(buf.get(0, 0), Some(Rgba8::from(p.get(0))));

        let br = buf.get(799, 599).unwrap();
        assert_eq!(br.a, 255);
        assert!(close(br.color(), p.get(3), 3), "{br:?}");
    }

    #[test]
    fn raster_is_opaque_everywhere() {
        let buf = rasterize_smooth(&config(quad_palette(), 40, 30));
        assert!(buf.pixels().iter().all(|p| p.a == 255));
    }

    #[test]
    fn raster_is_deterministic() {
        let c = config(quad_palette(), 64, 48);
        assert_eq!(rasterize_smooth(&c).as_bytes(), rasterize_smooth(&c).as_bytes());
    }

    #[test]
    fn render_uploads_one_buffer() {
        let c = config(quad_palette(), 16, 12);
        let mut list = DrawList::new();
        SmoothPattern.render(&c, &mut RandomSampler::seeded(3), &mut list);

        assert_eq!(list.len(), 1);
        let DrawCmd::Pixels(cmd) = &list.items()[0] else {
            panic!("expected pixel upload");
        };
        assert_eq!((cmd.pixels.width(), cmd.pixels.height()), (16, 12));
    }

    #[test]
    fn render_onto_canvas_fills_every_pixel() {
        let c = config(quad_palette(), 20, 20);
        let mut canvas = Canvas::new(20, 20);
        SmoothPattern.render(&c, &mut RandomSampler::seeded(0), &mut canvas);
        assert_eq!(canvas.pixels(), &rasterize_smooth(&c));
    }
}
