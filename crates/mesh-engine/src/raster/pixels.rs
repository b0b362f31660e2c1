use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// One straight-alpha RGBA8 pixel, laid out exactly as in the byte buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Rgba8 = Rgba8 { r: 0, g: 0, b: 0, a: 0 };

    /// RGB of this pixel, ignoring alpha.
    #[inline]
    pub const fn color(self) -> Color {
        Color::rgb(self.r, self.g, self.b)
    }
}

impl From<Color> for Rgba8 {
    #[inline]
    fn from(c: Color) -> Self {
        Rgba8 { r: c.r, g: c.g, b: c.b, a: 255 }
    }
}

/// Row-major RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Transparent black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes, `r, g, b, a` per pixel.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        bytemuck::cast_slice(self.data.as_slice())
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        bytemuck::cast_slice_mut(self.data.as_mut_slice())
    }

    /// One row of pixels. Panics if `y` is out of range.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgba8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels()[start..start + w]
    }

    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [Rgba8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.pixels_mut()[start..start + w]
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixels()[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Writes `(x, y)`; out-of-range writes are dropped.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, px: Rgba8) {
        if x < self.width && y < self.height {
            let w = self.width as usize;
            self.pixels_mut()[y as usize * w + x as usize] = px;
        }
    }

    #[inline]
    pub fn fill(&mut self, px: Rgba8) {
        self.pixels_mut().fill(px);
    }

    /// Copies `src` onto this buffer at the origin, clipped to the overlap.
    pub fn blit(&mut self, src: &PixelBuffer) {
        let w = self.width.min(src.width) as usize;
        let h = self.height.min(src.height);
        for y in 0..h {
            self.row_mut(y)[..w].copy_from_slice(&src.row(y)[..w]);
        }
    }
}
