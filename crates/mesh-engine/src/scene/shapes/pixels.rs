use crate::raster::PixelBuffer;
use crate::scene::{DrawCmd, DrawList};

/// Full-buffer pixel upload anchored at the canvas origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelsCmd {
    pub pixels: PixelBuffer,
}

impl DrawList {
    /// Records a pixel upload.
    #[inline]
    pub fn push_pixels(&mut self, pixels: PixelBuffer) {
        self.push(DrawCmd::Pixels(PixelsCmd { pixels }));
    }
}
