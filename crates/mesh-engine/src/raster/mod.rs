//! CPU raster backend.
//!
//! - [`PixelBuffer`]: straight RGBA8 storage, row-major, top-left origin
//! - [`Canvas`]: a [`Surface`](crate::surface::Surface) that scan-converts polygons
//!   into a pixel buffer and encodes it as PNG

mod canvas;
mod pixels;

pub use canvas::Canvas;
pub use pixels::{PixelBuffer, Rgba8};
