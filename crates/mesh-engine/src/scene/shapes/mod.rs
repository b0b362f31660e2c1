pub(crate) mod pixels;
pub(crate) mod polygon;

pub use pixels::PixelsCmd;
pub use polygon::PolygonCmd;
