use crate::scene::shapes::pixels::PixelsCmd;
use crate::scene::shapes::polygon::PolygonCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `DrawList::replay` and the `Surface` trait about it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon(PolygonCmd),
    Pixels(PixelsCmd),
}
