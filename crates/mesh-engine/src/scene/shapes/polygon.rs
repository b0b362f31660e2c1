use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

/// Closed polygon fill payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub paint: Paint,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Vec2>, paint: Paint) -> Self {
        Self { points, paint }
    }

    /// Number of corners; 3 for mesh triangles, 4 for cells, 6 for hexagons.
    #[inline]
    pub fn corners(&self) -> usize {
        self.points.len()
    }
}

impl DrawList {
    /// Records a polygon fill.
    #[inline]
    pub fn push_polygon(&mut self, points: Vec<Vec2>, paint: Paint) {
        self.push(DrawCmd::Polygon(PolygonCmd::new(points, paint)));
    }
}
