use super::Vec2;

/// Axis-aligned rectangle in canvas pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Full canvas bounds: `[0, width) x [0, height)`.
    #[inline]
    pub fn canvas(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    /// Smallest rectangle enclosing every point, or `None` for an empty slice.
    pub fn bounding(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let (mut min, mut max) = (first, first);
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = (a.origin.x + a.size.x).min(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).min(b.origin.y + b.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn canvas_contains_origin() {
        assert!(Rect::canvas(800, 600).contains(Vec2::zero()));
    }

    #[test]
    fn canvas_excludes_far_edges() {
        // Hexagon centers exactly on the right/bottom edge are not drawn.
        let c = Rect::canvas(800, 600);
        assert!(!c.contains(Vec2::new(800.0, 10.0)));
        assert!(!c.contains(Vec2::new(10.0, 600.0)));
        assert!(c.contains(Vec2::new(799.9, 599.9)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(-1.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, -1.0)));
    }

    // ── bounding ──────────────────────────────────────────────────────────

    #[test]
    fn bounding_of_triangle() {
        let pts = [Vec2::new(4.0, 1.0), Vec2::new(-2.0, 3.0), Vec2::new(1.0, 9.0)];
        assert_eq!(Rect::bounding(&pts), Some(r(-2.0, 1.0, 6.0, 8.0)));
    }

    #[test]
    fn bounding_of_nothing() {
        assert_eq!(Rect::bounding(&[]), None);
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_clips_to_canvas() {
        let shape = r(700.0, 500.0, 200.0, 200.0);
        let i = Rect::canvas(800, 600).intersect(shape).unwrap();
        assert_eq!(i, r(700.0, 500.0, 100.0, 100.0));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }
}
