use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] and stops are expected in ascending `t` order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in canvas pixel space.
///
/// Semantics follow the 2D canvas model:
/// - the color at a point is found by projecting it onto the `start -> end` axis
/// - positions before the first stop / after the last stop pad with the edge color
/// - coincident stops produce a hard edge
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Builds a gradient whose stops are spread over `offsets`, pairing each with
    /// the color at the same position.
    pub fn with_offsets(start: Vec2, end: Vec2, offsets: &[f32], colors: &[Color]) -> Self {
        let stops = offsets
            .iter()
            .zip(colors)
            .map(|(&t, &color)| ColorStop::new(t, color))
            .collect();
        Self::new(start, end, stops)
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// A zero-length axis is not usable; surfaces paint nothing for it.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite())
            && !self.stops.is_empty()
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Axis parameter of `p`: 0 at `start`, 1 at `end`, unclamped.
    #[inline]
    pub fn axis_t(&self, p: Vec2) -> f32 {
        let axis = self.end - self.start;
        (p - self.start).dot(axis) / axis.length_squared()
    }

    /// Color at axis parameter `t` (padded outside [0, 1]).
    pub fn color_at(&self, t: f32) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::BLACK;
        };

        let t = t.clamp(0.0, 1.0);
        if t <= first.t {
            return first.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.t) / span);
            }
        }

        self.stops[self.stops.len() - 1].color
    }

    /// Color at canvas position `p`.
    #[inline]
    pub fn sample(&self, p: Vec2) -> Color {
        self.color_at(self.axis_t(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color { Color::rgb(255, 0, 0) }
    fn blue() -> Color { Color::rgb(0, 0, 255) }

    fn horizontal(stops: Vec<ColorStop>) -> LinearGradient {
        LinearGradient::new(Vec2::zero(), Vec2::new(100.0, 0.0), stops)
    }

    #[test]
    fn axis_t_projects_onto_axis() {
        let g = LinearGradient::new(Vec2::zero(), Vec2::new(10.0, 10.0), vec![]);
        assert_eq!(g.axis_t(Vec2::new(10.0, 0.0)), 0.5);
        assert_eq!(g.axis_t(Vec2::new(10.0, 10.0)), 1.0);
    }

    #[test]
    fn pads_outside_range() {
        let g = horizontal(vec![ColorStop::new(0.0, red()), ColorStop::new(1.0, blue())]);
        assert_eq!(g.sample(Vec2::new(-50.0, 0.0)), red());
        assert_eq!(g.sample(Vec2::new(500.0, 0.0)), blue());
    }

    #[test]
    fn interpolates_between_stops() {
        let g = horizontal(vec![
            ColorStop::new(0.0, Color::BLACK),
            ColorStop::new(0.5, Color::WHITE),
            ColorStop::new(1.0, Color::BLACK),
        ]);
        assert_eq!(g.sample(Vec2::new(25.0, 0.0)), Color::rgb(128, 128, 128));
        assert_eq!(g.sample(Vec2::new(50.0, 0.0)), Color::WHITE);
        assert_eq!(g.sample(Vec2::new(75.0, 0.0)), Color::rgb(128, 128, 128));
    }

    #[test]
    fn first_stop_above_zero_pads_leading_edge() {
        let g = horizontal(vec![ColorStop::new(0.33, red()), ColorStop::new(0.66, blue())]);
        assert_eq!(g.color_at(0.1), red());
        assert_eq!(g.color_at(0.9), blue());
    }

    #[test]
    fn coincident_stops_are_hard_edge() {
        let g = horizontal(vec![ColorStop::new(0.5, red()), ColorStop::new(0.5, blue())]);
        assert_eq!(g.color_at(0.49), red());
        assert_eq!(g.color_at(0.51), blue());
    }

    #[test]
    fn no_stops_is_black() {
        assert_eq!(horizontal(vec![]).color_at(0.5), Color::BLACK);
    }

    #[test]
    fn zero_length_axis_is_invalid() {
        let g = LinearGradient::new(
            Vec2::new(3.0, 3.0),
            Vec2::new(3.0, 3.0),
            vec![ColorStop::new(0.0, red())],
        );
        assert!(!g.is_valid());
        assert!(horizontal(vec![ColorStop::new(0.0, red())]).is_valid());
    }

    #[test]
    fn with_offsets_pairs_positionally() {
        let g = LinearGradient::with_offsets(
            Vec2::zero(),
            Vec2::new(1.0, 1.0),
            &[0.0, 0.5, 1.0],
            &[red(), Color::WHITE, blue()],
        );
        assert_eq!(g.stops[1], ColorStop::new(0.5, Color::WHITE));
        assert_eq!(g.stops.len(), 3);
    }
}
