//! # Stick Geometry Module
//!
//! Sizing and clamping math for the two concentric circles.
//!
//! ## Sizing
//!
//! All radii derive from the smaller side `d` of the widget's bounds:
//!
//! | Quantity | Formula |
//! |----------|---------|
//! | Inner radius | `d / 2 * 0.25` |
//! | Outer radius | `d / 2 * 0.75` |
//! | Max radius | `outer - 0.65 * inner` |
//!
//! The max radius is how far the inner circle's center may travel from the
//! track center. For a 200x200 widget this gives inner 25, outer 75 and a
//! max radius of 58.75.
//!
//! ## Centering
//!
//! Both center coordinates are taken from the width, so a non-square widget
//! is centered on `(width / 2, width / 2)`. Hosts are expected to size the
//! widget square.
//!
//! ## Usage
//!
//! ```
//! use analog_stick::stick::geometry::Geometry;
//!
//! let geometry = Geometry::from_bounds(200.0, 200.0);
//! assert_eq!(geometry.cx, 100.0);
//! assert!((geometry.max_radius - 58.75).abs() < 0.001);
//!
//! // Far outside the track: clamped onto the max radius.
//! let clamped = geometry.clamp(1000.0, 100.0);
//! assert!((clamped.position.x - 158.75).abs() < 0.001);
//! ```

/// Inner circle radius as a fraction of half the widget's smaller side.
pub const INNER_RADIUS_RATIO: f32 = 0.25;

/// Outer circle radius as a fraction of half the widget's smaller side.
pub const OUTER_RADIUS_RATIO: f32 = 0.75;

/// Fraction of the inner radius the stick may not travel past the outer edge.
pub const MAX_RADIUS_INSET: f32 = 0.65;

/// A point in surface coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate, positive down.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Result of mapping a pointer position onto the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped {
    /// Where the stick's center ends up.
    pub position: Point,
    /// Direction from the track center to the pointer, in radians (-π, π].
    pub angle_rad: f64,
    /// Whether the pointer was beyond the max radius.
    pub clamped: bool,
}

/// Circle geometry derived from the widget's bounds.
///
/// A zeroed geometry (the [`Default`]) is degenerate: its max radius is 0 and
/// no drag can start until real bounds are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    /// Track center X.
    pub cx: f32,
    /// Track center Y (derived from the width, see module docs).
    pub cy: f32,
    /// Radius of the draggable inner circle.
    pub inner_radius: f32,
    /// Radius of the outer track.
    pub outer_radius: f32,
    /// Maximum distance of the stick center from the track center.
    pub max_radius: f32,
}

impl Geometry {
    /// Computes geometry for a widget of the given bounds.
    ///
    /// Zero, negative or non-finite bounds produce degenerate geometry
    /// rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use analog_stick::stick::geometry::Geometry;
    ///
    /// let g = Geometry::from_bounds(200.0, 200.0);
    /// assert_eq!((g.cx, g.cy), (100.0, 100.0));
    /// assert_eq!(g.inner_radius, 25.0);
    /// assert_eq!(g.outer_radius, 75.0);
    /// ```
    #[must_use]
    pub fn from_bounds(width: f32, height: f32) -> Self {
        let half = width.min(height) / 2.0;
        let inner_radius = half * INNER_RADIUS_RATIO;
        let outer_radius = half * OUTER_RADIUS_RATIO;

        Self {
            cx: width / 2.0,
            cy: width / 2.0,
            inner_radius,
            outer_radius,
            max_radius: outer_radius - MAX_RADIUS_INSET * inner_radius,
        }
    }

    /// Track center.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// True when the stick has no room to move (`max_radius <= 0`) or the
    /// center is not a finite point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.max_radius > 0.0) || !self.cx.is_finite() || !self.cy.is_finite()
    }

    /// Hit test for grabbing the stick.
    ///
    /// Uses an inclusive square of half-width `inner_radius` around the stick
    /// rather than a true circle, so the corners of the bounding box also
    /// count as a grab.
    #[must_use]
    pub fn hits_stick(&self, stick: Point, x: f32, y: f32) -> bool {
        y <= stick.y + self.inner_radius
            && y >= stick.y - self.inner_radius
            && x <= stick.x + self.inner_radius
            && x >= stick.x - self.inner_radius
    }

    /// Maps a pointer position to a stick position within `max_radius`.
    ///
    /// Positions at or beyond the max radius are projected onto it along the
    /// pointer's direction from the center.
    #[must_use]
    pub fn clamp(&self, x: f32, y: f32) -> Clamped {
        // f64 keeps axis-aligned directions exact (atan2 of a pure vertical
        // vector converts to exactly 90 degrees).
        let vx = f64::from(x - self.cx);
        let vy = f64::from(y - self.cy);
        let angle_rad = vy.atan2(vx);
        let magnitude = vx.hypot(vy);
        let max_radius = f64::from(self.max_radius);

        if magnitude >= max_radius {
            let position = Point::new(
                (f64::from(self.cx) + angle_rad.cos() * max_radius) as f32,
                (f64::from(self.cy) + angle_rad.sin() * max_radius) as f32,
            );
            Clamped {
                position,
                angle_rad,
                clamped: true,
            }
        } else {
            Clamped {
                position: Point::new(x, y),
                angle_rad,
                clamped: false,
            }
        }
    }

    /// Maps a deflection in `[-max_radius, max_radius]` to `[-max_value, max_value]`.
    ///
    /// Returns `None` when the axis is not configured (`max_value == 0`) or
    /// the geometry has no travel to divide by.
    #[must_use]
    pub fn scale(&self, deflection: f32, max_value: f32) -> Option<f32> {
        if max_value == 0.0 || self.is_degenerate() {
            return None;
        }
        Some(max_value * deflection / self.max_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square_200() -> Geometry {
        Geometry::from_bounds(200.0, 200.0)
    }

    #[test]
    fn test_from_bounds_square() {
        let g = square_200();
        assert_eq!(g.cx, 100.0);
        assert_eq!(g.cy, 100.0);
        assert!((g.inner_radius - 25.0).abs() < 0.001);
        assert!((g.outer_radius - 75.0).abs() < 0.001);
        assert!((g.max_radius - 58.75).abs() < 0.001);
        assert!(g.inner_radius < g.outer_radius);
    }

    #[test]
    fn test_from_bounds_uses_smaller_side_for_radii() {
        let g = Geometry::from_bounds(400.0, 200.0);
        assert!((g.inner_radius - 25.0).abs() < 0.001);
        assert!((g.outer_radius - 75.0).abs() < 0.001);
    }

    #[test]
    fn test_from_bounds_centers_on_width_only() {
        // Center Y follows the width, not the height.
        let g = Geometry::from_bounds(300.0, 200.0);
        assert_eq!(g.center(), Point::new(150.0, 150.0));

        let g = Geometry::from_bounds(200.0, 300.0);
        assert_eq!(g.center(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_from_bounds_is_deterministic() {
        assert_eq!(Geometry::from_bounds(123.0, 456.0), Geometry::from_bounds(123.0, 456.0));
    }

    #[test]
    fn test_degenerate_geometry() {
        assert!(Geometry::default().is_degenerate());
        assert!(Geometry::from_bounds(0.0, 0.0).is_degenerate());
        assert!(Geometry::from_bounds(-50.0, 100.0).is_degenerate());
        assert!(Geometry::from_bounds(f32::NAN, 100.0).is_degenerate());
        assert!(!square_200().is_degenerate());
    }

    #[test]
    fn test_hit_test_inside_and_edges() {
        let g = square_200();
        let stick = g.center();
        assert!(g.hits_stick(stick, 100.0, 100.0));
        assert!(g.hits_stick(stick, 125.0, 100.0));
        assert!(g.hits_stick(stick, 75.0, 75.0));
        assert!(!g.hits_stick(stick, 125.1, 100.0));
        assert!(!g.hits_stick(stick, 100.0, 74.9));
    }

    #[test]
    fn test_hit_test_accepts_bounding_box_corner() {
        // (124, 124) is ~33.9 from center: outside the circle, inside the square.
        let g = square_200();
        assert!(g.hits_stick(g.center(), 124.0, 124.0));
    }

    #[test]
    fn test_clamp_inside_is_unchanged() {
        let g = square_200();
        let c = g.clamp(110.0, 90.0);
        assert!(!c.clamped);
        assert_eq!(c.position, Point::new(110.0, 90.0));
    }

    #[test]
    fn test_clamp_far_right() {
        let g = square_200();
        let c = g.clamp(1000.0, 100.0);
        assert!(c.clamped);
        assert!((c.position.x - 158.75).abs() < 0.001);
        assert!((c.position.y - 100.0).abs() < 0.001);
        assert_eq!(c.angle_rad, 0.0);
    }

    #[test]
    fn test_clamp_exactly_on_boundary() {
        let g = square_200();
        let c = g.clamp(100.0, 158.75);
        assert!(c.clamped);
        assert!((c.position.x - 100.0).abs() < 0.001);
        assert!((c.position.y - 158.75).abs() < 0.001);
    }

    #[test]
    fn test_clamp_diagonal_stays_on_direction() {
        let g = square_200();
        let c = g.clamp(300.0, 300.0);
        let expected = 100.0 + 58.75 * std::f32::consts::FRAC_1_SQRT_2;
        assert!((c.position.x - expected).abs() < 0.001);
        assert!((c.position.y - expected).abs() < 0.001);
    }

    #[test]
    fn test_scale_full_deflection() {
        let g = square_200();
        assert_eq!(g.scale(58.75, 30.0), Some(30.0));
        assert_eq!(g.scale(-58.75, 30.0), Some(-30.0));
        assert_eq!(g.scale(0.0, 30.0), Some(0.0));
    }

    #[test]
    fn test_scale_unconfigured_or_degenerate() {
        assert_eq!(square_200().scale(10.0, 0.0), None);
        assert_eq!(Geometry::default().scale(10.0, 30.0), None);
    }

    proptest! {
        #[test]
        fn prop_clamped_position_within_max_radius(
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
            side in 1.0f32..2000.0,
        ) {
            let g = Geometry::from_bounds(side, side);
            let c = g.clamp(x, y);
            let distance = c.position.distance_to(g.center());
            prop_assert!(distance <= g.max_radius + g.max_radius * 1e-5 + 1e-4);
        }
    }
}
