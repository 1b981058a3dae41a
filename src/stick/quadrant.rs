//! # Quadrant Module
//!
//! Coarse directional reporting for the stick.
//!
//! Angles are measured from the positive X axis towards positive Y in
//! surface coordinates, where Y grows downward. An angle of 90° therefore
//! points straight down and 270° straight up.
//!
//! | Angle range | Quadrant |
//! |-------------|----------|
//! | `[0, 90]` | [`Quadrant::BottomRight`] |
//! | `(90, 180]` | [`Quadrant::BottomLeft`] |
//! | `(180, 270]` | [`Quadrant::TopLeft`] |
//! | `(270, 360)` | [`Quadrant::TopRight`] |

use std::fmt;

use serde::Serialize;

/// One of four 90°-wide sectors around the track center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quadrant {
    /// Right and below center, `[0°, 90°]`.
    BottomRight,
    /// Left and below center, `(90°, 180°]`.
    BottomLeft,
    /// Left and above center, `(180°, 270°]`.
    TopLeft,
    /// Right and above center, everything else.
    TopRight,
}

impl Quadrant {
    /// Classifies a normalized angle in degrees.
    ///
    /// Total over all inputs: anything outside the first three ranges,
    /// including NaN, falls through to [`Quadrant::TopRight`].
    ///
    /// # Examples
    ///
    /// ```
    /// use analog_stick::stick::quadrant::Quadrant;
    ///
    /// assert_eq!(Quadrant::from_angle(90.0), Quadrant::BottomRight);
    /// assert_eq!(Quadrant::from_angle(90.5), Quadrant::BottomLeft);
    /// assert_eq!(Quadrant::from_angle(300.0), Quadrant::TopRight);
    /// ```
    #[must_use]
    pub fn from_angle(degrees: f32) -> Self {
        if (0.0..=90.0).contains(&degrees) {
            Quadrant::BottomRight
        } else if degrees > 90.0 && degrees <= 180.0 {
            Quadrant::BottomLeft
        } else if degrees > 180.0 && degrees <= 270.0 {
            Quadrant::TopLeft
        } else {
            Quadrant::TopRight
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quadrant::BottomRight => "BOTTOM_RIGHT",
            Quadrant::BottomLeft => "BOTTOM_LEFT",
            Quadrant::TopLeft => "TOP_LEFT",
            Quadrant::TopRight => "TOP_RIGHT",
        };
        f.write_str(name)
    }
}

/// Converts an `atan2` result in radians to degrees in `[0, 360)`.
///
/// Negative angles wrap by adding 360. Tiny negative inputs that would round
/// up to exactly 360 in `f32` wrap to 0 instead.
#[must_use]
pub fn normalize_degrees(angle_rad: f64) -> f32 {
    let mut degrees = angle_rad.to_degrees() as f32;
    if degrees < 0.0 {
        degrees += 360.0;
    }
    if degrees >= 360.0 {
        degrees -= 360.0;
    }
    // Collapse -0.0 to 0.0
    degrees + 0.0
}
