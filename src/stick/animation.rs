//! # Return Animation Module
//!
//! Timed interpolation of the stick back to center after release.
//!
//! The animation does not own a clock. The host measures elapsed time on its
//! own event loop and feeds it in through [`ReturnAnimation::advance`], which
//! keeps the controller single-threaded and deterministic under test.
//!
//! ## Easing
//!
//! - [`Easing::AccelerateDecelerate`] (default): `cos((t + 1) * π) / 2 + 0.5`,
//!   slow at both ends.
//! - [`Easing::Linear`]: constant speed.

use std::f32::consts::PI;
use std::time::Duration;

use serde::Deserialize;

use super::geometry::Point;

/// Default time for the stick to travel back to center.
pub const RETURN_DURATION: Duration = Duration::from_millis(500);

/// Interpolation curve for the return animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Ease in and out along a half cosine.
    #[default]
    AccelerateDecelerate,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

/// A cancellable transition of the stick from its release point to center.
#[derive(Debug, Clone)]
pub struct ReturnAnimation {
    from: Point,
    to: Point,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl ReturnAnimation {
    /// Starts an animation at `from` heading for `to`.
    #[must_use]
    pub fn new(from: Point, to: Point, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Advances by `dt` and returns the interpolated position.
    ///
    /// Once the duration has passed the position is exactly `to`.
    pub fn advance(&mut self, dt: Duration) -> Point {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.position()
    }

    /// Current interpolated position.
    #[must_use]
    pub fn position(&self) -> Point {
        if self.is_finished() {
            return self.to;
        }
        let fraction = self.easing.apply(self.progress());
        Point::new(
            self.from.x + (self.to.x - self.from.x) * fraction,
            self.from.y + (self.to.y - self.from.y) * fraction,
        )
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Time left until the stick reaches center.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }
}
