//! Listener capability for stick movement callbacks.

use super::quadrant::Quadrant;

/// Receives derived values while the stick is dragged.
///
/// All methods are called synchronously from
/// [`StickController::on_pointer_move`](super::controller::StickController::on_pointer_move),
/// in declaration order: move, scaled X, scaled Y, angle, quadrant. The
/// scaled callbacks only fire for axes with a non-zero max value.
///
/// Every method has an empty default so implementors only override what they
/// care about.
#[cfg_attr(test, mockall::automock)]
pub trait StickListener {
    /// New stick center in surface coordinates.
    fn on_move(&mut self, _x: f32, _y: f32) {}

    /// Horizontal deflection scaled to `[-max_x, max_x]`, right is positive.
    fn on_scaled_x(&mut self, _value: f32) {}

    /// Vertical deflection scaled to `[-max_y, max_y]`, up is positive.
    fn on_scaled_y(&mut self, _value: f32) {}

    /// Direction of the stick in degrees, `[0, 360)`.
    fn on_angle(&mut self, _degrees: f32) {}

    /// Sector the stick is in.
    fn on_quadrant(&mut self, _quadrant: Quadrant) {}
}

/// Listener that ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl StickListener for NoopListener {}

/// Fans each callback out to several listeners, in order.
impl StickListener for Vec<Box<dyn StickListener>> {
    fn on_move(&mut self, x: f32, y: f32) {
        self.iter_mut().for_each(|l| l.on_move(x, y));
    }

    fn on_scaled_x(&mut self, value: f32) {
        self.iter_mut().for_each(|l| l.on_scaled_x(value));
    }

    fn on_scaled_y(&mut self, value: f32) {
        self.iter_mut().for_each(|l| l.on_scaled_y(value));
    }

    fn on_angle(&mut self, degrees: f32) {
        self.iter_mut().for_each(|l| l.on_angle(degrees));
    }

    fn on_quadrant(&mut self, quadrant: Quadrant) {
        self.iter_mut().for_each(|l| l.on_quadrant(quadrant));
    }
}
