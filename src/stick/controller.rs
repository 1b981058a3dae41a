//! # Stick Controller Module
//!
//! The stateful core of the widget: turns pointer events into clamped stick
//! positions, reports derived values to a [`StickListener`], and drives the
//! return-to-center animation.
//!
//! ## Drag Lifecycle
//!
//! ```text
//!            down on stick
//!   Idle ───────────────────▶ Dragging ──┐ move: clamp, report
//!    ▲  ◀───────────────────     │  ◀────┘
//!    │   down elsewhere          │
//!    └───────────────────────────┘
//!          up: start return animation
//! ```
//!
//! The host forwards pointer events, calls [`StickController::tick`] from its
//! frame timer while [`StickController::is_animating`] is true, and repaints
//! whenever [`StickController::take_redraw_request`] returns true.
//!
//! ## Usage
//!
//! ```
//! use analog_stick::stick::controller::{Axis, StickController};
//! use analog_stick::stick::quadrant::Quadrant;
//!
//! let mut stick = StickController::new();
//! stick.configure(200.0, 200.0);
//! stick.set_max_axis_value(Axis::X, 30.0);
//!
//! assert!(stick.on_pointer_down(100.0, 100.0));
//! let reading = stick.on_pointer_move(1000.0, 100.0).unwrap();
//! assert!((reading.position.x - 158.75).abs() < 0.001);
//! assert_eq!(reading.quadrant, Quadrant::BottomRight);
//! assert_eq!(reading.scaled_x, Some(30.0));
//! assert_eq!(reading.scaled_y, None);
//!
//! stick.on_pointer_up();
//! assert!(stick.is_animating());
//! ```

use std::fmt;
use std::time::Duration;

use tracing::{debug, trace, warn};

use super::animation::{Easing, ReturnAnimation, RETURN_DURATION};
use super::color::Color;
use super::geometry::{Geometry, Point};
use super::listener::{NoopListener, StickListener};
use super::quadrant::{normalize_degrees, Quadrant};
use crate::config::{AnimationConfig, StickConfig};

/// Whether the stick is currently held by the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Axis selector for scaled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal, right is positive.
    X,
    /// Vertical, up is positive.
    Y,
}

/// Pointer input forwarded by the host surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}

/// Everything reported for one accepted move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickReading {
    /// New stick center.
    pub position: Point,
    /// Direction from the track center in degrees, `[0, 360)`.
    pub angle: f32,
    pub quadrant: Quadrant,
    /// Scaled horizontal deflection, if the X axis has a max value.
    pub scaled_x: Option<f32>,
    /// Scaled vertical deflection, if the Y axis has a max value.
    pub scaled_y: Option<f32>,
}

/// Fill colors for the two circles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickColors {
    pub inner: Color,
    pub outer: Color,
}

impl Default for StickColors {
    fn default() -> Self {
        Self {
            inner: Color::HOLO_BLUE_BRIGHT,
            outer: Color::DARKER_GRAY,
        }
    }
}

/// A filled circle to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

/// What the render surface needs to paint one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickFrame {
    /// The track, painted first.
    pub outer: Circle,
    /// The stick, painted on top.
    pub inner: Circle,
}

/// Owns the stick's geometry, position and drag state.
///
/// Not thread-safe. All calls are expected from the host's UI thread.
pub struct StickController {
    geometry: Geometry,
    position: Point,
    drag: DragState,
    max_x_value: f32,
    max_y_value: f32,
    colors: StickColors,
    listener: Box<dyn StickListener>,
    animation: Option<ReturnAnimation>,
    return_duration: Duration,
    easing: Easing,
    redraw_requested: bool,
}

impl fmt::Debug for StickController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickController")
            .field("geometry", &self.geometry)
            .field("position", &self.position)
            .field("drag", &self.drag)
            .field("max_x_value", &self.max_x_value)
            .field("max_y_value", &self.max_y_value)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

impl Default for StickController {
    fn default() -> Self {
        Self::new()
    }
}

impl StickController {
    /// Creates an unconfigured controller with default colors, no axis
    /// scaling and no listener.
    ///
    /// Pointer events are ignored until [`configure`](Self::configure) is
    /// called with real bounds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            geometry: Geometry::default(),
            position: Point::default(),
            drag: DragState::Idle,
            max_x_value: 0.0,
            max_y_value: 0.0,
            colors: StickColors::default(),
            listener: Box::new(NoopListener),
            animation: None,
            return_duration: RETURN_DURATION,
            easing: Easing::default(),
            redraw_requested: false,
        }
    }

    /// Creates a controller from configuration sections.
    ///
    /// # Examples
    ///
    /// ```
    /// use analog_stick::config::Config;
    /// use analog_stick::stick::controller::{Axis, StickController};
    ///
    /// let config = Config::default();
    /// let stick = StickController::from_config(&config.stick, &config.animation);
    /// assert_eq!(stick.max_axis_value(Axis::X), 0.0);
    /// ```
    #[must_use]
    pub fn from_config(stick: &StickConfig, animation: &AnimationConfig) -> Self {
        let mut controller = Self::new();
        controller.colors = StickColors {
            inner: stick.inner_color,
            outer: stick.outer_color,
        };
        controller.max_x_value = stick.max_x_value;
        controller.max_y_value = stick.max_y_value;
        controller.return_duration = Duration::from_millis(animation.return_duration_ms);
        controller.easing = animation.easing;
        controller
    }

    /// Attaches the listener that receives move callbacks.
    pub fn set_listener(&mut self, listener: Box<dyn StickListener>) {
        self.listener = listener;
    }

    /// Detaches the current listener.
    pub fn clear_listener(&mut self) {
        self.listener = Box::new(NoopListener);
    }

    /// Recomputes geometry for new widget bounds and recenters the stick.
    ///
    /// Any drag or return animation in progress is dropped.
    pub fn configure(&mut self, width: f32, height: f32) {
        self.geometry = Geometry::from_bounds(width, height);
        self.position = self.geometry.center();
        self.drag = DragState::Idle;
        self.animation = None;
        self.redraw_requested = true;

        if self.geometry.is_degenerate() {
            warn!(
                "Degenerate stick geometry for {}x{} (max radius {}), drags disabled",
                width, height, self.geometry.max_radius
            );
        } else {
            debug!(
                "Configured stick for {}x{}: center ({}, {}), inner {}, outer {}, max {}",
                width,
                height,
                self.geometry.cx,
                self.geometry.cy,
                self.geometry.inner_radius,
                self.geometry.outer_radius,
                self.geometry.max_radius
            );
        }
    }

    /// Sets the full-deflection output for an axis.
    ///
    /// `0.0` means "not configured": no scaled callbacks fire for that axis.
    pub fn set_max_axis_value(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.max_x_value = value,
            Axis::Y => self.max_y_value = value,
        }
    }

    /// Full-deflection output for an axis (`0.0` if not configured).
    #[must_use]
    pub fn max_axis_value(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.max_x_value,
            Axis::Y => self.max_y_value,
        }
    }

    pub fn set_colors(&mut self, colors: StickColors) {
        self.colors = colors;
        self.redraw_requested = true;
    }

    #[must_use]
    pub fn colors(&self) -> StickColors {
        self.colors
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Current stick center.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Returns true once per pending repaint and clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Circles to paint for the current state.
    #[must_use]
    pub fn frame(&self) -> StickFrame {
        StickFrame {
            outer: Circle {
                center: self.geometry.center(),
                radius: self.geometry.outer_radius,
                color: self.colors.outer,
            },
            inner: Circle {
                center: self.position,
                radius: self.geometry.inner_radius,
                color: self.colors.inner,
            },
        }
    }

    /// Dispatches a pointer event to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<StickReading> {
        match event {
            PointerEvent::Down { x, y } => {
                self.on_pointer_down(x, y);
                None
            }
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Up => {
                self.on_pointer_up();
                None
            }
        }
    }

    /// Starts a drag if the pointer lands on the stick.
    ///
    /// Returns whether a drag started. A miss leaves the controller idle.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> bool {
        if self.geometry.is_degenerate() {
            debug!("Ignoring pointer down at ({}, {}): no stick geometry", x, y);
            self.drag = DragState::Idle;
            return false;
        }

        if self.geometry.hits_stick(self.position, x, y) {
            if self.animation.take().is_some() {
                debug!("Return animation cancelled by new drag");
            }
            debug!("Drag started at ({}, {})", x, y);
            self.drag = DragState::Dragging;
            true
        } else {
            trace!("Pointer down at ({}, {}) missed the stick", x, y);
            self.drag = DragState::Idle;
            false
        }
    }

    /// Moves the stick towards the pointer and reports the result.
    ///
    /// Returns `None` when no drag is active or the coordinates are not
    /// finite.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<StickReading> {
        if self.drag != DragState::Dragging {
            return None;
        }
        if !x.is_finite() || !y.is_finite() {
            warn!("Ignoring non-finite pointer move ({}, {})", x, y);
            return None;
        }

        self.animation = None;

        let clamped = self.geometry.clamp(x, y);
        self.position = clamped.position;

        let angle = normalize_degrees(clamped.angle_rad);
        let reading = StickReading {
            position: clamped.position,
            angle,
            quadrant: Quadrant::from_angle(angle),
            scaled_x: self
                .geometry
                .scale(clamped.position.x - self.geometry.cx, self.max_x_value),
            scaled_y: self
                .geometry
                .scale(self.geometry.cy - clamped.position.y, self.max_y_value),
        };

        trace!(
            "Stick at ({}, {}) angle {} {}{}",
            reading.position.x,
            reading.position.y,
            reading.angle,
            reading.quadrant,
            if clamped.clamped { " (clamped)" } else { "" }
        );

        self.emit(&reading);
        self.redraw_requested = true;
        Some(reading)
    }

    /// Ends the drag and starts the return-to-center animation.
    pub fn on_pointer_up(&mut self) {
        if self.drag != DragState::Dragging {
            return;
        }
        self.drag = DragState::Idle;
        debug!(
            "Drag released at ({}, {}), returning to center over {:?}",
            self.position.x, self.position.y, self.return_duration
        );
        self.animation = Some(ReturnAnimation::new(
            self.position,
            self.geometry.center(),
            self.return_duration,
            self.easing,
        ));
    }

    /// Advances the return animation by `elapsed`.
    ///
    /// Only the stick position changes; no listener callbacks fire. Returns
    /// whether the animation is still running afterwards.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };

        self.position = animation.advance(elapsed);
        self.redraw_requested = true;

        if animation.is_finished() {
            trace!("Stick back at center");
            self.animation = None;
            false
        } else {
            true
        }
    }

    fn emit(&mut self, reading: &StickReading) {
        self.listener.on_move(reading.position.x, reading.position.y);
        if let Some(value) = reading.scaled_x {
            self.listener.on_scaled_x(value);
        }
        if let Some(value) = reading.scaled_y {
            self.listener.on_scaled_y(value);
        }
        self.listener.on_angle(reading.angle);
        self.listener.on_quadrant(reading.quadrant);
    }
}
