//! # Stick Module
//!
//! The on-screen analog stick: two concentric circles, the inner one dragged
//! by the pointer within a bounded radius of the outer one.
//!
//! This module handles:
//! - Sizing the circles from the widget's bounds
//! - Hit testing and clamping pointer positions
//! - Reporting raw position, scaled axes, angle and quadrant
//! - Animating the stick back to center on release

pub mod animation;
pub mod color;
pub mod controller;
pub mod geometry;
pub mod listener;
pub mod quadrant;

pub use controller::{Axis, DragState, PointerEvent, StickController, StickFrame, StickReading};
pub use listener::{NoopListener, StickListener};
pub use quadrant::Quadrant;
