//! # Analog Stick Library
//!
//! An on-screen analog joystick controller.
//!
//! This library tracks a pointer drag of an inner circle inside an outer
//! track, clamps it to a maximum radius, and reports the position, scaled
//! axis values, angle and quadrant. On release the stick animates back to
//! center. Rendering is left to the host, which reads a [`stick::StickFrame`]
//! whenever the controller requests a redraw.

pub mod config;
pub mod error;
pub mod stick;
pub mod surface;
pub mod telemetry;
