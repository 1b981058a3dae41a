//! # Surface Module
//!
//! A headless host surface for the stick controller.
//!
//! This module handles:
//! - Parsing pointer scripts (resize, down, move, up, wait)
//! - Forwarding pointer events to the controller
//! - Ticking the return animation from a frame timer
//! - Consuming redraw requests

pub mod driver;
pub mod script;

pub use driver::{ScriptedSurface, SurfaceStats};
pub use script::{parse_script, SurfaceEvent};
