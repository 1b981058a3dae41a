//! # Telemetry Module
//!
//! Records stick output to JSONL (JSON Lines) files.
//!
//! This module handles:
//! - Turning listener callbacks into timestamped [`StickEvent`] records
//! - Writing one JSON object per line to any [`std::io::Write`] sink
//! - Disabling itself on the first write failure instead of panicking

pub mod recorder;

pub use recorder::{EventRecorder, StickEvent, StickRecord};
