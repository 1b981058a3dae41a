//! Pointer script parsing.
//!
//! A script is plain text with one command per line:
//!
//! | Command | Meaning |
//! |---------|---------|
//! | `resize <w> <h>` | Surface bounds changed |
//! | `down <x> <y>` | Pointer pressed |
//! | `move <x> <y>` | Pointer dragged |
//! | `up` | Pointer released |
//! | `wait <ms>` | Let time pass (the return animation keeps running) |
//!
//! Blank lines and anything after `#` are ignored.
//!
//! ```
//! use analog_stick::surface::script::{parse_script, SurfaceEvent};
//!
//! let events = parse_script("resize 200 200\ndown 100 100 # grab\nup\n")?;
//! assert_eq!(events.len(), 3);
//! assert!(matches!(events[0], SurfaceEvent::Resize { .. }));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use crate::error::{Result, StickError};
use crate::stick::controller::PointerEvent;

/// One step of host input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    Resize { width: f32, height: f32 },
    Pointer(PointerEvent),
    Wait(Duration),
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns [`StickError::Script`] for the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<SurfaceEvent>> {
    let mut events = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(event) = parse_line(line, index + 1)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Parses a single line; `Ok(None)` for blank or comment-only lines.
///
/// # Errors
///
/// Returns [`StickError::Script`] carrying `line_no` if the line is malformed.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<SurfaceEvent>> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let mut parts = content.split_whitespace();
    let command = parts.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    let err = |message: String| StickError::Script {
        line: line_no,
        message,
    };

    let event = match command.as_str() {
        "resize" => {
            let [width, height] = coordinates(&command, &args).map_err(err)?;
            SurfaceEvent::Resize { width, height }
        }
        "down" => {
            let [x, y] = coordinates(&command, &args).map_err(err)?;
            SurfaceEvent::Pointer(PointerEvent::Down { x, y })
        }
        "move" => {
            let [x, y] = coordinates(&command, &args).map_err(err)?;
            SurfaceEvent::Pointer(PointerEvent::Move { x, y })
        }
        "up" => {
            if !args.is_empty() {
                return Err(err("'up' takes no arguments".to_string()));
            }
            SurfaceEvent::Pointer(PointerEvent::Up)
        }
        "wait" => match args.as_slice() {
            [ms] => {
                let ms: u64 = ms
                    .parse()
                    .map_err(|_| err(format!("invalid wait duration '{}'", ms)))?;
                SurfaceEvent::Wait(Duration::from_millis(ms))
            }
            _ => return Err(err("'wait' expects <ms>".to_string())),
        },
        other => return Err(err(format!("unknown command '{}'", other))),
    };

    Ok(Some(event))
}

fn coordinates(command: &str, args: &[&str]) -> std::result::Result<[f32; 2], String> {
    let [a, b] = args else {
        return Err(format!("'{}' expects two numbers", command));
    };
    let parse = |s: &str| {
        s.parse::<f32>()
            .map_err(|_| format!("invalid number '{}' for '{}'", s, command))
    };
    Ok([parse(*a)?, parse(*b)?])
}
