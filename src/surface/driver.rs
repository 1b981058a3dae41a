//! Event loop for the scripted host surface.
//!
//! One `tokio::select!` loop multiplexes three sources on the current thread:
//! - the next line of the pointer script
//! - the end of a `wait` step
//! - a frame interval that ticks the return animation while it runs
//!
//! Pointer events and animation ticks never overlap, so the controller needs
//! no locking. Starting a new drag cancels the animation inside the
//! controller before the following move is processed.

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{interval, sleep_until, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use super::script::{parse_line, SurfaceEvent};
use crate::error::Result;
use crate::stick::controller::{PointerEvent, StickController};

/// Counters collected while driving the controller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceStats {
    /// Script events applied.
    pub events: u64,
    /// Accepted pointer moves.
    pub readings: u64,
    /// Repaints performed.
    pub frames: u64,
    /// Animation ticks delivered.
    pub animation_ticks: u64,
}

/// Host adapter that feeds a pointer script into a [`StickController`].
///
/// Repainting is simulated: every redraw request is consumed and logged at
/// trace level with the circles that would be painted.
#[derive(Debug)]
pub struct ScriptedSurface {
    controller: StickController,
    frame_period: Duration,
    stats: SurfaceStats,
}

impl ScriptedSurface {
    /// Wraps a controller, ticking animations at `frame_rate_hz`.
    #[must_use]
    pub fn new(controller: StickController, frame_rate_hz: u32) -> Self {
        Self {
            controller,
            frame_period: Duration::from_secs_f64(1.0 / f64::from(frame_rate_hz.max(1))),
            stats: SurfaceStats::default(),
        }
    }

    #[must_use]
    pub fn controller(&self) -> &StickController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut StickController {
        &mut self.controller
    }

    #[must_use]
    pub fn stats(&self) -> SurfaceStats {
        self.stats
    }

    #[must_use]
    pub fn frame_period(&self) -> Duration {
        self.frame_period
    }

    /// Applies one event to the controller and repaints if needed.
    ///
    /// Returns the requested pause for `wait` events.
    pub fn apply(&mut self, event: SurfaceEvent) -> Option<Duration> {
        self.stats.events += 1;
        let wait = match event {
            SurfaceEvent::Resize { width, height } => {
                self.controller.configure(width, height);
                None
            }
            SurfaceEvent::Pointer(pointer) => {
                if self.controller.handle_pointer(pointer).is_some() {
                    self.stats.readings += 1;
                }
                if pointer == PointerEvent::Up {
                    trace!("Pointer released");
                }
                None
            }
            SurfaceEvent::Wait(duration) => Some(duration),
        };
        self.present();
        wait
    }

    /// Runs the script from `reader` to completion.
    ///
    /// After the last line the loop keeps ticking until any return animation
    /// has finished.
    ///
    /// # Errors
    ///
    /// Returns error if reading fails or a line is malformed.
    pub async fn run<R>(&mut self, reader: R) -> Result<SurfaceStats>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();
        let mut frames = interval(self.frame_period);
        frames.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut last_frame = Instant::now();
        let mut wait_until: Option<Instant> = None;
        let mut input_done = false;
        let mut line_no = 0;

        loop {
            if input_done && wait_until.is_none() && !self.controller.is_animating() {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if !input_done && wait_until.is_none() => {
                    let Some(line) = line? else {
                        debug!("Pointer script finished after {} lines", line_no);
                        input_done = true;
                        continue;
                    };
                    line_no += 1;

                    let Some(event) = parse_line(&line, line_no)? else {
                        continue;
                    };

                    let was_animating = self.controller.is_animating();
                    if let Some(pause) = self.apply(event) {
                        wait_until = Some(Instant::now() + pause);
                    }
                    if self.controller.is_animating() && !was_animating {
                        // Measure the first frame from the release, not from the last tick.
                        frames.reset();
                        last_frame = Instant::now();
                    }
                }

                _ = sleep_until(wait_until.unwrap_or_else(Instant::now)), if wait_until.is_some() => {
                    wait_until = None;
                }

                now = frames.tick(), if self.controller.is_animating() => {
                    let elapsed = now.saturating_duration_since(last_frame);
                    last_frame = now;
                    self.controller.tick(elapsed);
                    self.stats.animation_ticks += 1;
                    self.present();
                }
            }
        }

        Ok(self.stats)
    }

    fn present(&mut self) {
        if self.controller.take_redraw_request() {
            self.stats.frames += 1;
            let frame = self.controller.frame();
            trace!(
                "Paint outer ({}, {}) r={} {}, inner ({}, {}) r={} {}",
                frame.outer.center.x,
                frame.outer.center.y,
                frame.outer.radius,
                frame.outer.color,
                frame.inner.center.x,
                frame.inner.center.y,
                frame.inner.radius,
                frame.inner.color
            );
        }
    }
}
