//! JSONL recorder for stick listener callbacks.
//!
//! Each callback becomes one line:
//!
//! ```text
//! {"timestamp":"2026-10-18T12:00:00.000Z","event":"move","x":158.75,"y":100.0}
//! {"timestamp":"2026-10-18T12:00:00.000Z","event":"scaled_x","value":30.0}
//! {"timestamp":"2026-10-18T12:00:00.000Z","event":"angle","degrees":0.0}
//! {"timestamp":"2026-10-18T12:00:00.000Z","event":"quadrant","quadrant":"BOTTOM_RIGHT"}
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::stick::listener::StickListener;
use crate::stick::quadrant::Quadrant;

/// One listener callback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StickEvent {
    Move { x: f32, y: f32 },
    ScaledX { value: f32 },
    ScaledY { value: f32 },
    Angle { degrees: f32 },
    Quadrant { quadrant: Quadrant },
}

/// A [`StickEvent`] with the wall-clock time it was recorded.
#[derive(Debug, Clone, Serialize)]
pub struct StickRecord {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: StickEvent,
}

fn serialize_timestamp<S>(ts: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Listener that appends every callback to a JSONL sink.
///
/// Write errors are logged once and recording stops; the drag itself is
/// never interrupted.
///
/// # Examples
///
/// ```
/// use analog_stick::stick::StickListener;
/// use analog_stick::telemetry::EventRecorder;
///
/// let mut recorder = EventRecorder::new(Vec::new());
/// recorder.on_angle(45.0);
/// assert_eq!(recorder.records_written(), 1);
///
/// let output = String::from_utf8(recorder.into_inner()).unwrap();
/// assert!(output.contains("\"event\":\"angle\""));
/// ```
#[derive(Debug)]
pub struct EventRecorder<W: Write> {
    writer: W,
    records_written: u64,
    failed: bool,
}

impl EventRecorder<BufWriter<File>> {
    /// Creates (or truncates) a JSONL file at `path`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        info!("Recording stick events to {}", path.as_ref().display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventRecorder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records_written: 0,
            failed: false,
        }
    }

    /// Number of records successfully written.
    #[must_use]
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Whether a write error has stopped recording.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Writes one event stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the write fails.
    pub fn record(&mut self, event: StickEvent) -> Result<()> {
        let record = StickRecord {
            timestamp: Utc::now(),
            event,
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        self.records_written += 1;
        Ok(())
    }

    /// Flushes buffered records to the sink.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying flush fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Consumes the recorder and returns the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn record_or_disable(&mut self, event: StickEvent) {
        if self.failed {
            return;
        }
        if let Err(e) = self.record(event) {
            warn!("Failed to record stick event, recording stopped: {}", e);
            self.failed = true;
        }
    }
}

impl<W: Write> StickListener for EventRecorder<W> {
    fn on_move(&mut self, x: f32, y: f32) {
        self.record_or_disable(StickEvent::Move { x, y });
    }

    fn on_scaled_x(&mut self, value: f32) {
        self.record_or_disable(StickEvent::ScaledX { value });
    }

    fn on_scaled_y(&mut self, value: f32) {
        self.record_or_disable(StickEvent::ScaledY { value });
    }

    fn on_angle(&mut self, degrees: f32) {
        self.record_or_disable(StickEvent::Angle { degrees });
    }

    fn on_quadrant(&mut self, quadrant: Quadrant) {
        self.record_or_disable(StickEvent::Quadrant { quadrant });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stick::controller::{Axis, StickController};
    use std::io;
    use std::rc::Rc;
    use std::cell::RefCell;

    /// Sink shared between the test and a recorder owned by the controller.
    #[derive(Clone, Default)]
    struct SharedSink(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "Mock write error"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(sink: &SharedSink) -> Vec<serde_json::Value> {
        String::from_utf8(sink.0.borrow().clone())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_record_format() {
        let sink = SharedSink::default();
        let mut recorder = EventRecorder::new(sink.clone());
        recorder.record(StickEvent::Move { x: 1.5, y: 2.0 }).unwrap();

        let records = lines(&sink);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["event"], "move");
        assert_eq!(records[0]["x"], 1.5);
        assert_eq!(records[0]["y"], 2.0);
        let ts = records[0]["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn test_quadrant_record() {
        let sink = SharedSink::default();
        let mut recorder = EventRecorder::new(sink.clone());
        recorder.on_quadrant(Quadrant::TopLeft);

        let records = lines(&sink);
        assert_eq!(records[0]["event"], "quadrant");
        assert_eq!(records[0]["quadrant"], "TOP_LEFT");
    }

    #[test]
    fn test_records_controller_callbacks_in_order() {
        let sink = SharedSink::default();
        let mut stick = StickController::new();
        stick.configure(200.0, 200.0);
        stick.set_max_axis_value(Axis::X, 30.0);
        stick.set_max_axis_value(Axis::Y, 30.0);
        stick.set_listener(Box::new(EventRecorder::new(sink.clone())));

        stick.on_pointer_down(100.0, 100.0);
        stick.on_pointer_move(1000.0, 100.0);

        let events: Vec<String> = lines(&sink)
            .iter()
            .map(|r| r["event"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(events, ["move", "scaled_x", "scaled_y", "angle", "quadrant"]);
    }

    #[test]
    fn test_write_failure_disables_recording() {
        let mut recorder = EventRecorder::new(FailingSink);
        recorder.on_move(1.0, 2.0);
        assert!(recorder.has_failed());
        recorder.on_angle(10.0);
        assert_eq!(recorder.records_written(), 0);
    }

    #[test]
    fn test_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");

        let mut recorder = EventRecorder::create(&path).unwrap();
        recorder.on_scaled_y(-12.5);
        recorder.flush().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("\"event\":\"scaled_y\""));
        assert!(contents.contains("-12.5"));
    }
}
