//! # Analog Stick Demo
//!
//! Drives an on-screen analog stick from a pointer script on stdin and logs
//! the values a host screen would display.
//!
//! # Control Flow
//!
//! 1. **Initialization**
//!    - Set up logging with tracing subscriber
//!    - Load configuration (first argument, or built-in defaults)
//!    - Build the controller and attach the readout (and optional recorder)
//!
//! 2. **Main Loop**
//!    - Read pointer script lines from stdin
//!    - Tick the return animation at the configured frame rate
//!    - Handle Ctrl+C for graceful shutdown
//!
//! # Examples
//!
//! ```bash
//! printf 'down 100 100\nmove 1000 100\nup\n' | cargo run -- config/default.toml
//! ```
//!
//! Expected output:
//! ```text
//! INFO analog_stick: Analog Stick v0.1.0 starting...
//! INFO analog_stick: X: 158 Y: 100 ScaledX: 30 ScaledY: 0 Angle: 0 Quadrant BOTTOM_RIGHT
//! INFO analog_stick: Script done: 3 events, 1 readings, 31 frames
//! ```

use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;

use analog_stick::config::Config;
use analog_stick::stick::{Quadrant, StickController, StickListener};
use analog_stick::surface::ScriptedSurface;
use analog_stick::telemetry::EventRecorder;

/// Collects one move's callbacks and logs them as a single line.
#[derive(Debug, Default)]
struct Readout {
    x: f32,
    y: f32,
    scaled_x: Option<f32>,
    scaled_y: Option<f32>,
    angle: f32,
}

impl Readout {
    fn line(&self, quadrant: Quadrant) -> String {
        let scaled = |v: Option<f32>| v.map_or_else(|| "-".to_string(), |v| (v as i32).to_string());
        format!(
            "X: {} Y: {} ScaledX: {} ScaledY: {} Angle: {} Quadrant {}",
            self.x as i32,
            self.y as i32,
            scaled(self.scaled_x),
            scaled(self.scaled_y),
            self.angle as i32,
            quadrant
        )
    }
}

impl StickListener for Readout {
    fn on_move(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.scaled_x = None;
        self.scaled_y = None;
    }

    fn on_scaled_x(&mut self, value: f32) {
        self.scaled_x = Some(value);
    }

    fn on_scaled_y(&mut self, value: f32) {
        self.scaled_y = Some(value);
    }

    fn on_angle(&mut self, degrees: f32) {
        self.angle = degrees;
    }

    fn on_quadrant(&mut self, quadrant: Quadrant) {
        info!("{}", self.line(quadrant));
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    info!("Analog Stick v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {}", path);
            Config::load(&path)?
        }
        None => Config::default(),
    };

    let mut listeners: Vec<Box<dyn StickListener>> = vec![Box::new(Readout::default())];
    if config.telemetry.enabled {
        listeners.push(Box::new(EventRecorder::create(&config.telemetry.path)?));
    }

    let mut controller = StickController::from_config(&config.stick, &config.animation);
    controller.set_listener(Box::new(listeners));
    controller.configure(config.surface.width, config.surface.height);

    let mut surface = ScriptedSurface::new(controller, config.animation.frame_rate_hz);
    info!("Reading pointer script from stdin (Ctrl+C to exit)");

    tokio::select! {
        result = surface.run(BufReader::new(tokio::io::stdin())) => {
            let stats = result?;
            info!(
                "Script done: {} events, {} readings, {} frames",
                stats.events, stats.readings, stats.frames
            );
        }

        // Handle Ctrl+C for graceful shutdown
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
    }

    Ok(())
}
