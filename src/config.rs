//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.
//!
//! Every section and field has a default, so an empty file is a valid
//! configuration.

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Result, StickError};
use crate::stick::animation::Easing;
use crate::stick::color::Color;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub stick: StickConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub surface: SurfaceConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Stick appearance and output scaling
#[derive(Debug, Deserialize, Clone)]
pub struct StickConfig {
    #[serde(default = "default_inner_color")]
    pub inner_color: Color,

    #[serde(default = "default_outer_color")]
    pub outer_color: Color,

    /// Scaled X at full right deflection; 0 disables scaled X output.
    #[serde(default)]
    pub max_x_value: f32,

    /// Scaled Y at full upward deflection; 0 disables scaled Y output.
    #[serde(default)]
    pub max_y_value: f32,
}

/// Return-to-center animation configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AnimationConfig {
    #[serde(default = "default_return_duration_ms")]
    pub return_duration_ms: u64,

    #[serde(default = "default_frame_rate_hz")]
    pub frame_rate_hz: u32,

    #[serde(default)]
    pub easing: Easing,
}

/// Initial bounds of the demo surface
#[derive(Debug, Deserialize, Clone)]
pub struct SurfaceConfig {
    #[serde(default = "default_surface_size")]
    pub width: f32,

    #[serde(default = "default_surface_size")]
    pub height: f32,
}

/// Telemetry configuration
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_telemetry_path")]
    pub path: String,
}

// Default value functions
fn default_inner_color() -> Color { Color::HOLO_BLUE_BRIGHT }
fn default_outer_color() -> Color { Color::DARKER_GRAY }

fn default_return_duration_ms() -> u64 { 500 }
fn default_frame_rate_hz() -> u32 { 60 }

fn default_surface_size() -> f32 { 200.0 }

fn default_telemetry_path() -> String { "./stick-events.jsonl".to_string() }

impl Default for StickConfig {
    fn default() -> Self {
        Self {
            inner_color: default_inner_color(),
            outer_color: default_outer_color(),
            max_x_value: 0.0,
            max_y_value: 0.0,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            return_duration_ms: default_return_duration_ms(),
            frame_rate_hz: default_frame_rate_hz(),
            easing: Easing::default(),
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_size(),
            height: default_surface_size(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_telemetry_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use analog_stick::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a TOML string
    ///
    /// # Examples
    ///
    /// ```
    /// use analog_stick::config::Config;
    ///
    /// let config = Config::parse("[stick]\nmax_x_value = 30.0\n")?;
    /// assert_eq!(config.stick.max_x_value, 30.0);
    /// assert_eq!(config.animation.return_duration_ms, 500);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    fn validate(&self) -> Result<()> {
        // Validate axis scales
        for (name, value) in [
            ("max_x_value", self.stick.max_x_value),
            ("max_y_value", self.stick.max_y_value),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(StickError::Config(
                    toml::de::Error::custom(format!("{} must be a finite value >= 0", name))
                ));
            }
        }

        // Validate animation timing
        if self.animation.return_duration_ms == 0 || self.animation.return_duration_ms > 10000 {
            return Err(StickError::Config(
                toml::de::Error::custom("return_duration_ms must be between 1 and 10000")
            ));
        }

        if self.animation.frame_rate_hz == 0 || self.animation.frame_rate_hz > 240 {
            return Err(StickError::Config(
                toml::de::Error::custom("frame_rate_hz must be between 1 and 240")
            ));
        }

        // Surface bounds may be degenerate but must be numbers
        if !self.surface.width.is_finite() || !self.surface.height.is_finite() {
            return Err(StickError::Config(
                toml::de::Error::custom("surface width and height must be finite")
            ));
        }

        // Validate telemetry configuration
        if self.telemetry.enabled && self.telemetry.path.is_empty() {
            return Err(StickError::Config(
                toml::de::Error::custom("telemetry path cannot be empty when enabled")
            ));
        }

        Ok(())
    }
}
