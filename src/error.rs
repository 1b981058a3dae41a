//! # Error Types
//!
//! Custom error types for Analog Stick using `thiserror`.
//!
//! The stick controller itself never fails; these errors only come from the
//! edges of the crate (configuration files, pointer scripts, telemetry output).

use thiserror::Error;

/// Main error type for Analog Stick
#[derive(Debug, Error)]
pub enum StickError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Malformed pointer script line
    #[error("Script error on line {line}: {message}")]
    Script {
        /// 1-based line number in the script
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Telemetry serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Analog Stick
pub type Result<T> = std::result::Result<T, StickError>;
