//! Configuration errors.
//!
//! Core operations never fail: the evaluator is total and navigation clamps
//! at its bounds. Only building a session from a configuration can be
//! rejected.

use std::path::PathBuf;

/// Error type for invalid or unreadable configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The window must have a single centre item.
    #[error("window size must be odd, got {0}")]
    EvenWindow(usize),

    /// The window is empty or too large to render.
    #[error("window size must be between 1 and {max}, got {got}")]
    WindowOutOfRange { got: usize, max: usize },

    /// The cursor would start outside its allowed range.
    #[error("initial position {initial} is below the minimum position {min}")]
    InitialBelowMinimum { initial: i64, min: i64 },

    /// The window around the starting cursor would run past the largest index.
    #[error("initial position {initial} is above the maximum position {max}")]
    InitialAboveMaximum { initial: i64, max: i64 },

    /// The window around the lowest cursor would run past the smallest index.
    #[error("minimum position {min} is below the lowest usable position {lowest}")]
    MinimumOutOfRange { min: i64, lowest: i64 },

    /// Friction must shrink velocity without flipping it.
    #[error("friction factor must be in (0, 1), got {0}")]
    InvalidFriction(f64),

    /// Any other out-of-range momentum setting.
    #[error("invalid momentum setting: {0}")]
    InvalidMomentum(String),

    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
