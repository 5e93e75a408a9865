//! Widget configuration.
//!
//! Every field has a default, so a configuration file only needs the keys
//! it changes:
//!
//! ```json
//! { "window_size": 9, "layout": "plain", "momentum": { "friction": 0.85 } }
//! ```

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::PinnedColor;
use crate::constants::{
    DEFAULT_INITIAL_POSITION, DEFAULT_MIN_POSITION, DEFAULT_PREWARM_MAX, DEFAULT_PREWARM_MIN,
    DEFAULT_REPEAT_INTERVAL_MS, DEFAULT_WINDOW_SIZE,
};
use crate::error::ConfigError;
use crate::evaluator::Index;
use crate::momentum::MomentumConfig;
use crate::scheduler::Millis;
use crate::viewport::{Layout, ViewportOptions, WindowSize};

/// Everything needed to build a [`Session`](crate::session::Session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub initial_position: Index,
    pub min_position: Index,
    pub window_size: usize,
    pub layout: Layout,
    /// Indices below this render as placeholders.
    pub placeholder_floor: Option<Index>,
    pub repeat_interval_ms: Millis,
    pub prewarm_min: Index,
    pub prewarm_max: Index,
    pub momentum: MomentumConfig,
    pub pinned_colors: Vec<PinnedColor>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            initial_position: DEFAULT_INITIAL_POSITION,
            min_position: DEFAULT_MIN_POSITION,
            window_size: DEFAULT_WINDOW_SIZE,
            layout: Layout::default(),
            placeholder_floor: None,
            repeat_interval_ms: DEFAULT_REPEAT_INTERVAL_MS,
            prewarm_min: DEFAULT_PREWARM_MIN,
            prewarm_max: DEFAULT_PREWARM_MAX,
            momentum: MomentumConfig::default(),
            pinned_colors: Vec::new(),
        }
    }
}

impl WidgetConfig {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cursors = WindowSize::new(self.window_size)?.cursor_range();
        if self.min_position < *cursors.start() {
            return Err(ConfigError::MinimumOutOfRange {
                min: self.min_position,
                lowest: *cursors.start(),
            });
        }
        if self.initial_position < self.min_position {
            return Err(ConfigError::InitialBelowMinimum {
                initial: self.initial_position,
                min: self.min_position,
            });
        }
        if self.initial_position > *cursors.end() {
            return Err(ConfigError::InitialAboveMaximum {
                initial: self.initial_position,
                max: *cursors.end(),
            });
        }
        self.momentum.validate()
    }

    /// Validated viewport options.
    pub fn viewport_options(&self) -> Result<ViewportOptions, ConfigError> {
        Ok(ViewportOptions {
            window: WindowSize::new(self.window_size)?,
            layout: self.layout,
            placeholder_floor: self.placeholder_floor,
        })
    }

    /// Index range to compute eagerly. Empty when the bounds are reversed.
    #[must_use]
    pub fn prewarm_range(&self) -> RangeInclusive<Index> {
        self.prewarm_min..=self.prewarm_max
    }
}
