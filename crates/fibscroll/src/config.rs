//! Application configuration from CLI flags and environment.
//!
//! Flags override the JSON file given with `--config`, which overrides the
//! built-in defaults.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fibscroll_core::{ConfigError, Layout, WidgetConfig};
use fibscroll_tui::model::DEFAULT_PIXELS_PER_ROW;

/// Layout names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Terms only.
    Plain,
    /// `F(n-2) + F(n-1) = F(n)` markers around the centre.
    Equation,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Plain => Self::Plain,
            LayoutArg::Equation => Self::Equation,
        }
    }
}

/// FibScroll: scroll through the Fibonacci sequence in both directions.
#[derive(Parser, Debug)]
#[command(name = "fibscroll", version, about)]
pub struct AppConfig {
    /// Starting position (term index).
    #[arg(short, long, env = "FIBSCROLL_POSITION", allow_negative_numbers = true)]
    pub position: Option<i64>,

    /// Lowest reachable position.
    #[arg(long, allow_negative_numbers = true)]
    pub min_position: Option<i64>,

    /// Number of terms shown (odd).
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Arrangement of the terms.
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Show a placeholder instead of terms below this index.
    #[arg(long, allow_negative_numbers = true)]
    pub floor: Option<i64>,

    /// Hold-to-repeat interval in milliseconds.
    #[arg(long)]
    pub repeat_ms: Option<u64>,

    /// Momentum friction factor in (0, 1).
    #[arg(long)]
    pub friction: Option<f64>,

    /// JSON configuration file.
    #[arg(long, env = "FIBSCROLL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the viewport and colours instead of starting the TUI.
    #[arg(long)]
    pub print: bool,

    /// With --print, output only the centre term.
    #[arg(short, long)]
    pub quiet: bool,

    /// Pixel height of a terminal row when measuring drag swipes.
    #[arg(long, default_value_t = DEFAULT_PIXELS_PER_ROW)]
    pub pixels_per_row: f64,

    /// Never open the informational overlay at startup.
    #[arg(long)]
    pub no_overlay: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build the widget configuration: file (if any), then flags.
    pub fn widget_config(&self) -> Result<WidgetConfig, ConfigError> {
        let mut widget = match &self.config {
            Some(path) => WidgetConfig::from_path(path)?,
            None => WidgetConfig::default(),
        };
        if let Some(position) = self.position {
            widget.initial_position = position;
        }
        if let Some(min) = self.min_position {
            widget.min_position = min;
        }
        if let Some(window) = self.window {
            widget.window_size = window;
        }
        if let Some(layout) = self.layout {
            widget.layout = layout.into();
        }
        if self.floor.is_some() {
            widget.placeholder_floor = self.floor;
        }
        if let Some(repeat) = self.repeat_ms {
            widget.repeat_interval_ms = repeat;
        }
        if let Some(friction) = self.friction {
            widget.momentum.friction = friction;
        }
        widget.validate()?;
        Ok(widget)
    }
}
