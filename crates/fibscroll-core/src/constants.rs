//! Default tuning values for the viewer.

use crate::evaluator::Index;
use crate::scheduler::Millis;

/// Position the cursor starts at.
pub const DEFAULT_INITIAL_POSITION: Index = 0;

/// Lowest position the cursor may reach.
pub const DEFAULT_MIN_POSITION: Index = -1000;

/// Number of terms shown at once (always odd).
pub const DEFAULT_WINDOW_SIZE: usize = 7;

/// Largest accepted window size.
pub const MAX_WINDOW_SIZE: usize = 99;

/// Interval between hold-to-repeat steps.
pub const DEFAULT_REPEAT_INTERVAL_MS: Millis = 150;

/// Index range evaluated eagerly when a session starts.
pub const DEFAULT_PREWARM_MIN: Index = -50;
pub const DEFAULT_PREWARM_MAX: Index = 100;

/// Terms at or beyond this absolute index use scientific notation.
pub const SCIENTIFIC_INDEX_THRESHOLD: u64 = 60;

/// Terms whose magnitude exceeds this value use scientific notation.
pub const SCIENTIFIC_VALUE_THRESHOLD: f64 = 1e12;

/// Text shown in place of a term below the placeholder floor.
pub const PLACEHOLDER_TEXT: &str = "-";

/// Minimum swipe distance (pixels) before a gesture moves the cursor.
pub const DEFAULT_MIN_SWIPE_DISTANCE: f64 = 50.0;

/// Swipes at or below this speed (pixels/ms) step exactly once.
pub const DEFAULT_SLOW_VELOCITY: f64 = 0.1;

/// Base delay between momentum steps.
pub const DEFAULT_BASE_DELAY_MS: f64 = 100.0;

/// Offset applied before the speed-up term when deriving the momentum delay.
pub const DEFAULT_DELAY_OFFSET: f64 = 1.75;

/// Multiplier turning swipe speed into a delay reduction.
pub const DEFAULT_VELOCITY_SCALE: f64 = 5.0;

/// Upper bound of the delay reduction.
pub const DEFAULT_MAX_SPEEDUP: f64 = 0.9;

/// Fastest allowed momentum step interval.
pub const DEFAULT_MIN_DELAY_MS: f64 = 50.0;

/// Velocity multiplier applied on every momentum tick.
pub const DEFAULT_FRICTION: f64 = 0.90;

/// Momentum stops once speed falls below this value (pixels/ms).
pub const DEFAULT_STOP_VELOCITY: f64 = 0.01;

/// Safety cap on momentum ticks per run.
pub const DEFAULT_MAX_MOMENTUM_TICKS: u32 = 50;

/// Exit codes for the `fibscroll` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
