//! # fibscroll-core
//!
//! Core library for the FibScroll sequence viewer: a memoized bidirectional
//! Fibonacci evaluator, position-dependent colour schemes, viewport building,
//! and the hold-to-repeat / momentum navigation state machines driven by a
//! virtual timer scheduler.

pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod momentum;
pub mod navigation;
pub mod scheduler;
pub mod session;
pub mod viewport;

// Re-exports
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use color::{Color, ColorMapper, ColorScheme, PinnedColor};
pub use config::WidgetConfig;
pub use constants::exit_codes;
pub use error::ConfigError;
pub use evaluator::{Index, Sequence, SequenceEvaluator, Term};
pub use format::format_term;
pub use momentum::{GestureOutcome, GestureSample, MomentumConfig, MomentumScroller};
pub use navigation::{Direction, InputSource, NavKey, NavigationController};
pub use scheduler::{Millis, Scheduler, TimerHandle};
pub use session::{Frame, Session};
pub use viewport::{
    build_viewport, Layout, Marker, Role, TermCell, ViewportEntry, ViewportOptions, WindowSize,
};
