//! Time sources for driving the scheduler.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::scheduler::Millis;

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> Millis;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

/// Manually driven clock for deterministic tests.
///
/// Clones share the same time, so a test can keep one handle while the
/// code under test owns another.
///
/// # Example
/// ```
/// use fibscroll_core::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(150);
/// assert_eq!(clock.now_ms(), 150);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Millis>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to `now`. Earlier times are ignored.
    pub fn set(&self, now: Millis) {
        self.now.set(self.now.get().max(now));
    }

    pub fn advance(&self, by: Millis) {
        self.now.set(self.now.get().saturating_add(by));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}
