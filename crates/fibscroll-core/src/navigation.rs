//! Cursor ownership, discrete steps, and hold-to-repeat.
//!
//! The controller is the only place the cursor changes. Both bounds are
//! enforced inside every step. Continuous motion is one repeating timer at a
//! time; each held input source keeps its own handle, so releasing one
//! source only stops motion it started.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::evaluator::Index;
use crate::scheduler::{Millis, Scheduler, TimerHandle};

/// Direction of a step. `Up` moves toward lower indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

/// Navigation keys that can be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl NavKey {
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::ArrowUp | Self::ArrowLeft => Direction::Up,
            Self::ArrowDown | Self::ArrowRight => Direction::Down,
        }
    }
}

/// A physical input that can request continuous motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Mouse button held on a control.
    Pointer,
    /// Touch held on a control.
    Touch,
    Key(NavKey),
}

#[derive(Debug, Clone, Copy)]
struct ActiveRepeat {
    handle: TimerHandle,
    direction: Direction,
}

/// Owns the cursor position.
#[derive(Debug, Clone)]
pub struct NavigationController {
    cursor: Index,
    min_position: Index,
    max_position: Index,
    initial_position: Index,
    repeat_interval: Millis,
    active: Option<ActiveRepeat>,
    held: HashMap<InputSource, TimerHandle>,
}

impl NavigationController {
    /// Create a controller. `initial_position` is clamped to `min_position`.
    #[must_use]
    pub fn new(initial_position: Index, min_position: Index, repeat_interval: Millis) -> Self {
        let initial_position = initial_position.max(min_position);
        Self {
            cursor: initial_position,
            min_position,
            max_position: Index::MAX,
            initial_position,
            repeat_interval,
            active: None,
            held: HashMap::new(),
        }
    }

    /// Cap the cursor at `max_position`, clamping the current and initial
    /// positions into `min_position..=max_position`.
    #[must_use]
    pub fn with_max_position(mut self, max_position: Index) -> Self {
        self.max_position = max_position.max(self.min_position);
        self.initial_position = self.initial_position.min(self.max_position);
        self.cursor = self.cursor.min(self.max_position);
        self
    }

    #[must_use]
    pub fn cursor(&self) -> Index {
        self.cursor
    }

    #[must_use]
    pub fn min_position(&self) -> Index {
        self.min_position
    }

    #[must_use]
    pub fn max_position(&self) -> Index {
        self.max_position
    }

    #[must_use]
    pub fn initial_position(&self) -> Index {
        self.initial_position
    }

    #[must_use]
    pub fn at_lower_bound(&self) -> bool {
        self.cursor <= self.min_position
    }

    #[must_use]
    pub fn at_upper_bound(&self) -> bool {
        self.cursor >= self.max_position
    }

    /// Direction of the running repeat, if any.
    #[must_use]
    pub fn continuous_direction(&self) -> Option<Direction> {
        self.active.map(|a| a.direction)
    }

    /// Whether `source` is currently held.
    #[must_use]
    pub fn is_held(&self, source: InputSource) -> bool {
        self.held.contains_key(&source)
    }

    /// Move one step toward lower indices. No-op at the lower bound.
    pub fn step_up(&mut self) -> bool {
        if self.cursor > self.min_position {
            self.cursor -= 1;
            trace!(cursor = self.cursor, "step up");
            true
        } else {
            false
        }
    }

    /// Move one step toward higher indices. No-op at the upper bound.
    pub fn step_down(&mut self) -> bool {
        if self.cursor < self.max_position {
            self.cursor += 1;
            trace!(cursor = self.cursor, "step down");
            true
        } else {
            false
        }
    }

    /// Step once in `direction`. Returns whether the cursor moved.
    pub fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.step_up(),
            Direction::Down => self.step_down(),
        }
    }

    /// Step once now, then every repeat interval until stopped.
    ///
    /// Any running repeat is cancelled first, so starting twice never leaves
    /// two timers behind.
    pub fn start_continuous(&mut self, direction: Direction, scheduler: &mut Scheduler) -> bool {
        self.cancel_active(scheduler);
        let moved = self.step(direction);
        let handle = scheduler.schedule_repeating(self.repeat_interval);
        self.active = Some(ActiveRepeat { handle, direction });
        debug!(?direction, interval = self.repeat_interval, "continuous scroll started");
        moved
    }

    /// Stop the running repeat. Safe when nothing is running.
    pub fn stop_continuous(&mut self, scheduler: &mut Scheduler) {
        if self.cancel_active(scheduler) {
            debug!("continuous scroll stopped");
        }
    }

    /// Begin holding `source`.
    ///
    /// Ignored while `source` is already held (keyboard auto-repeat), and
    /// for a hold that starts at the bound it moves toward.
    pub fn press(
        &mut self,
        source: InputSource,
        direction: Direction,
        scheduler: &mut Scheduler,
    ) -> bool {
        if self.held.contains_key(&source) {
            return false;
        }
        let blocked = match direction {
            Direction::Up => self.at_lower_bound(),
            Direction::Down => self.at_upper_bound(),
        };
        if blocked {
            return false;
        }
        let moved = self.start_continuous(direction, scheduler);
        if let Some(active) = self.active {
            self.held.insert(source, active.handle);
        }
        moved
    }

    /// Stop holding `source`. Cancels only the repeat `source` started, and
    /// clears the running repeat only if it is that one.
    pub fn release(&mut self, source: InputSource, scheduler: &mut Scheduler) {
        let Some(handle) = self.held.remove(&source) else {
            return;
        };
        scheduler.cancel(handle);
        if self.active.is_some_and(|a| a.handle == handle) {
            self.active = None;
            debug!(?source, "continuous scroll released");
        }
    }

    /// Stop all motion and return to the initial position.
    pub fn reset(&mut self, scheduler: &mut Scheduler) -> bool {
        self.cancel_active(scheduler);
        for (_, handle) in self.held.drain() {
            scheduler.cancel(handle);
        }
        let changed = self.cursor != self.initial_position;
        self.cursor = self.initial_position;
        debug!(cursor = self.cursor, "navigation reset");
        changed
    }

    /// Whether `handle` belongs to this controller's running repeat.
    #[must_use]
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.active.is_some_and(|a| a.handle == handle)
    }

    /// Handle a fired timer. Returns `None` if the timer is not ours,
    /// otherwise whether the cursor moved.
    pub fn on_timer(&mut self, handle: TimerHandle) -> Option<bool> {
        let active = self.active.filter(|a| a.handle == handle)?;
        Some(self.step(active.direction))
    }

    fn cancel_active(&mut self, scheduler: &mut Scheduler) -> bool {
        match self.active.take() {
            Some(active) => scheduler.cancel(active.handle),
            None => false,
        }
    }
}
