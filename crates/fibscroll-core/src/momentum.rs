//! Swipe gestures and momentum decay.
//!
//! A finished gesture becomes nothing, one step, or a momentum run: an
//! immediate step followed by a repeating tick that multiplies the speed by
//! the friction factor and steps once per tick until the speed decays, the
//! tick cap is reached, or the cursor hits a bound.
//!
//! Positive swipe distance (finger moving down the screen) moves the cursor
//! `Up`, toward lower indices. The direction is fixed when the run starts;
//! only the speed decays.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    DEFAULT_BASE_DELAY_MS, DEFAULT_DELAY_OFFSET, DEFAULT_FRICTION, DEFAULT_MAX_MOMENTUM_TICKS,
    DEFAULT_MAX_SPEEDUP, DEFAULT_MIN_DELAY_MS, DEFAULT_MIN_SWIPE_DISTANCE, DEFAULT_SLOW_VELOCITY,
    DEFAULT_STOP_VELOCITY, DEFAULT_VELOCITY_SCALE,
};
use crate::error::ConfigError;
use crate::navigation::{Direction, NavigationController};
use crate::scheduler::{Millis, Scheduler, TimerHandle};

/// Tuning for gesture classification and decay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumConfig {
    /// Shorter swipes are ignored (pixels).
    pub min_swipe_distance: f64,
    /// Swipes at or below this speed step once (pixels/ms).
    pub slow_velocity: f64,
    /// Base of the step-interval formula (ms).
    pub base_delay_ms: f64,
    /// Offset the speed-up is subtracted from.
    pub delay_offset: f64,
    /// Speed to speed-up multiplier.
    pub velocity_scale: f64,
    /// Largest speed-up subtracted from the offset.
    pub max_speedup: f64,
    /// Floor of the step interval (ms).
    pub min_delay_ms: f64,
    /// Speed multiplier per tick, in `(0, 1)`.
    pub friction: f64,
    /// The run ends once speed falls below this (pixels/ms).
    pub stop_velocity: f64,
    /// Safety cap on ticks per run.
    pub max_ticks: u32,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
            slow_velocity: DEFAULT_SLOW_VELOCITY,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
            delay_offset: DEFAULT_DELAY_OFFSET,
            velocity_scale: DEFAULT_VELOCITY_SCALE,
            max_speedup: DEFAULT_MAX_SPEEDUP,
            min_delay_ms: DEFAULT_MIN_DELAY_MS,
            friction: DEFAULT_FRICTION,
            stop_velocity: DEFAULT_STOP_VELOCITY,
            max_ticks: DEFAULT_MAX_MOMENTUM_TICKS,
        }
    }
}

impl MomentumConfig {
    /// Reject settings that would stall or reverse a run.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(ConfigError::InvalidFriction(self.friction));
        }
        if !(self.min_swipe_distance > 0.0) {
            return Err(ConfigError::InvalidMomentum(format!(
                "min_swipe_distance must be positive, got {}",
                self.min_swipe_distance
            )));
        }
        if !(self.stop_velocity > 0.0) {
            return Err(ConfigError::InvalidMomentum(format!(
                "stop_velocity must be positive, got {}",
                self.stop_velocity
            )));
        }
        if !(self.min_delay_ms >= 1.0) {
            return Err(ConfigError::InvalidMomentum(format!(
                "min_delay_ms must be at least 1, got {}",
                self.min_delay_ms
            )));
        }
        if self.max_ticks == 0 {
            return Err(ConfigError::InvalidMomentum(
                "max_ticks must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Interval between momentum steps for a swipe of `speed` pixels/ms.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step_interval(&self, speed: f64) -> Millis {
        let speedup = (speed.abs() * self.velocity_scale).min(self.max_speedup);
        let delay = (self.base_delay_ms * (self.delay_offset - speedup)).max(self.min_delay_ms);
        delay.round() as Millis
    }
}

/// Start and end of one touch interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub start_position: f64,
    pub start_time: Millis,
    pub end_position: f64,
    pub end_time: Millis,
}

impl GestureSample {
    /// Signed distance; positive means the pointer moved down.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.end_position - self.start_position
    }

    /// Duration in ms, or `None` when the end is not after the start.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn duration(&self) -> Option<f64> {
        (self.end_time > self.start_time).then(|| (self.end_time - self.start_time) as f64)
    }

    /// Signed speed in pixels/ms.
    #[must_use]
    pub fn velocity(&self) -> Option<f64> {
        self.duration().map(|d| self.distance() / d)
    }
}

/// What a finished gesture did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Too short, too brief, or no gesture in progress.
    Ignored,
    /// Slow swipe: exactly one step.
    Step(Direction),
    /// Fast swipe: an immediate step plus a momentum run.
    Momentum { direction: Direction, interval: Millis },
    /// The swipe pointed past a cursor bound; nothing moved.
    AtBoundary,
}

/// A momentum run in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumState {
    pub direction: Direction,
    /// Speed magnitude; never negative.
    pub velocity: f64,
    pub friction: f64,
    pub interval: Millis,
    pub ticks: u32,
    handle: TimerHandle,
}

/// Turns swipes into navigation steps over time.
#[derive(Debug, Clone, Default)]
pub struct MomentumScroller {
    config: MomentumConfig,
    state: Option<MomentumState>,
    pending: Option<(f64, Millis)>,
}

impl MomentumScroller {
    #[must_use]
    pub fn new(config: MomentumConfig) -> Self {
        Self {
            config,
            state: None,
            pending: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MomentumConfig {
        &self.config
    }

    /// The run in flight, if any.
    #[must_use]
    pub fn state(&self) -> Option<&MomentumState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    /// Whether a gesture has begun and not yet ended.
    #[must_use]
    pub fn gesture_in_progress(&self) -> bool {
        self.pending.is_some()
    }

    /// Record the start of a gesture. Cancels any run in flight.
    pub fn begin_gesture(&mut self, position: f64, time: Millis, scheduler: &mut Scheduler) {
        self.cancel(scheduler);
        self.pending = Some((position, time));
    }

    /// Finish the gesture begun with [`begin_gesture`](Self::begin_gesture).
    pub fn end_gesture(
        &mut self,
        position: f64,
        time: Millis,
        nav: &mut NavigationController,
        scheduler: &mut Scheduler,
    ) -> GestureOutcome {
        let Some((start_position, start_time)) = self.pending.take() else {
            return GestureOutcome::Ignored;
        };
        let sample = GestureSample {
            start_position,
            start_time,
            end_position: position,
            end_time: time,
        };
        self.on_gesture_end(&sample, nav, scheduler)
    }

    /// Classify a finished gesture and act on it.
    pub fn on_gesture_end(
        &mut self,
        sample: &GestureSample,
        nav: &mut NavigationController,
        scheduler: &mut Scheduler,
    ) -> GestureOutcome {
        self.cancel(scheduler);

        let Some(velocity) = sample.velocity() else {
            return GestureOutcome::Ignored;
        };
        let distance = sample.distance();
        if distance.abs() < self.config.min_swipe_distance {
            return GestureOutcome::Ignored;
        }

        let direction = if distance > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        };
        if !nav.step(direction) {
            return GestureOutcome::AtBoundary;
        }
        if velocity.abs() <= self.config.slow_velocity {
            return GestureOutcome::Step(direction);
        }

        let interval = self.config.step_interval(velocity);
        let handle = scheduler.schedule_repeating(interval);
        self.state = Some(MomentumState {
            direction,
            velocity: velocity.abs(),
            friction: self.config.friction,
            interval,
            ticks: 0,
            handle,
        });
        debug!(?direction, velocity, interval, "momentum run started");
        GestureOutcome::Momentum {
            direction,
            interval,
        }
    }

    /// Whether `handle` drives the current run.
    #[must_use]
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.state.is_some_and(|s| s.handle == handle)
    }

    /// Handle a fired timer. Returns `None` if the timer is not ours,
    /// otherwise whether the cursor moved.
    pub fn on_timer(
        &mut self,
        handle: TimerHandle,
        nav: &mut NavigationController,
        scheduler: &mut Scheduler,
    ) -> Option<bool> {
        let state = self.state.as_mut().filter(|s| s.handle == handle)?;

        state.ticks += 1;
        if state.ticks > self.config.max_ticks {
            self.finish(scheduler, "tick cap reached");
            return Some(false);
        }

        state.velocity *= state.friction;
        if state.velocity < self.config.stop_velocity {
            self.finish(scheduler, "velocity decayed");
            return Some(false);
        }

        let direction = state.direction;
        if nav.step(direction) {
            Some(true)
        } else {
            self.finish(scheduler, "bound reached");
            Some(false)
        }
    }

    /// Stop the run in flight, if any.
    pub fn cancel(&mut self, scheduler: &mut Scheduler) {
        if let Some(state) = self.state.take() {
            scheduler.cancel(state.handle);
            debug!(ticks = state.ticks, "momentum run cancelled");
        }
    }

    fn finish(&mut self, scheduler: &mut Scheduler, reason: &str) {
        if let Some(state) = self.state.take() {
            scheduler.cancel(state.handle);
            debug!(ticks = state.ticks, velocity = state.velocity, reason, "momentum run finished");
        }
    }
}
