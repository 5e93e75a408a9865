//! One widget instance: every component plus the last rendered frame.
//!
//! Presentation layers talk only to [`Session`]. They feed it input and the
//! current time, then paint [`Session::frame`]. Callers should pass the
//! current time to [`Session::advance_to`] before feeding input so newly
//! scheduled timers are measured from the right instant.

use tracing::{debug, trace};

use crate::color::{ColorMapper, ColorScheme};
use crate::config::WidgetConfig;
use crate::error::ConfigError;
use crate::evaluator::{Index, SequenceEvaluator};
use crate::momentum::{GestureOutcome, MomentumScroller};
use crate::navigation::{Direction, InputSource, NavigationController};
use crate::scheduler::{Millis, Scheduler};
use crate::viewport::{build_viewport, Layout, ViewportEntry, ViewportOptions};

/// What the presentation layer paints.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub cursor: Index,
    pub entries: Vec<ViewportEntry>,
    pub colors: ColorScheme,
}

/// A running viewer.
#[derive(Debug, Clone)]
pub struct Session {
    evaluator: SequenceEvaluator,
    colors: ColorMapper,
    nav: NavigationController,
    momentum: MomentumScroller,
    scheduler: Scheduler,
    options: ViewportOptions,
    frame: Frame,
    rebuilds: u64,
}

impl Session {
    /// Build a session and render its first frame.
    pub fn new(config: &WidgetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let options = config.viewport_options()?;
        let mut evaluator = SequenceEvaluator::prewarmed(config.prewarm_range());
        let colors = ColorMapper::with_pinned(config.pinned_colors.iter().copied());
        let nav = NavigationController::new(
            config.initial_position,
            config.min_position,
            config.repeat_interval_ms,
        )
        .with_max_position(*options.window.cursor_range().end());
        let frame = render(nav.cursor(), &options, &colors, &mut evaluator);
        debug!(
            cursor = nav.cursor(),
            window = options.window.get(),
            layout = ?options.layout,
            "session created"
        );
        Ok(Self {
            evaluator,
            colors,
            nav,
            momentum: MomentumScroller::new(config.momentum),
            scheduler: Scheduler::new(),
            options,
            frame,
            rebuilds: 1,
        })
    }

    /// The last rendered frame.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[must_use]
    pub fn cursor(&self) -> Index {
        self.nav.cursor()
    }

    #[must_use]
    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    #[must_use]
    pub fn momentum(&self) -> &MomentumScroller {
        &self.momentum
    }

    #[must_use]
    pub fn evaluator(&self) -> &SequenceEvaluator {
        &self.evaluator
    }

    /// Number of frames built, including the first.
    #[must_use]
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Whether any timer-driven motion is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.nav.continuous_direction().is_some() || self.momentum.is_running()
    }

    /// Current time on the session's timeline.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.scheduler.now()
    }

    /// One discrete step. Cancels momentum.
    pub fn step(&mut self, direction: Direction) -> bool {
        self.momentum.cancel(&mut self.scheduler);
        let moved = self.nav.step(direction);
        self.refresh(moved)
    }

    /// One wheel notch. Scrolling up (negative delta) steps `Up`.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        if delta_y < 0.0 {
            self.step(Direction::Up)
        } else if delta_y > 0.0 {
            self.step(Direction::Down)
        } else {
            false
        }
    }

    /// Begin holding `source`. Cancels momentum.
    pub fn press(&mut self, source: InputSource, direction: Direction) -> bool {
        self.momentum.cancel(&mut self.scheduler);
        let moved = self.nav.press(source, direction, &mut self.scheduler);
        self.refresh(moved)
    }

    pub fn release(&mut self, source: InputSource) {
        self.nav.release(source, &mut self.scheduler);
    }

    pub fn stop_continuous(&mut self) {
        self.nav.stop_continuous(&mut self.scheduler);
    }

    /// Stop all motion and return to the initial position.
    pub fn reset(&mut self) -> bool {
        self.momentum.cancel(&mut self.scheduler);
        let moved = self.nav.reset(&mut self.scheduler);
        self.refresh(moved)
    }

    /// Start a swipe at `position` (pixels). Cancels momentum.
    pub fn begin_gesture(&mut self, position: f64, time: Millis) {
        self.advance_to(time);
        self.momentum.begin_gesture(position, time, &mut self.scheduler);
    }

    /// Finish a swipe. Stops any hold-to-repeat first.
    pub fn end_gesture(&mut self, position: f64, time: Millis) -> GestureOutcome {
        self.advance_to(time);
        self.nav.stop_continuous(&mut self.scheduler);
        let before = self.nav.cursor();
        let outcome = self
            .momentum
            .end_gesture(position, time, &mut self.nav, &mut self.scheduler);
        self.refresh(self.nav.cursor() != before);
        outcome
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.options.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if self.options.layout != layout {
            self.options.layout = layout;
            self.rebuild();
        }
    }

    pub fn toggle_layout(&mut self) {
        self.set_layout(self.options.layout.toggled());
    }

    /// Fire every timer due at or before `now`, then move the timeline to
    /// `now`. Rebuilds the frame once if the cursor moved.
    ///
    /// A timer more than one interval behind `now` (the caller stalled)
    /// fires once instead of replaying every missed tick.
    pub fn advance_to(&mut self, now: Millis) -> bool {
        let before = self.nav.cursor();
        let skipped = self.scheduler.skip_missed(now);
        if skipped > 0 {
            debug!(skipped, now, "timers fell behind; skipping missed ticks");
        }
        while let Some(handle) = self.scheduler.pop_due(now) {
            if self.nav.owns(handle) {
                self.nav.on_timer(handle);
            } else if self.momentum.owns(handle) {
                self.momentum
                    .on_timer(handle, &mut self.nav, &mut self.scheduler);
            } else {
                trace!(?handle, "dropping orphaned timer");
                self.scheduler.cancel(handle);
            }
        }
        self.scheduler.advance_to(now);
        self.refresh(self.nav.cursor() != before)
    }

    /// When the next timer fires, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.scheduler.next_deadline()
    }

    fn refresh(&mut self, moved: bool) -> bool {
        if moved {
            self.rebuild();
        }
        moved
    }

    fn rebuild(&mut self) {
        self.frame = render(
            self.nav.cursor(),
            &self.options,
            &self.colors,
            &mut self.evaluator,
        );
        self.rebuilds += 1;
    }
}

fn render(
    cursor: Index,
    options: &ViewportOptions,
    colors: &ColorMapper,
    evaluator: &mut SequenceEvaluator,
) -> Frame {
    Frame {
        cursor,
        entries: build_viewport(cursor, options, evaluator),
        colors: colors.colors_for(cursor, evaluator),
    }
}
