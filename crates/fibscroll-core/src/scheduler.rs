//! Virtual timeline with cancellable repeating timers.
//!
//! Nothing here sleeps or spawns. The owner advances the timeline and
//! receives due timers one at a time through [`Scheduler::pop_due`], so a
//! handler that cancels another timer takes effect before that timer could
//! fire. Real time enters only through whatever the caller passes in.

use std::collections::BTreeMap;

/// Milliseconds on the scheduler's timeline.
pub type Millis = u64;

/// Identifies one scheduled timer. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Timer {
    interval: Millis,
    next_due: Millis,
}

/// Repeating timers on a virtual clock.
///
/// # Example
/// ```
/// use fibscroll_core::scheduler::Scheduler;
///
/// let mut sched = Scheduler::new();
/// let tick = sched.schedule_repeating(100);
/// assert_eq!(sched.pop_due(250), Some(tick)); // t = 100
/// assert_eq!(sched.pop_due(250), Some(tick)); // t = 200
/// assert_eq!(sched.pop_due(250), None);
/// sched.cancel(tick);
/// assert_eq!(sched.next_deadline(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: Millis,
    next_handle: u64,
    timers: BTreeMap<TimerHandle, Timer>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position on the timeline.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Schedule a timer firing every `interval` ms, first at `now + interval`.
    /// Zero intervals are treated as 1 ms.
    pub fn schedule_repeating(&mut self, interval: Millis) -> TimerHandle {
        let interval = interval.max(1);
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timers.insert(
            handle,
            Timer {
                interval,
                next_due: self.now.saturating_add(interval),
            },
        );
        handle
    }

    /// Cancel a timer. Returns whether it was still live.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(&handle).is_some()
    }

    #[must_use]
    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    /// Number of live timers.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending fire time.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.values().map(|t| t.next_due).min()
    }

    /// Fire the earliest timer due at or before `until`.
    ///
    /// Moves `now` to its deadline and re-arms it one interval later. Timers
    /// due at the same instant fire in scheduling order.
    pub fn pop_due(&mut self, until: Millis) -> Option<TimerHandle> {
        let (handle, due) = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.next_due <= until)
            .min_by_key(|(handle, timer)| (timer.next_due, **handle))
            .map(|(handle, timer)| (*handle, timer.next_due))?;

        self.now = self.now.max(due);
        if let Some(timer) = self.timers.get_mut(&handle) {
            timer.next_due = due.saturating_add(timer.interval);
        }
        Some(handle)
    }

    /// Re-arm every timer that fell more than one interval behind `now` so
    /// it fires once at `now` instead of replaying each missed tick.
    /// Returns how many timers were re-armed.
    pub fn skip_missed(&mut self, now: Millis) -> usize {
        let mut skipped = 0;
        for timer in self.timers.values_mut() {
            if now.saturating_sub(timer.next_due) > timer.interval {
                timer.next_due = now;
                skipped += 1;
            }
        }
        skipped
    }

    /// Move the timeline forward to `now`. Never moves backwards.
    pub fn advance_to(&mut self, now: Millis) {
        self.now = self.now.max(now);
    }
}
