//! Property-based tests for the evaluator, viewport, colours and momentum.

use proptest::prelude::*;

use fibscroll_core::color::hue_for;
use fibscroll_core::momentum::{GestureSample, MomentumConfig, MomentumScroller};
use fibscroll_core::viewport::{build_viewport, Role, ViewportEntry, ViewportOptions, WindowSize};
use fibscroll_core::{NavigationController, Scheduler, SequenceEvaluator};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// F(-n) == (-1)^(n+1) * F(n).
    #[test]
    fn negative_index_identity(n in 1i64..1400) {
        let mut fib = SequenceEvaluator::new();
        let positive = fib.evaluate(n);
        let sign = if n % 2 == 0 { -1.0 } else { 1.0 };
        prop_assert_eq!(fib.evaluate(-n), sign * positive);
    }

    /// F(n) + F(n+1) == F(n+2) while the values are exact.
    #[test]
    fn recurrence_holds_exactly(n in -70i64..70) {
        let mut fib = SequenceEvaluator::new();
        prop_assert_eq!(fib.evaluate(n) + fib.evaluate(n + 1), fib.evaluate(n + 2));
    }

    /// Repeated lookups are bit-identical and never recompute.
    #[test]
    fn memoized_lookups_are_stable(n in -1500i64..1500) {
        let mut fib = SequenceEvaluator::new();
        let first = fib.evaluate(n);
        let computed = fib.computations();
        let second = fib.evaluate(n);
        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert_eq!(fib.computations(), computed);
    }

    /// Plain viewports have exactly `size` terms centred on the cursor.
    #[test]
    fn viewport_shape(cursor in -1000i64..1000, half in 0usize..10) {
        let window = WindowSize::new(half * 2 + 1).unwrap();
        let mut fib = SequenceEvaluator::new();
        let entries = build_viewport(cursor, &ViewportOptions::plain(window), &mut fib);
        prop_assert_eq!(entries.len(), window.get());

        let cells: Vec<_> = entries.iter().filter_map(ViewportEntry::as_term).collect();
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[1].index, pair[0].index + 1);
        }
        let centers: Vec<_> = cells.iter().filter(|c| c.role == Role::Center).collect();
        prop_assert_eq!(centers.len(), 1);
        prop_assert_eq!(centers[0].index, cursor);
    }

    /// Near both ends of the index range, any cursor the window allows
    /// still yields consecutive indices.
    #[test]
    fn viewport_consecutive_at_range_edges(back in 0i64..1000, half in 0usize..10) {
        let window = WindowSize::new(half * 2 + 1).unwrap();
        let range = window.cursor_range();
        let mut fib = SequenceEvaluator::new();
        for cursor in [*range.end() - back, *range.start() + back] {
            let entries = build_viewport(cursor, &ViewportOptions::plain(window), &mut fib);
            let cells: Vec<_> = entries.iter().filter_map(ViewportEntry::as_term).collect();
            prop_assert_eq!(cells.len(), window.get());
            for pair in cells.windows(2) {
                prop_assert_eq!(pair[1].index, pair[0].index + 1);
            }
        }
    }

    /// Hue is always in [0, 360).
    #[test]
    fn hue_in_range(value in proptest::num::f64::ANY) {
        prop_assert!(hue_for(value) < 360);
    }

    /// A momentum run never takes more than 1 + max_ticks steps and never
    /// passes the lower bound.
    #[test]
    fn momentum_is_bounded(
        distance in -5000.0f64..5000.0,
        duration in 1u64..2000,
        start in -1000i64..1000,
    ) {
        let config = MomentumConfig::default();
        let mut scroller = MomentumScroller::new(config);
        let mut nav = NavigationController::new(start, -1000, 150);
        let mut sched = Scheduler::new();
        let sample = GestureSample {
            start_position: 0.0,
            start_time: 0,
            end_position: distance,
            end_time: duration,
        };
        scroller.on_gesture_end(&sample, &mut nav, &mut sched);

        let mut guard = 0;
        while let Some(deadline) = sched.next_deadline() {
            while let Some(handle) = sched.pop_due(deadline) {
                scroller.on_timer(handle, &mut nav, &mut sched);
            }
            guard += 1;
            prop_assert!(guard <= 100);
        }
        let moved = nav.cursor().abs_diff(start);
        prop_assert!(moved <= u64::from(config.max_ticks) + 1);
        prop_assert!(nav.cursor() >= -1000);
        prop_assert!(!scroller.is_running());
    }
}
