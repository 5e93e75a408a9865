//! Criterion benchmarks for sequence evaluation and viewport building.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibscroll_core::evaluator::SequenceEvaluator;
use fibscroll_core::viewport::{build_viewport, Layout, ViewportOptions, WindowSize};
use fibscroll_core::{Direction, Session, WidgetConfig};

fn bench_evaluator(c: &mut Criterion) {
    let indices: Vec<i64> = vec![-1000, -100, 100, 1000];

    let mut group = c.benchmark_group("ColdEvaluate");
    for &n in &indices {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| SequenceEvaluator::new().evaluate(n));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("WarmEvaluate");
    for &n in &indices {
        let mut fib = SequenceEvaluator::new();
        fib.evaluate(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fib.evaluate(n));
        });
    }
    group.finish();
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("Viewport");
    for size in [7usize, 21, 99] {
        let Ok(window) = WindowSize::new(size) else {
            continue;
        };
        let options = ViewportOptions {
            window,
            layout: Layout::Equation,
            placeholder_floor: None,
        };
        let mut fib = SequenceEvaluator::default();
        group.bench_with_input(BenchmarkId::from_parameter(size), &options, |b, options| {
            b.iter(|| build_viewport(500, options, &mut fib));
        });
    }
    group.finish();

    c.bench_function("SessionStep", |b| {
        let Ok(mut session) = Session::new(&WidgetConfig::default()) else {
            return;
        };
        b.iter(|| {
            session.step(Direction::Down);
            session.step(Direction::Up);
        });
    });
}

criterion_group!(benches, bench_evaluator, bench_viewport);
criterion_main!(benches);
