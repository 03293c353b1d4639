//! Benchmark tests for the progress animator.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roundprogress_core::{interpolate, ProgressAnimator, StepOutcome};
use std::time::Duration;

fn bench_interpolate(c: &mut Criterion) {
    c.bench_function("interpolate", |b| {
        b.iter(|| interpolate(black_box(0.0), black_box(100.0), black_box(0.37)))
    });
}

fn bench_full_animation_run(c: &mut Criterion) {
    c.bench_function("animate_1000ms_at_60fps", |b| {
        b.iter(|| {
            let mut animator = ProgressAnimator::new();
            let id = animator.animate_to(0.0, 100.0, Duration::from_millis(1000));
            let mut last = 0.0;
            while animator.step(id, Duration::from_millis(16), |v| last = v) == StepOutcome::Running {}
            black_box(last)
        })
    });
}

criterion_group!(benches, bench_interpolate, bench_full_animation_run);
criterion_main!(benches);
