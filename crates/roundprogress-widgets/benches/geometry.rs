//! Benchmarks for arc geometry computation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roundprogress_core::{Padding, RecordingCanvas, Size};
use roundprogress_widgets::{
    compute_geometry, ArcRenderState, BackgroundStyle, ProgressStyle, RoundProgressBar,
    RoundProgressConfig, WidgetBounds,
};

fn bench_compute_geometry(c: &mut Criterion) {
    let bar = RoundProgressBar::new(RoundProgressConfig::default().with_progress(60));
    let state = bar.render_state();
    let bounds = WidgetBounds::new(Size::new(200.0, 200.0), Padding::uniform(8.0));

    c.bench_function("compute_geometry_full", |b| {
        b.iter(|| compute_geometry(black_box(&state), black_box(&bounds)))
    });

    let half = ArcRenderState {
        style: ProgressStyle::Half,
        ..state
    };
    c.bench_function("compute_geometry_half", |b| {
        b.iter(|| compute_geometry(black_box(&half), black_box(&bounds)))
    });
}

fn bench_dot_stamps(c: &mut Criterion) {
    let config = RoundProgressConfig::default().with_background_style(BackgroundStyle::Dotted);
    let mut bar = RoundProgressBar::new(config);
    bar.on_size_changed(Size::new(400.0, 400.0), Padding::ZERO);
    let geometry = bar.geometry();

    c.bench_function("dot_stamps", |b| {
        b.iter(|| geometry.background.map(|arc| black_box(arc).dot_stamps()))
    });
}

fn bench_paint(c: &mut Criterion) {
    let mut bar = RoundProgressBar::new(RoundProgressConfig::default().with_progress(75));
    bar.on_size_changed(Size::new(200.0, 200.0), Padding::ZERO);

    c.bench_function("paint_recording", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            roundprogress_core::Widget::paint(black_box(&bar), &mut canvas);
            canvas.command_count()
        })
    });
}

criterion_group!(benches, bench_compute_geometry, bench_dot_stamps, bench_paint);
criterion_main!(benches);
