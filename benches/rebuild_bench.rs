use criterion::{Criterion, criterion_group, criterion_main};
use line_chart_rs::api::{ChartConfiguration, LineChart, derive_render_description};
use line_chart_rs::core::{
    CountsByLabel, DataPoint, LegendOptions, LinePattern, Viewport, project_series,
};
use line_chart_rs::render::{Color, HeadlessHost, NullSurface};
use std::hint::black_box;

fn large_counts(len: usize) -> CountsByLabel {
    (0..len)
        .map(|i| (format!("bucket-{i}"), (i % 97) as i64))
        .collect()
}

fn bench_derive_render_description(c: &mut Criterion) {
    let mut config = ChartConfiguration::default();
    config.enable_all_axis();
    config.enable_fill();
    config.enable_legend(LegendOptions::default());
    config.set_line_pattern(LinePattern::Triple);

    c.bench_function("derive_render_description_empty", |b| {
        b.iter(|| derive_render_description(black_box(&config)))
    });
}

fn bench_widget_mutation_10k(c: &mut Criterion) {
    let mut chart = LineChart::new(
        NullSurface::default,
        HeadlessHost::new(Viewport::new(1920, 1080)),
    );
    chart.append_dataset(&large_counts(10_000), "bench", Color::GREEN);

    c.bench_function("widget_mutation_rebuild_10k", |b| {
        b.iter(|| chart.set_marker_radius(black_box(8.0)))
    });
}

fn bench_project_series_10k(c: &mut Criterion) {
    let points: Vec<_> = (0..10_000)
        .map(|i| DataPoint::new(f64::from(i), f64::from(i % 97)))
        .collect();

    c.bench_function("project_series_10k", |b| {
        b.iter(|| project_series(black_box(&points), Viewport::new(1920, 1080), 0.0))
    });
}

criterion_group!(
    benches,
    bench_derive_render_description,
    bench_widget_mutation_10k,
    bench_project_series_10k
);
criterion_main!(benches);
