use line_chart_rs::api::LineChart;
use line_chart_rs::core::{CountsByLabel, DataPoint, Viewport};
use line_chart_rs::render::{Color, HeadlessHost, NullSurface};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn chart() -> LineChart<fn() -> NullSurface, HeadlessHost> {
    LineChart::new(
        NullSurface::default as fn() -> NullSurface,
        HeadlessHost::new(Viewport::new(300, 200)),
    )
}

#[test]
fn second_append_leaves_dataset_color_and_flag_unchanged() {
    let mut chart = chart();
    chart.append_dataset(&CountsByLabel::new(), "first", Color::GREEN);
    let dataset_after_first = chart.configuration().dataset().cloned();
    let mounts_after_first = chart.bridge().mount_count();

    chart.append_dataset(&CountsByLabel::new(), "second", Color::RED);

    let configuration = chart.configuration();
    assert!(configuration.dataset_sent());
    assert_eq!(configuration.dataset().cloned(), dataset_after_first);
    assert_eq!(configuration.color(), Color::GREEN);
    assert_eq!(chart.render_description().series.label.as_deref(), Some("first"));
    assert_eq!(chart.bridge().mount_count(), mounts_after_first);
}

#[test]
fn seeded_rng_makes_placeholder_series_reproducible() {
    let mut left = chart();
    let mut right = chart();
    for chart in [&mut left, &mut right] {
        chart.append_dataset_with_rng(
            &CountsByLabel::new(),
            "seeded",
            Color::RED,
            &mut StdRng::seed_from_u64(42),
        );
    }

    assert_eq!(left.render_description(), right.render_description());
}

#[test]
fn placeholder_series_spans_five_to_ten() {
    let mut chart = chart();
    chart.append_dataset(&CountsByLabel::new(), "random", Color::GREEN);

    let points = &chart.render_description().series.points;
    assert_eq!(points.len(), 6);
    for (offset, point) in points.iter().enumerate() {
        assert_eq!(point.x, 5.0 + offset as f64);
        assert!((1.0..=point.x).contains(&point.y), "{point:?}");
    }
}

#[test]
fn supplied_counts_become_ordered_points() {
    let mut counts = CountsByLabel::new();
    counts.insert("q1".to_owned(), 12);
    counts.insert("q2".to_owned(), 7);
    counts.insert("q3".to_owned(), 0);

    let mut chart = chart();
    chart.append_dataset(&counts, "quarters", Color::RED);

    assert_eq!(
        chart.render_description().series.points,
        vec![
            DataPoint::new(0.0, 12.0),
            DataPoint::new(1.0, 7.0),
            DataPoint::new(2.0, 0.0),
        ]
    );
}

#[test]
fn empty_label_is_accepted() {
    let mut chart = chart();
    chart.append_dataset(&CountsByLabel::new(), "", Color::GREEN);

    assert!(chart.configuration().dataset_sent());
    assert_eq!(chart.render_description().series.label.as_deref(), Some(""));
}
