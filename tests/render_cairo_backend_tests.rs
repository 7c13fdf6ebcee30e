#![cfg(feature = "cairo-backend")]

use line_chart_rs::api::LineChart;
use line_chart_rs::core::{CountsByLabel, LinePattern, Viewport};
use line_chart_rs::render::{CairoSurface, Color, HeadlessHost};

fn counts() -> CountsByLabel {
    let mut counts = CountsByLabel::new();
    for (label, count) in [("a", 2), ("b", 6), ("c", 3), ("d", 9)] {
        counts.insert(label.to_owned(), count);
    }
    counts
}

#[test]
fn cairo_surface_paints_line_markers_and_labels() {
    let host = HeadlessHost::new(Viewport::new(480, 320));
    let mut chart = LineChart::new(CairoSurface::default, host);
    chart.enable_all_axis();
    chart.enable_circle_values();
    chart.enable_fill();
    chart.enable_legend(Default::default());
    chart.set_line_pattern(LinePattern::Triple);
    chart.append_dataset(&counts(), "cairo", Color::GREEN);

    let surface = chart.surface().expect("mounted");
    let image = surface.image().expect("painted image");
    assert_eq!((image.width(), image.height()), (480, 320));

    let stats = surface.last_stats();
    assert_eq!(stats.axes_drawn, 3);
    assert_eq!(stats.vertices_drawn, 4);
    assert_eq!(stats.markers_drawn, 4);
    assert_eq!(stats.labels_drawn, 5);
}

#[test]
fn zero_sized_host_skips_painting() {
    let host = HeadlessHost::new(Viewport::new(0, 0));
    let mut chart = LineChart::new(CairoSurface::default, host);
    chart.append_dataset(&counts(), "hidden", Color::RED);

    let surface = chart.surface().expect("mounted");
    assert!(surface.image().is_none());
    assert_eq!(surface.last_stats(), Default::default());
}

#[test]
fn cairo_surface_tolerates_negative_radius() {
    let host = HeadlessHost::new(Viewport::new(120, 80));
    let mut chart = LineChart::new(CairoSurface::default, host);
    chart.set_marker_radius(-3.0);
    chart.append_dataset(&counts(), "negative", Color::GREEN);

    let stats = chart.surface().expect("mounted").last_stats();
    assert_eq!(stats.markers_drawn, 0);
    assert_eq!(stats.vertices_drawn, 0);
}
