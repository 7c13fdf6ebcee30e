use line_chart_rs::api::{
    ChartConfiguration, LineChart, LineChartConfig, derive_render_description,
};
use line_chart_rs::core::{
    CountsByLabel, Dataset, FontTextStyle, LegendDirection, LegendForm, LegendOptions,
    LegendOrientation, LinePattern, Viewport,
};
use line_chart_rs::render::{Color, HeadlessHost, NullSurface};

fn headless_chart() -> LineChart<fn() -> NullSurface, HeadlessHost> {
    LineChart::new(
        NullSurface::default as fn() -> NullSurface,
        HeadlessHost::new(Viewport::new(200, 100)),
    )
}

#[test]
fn rebuild_is_idempotent_for_unchanged_configuration() {
    let mut config = ChartConfiguration::default();
    config.enable_right_axis();
    config.enable_legend(LegendOptions::default());
    config.set_line_pattern(LinePattern::Triple);
    config.assign_dataset(Color::RED, || {
        Dataset::synthesize(&CountsByLabel::new(), "sample", &mut rand::rng())
    });

    let first = derive_render_description(&config);
    let second = derive_render_description(&config);

    assert_eq!(first, second);
    assert_eq!(
        first.to_json_string().expect("json"),
        second.to_json_string().expect("json")
    );
}

#[test]
fn widget_rebuild_without_changes_keeps_description_bytes() {
    let mut chart = headless_chart();
    chart.enable_all_axis();
    chart.append_dataset(&CountsByLabel::new(), "stable", Color::GREEN);
    let before = chart.render_description().to_json_string().expect("json");

    chart.rebuild();

    let after = chart.render_description().to_json_string().expect("json");
    assert_eq!(before, after);
}

#[test]
fn dash_table_matches_published_lengths() {
    let expected: [(LinePattern, &[f64]); 5] = [
        (LinePattern::None, &[0.0]),
        (LinePattern::Single, &[10.0]),
        (LinePattern::Double, &[10.0, 3.0, 10.0, 10.0]),
        (LinePattern::Triple, &[10.0, 3.0, 10.0, 3.0, 10.0, 10.0]),
        (LinePattern::Tiny, &[5.0]),
    ];

    let mut chart = headless_chart();
    for (pattern, segments) in expected {
        chart.set_line_pattern(pattern);
        assert_eq!(
            chart.render_description().series.dash_segments.as_slice(),
            segments,
            "{pattern:?}"
        );
    }
}

#[test]
fn all_axis_forces_every_axis_visible() {
    let mut chart = headless_chart();
    chart.enable_left_axis();
    let axes = chart.render_description().axes;
    assert!(axes.left && !axes.right && !axes.x);

    chart.enable_all_axis();
    let axes = chart.render_description().axes;
    assert!(axes.left && axes.right && axes.x);
}

#[test]
fn individual_axis_flags_are_independent() {
    let mut chart = headless_chart();
    chart.enable_right_axis();
    chart.enable_x_axis();

    let axes = chart.render_description().axes;
    assert!(!axes.left);
    assert!(axes.right);
    assert!(axes.x);
}

#[test]
fn marker_radius_drives_hole_and_line_width() {
    let mut chart = headless_chart();
    chart.set_marker_radius(5.0);

    let series = &chart.render_description().series;
    assert_eq!(series.marker.metrics.radius, 5.0);
    assert_eq!(series.marker.metrics.hole_radius, 5.0 * 0.6);
    assert_eq!(series.line_width, 5.0 * 0.3);
    assert_eq!(series.marker.metrics.line_width, series.line_width);
}

#[test]
fn negative_radius_is_accepted_as_is() {
    let mut chart = headless_chart();
    chart.set_marker_radius(-4.0);

    let metrics = chart.render_description().series.marker.metrics;
    assert_eq!(metrics.radius, -4.0);
    assert_eq!(metrics.hole_radius, -4.0 * 0.6);
    assert_eq!(chart.configuration().marker_radius(), -4.0);
}

#[test]
fn legend_description_appears_only_after_enable() {
    let mut chart = headless_chart();
    assert!(chart.render_description().legend.is_none());

    chart.enable_legend(LegendOptions::new(
        LegendForm::Circle,
        FontTextStyle::Caption1,
        14.0,
        LegendDirection::RightToLeft,
        LegendOrientation::Vertical,
    ));

    let legend = chart.render_description().legend.expect("legend enabled");
    assert_eq!(legend.form, LegendForm::Circle);
    assert_eq!(legend.font, FontTextStyle::Caption1);
    assert_eq!(legend.font_size, 12.0);
    assert_eq!(legend.form_size, 14.0);
    assert_eq!(legend.direction, LegendDirection::RightToLeft);
    assert_eq!(legend.orientation, LegendOrientation::Vertical);
}

#[test]
fn legend_defaults_match_square_body_layout() {
    let mut chart = headless_chart();
    chart.enable_legend(LegendOptions::default());

    let legend = chart.render_description().legend.expect("legend enabled");
    assert_eq!(legend.form, LegendForm::Square);
    assert_eq!(legend.font, FontTextStyle::Body);
    assert_eq!(legend.font_size, 17.0);
    assert_eq!(legend.form_size, 10.0);
    assert_eq!(legend.direction, LegendDirection::LeftToRight);
    assert_eq!(legend.orientation, LegendOrientation::Horizontal);
}

#[test]
fn fill_is_drawn_at_twenty_percent_alpha() {
    let mut chart = headless_chart();
    chart.set_fill_color(Color::rgb(0.2, 0.4, 0.6));
    assert!(chart.render_description().series.fill.is_none());

    chart.enable_fill();

    let fill = chart.render_description().series.fill.expect("fill enabled");
    assert_eq!(fill, Color::rgba(0.2, 0.4, 0.6, 0.2));
}

#[test]
fn fill_color_is_independent_of_series_color() {
    let mut chart = headless_chart();
    chart.enable_fill();
    chart.append_dataset(&CountsByLabel::new(), "tinted", Color::GREEN);

    let series = &chart.render_description().series;
    assert_eq!(series.line_color, Color::GREEN);
    assert_eq!(series.fill, Some(Color::LABEL.with_alpha(0.2)));
}

#[test]
fn bootstrap_config_seeds_initial_style() {
    let config = LineChartConfig::default()
        .with_color(Color::RED)
        .with_fill_color(Color::WHITE)
        .with_marker_radius(3.0)
        .with_left_axis_minimum(-5.0);
    let mut chart = LineChart::with_config(
        NullSurface::default,
        HeadlessHost::new(Viewport::new(10, 10)),
        config,
    );
    chart.enable_fill();

    let description = chart.render_description();
    assert_eq!(description.series.line_color, Color::RED);
    assert_eq!(description.series.fill, Some(Color::WHITE.with_alpha(0.2)));
    assert_eq!(description.series.marker.metrics.radius, 3.0);
    assert_eq!(description.left_axis_minimum, -5.0);
}

#[test]
fn flags_stay_enabled_across_later_mutations() {
    let mut chart = headless_chart();
    chart.enable_zoom();
    chart.enable_circle_values();
    chart.set_marker_radius(2.0);
    chart.set_line_pattern(LinePattern::Tiny);

    let description = chart.render_description();
    assert!(description.zoom_enabled);
    assert!(description.series.values_visible);
}
