use crate::core::MarkerMetrics;
use crate::render::{
    AxisVisibility, Color, LegendDescription, MarkerStyle, RenderDescription, SeriesDescription,
};

use super::ChartConfiguration;

/// Alpha applied to the fill color whenever fill is drawn.
pub const FILL_ALPHA: f64 = 0.2;

/// Outer circle color of every marker.
pub const MARKER_COLOR: Color = Color::BLACK;

/// Derives the complete render description from the current configuration.
///
/// Pure and total: no field of the result depends on anything but `config`,
/// and every option has a resolved value whether or not it was ever set.
#[must_use]
pub fn derive_render_description(config: &ChartConfiguration) -> RenderDescription {
    let flags = config.flags();
    let axes = AxisVisibility {
        left: flags.all_axis || flags.left_axis,
        right: flags.all_axis || flags.right_axis,
        x: flags.all_axis || flags.x_axis,
    };

    let legend = flags.legend.then(|| {
        let options = config.legend_options();
        LegendDescription {
            form: options.form,
            form_size: options.form_size,
            font: options.font,
            font_size: options.font.point_size(),
            direction: options.direction,
            orientation: options.orientation,
        }
    });

    let metrics = MarkerMetrics::from_radius(config.marker_radius());
    let (label, points) = match config.dataset() {
        Some(dataset) => (Some(dataset.label.clone()), dataset.points.clone()),
        None => (None, Vec::new()),
    };

    let series = SeriesDescription {
        label,
        points,
        line_color: config.color(),
        line_width: metrics.line_width,
        dash_segments: config.line_pattern().dash_segments(),
        marker: MarkerStyle {
            metrics,
            color: MARKER_COLOR,
            hole_color: config.color(),
        },
        values_visible: flags.circle_values,
        fill: flags
            .fill
            .then(|| config.fill_color().with_alpha(FILL_ALPHA)),
    };

    RenderDescription {
        axes,
        left_axis_minimum: config.left_axis_minimum(),
        zoom_enabled: flags.zoom,
        legend,
        series,
        selection_forwarding: config.selection().is_wired(),
    }
}
