use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::core::{
    LegendDirection, LegendForm, LegendOrientation, SeriesGeometry, Viewport, project_series,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::Highlight;
use crate::render::{ChartSurface, Color, RenderDescription};

const AXIS_COLOR: Color = Color::rgb(0.55, 0.55, 0.58);
const TEXT_COLOR: Color = Color::BLACK;
const VALUE_FONT_SIZE: f64 = 9.0;
const LEGEND_MARGIN: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub vertices_drawn: usize,
    pub markers_drawn: usize,
    pub labels_drawn: usize,
    pub axes_drawn: usize,
}

/// Cairo + Pango + PangoCairo chart surface.
///
/// Paints the configured description into an offscreen image sized to the
/// host bounds. A zero-sized host leaves the surface without an image.
#[derive(Debug, Default)]
pub struct CairoSurface {
    image: Option<ImageSurface>,
    clear_color: Option<Color>,
    highlight: Option<Highlight>,
    last_stats: CairoRenderStats,
}

impl CairoSurface {
    #[must_use]
    pub fn with_clear_color(clear_color: Color) -> Self {
        Self {
            clear_color: Some(clear_color),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageSurface> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn paint(&mut self, description: &RenderDescription, bounds: Viewport) -> ChartResult<()> {
        let invalid = || ChartError::InvalidViewport {
            width: bounds.width,
            height: bounds.height,
        };
        let width = i32::try_from(bounds.width).map_err(|_| invalid())?;
        let height = i32::try_from(bounds.height).map_err(|_| invalid())?;
        let image = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&image)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        apply_color(&context, self.clear_color.unwrap_or(Color::WHITE));
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let geometry = project_series(
            &description.series.points,
            bounds,
            description.left_axis_minimum,
        )?;
        let mut stats = CairoRenderStats::default();

        stats.axes_drawn = draw_axes(&context, description, bounds)?;
        draw_fill(&context, description, &geometry)?;
        stats.vertices_drawn = draw_line(&context, description, &geometry)?;
        stats.markers_drawn = draw_markers(&context, description, &geometry)?;
        if description.series.values_visible {
            stats.labels_drawn += draw_values(&context, description, &geometry);
        }
        if description.legend.is_some() {
            stats.labels_drawn += draw_legend(&context, description, bounds)?;
        }

        self.image = Some(image);
        self.last_stats = stats;
        Ok(())
    }
}

impl ChartSurface for CairoSurface {
    fn configure(&mut self, description: &RenderDescription, bounds: Viewport) -> ChartResult<()> {
        if !bounds.is_valid() {
            self.image = None;
            self.last_stats = CairoRenderStats::default();
            return Ok(());
        }
        self.paint(description, bounds)
    }

    fn set_highlight(&mut self, highlight: Option<Highlight>) {
        self.highlight = highlight;
    }
}

fn draw_axes(
    context: &Context,
    description: &RenderDescription,
    bounds: Viewport,
) -> ChartResult<usize> {
    let width = f64::from(bounds.width);
    let height = f64::from(bounds.height);
    let axes = description.axes;
    let mut drawn = 0;

    apply_color(context, AXIS_COLOR);
    context.set_line_width(1.0);
    context.set_dash(&[], 0.0);
    for (visible, (x1, y1, x2, y2)) in [
        (axes.left, (0.5, 0.0, 0.5, height)),
        (axes.right, (width - 0.5, 0.0, width - 0.5, height)),
        (axes.x, (0.0, height - 0.5, width, height - 0.5)),
    ] {
        if !visible {
            continue;
        }
        context.move_to(x1, y1);
        context.line_to(x2, y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke axis", err))?;
        drawn += 1;
    }
    Ok(drawn)
}

fn draw_fill(
    context: &Context,
    description: &RenderDescription,
    geometry: &SeriesGeometry,
) -> ChartResult<()> {
    let Some(fill) = description.series.fill else {
        return Ok(());
    };
    let (Some(first), Some(last)) = (geometry.vertices.first(), geometry.vertices.last()) else {
        return Ok(());
    };

    context.new_path();
    context.move_to(first.0, geometry.baseline_y);
    for (x, y) in &geometry.vertices {
        context.line_to(*x, *y);
    }
    context.line_to(last.0, geometry.baseline_y);
    context.close_path();
    apply_color(context, fill);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill series area", err))
}

fn draw_line(
    context: &Context,
    description: &RenderDescription,
    geometry: &SeriesGeometry,
) -> ChartResult<usize> {
    let series = &description.series;
    if geometry.vertices.len() < 2 || !(series.line_width > 0.0) {
        return Ok(0);
    }

    // A dash list of all zeros is a solid stroke; cairo rejects it as a pattern.
    if series.dash_segments.iter().any(|segment| *segment > 0.0) {
        context.set_dash(&series.dash_segments, 0.0);
    } else {
        context.set_dash(&[], 0.0);
    }
    apply_color(context, series.line_color);
    context.set_line_width(series.line_width);

    context.new_path();
    for (index, (x, y)) in geometry.vertices.iter().enumerate() {
        if index == 0 {
            context.move_to(*x, *y);
        } else {
            context.line_to(*x, *y);
        }
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke series line", err))?;
    context.set_dash(&[], 0.0);
    Ok(geometry.vertices.len())
}

fn draw_markers(
    context: &Context,
    description: &RenderDescription,
    geometry: &SeriesGeometry,
) -> ChartResult<usize> {
    let marker = description.series.marker;
    let radius = marker.metrics.radius;
    if !(radius > 0.0) {
        return Ok(0);
    }
    let hole_radius = marker.metrics.hole_radius.clamp(0.0, radius);

    for (x, y) in &geometry.vertices {
        context.new_path();
        context.arc(*x, *y, radius, 0.0, 2.0 * PI);
        apply_color(context, marker.color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill marker", err))?;

        if hole_radius > 0.0 {
            context.new_path();
            context.arc(*x, *y, hole_radius, 0.0, 2.0 * PI);
            apply_color(context, marker.hole_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill marker hole", err))?;
        }
    }
    Ok(geometry.vertices.len())
}

fn draw_values(
    context: &Context,
    description: &RenderDescription,
    geometry: &SeriesGeometry,
) -> usize {
    let offset = description.series.marker.metrics.radius.max(0.0) + 2.0;
    let font = FontDescription::from_string(&format!("Sans {VALUE_FONT_SIZE}"));
    apply_color(context, TEXT_COLOR);

    for (point, (x, y)) in description.series.points.iter().zip(&geometry.vertices) {
        let layout = pangocairo::functions::create_layout(context);
        layout.set_font_description(Some(&font));
        layout.set_text(&format_value(point.y));
        let (text_width, text_height) = layout.pixel_size();
        context.move_to(
            x - f64::from(text_width) / 2.0,
            y - offset - f64::from(text_height),
        );
        pangocairo::functions::show_layout(context, &layout);
    }
    geometry.vertices.len()
}

fn draw_legend(
    context: &Context,
    description: &RenderDescription,
    bounds: Viewport,
) -> ChartResult<usize> {
    let Some(legend) = description.legend else {
        return Ok(0);
    };
    let label = description.series.label.as_deref().unwrap_or_default();

    let layout = pangocairo::functions::create_layout(context);
    let weight = if legend.font.is_bold() { " Bold" } else { "" };
    let font = FontDescription::from_string(&format!("Sans{weight} {}", legend.font_size));
    layout.set_font_description(Some(&font));
    layout.set_text(label);
    let (text_width, text_height) = layout.pixel_size();
    let text_width = f64::from(text_width);
    let text_height = f64::from(text_height);

    let form_size = match legend.form {
        LegendForm::None => 0.0,
        _ => legend.form_size.max(0.0),
    };
    let entry_width = match legend.orientation {
        LegendOrientation::Horizontal => form_size + LEGEND_MARGIN + text_width,
        LegendOrientation::Vertical => form_size.max(text_width),
    };
    let left = match legend.direction {
        LegendDirection::LeftToRight => LEGEND_MARGIN,
        LegendDirection::RightToLeft => {
            f64::from(bounds.width) - LEGEND_MARGIN - entry_width
        }
    };
    let bottom = f64::from(bounds.height) - LEGEND_MARGIN;
    let form_center_y = bottom - text_height / 2.0;

    let form_left = match legend.direction {
        LegendDirection::LeftToRight => left,
        LegendDirection::RightToLeft => left + entry_width - form_size,
    };
    draw_legend_form(
        context,
        legend.form,
        form_left,
        form_center_y,
        form_size,
        description.series.line_color,
    )?;

    let text_left = match (legend.direction, legend.orientation) {
        (_, LegendOrientation::Vertical) => left,
        (LegendDirection::LeftToRight, LegendOrientation::Horizontal) => {
            left + form_size + LEGEND_MARGIN
        }
        (LegendDirection::RightToLeft, LegendOrientation::Horizontal) => left,
    };
    let text_top = match legend.orientation {
        LegendOrientation::Horizontal => bottom - text_height,
        LegendOrientation::Vertical => bottom - text_height - form_size - LEGEND_MARGIN,
    };
    apply_color(context, TEXT_COLOR);
    context.move_to(text_left, text_top);
    pangocairo::functions::show_layout(context, &layout);
    Ok(1)
}

fn draw_legend_form(
    context: &Context,
    form: LegendForm,
    left: f64,
    center_y: f64,
    size: f64,
    color: Color,
) -> ChartResult<()> {
    if size <= 0.0 {
        return Ok(());
    }
    context.new_path();
    apply_color(context, color);
    match form {
        LegendForm::None | LegendForm::Empty => return Ok(()),
        LegendForm::Default | LegendForm::Square => {
            context.rectangle(left, center_y - size / 2.0, size, size);
        }
        LegendForm::Circle => {
            context.arc(
                left + size / 2.0,
                center_y,
                size / 2.0,
                -FRAC_PI_2,
                3.0 * FRAC_PI_2,
            );
        }
        LegendForm::Line => {
            context.set_line_width(size / 4.0);
            context.move_to(left, center_y);
            context.line_to(left + size, center_y);
            return context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke legend form", err));
        }
    }
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill legend form", err))
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn apply_color(context: &Context, color: Color) {
    let color = color.clamped();
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
