use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale, ScaleAxis, Viewport};
use crate::error::ChartResult;

/// Series geometry in pixel space, ready for a drawing backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesGeometry {
    /// Polyline vertices, one per data point, in data order.
    pub vertices: Vec<(f64, f64)>,
    /// Pixel y of the value axis baseline, used to close the fill area.
    pub baseline_y: f64,
}

/// Projects `points` into `viewport` pixel space.
///
/// The x domain spans the data; the y domain starts at `y_minimum` (or lower
/// when data dips below it) and ends at the largest value. The function is
/// deterministic and side-effect free so both rendering and tests can
/// consume the exact same geometry.
pub fn project_series(
    points: &[DataPoint],
    viewport: Viewport,
    y_minimum: f64,
) -> ChartResult<SeriesGeometry> {
    if points.is_empty() {
        return Ok(SeriesGeometry {
            vertices: Vec::new(),
            baseline_y: f64::from(viewport.height),
        });
    }

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (y_minimum, f64::NEG_INFINITY);
    for point in points {
        x_min = x_min.min(point.x);
        x_max = x_max.max(point.x);
        y_min = y_min.min(point.y);
        y_max = y_max.max(point.y);
    }

    let x_scale = LinearScale::covering(x_min, x_max, ScaleAxis::Horizontal)?;
    let y_scale = LinearScale::covering(y_min, y_max.max(y_min), ScaleAxis::Vertical)?;

    let mut vertices = Vec::with_capacity(points.len());
    for point in points {
        vertices.push((
            x_scale.domain_to_pixel(point.x, viewport)?,
            y_scale.domain_to_pixel(point.y, viewport)?,
        ));
    }

    Ok(SeriesGeometry {
        vertices,
        baseline_y: y_scale.domain_to_pixel(y_min, viewport)?,
    })
}
