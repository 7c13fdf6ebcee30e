use serde::{Deserialize, Serialize};

pub const DEFAULT_MARKER_RADIUS: f64 = 10.0;
pub const HOLE_RADIUS_RATIO: f64 = 0.6;
pub const LINE_WIDTH_RATIO: f64 = 0.3;

/// Circle marker and stroke metrics derived from a single radius.
///
/// Only the radius is ever stored on the widget; this value is recomputed on
/// every rebuild so the hole radius and stroke width cannot drift from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerMetrics {
    pub radius: f64,
    pub hole_radius: f64,
    pub line_width: f64,
}

impl MarkerMetrics {
    #[must_use]
    pub fn from_radius(radius: f64) -> Self {
        Self {
            radius,
            hole_radius: radius * HOLE_RADIUS_RATIO,
            line_width: radius * LINE_WIDTH_RATIO,
        }
    }
}

impl Default for MarkerMetrics {
    fn default() -> Self {
        Self::from_radius(DEFAULT_MARKER_RADIUS)
    }
}
