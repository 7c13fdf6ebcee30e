use serde::{Deserialize, Serialize};

use crate::core::{
    DashSegments, DataPoint, FontTextStyle, LegendDirection, LegendForm, LegendOrientation,
    MarkerMetrics,
};
use crate::render::Color;

/// Fully resolved visual/behavioral parameters for one chart surface.
///
/// Produced from scratch on every configuration change; never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDescription {
    pub axes: AxisVisibility,
    /// Lower bound of the left value axis.
    pub left_axis_minimum: f64,
    /// Pinch/scroll scaling on both axes.
    pub zoom_enabled: bool,
    pub legend: Option<LegendDescription>,
    pub series: SeriesDescription,
    /// Whether taps are forwarded to a selection handler.
    pub selection_forwarding: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisVisibility {
    pub left: bool,
    pub right: bool,
    pub x: bool,
}

impl AxisVisibility {
    #[must_use]
    pub fn all_hidden(self) -> bool {
        !self.left && !self.right && !self.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendDescription {
    pub form: LegendForm,
    pub form_size: f64,
    pub font: FontTextStyle,
    pub font_size: f64,
    pub direction: LegendDirection,
    pub orientation: LegendOrientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub metrics: MarkerMetrics,
    pub color: Color,
    pub hole_color: Color,
}

/// The single line series. `label` is `None` until a dataset is assigned,
/// in which case `points` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescription {
    pub label: Option<String>,
    pub points: Vec<DataPoint>,
    pub line_color: Color,
    pub line_width: f64,
    pub dash_segments: DashSegments,
    pub marker: MarkerStyle,
    /// Draw each entry's value next to its circle marker.
    pub values_visible: bool,
    /// Area fill color (already alpha-reduced); `None` when fill is off.
    pub fill: Option<Color>,
}

impl SeriesDescription {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
