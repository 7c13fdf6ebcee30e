use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::core::marker::DEFAULT_MARKER_RADIUS;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Public widget bootstrap configuration.
///
/// Seeds the initial style of a `LineChart`. This type is serializable so
/// host applications can ship chart presets as JSON; the live configuration
/// owned by the widget is not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(default = "default_color")]
    pub color: Color,
    #[serde(default = "default_fill_color")]
    pub fill_color: Color,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default)]
    pub left_axis_minimum: f64,
    /// Surface bounds used while the host reports 0x0; 0x0 leaves sizing to the host.
    #[serde(default)]
    pub viewport: Viewport,
}

impl LineChartConfig {
    /// Sets the initial series color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the initial fill color.
    #[must_use]
    pub fn with_fill_color(mut self, fill_color: Color) -> Self {
        self.fill_color = fill_color;
        self
    }

    /// Sets the initial circle marker radius.
    #[must_use]
    pub fn with_marker_radius(mut self, marker_radius: f64) -> Self {
        self.marker_radius = marker_radius;
        self
    }

    #[must_use]
    pub fn with_left_axis_minimum(mut self, left_axis_minimum: f64) -> Self {
        self.left_axis_minimum = left_axis_minimum;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            fill_color: default_fill_color(),
            marker_radius: default_marker_radius(),
            left_axis_minimum: 0.0,
            viewport: Viewport::default(),
        }
    }
}

fn default_color() -> Color {
    Color::SYSTEM_BLUE
}

fn default_fill_color() -> Color {
    Color::LABEL
}

fn default_marker_radius() -> f64 {
    DEFAULT_MARKER_RADIUS
}
