use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::{Dataset, DatasetSlot, LegendOptions, LinePattern};
use crate::render::Color;

use super::{LineChartConfig, SelectionHandler, SelectionSlot};

/// Enable-only feature switches. Every flag starts `false`; the widget
/// exposes no way to turn one back off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartFlags {
    pub zoom: bool,
    pub circle_values: bool,
    pub left_axis: bool,
    pub right_axis: bool,
    pub x_axis: bool,
    pub all_axis: bool,
    pub fill: bool,
    pub legend: bool,
}

/// Desired appearance, behavior, and data of one widget.
///
/// Setters here only record state; `LineChart` pairs each of them with a
/// rebuild. Derived values (axis visibility, marker metrics, dash segments)
/// are never stored.
#[derive(Debug, Clone)]
pub struct ChartConfiguration {
    color: Color,
    marker_radius: f64,
    fill_color: Color,
    line_pattern: LinePattern,
    left_axis_minimum: f64,
    flags: ChartFlags,
    legend_options: LegendOptions,
    dataset: DatasetSlot,
    selection: SelectionSlot,
}

impl ChartConfiguration {
    #[must_use]
    pub fn new(config: LineChartConfig) -> Self {
        Self {
            color: config.color,
            marker_radius: config.marker_radius,
            fill_color: config.fill_color,
            line_pattern: LinePattern::default(),
            left_axis_minimum: config.left_axis_minimum,
            flags: ChartFlags::default(),
            legend_options: LegendOptions::default(),
            dataset: DatasetSlot::default(),
            selection: SelectionSlot::default(),
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn marker_radius(&self) -> f64 {
        self.marker_radius
    }

    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    #[must_use]
    pub fn line_pattern(&self) -> LinePattern {
        self.line_pattern
    }

    #[must_use]
    pub fn left_axis_minimum(&self) -> f64 {
        self.left_axis_minimum
    }

    #[must_use]
    pub fn flags(&self) -> ChartFlags {
        self.flags
    }

    #[must_use]
    pub fn legend_options(&self) -> LegendOptions {
        self.legend_options
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.dataset()
    }

    /// `true` once a dataset has been assigned; never reverts.
    #[must_use]
    pub fn dataset_sent(&self) -> bool {
        self.dataset.is_populated()
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionSlot {
        &self.selection
    }

    pub fn set_marker_radius(&mut self, radius: f64) {
        self.marker_radius = radius;
    }

    pub fn set_line_pattern(&mut self, pattern: LinePattern) {
        self.line_pattern = pattern;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn enable_zoom(&mut self) {
        self.flags.zoom = true;
    }

    pub fn enable_circle_values(&mut self) {
        self.flags.circle_values = true;
    }

    pub fn enable_left_axis(&mut self) {
        self.flags.left_axis = true;
    }

    pub fn enable_right_axis(&mut self) {
        self.flags.right_axis = true;
    }

    pub fn enable_x_axis(&mut self) {
        self.flags.x_axis = true;
    }

    pub fn enable_all_axis(&mut self) {
        self.flags.all_axis = true;
    }

    pub fn enable_fill(&mut self) {
        self.flags.fill = true;
    }

    /// Turns the legend on and stores all five options together.
    pub fn enable_legend(&mut self, options: LegendOptions) {
        self.flags.legend = true;
        self.legend_options = options;
    }

    /// Assigns the widget's only dataset and series color.
    ///
    /// Returns `false`, leaving color and dataset untouched, when a dataset
    /// was already assigned.
    pub fn assign_dataset(&mut self, color: Color, build: impl FnOnce() -> Dataset) -> bool {
        if !self.dataset.populate_with(build) {
            return false;
        }
        self.color = color;
        true
    }

    pub fn set_selection_handler<H: SelectionHandler + 'static>(&mut self, handler: &Rc<H>) {
        self.selection.set(handler);
    }

    pub fn clear_selection_handler(&mut self) {
        self.selection.clear();
    }
}

impl Default for ChartConfiguration {
    fn default() -> Self {
        Self::new(LineChartConfig::default())
    }
}
