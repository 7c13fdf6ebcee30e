use std::rc::Rc;

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::core::{CountsByLabel, Dataset, LegendOptions, LinePattern};
use crate::interaction::Highlight;
use crate::render::{Color, HostView, RenderDescription, SurfaceFactory};

use super::{
    ChartConfiguration, LineChartConfig, RenderBridge, SelectionHandler,
    derive_render_description,
};

/// Embeddable single-series line chart.
///
/// Every mutator records one setting and then rebuilds: the render
/// description is derived from the whole configuration and a new surface
/// replaces the mounted one. Mutators never fail; surface errors are logged
/// and the previous surface stays visible.
pub struct LineChart<F: SurfaceFactory, H: HostView> {
    configuration: ChartConfiguration,
    description: RenderDescription,
    bridge: RenderBridge<F, H>,
}

impl<F: SurfaceFactory, H: HostView> LineChart<F, H> {
    /// Creates a widget with default styling and renders it once.
    #[must_use]
    pub fn new(factory: F, host: H) -> Self {
        Self::with_config(factory, host, LineChartConfig::default())
    }

    #[must_use]
    pub fn with_config(factory: F, host: H, config: LineChartConfig) -> Self {
        debug!(
            marker_radius = config.marker_radius,
            left_axis_minimum = config.left_axis_minimum,
            "create line chart"
        );
        let configuration = ChartConfiguration::new(config);
        let description = derive_render_description(&configuration);
        let mut chart = Self {
            configuration,
            description,
            bridge: RenderBridge::new(factory, host).with_fallback_bounds(config.viewport),
        };
        chart.mount();
        chart
    }

    /// Rebuilds the description from scratch and remounts the surface.
    pub fn rebuild(&mut self) {
        self.description = derive_render_description(&self.configuration);
        self.mount();
    }

    fn mount(&mut self) {
        match self
            .bridge
            .apply(&self.description, self.configuration.selection())
        {
            Ok(surface) => trace!(surface = surface.0, "rebuilt line chart"),
            Err(err) => warn!(
                error = %err,
                "keeping previous chart surface after failed rebuild"
            ),
        }
    }

    pub fn set_marker_radius(&mut self, radius: f64) {
        self.configuration.set_marker_radius(radius);
        self.rebuild();
    }

    pub fn enable_zoom(&mut self) {
        self.configuration.enable_zoom();
        self.rebuild();
    }

    pub fn enable_circle_values(&mut self) {
        self.configuration.enable_circle_values();
        self.rebuild();
    }

    pub fn enable_left_axis(&mut self) {
        self.configuration.enable_left_axis();
        self.rebuild();
    }

    pub fn enable_right_axis(&mut self) {
        self.configuration.enable_right_axis();
        self.rebuild();
    }

    pub fn enable_x_axis(&mut self) {
        self.configuration.enable_x_axis();
        self.rebuild();
    }

    pub fn enable_all_axis(&mut self) {
        self.configuration.enable_all_axis();
        self.rebuild();
    }

    pub fn enable_fill(&mut self) {
        self.configuration.enable_fill();
        self.rebuild();
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.configuration.set_fill_color(color);
        self.rebuild();
    }

    /// Shows the legend with `options`; see `LegendOptions::default` for the
    /// square/body/10pt/left-to-right/horizontal defaults.
    pub fn enable_legend(&mut self, options: LegendOptions) {
        self.configuration.enable_legend(options);
        self.rebuild();
    }

    pub fn set_line_pattern(&mut self, pattern: LinePattern) {
        self.configuration.set_line_pattern(pattern);
        self.rebuild();
    }

    /// Assigns the widget's only dataset, drawing placeholder values from the
    /// thread RNG when `counts` is empty. Ignored once a dataset is set.
    pub fn append_dataset(&mut self, counts: &CountsByLabel, label: &str, color: Color) {
        self.append_dataset_with_rng(counts, label, color, &mut rand::rng());
    }

    /// `append_dataset` with a caller-supplied RNG.
    pub fn append_dataset_with_rng<R: Rng>(
        &mut self,
        counts: &CountsByLabel,
        label: &str,
        color: Color,
        rng: &mut R,
    ) {
        let assigned = self
            .configuration
            .assign_dataset(color, || Dataset::synthesize(counts, label, rng));
        if !assigned {
            trace!(label, "dataset already sent, ignoring");
            return;
        }

        debug!(
            label,
            points = self.configuration.dataset().map_or(0, Dataset::len),
            "dataset assigned"
        );
        self.rebuild();
    }

    /// Stores a non-owning reference to `handler` and rebuilds so the new
    /// surface forwards taps to it.
    pub fn set_selection_handler<S: SelectionHandler + 'static>(&mut self, handler: &Rc<S>) {
        self.configuration.set_selection_handler(handler);
        self.rebuild();
    }

    pub fn clear_selection_handler(&mut self) {
        self.configuration.clear_selection_handler();
        self.rebuild();
    }

    /// Simulates the surface reporting a tap at `(x, y)` in data coordinates.
    pub fn tap(&mut self, x: f64, y: f64) -> Option<Highlight> {
        self.bridge.tap(x, y)
    }

    #[must_use]
    pub fn configuration(&self) -> &ChartConfiguration {
        &self.configuration
    }

    /// Most recently derived description; equals the mounted surface's unless
    /// the last surface configuration failed.
    #[must_use]
    pub fn render_description(&self) -> &RenderDescription {
        &self.description
    }

    #[must_use]
    pub fn surface(&self) -> Option<&F::Surface> {
        self.bridge.surface()
    }

    #[must_use]
    pub fn bridge(&self) -> &RenderBridge<F, H> {
        &self.bridge
    }

    #[must_use]
    pub fn host(&self) -> &H {
        self.bridge.host()
    }
}
