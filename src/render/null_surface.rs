use crate::core::Viewport;
use crate::error::ChartResult;
use crate::interaction::Highlight;
use crate::render::{ChartSurface, RenderDescription};

/// Headless surface used by tests and non-visual embedding.
///
/// It keeps the description it was configured with and every highlight
/// change so callers can assert on what a real backend would have shown.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub description: Option<RenderDescription>,
    pub bounds: Viewport,
    pub highlight_log: Vec<Option<Highlight>>,
}

impl NullSurface {
    /// Highlight currently shown, if any.
    #[must_use]
    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight_log.last().copied().flatten()
    }
}

impl ChartSurface for NullSurface {
    fn configure(&mut self, description: &RenderDescription, bounds: Viewport) -> ChartResult<()> {
        self.description = Some(description.clone());
        self.bounds = bounds;
        Ok(())
    }

    fn set_highlight(&mut self, highlight: Option<Highlight>) {
        self.highlight_log.push(highlight);
    }
}
