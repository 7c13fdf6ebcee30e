use crate::core::Viewport;
use crate::error::ChartResult;
use crate::interaction::Highlight;
use crate::render::RenderDescription;

/// Contract implemented by the leaf line-chart primitive.
///
/// A surface receives one complete `RenderDescription` right after creation
/// and is then mounted into the host. It is never reconfigured; the next
/// configuration change produces a new surface.
pub trait ChartSurface {
    fn configure(&mut self, description: &RenderDescription, bounds: Viewport) -> ChartResult<()>;

    /// Shows (`Some`) or clears (`None`) the visual highlight of one entry.
    fn set_highlight(&mut self, highlight: Option<Highlight>);
}

/// Produces fresh surfaces for the render bridge.
///
/// Any `FnMut() -> S` closure or fn item (for example
/// `NullSurface::default`) is a factory.
pub trait SurfaceFactory {
    type Surface: ChartSurface;

    fn create_surface(&mut self) -> Self::Surface;
}

impl<S, F> SurfaceFactory for F
where
    S: ChartSurface,
    F: FnMut() -> S,
{
    type Surface = S;

    fn create_surface(&mut self) -> S {
        self()
    }
}
