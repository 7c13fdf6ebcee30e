mod description;
mod host;
mod null_surface;
mod primitives;
mod surface;

pub use description::{
    AxisVisibility, LegendDescription, MarkerStyle, RenderDescription, SeriesDescription,
};
pub use host::{EdgeAnchors, HeadlessHost, HostView, SurfaceId};
pub use null_surface::NullSurface;
pub use primitives::Color;
pub use surface::{ChartSurface, SurfaceFactory};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSurface};
