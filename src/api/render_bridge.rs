use tracing::trace;

use crate::error::ChartResult;
use crate::interaction::{Highlight, nearest_entry};
use crate::core::Viewport;
use crate::render::{
    ChartSurface, EdgeAnchors, HostView, RenderDescription, SurfaceFactory, SurfaceId,
};

use super::SelectionSlot;

struct MountedSurface<S> {
    id: SurfaceId,
    surface: S,
    description: RenderDescription,
}

/// Applies render descriptions to live surfaces inside a borrowed host.
///
/// Every `apply` creates a new surface, configures it completely, then swaps
/// it into the host in place of the previous one. No listener or style of an
/// older surface survives, at the price of losing transient view state such
/// as zoom or pan.
pub struct RenderBridge<F: SurfaceFactory, H: HostView> {
    factory: F,
    host: H,
    mounted: Option<MountedSurface<F::Surface>>,
    forwarding: SelectionSlot,
    fallback_bounds: Viewport,
    mount_count: u64,
}

impl<F: SurfaceFactory, H: HostView> RenderBridge<F, H> {
    #[must_use]
    pub fn new(factory: F, host: H) -> Self {
        Self {
            factory,
            host,
            mounted: None,
            forwarding: SelectionSlot::default(),
            fallback_bounds: Viewport::default(),
            mount_count: 0,
        }
    }

    /// Bounds handed to surfaces while the host reports an empty area.
    #[must_use]
    pub fn with_fallback_bounds(mut self, bounds: Viewport) -> Self {
        self.fallback_bounds = bounds;
        self
    }

    fn surface_bounds(&self) -> Viewport {
        let bounds = self.host.bounds();
        if bounds.is_valid() {
            bounds
        } else {
            self.fallback_bounds
        }
    }

    /// Mounts a freshly configured surface for `description`.
    ///
    /// The selection target is rewired before the surface is configured. On
    /// configuration failure the previously mounted surface stays in place
    /// and the error is returned.
    pub fn apply(
        &mut self,
        description: &RenderDescription,
        selection: &SelectionSlot,
    ) -> ChartResult<SurfaceId> {
        self.forwarding = selection.clone();

        let bounds = self.surface_bounds();
        let mut surface = self.factory.create_surface();
        surface.configure(description, bounds)?;

        if let Some(previous) = self.mounted.take() {
            if self.host.contains_child(previous.id) {
                self.host.detach_child(previous.id);
            }
        }

        let id = SurfaceId::next();
        self.mount_count += 1;
        self.host.attach_child(id, EdgeAnchors::FILL);
        trace!(
            surface = id.0,
            width = bounds.width,
            height = bounds.height,
            "mounted chart surface"
        );

        self.mounted = Some(MountedSurface {
            id,
            surface,
            description: description.clone(),
        });
        Ok(id)
    }

    /// Handles a tap at `(x, y)` in data coordinates.
    ///
    /// The nearest entry is highlighted and immediately un-highlighted so the
    /// same entry can fire again, then forwarded to the current selection
    /// handler. Returns the highlight when an entry was hit.
    pub fn tap(&mut self, x: f64, y: f64) -> Option<Highlight> {
        let mounted = self.mounted.as_mut()?;
        let (index, entry) = nearest_entry(&mounted.description.series.points, x, y)?;
        let highlight = Highlight::for_entry(index, entry);
        trace!(entry_index = index, x = entry.x, y = entry.y, "chart entry tapped");

        mounted.surface.set_highlight(Some(highlight));
        mounted.surface.set_highlight(None);
        self.forwarding.forward(entry, highlight);
        Some(highlight)
    }

    #[must_use]
    pub fn surface(&self) -> Option<&F::Surface> {
        self.mounted.as_ref().map(|mounted| &mounted.surface)
    }

    #[must_use]
    pub fn surface_id(&self) -> Option<SurfaceId> {
        self.mounted.as_ref().map(|mounted| mounted.id)
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Number of surfaces created and mounted so far.
    #[must_use]
    pub fn mount_count(&self) -> u64 {
        self.mount_count
    }
}
