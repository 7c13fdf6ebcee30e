use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Identity of one mounted surface instance.
///
/// Ids from `SurfaceId::next` are unique for the whole process, so several
/// widgets can share one host without detaching each other's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceId(pub u64);

impl SurfaceId {
    #[must_use]
    pub fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);

        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Insets of a child from the host's leading, trailing, top, and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeAnchors {
    pub leading: f64,
    pub trailing: f64,
    pub top: f64,
    pub bottom: f64,
}

impl EdgeAnchors {
    /// Pinned flush to all four edges.
    pub const FILL: Self = Self {
        leading: 0.0,
        trailing: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    #[must_use]
    pub fn fills_host(self) -> bool {
        self == Self::FILL
    }
}

/// Container the widget mounts its surface into.
///
/// The widget never owns the container; implementations for `&mut H` and
/// `Rc<RefCell<H>>` let the host keep ownership.
pub trait HostView {
    fn bounds(&self) -> Viewport;
    fn contains_child(&self, id: SurfaceId) -> bool;
    fn detach_child(&mut self, id: SurfaceId);
    fn attach_child(&mut self, id: SurfaceId, anchors: EdgeAnchors);
}

impl<H: HostView + ?Sized> HostView for &mut H {
    fn bounds(&self) -> Viewport {
        (**self).bounds()
    }

    fn contains_child(&self, id: SurfaceId) -> bool {
        (**self).contains_child(id)
    }

    fn detach_child(&mut self, id: SurfaceId) {
        (**self).detach_child(id);
    }

    fn attach_child(&mut self, id: SurfaceId, anchors: EdgeAnchors) {
        (**self).attach_child(id, anchors);
    }
}

impl<H: HostView + ?Sized> HostView for Rc<RefCell<H>> {
    fn bounds(&self) -> Viewport {
        self.borrow().bounds()
    }

    fn contains_child(&self, id: SurfaceId) -> bool {
        self.borrow().contains_child(id)
    }

    fn detach_child(&mut self, id: SurfaceId) {
        self.borrow_mut().detach_child(id);
    }

    fn attach_child(&mut self, id: SurfaceId, anchors: EdgeAnchors) {
        self.borrow_mut().attach_child(id, anchors);
    }
}

/// In-memory host used by tests and headless embedding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessHost {
    bounds: Viewport,
    children: Vec<(SurfaceId, EdgeAnchors)>,
    attach_count: usize,
    detach_count: usize,
}

impl HeadlessHost {
    #[must_use]
    pub fn new(bounds: Viewport) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    pub fn set_bounds(&mut self, bounds: Viewport) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn children(&self) -> &[(SurfaceId, EdgeAnchors)] {
        &self.children
    }

    #[must_use]
    pub fn attach_count(&self) -> usize {
        self.attach_count
    }

    #[must_use]
    pub fn detach_count(&self) -> usize {
        self.detach_count
    }
}

impl HostView for HeadlessHost {
    fn bounds(&self) -> Viewport {
        self.bounds
    }

    fn contains_child(&self, id: SurfaceId) -> bool {
        self.children.iter().any(|(child, _)| *child == id)
    }

    fn detach_child(&mut self, id: SurfaceId) {
        let before = self.children.len();
        self.children.retain(|(child, _)| *child != id);
        if self.children.len() != before {
            self.detach_count += 1;
        }
    }

    fn attach_child(&mut self, id: SurfaceId, anchors: EdgeAnchors) {
        self.children.push((id, anchors));
        self.attach_count += 1;
    }
}
