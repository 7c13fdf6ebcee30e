use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::core::DataPoint;
use crate::interaction::Highlight;

/// Capability notified when a series entry is tapped.
///
/// The widget clears its visual highlight before calling this, so repeated
/// taps on the same entry notify again.
pub trait SelectionHandler {
    fn on_point_selected(&self, entry: DataPoint, highlight: Highlight);
}

/// Swappable, non-owning slot for a `SelectionHandler`.
///
/// Holds a `Weak` so the widget never extends the handler's lifetime; once
/// the host drops the handler, selections are silently dropped.
#[derive(Clone, Default)]
pub struct SelectionSlot {
    handler: Option<Weak<dyn SelectionHandler>>,
}

impl SelectionSlot {
    pub fn set<H: SelectionHandler + 'static>(&mut self, handler: &Rc<H>) {
        let handler: Rc<dyn SelectionHandler> = handler.clone();
        self.handler = Some(Rc::downgrade(&handler));
    }

    pub fn clear(&mut self) {
        self.handler = None;
    }

    /// Returns `true` when a handler was assigned, whether or not it is alive.
    #[must_use]
    pub fn is_wired(&self) -> bool {
        self.handler.is_some()
    }

    /// Delivers the selection if a live handler is present.
    ///
    /// Returns `true` when a handler was invoked.
    pub fn forward(&self, entry: DataPoint, highlight: Highlight) -> bool {
        let Some(handler) = self.handler.as_ref().and_then(Weak::upgrade) else {
            trace!(
                entry_index = highlight.entry_index,
                "no live selection handler, dropping tap"
            );
            return false;
        };
        handler.on_point_selected(entry, highlight);
        true
    }
}

impl fmt::Debug for SelectionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSlot")
            .field("wired", &self.is_wired())
            .field(
                "alive",
                &self
                    .handler
                    .as_ref()
                    .is_some_and(|handler| handler.strong_count() > 0),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::{SelectionHandler, SelectionSlot};
    use crate::core::DataPoint;
    use crate::interaction::Highlight;

    #[derive(Default)]
    struct Counter {
        calls: Cell<usize>,
    }

    impl SelectionHandler for Counter {
        fn on_point_selected(&self, _entry: DataPoint, _highlight: Highlight) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    fn tap() -> (DataPoint, Highlight) {
        let entry = DataPoint::new(1.0, 2.0);
        (entry, Highlight::for_entry(0, entry))
    }

    #[test]
    fn slot_does_not_keep_handler_alive() {
        let handler = Rc::new(Counter::default());
        let mut slot = SelectionSlot::default();
        slot.set(&handler);
        assert_eq!(Rc::strong_count(&handler), 1);

        let (entry, highlight) = tap();
        assert!(slot.forward(entry, highlight));
        assert_eq!(handler.calls.get(), 1);

        drop(handler);
        assert!(slot.is_wired());
        assert!(!slot.forward(entry, highlight));
    }

    #[test]
    fn empty_slot_drops_selection() {
        let (entry, highlight) = tap();
        assert!(!SelectionSlot::default().forward(entry, highlight));
    }
}
