//! Viewport event source
//!
//! The page viewport publishes its vertical scroll offset to listeners.
//! `Viewport` is the in-process implementation driven by the render loop.

use tracing::trace;

/// Vertical distance, in rows, from the top of the page
pub type ScrollOffset = u16;

/// Handle returned by [`ViewportEventSource::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl From<u64> for ListenerId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

pub type ScrollListener = Box<dyn FnMut(ScrollOffset)>;

/// Anything that can notify listeners about scroll position changes
pub trait ViewportEventSource {
    /// Register a listener, invoked with the new offset on every scroll
    fn subscribe(&mut self, listener: ScrollListener) -> ListenerId;

    /// Remove a listener. Returns false if the id was not registered.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;

    /// Current vertical offset
    fn scroll_offset(&self) -> ScrollOffset;
}

/// Scrollable page viewport
pub struct Viewport {
    offset: ScrollOffset,
    max_offset: ScrollOffset,
    next_id: u64,
    listeners: Vec<(ListenerId, ScrollListener)>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ScrollOffset::MAX)
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("offset", &self.offset)
            .field("max_offset", &self.max_offset)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Viewport {
    pub fn new(max_offset: ScrollOffset) -> Self {
        Self {
            offset: 0,
            max_offset,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    pub fn max_offset(&self) -> ScrollOffset {
        self.max_offset
    }

    /// Change the scrollable range, e.g. after a terminal resize.
    /// Clamping the current offset counts as a scroll.
    pub fn set_max_offset(&mut self, max_offset: ScrollOffset) {
        self.max_offset = max_offset;
        if self.offset > max_offset {
            self.notify(max_offset);
        }
    }

    /// Move to `offset` (clamped). Listeners only hear about actual movement.
    ///
    /// Returns true if the offset changed.
    pub fn scroll_to(&mut self, offset: ScrollOffset) -> bool {
        let offset = offset.min(self.max_offset);
        if offset == self.offset {
            return false;
        }
        self.notify(offset);
        true
    }

    /// Emit a raw scroll event, even when the offset did not change
    /// (overscroll / bounce events behave like this).
    pub fn notify(&mut self, offset: ScrollOffset) {
        self.offset = offset.min(self.max_offset);
        trace!(offset = self.offset, listeners = self.listeners.len(), "scroll event");
        for (_, listener) in self.listeners.iter_mut() {
            listener(self.offset);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ViewportEventSource for Viewport {
    fn subscribe(&mut self, listener: ScrollListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(viewport: &mut Viewport) -> (ListenerId, Rc<RefCell<Vec<ScrollOffset>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        let id = viewport.subscribe(Box::new(move |offset| {
            seen_clone.borrow_mut().push(offset);
        }));
        (id, seen)
    }

    #[test]
    fn test_scroll_to_notifies_only_on_change() {
        let mut viewport = Viewport::new(100);
        let (_, seen) = recording(&mut viewport);

        assert!(viewport.scroll_to(10));
        assert!(!viewport.scroll_to(10));
        assert!(viewport.scroll_to(4));
        assert_eq!(*seen.borrow(), vec![10, 4]);
    }

    #[test]
    fn test_scroll_to_clamps() {
        let mut viewport = Viewport::new(50);
        viewport.scroll_to(80);
        assert_eq!(viewport.scroll_offset(), 50);
    }

    #[test]
    fn test_notify_always_delivers() {
        let mut viewport = Viewport::new(100);
        let (_, seen) = recording(&mut viewport);

        viewport.notify(0);
        viewport.notify(0);
        assert_eq!(*seen.borrow(), vec![0, 0]);
    }

    #[test]
    fn test_shrinking_range_scrolls_back() {
        let mut viewport = Viewport::new(100);
        viewport.scroll_to(90);
        let (_, seen) = recording(&mut viewport);

        viewport.set_max_offset(40);
        assert_eq!(viewport.scroll_offset(), 40);
        assert_eq!(*seen.borrow(), vec![40]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut viewport = Viewport::new(100);
        let (id, seen) = recording(&mut viewport);

        assert!(viewport.unsubscribe(id));
        assert!(!viewport.unsubscribe(id));
        viewport.scroll_to(5);
        assert!(seen.borrow().is_empty());
        assert_eq!(viewport.listener_count(), 0);
    }
}
