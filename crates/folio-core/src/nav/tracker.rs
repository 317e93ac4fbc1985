use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace};

use super::viewport::{ListenerId, ScrollOffset, ViewportEventSource};

/// The last two offsets observed by a tracker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollSample {
    pub previous: ScrollOffset,
    pub current: ScrollOffset,
}

struct Subscription {
    id: ListenerId,
    /// Cleared on stop; the listener checks it before doing anything
    live: Rc<Cell<bool>>,
}

/// Observes a viewport's scroll position
///
/// Holds at most one listener on the source at a time. `stop` must be
/// called before the tracker's owner goes away; it is safe to call it
/// any number of times.
#[derive(Default)]
pub struct ScrollPositionTracker {
    sample: Rc<Cell<ScrollSample>>,
    subscription: Option<Subscription>,
}

impl ScrollPositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin observing `source`, calling `callback` with every new offset.
    ///
    /// Starting an already running tracker replaces its subscription.
    pub fn start<S, F>(&mut self, source: &mut S, mut callback: F)
    where
        S: ViewportEventSource + ?Sized,
        F: FnMut(ScrollOffset) + 'static,
    {
        self.stop(source);

        let initial = source.scroll_offset();
        self.sample.set(ScrollSample {
            previous: initial,
            current: initial,
        });

        let live = Rc::new(Cell::new(true));
        let listener_live = Rc::clone(&live);
        let sample = Rc::clone(&self.sample);

        let id = source.subscribe(Box::new(move |offset| {
            if !listener_live.get() {
                trace!(offset, "scroll delivered after stop, ignored");
                return;
            }
            let last = sample.get();
            sample.set(ScrollSample {
                previous: last.current,
                current: offset,
            });
            callback(offset);
        }));

        debug!(?id, initial, "scroll tracking started");
        self.subscription = Some(Subscription { id, live });
    }

    /// Stop observing. Returns true if a subscription was released.
    pub fn stop<S>(&mut self, source: &mut S) -> bool
    where
        S: ViewportEventSource + ?Sized,
    {
        match self.subscription.take() {
            Some(subscription) => {
                subscription.live.set(false);
                source.unsubscribe(subscription.id);
                debug!(id = ?subscription.id, "scroll tracking stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn sample(&self) -> ScrollSample {
        self.sample.get()
    }

    pub fn current(&self) -> ScrollOffset {
        self.sample.get().current
    }

    pub fn previous(&self) -> ScrollOffset {
        self.sample.get().previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::viewport::{ScrollListener, Viewport};
    use std::cell::RefCell;

    /// Source that keeps listeners around after unsubscribe so late
    /// deliveries can be simulated
    #[derive(Default)]
    struct LeakySource {
        listeners: Vec<ScrollListener>,
        unsubscribed: usize,
    }

    impl LeakySource {
        fn emit(&mut self, offset: ScrollOffset) {
            for listener in self.listeners.iter_mut() {
                listener(offset);
            }
        }
    }

    impl ViewportEventSource for LeakySource {
        fn subscribe(&mut self, listener: ScrollListener) -> ListenerId {
            self.listeners.push(listener);
            ListenerId::from(self.listeners.len() as u64)
        }

        fn unsubscribe(&mut self, _id: ListenerId) -> bool {
            self.unsubscribed += 1;
            true
        }

        fn scroll_offset(&self) -> ScrollOffset {
            0
        }
    }

    #[test]
    fn test_tracks_previous_and_current() {
        let mut viewport = Viewport::new(500);
        let mut tracker = ScrollPositionTracker::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);

        tracker.start(&mut viewport, move |offset| seen_clone.borrow_mut().push(offset));
        viewport.scroll_to(12);
        viewport.scroll_to(30);

        assert_eq!(*seen.borrow(), vec![12, 30]);
        assert_eq!(
            tracker.sample(),
            ScrollSample {
                previous: 12,
                current: 30
            }
        );
    }

    #[test]
    fn test_one_listener_per_start() {
        let mut viewport = Viewport::new(500);
        let mut tracker = ScrollPositionTracker::new();

        tracker.start(&mut viewport, |_| {});
        tracker.start(&mut viewport, |_| {});
        assert_eq!(viewport.listener_count(), 1);

        assert!(tracker.stop(&mut viewport));
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut source = LeakySource::default();
        let mut tracker = ScrollPositionTracker::new();

        tracker.start(&mut source, |_| {});
        assert!(tracker.stop(&mut source));
        assert!(!tracker.stop(&mut source));
        assert!(!tracker.is_active());
        assert_eq!(source.unsubscribed, 1);
    }

    #[test]
    fn test_late_delivery_ignored() {
        let mut source = LeakySource::default();
        let mut tracker = ScrollPositionTracker::new();
        let calls = Rc::new(Cell::new(0));
        let calls_clone = Rc::clone(&calls);

        tracker.start(&mut source, move |_| calls_clone.set(calls_clone.get() + 1));
        source.emit(3);
        tracker.stop(&mut source);
        source.emit(9);

        assert_eq!(calls.get(), 1);
        assert_eq!(tracker.current(), 3);
    }
}
