use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use super::anchor::{AnchorTarget, HeaderSurface};
use super::policy::{decide, Visibility};
use super::registry::{SectionAnchorRegistry, SectionId};
use super::tracker::ScrollPositionTracker;
use super::viewport::{ScrollOffset, ViewportEventSource};

/// Result of a navigation link activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The target was asked to scroll into view
    Scrolled,
    /// No anchor is registered for the id; nothing happened
    Unresolved,
}

/// Scroll-driven header state, shared with the tracker's listener
struct HeaderLoop<H> {
    header: H,
    visibility: Visibility,
    previous: ScrollOffset,
    hide_offset: i16,
    mounted: bool,
}

impl<H: HeaderSurface> HeaderLoop<H> {
    fn on_scroll(&mut self, current: ScrollOffset) -> Option<Visibility> {
        if !self.mounted {
            trace!(current, "scroll sample while unmounted, ignored");
            return None;
        }

        let next = decide(self.previous, current);
        if next != self.visibility {
            debug!(previous = self.previous, current, ?next, "header visibility changed");
        }
        self.header.set_translate_y(next.translate_y(self.hide_offset));
        self.visibility = next;
        self.previous = current;
        Some(next)
    }
}

/// Drives the fixed header from scroll movement and performs in-page
/// navigation to registered sections.
///
/// The controller is the only writer of the header surface. Mount it on
/// a viewport once the page is composed and unmount it on teardown.
pub struct NavigationController<H, T> {
    state: Rc<RefCell<HeaderLoop<H>>>,
    registry: SectionAnchorRegistry<T>,
    tracker: ScrollPositionTracker,
}

impl<H, T> NavigationController<H, T>
where
    H: HeaderSurface + 'static,
    T: AnchorTarget,
{
    /// Create a controller owning `header`. Starts Shown with a previous offset of 0.
    pub fn new(header: H, hide_offset: i16) -> Self {
        Self {
            state: Rc::new(RefCell::new(HeaderLoop {
                header,
                visibility: Visibility::Shown,
                previous: 0,
                hide_offset,
                mounted: false,
            })),
            registry: SectionAnchorRegistry::new(),
            tracker: ScrollPositionTracker::new(),
        }
    }

    /// Register (or replace) the anchor for a section
    pub fn register(&mut self, id: impl Into<SectionId>, target: T) {
        let id = id.into();
        trace!(section = %id, "anchor registered");
        self.registry.register(id, target);
    }

    pub fn registry(&self) -> &SectionAnchorRegistry<T> {
        &self.registry
    }

    /// Start reacting to scroll events from `source`
    pub fn mount<S>(&mut self, source: &mut S)
    where
        S: ViewportEventSource + ?Sized,
    {
        {
            let mut state = self.state.borrow_mut();
            state.mounted = true;
            state.previous = source.scroll_offset();
        }

        let state: Weak<RefCell<HeaderLoop<H>>> = Rc::downgrade(&self.state);
        self.tracker.start(source, move |offset| {
            // The controller may already be gone
            if let Some(state) = state.upgrade() {
                state.borrow_mut().on_scroll(offset);
            }
        });
    }

    /// Stop reacting to scroll events. Safe to call repeatedly.
    ///
    /// Returns true if a subscription was released by this call.
    pub fn unmount<S>(&mut self, source: &mut S) -> bool
    where
        S: ViewportEventSource + ?Sized,
    {
        self.state.borrow_mut().mounted = false;
        self.tracker.stop(source)
    }

    pub fn is_mounted(&self) -> bool {
        self.tracker.is_active()
    }

    /// Feed one scroll sample directly, as the tracker would.
    ///
    /// Returns the applied directive, or None when unmounted.
    pub fn on_scroll(&self, offset: ScrollOffset) -> Option<Visibility> {
        self.state.borrow_mut().on_scroll(offset)
    }

    /// Navigate to a section. Unknown ids are logged and ignored.
    pub fn activate(&self, id: &str) -> Activation {
        match self.registry.resolve(id) {
            Ok(target) => {
                debug!(section = id, "scrolling to section");
                target.scroll_into_view();
                Activation::Scrolled
            }
            Err(e) => {
                warn!("Navigation ignored: {}", e);
                Activation::Unresolved
            }
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.state.borrow().visibility
    }

    pub fn previous_offset(&self) -> ScrollOffset {
        self.state.borrow().previous
    }

    /// Read access to the header surface
    pub fn with_header<R>(&self, f: impl FnOnce(&H) -> R) -> R {
        f(&self.state.borrow().header)
    }

    /// Mutable access for render-side bookkeeping (e.g. advancing a
    /// transition). Visibility writes go through the controller only.
    pub fn with_header_mut<R>(&self, f: impl FnOnce(&mut H) -> R) -> R {
        f(&mut self.state.borrow_mut().header)
    }
}
