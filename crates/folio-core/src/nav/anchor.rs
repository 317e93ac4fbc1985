//! Collaborators driven by the navigation controller

use std::rc::Rc;

/// A location on the page that can bring itself into view.
///
/// Implementations scroll so the target's top edge meets the top of the
/// viewport, animating when smooth scrolling is available.
pub trait AnchorTarget {
    fn scroll_into_view(&self);
}

impl<T: AnchorTarget + ?Sized> AnchorTarget for Box<T> {
    fn scroll_into_view(&self) {
        (**self).scroll_into_view()
    }
}

impl<T: AnchorTarget + ?Sized> AnchorTarget for Rc<T> {
    fn scroll_into_view(&self) {
        (**self).scroll_into_view()
    }
}

/// The visual surface of the fixed header
pub trait HeaderSurface {
    /// Vertical translation in rows; 0 is fully on screen
    fn set_translate_y(&mut self, offset: i16);
}
