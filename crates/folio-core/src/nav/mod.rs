//! Viewport navigation
//!
//! Scroll-reactive header visibility and smooth in-page navigation.
//!
//! - `viewport` - scroll event source trait and the page `Viewport`
//! - `tracker` - subscribes to a source, keeps previous/current offsets
//! - `policy` - pure header visibility decision
//! - `registry` - section id to anchor lookup
//! - `anchor` - traits for anchor targets and the header surface
//! - `controller` - ties the above together
//!
//! # Usage
//!
//! ```ignore
//! let mut viewport = Viewport::new(max_offset);
//! let mut nav = NavigationController::new(header, config.ui.header.hide_offset);
//! nav.register("projects", projects_anchor);
//! nav.mount(&mut viewport);
//!
//! viewport.scroll_to(12);    // header hides
//! nav.activate("projects");  // anchor scrolls into view
//!
//! nav.unmount(&mut viewport);
//! ```

pub mod anchor;
pub mod controller;
pub mod policy;
pub mod registry;
pub mod tracker;
pub mod viewport;

pub use anchor::{AnchorTarget, HeaderSurface};
pub use controller::{Activation, NavigationController};
pub use policy::{decide, Visibility};
pub use registry::{SectionAnchorRegistry, SectionId};
pub use tracker::{ScrollPositionTracker, ScrollSample};
pub use viewport::{ListenerId, ScrollListener, ScrollOffset, Viewport, ViewportEventSource};
