//! Smooth scrolling for the portfolio page
//!
//! - `easing` - easing curves
//! - `timing` - progress, interpolation and the `Tween` transition
//! - `config` - configuration helpers (types live in folio-core)
//! - `animation` - the page scroller built on `Tween`
//!
//! The header slide (`crate::header`) uses the same `Tween`.

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::SmoothScroller;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
pub use timing::Tween;
