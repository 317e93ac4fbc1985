//! Scroll configuration helpers

use std::time::Duration;

pub use folio_core::ScrollConfig;

/// Extension trait for ScrollConfig
pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Frame interval while an animation is running
    fn animation_tick_duration(&self) -> Duration;

    /// Smooth scrolling is on and has a non-zero duration
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}
