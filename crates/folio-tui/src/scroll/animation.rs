//! Smooth page scroller

use folio_core::nav::ScrollOffset;

use super::config::{ScrollConfig, ScrollConfigExt};
use super::timing::Tween;

/// Animates the page offset toward a target
///
/// Key presses accumulate into `scroll_by` deltas that are folded into a
/// single animation on the next `update`. `scroll_to` (anchor jumps)
/// replaces whatever animation is running: the last request wins.
#[derive(Debug, Clone)]
pub struct SmoothScroller {
    tween: Option<Tween>,
    config: ScrollConfig,
    current: ScrollOffset,
    pending_delta: i32,
}

impl Default for SmoothScroller {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl SmoothScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            tween: None,
            config,
            current: 0,
            pending_delta: 0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Whether the loop should run at animation frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.tween.is_some() || self.pending_delta != 0
    }

    #[inline]
    pub fn current(&self) -> ScrollOffset {
        self.current
    }

    /// Where the page ends up once the animation finishes
    pub fn target(&self) -> ScrollOffset {
        self.tween
            .as_ref()
            .map(|t| t.to() as ScrollOffset)
            .unwrap_or(self.current)
    }

    /// Move immediately, dropping any animation
    pub fn jump_to(&mut self, offset: ScrollOffset) {
        self.tween = None;
        self.pending_delta = 0;
        self.current = offset;
    }

    /// Animate to `target` (clamped to `max`)
    pub fn scroll_to(&mut self, target: ScrollOffset, max: ScrollOffset) {
        let target = target.min(max);
        self.pending_delta = 0;

        if !self.config.is_smooth() {
            self.jump_to(target);
            return;
        }
        self.start(target);
    }

    /// Scroll by `delta` rows (positive = down)
    pub fn scroll_by(&mut self, delta: i32, max: ScrollOffset) {
        if !self.config.is_smooth() {
            self.jump_to(offset_plus(self.current, delta, max));
            return;
        }
        self.pending_delta += delta;
    }

    /// One keyboard step down
    pub fn step_down(&mut self, max: ScrollOffset) {
        self.scroll_by(self.step(), max);
    }

    /// One keyboard step up
    pub fn step_up(&mut self, max: ScrollOffset) {
        self.scroll_by(-self.step(), max);
    }

    pub fn half_page_down(&mut self, viewport_height: u16, max: ScrollOffset) {
        self.scroll_by((viewport_height / 2).max(1) as i32, max);
    }

    pub fn half_page_up(&mut self, viewport_height: u16, max: ScrollOffset) {
        self.scroll_by(-((viewport_height / 2).max(1) as i32), max);
    }

    pub fn page_down(&mut self, viewport_height: u16, max: ScrollOffset) {
        self.scroll_by(viewport_height.max(1) as i32, max);
    }

    pub fn page_up(&mut self, viewport_height: u16, max: ScrollOffset) {
        self.scroll_by(-(viewport_height.max(1) as i32), max);
    }

    /// Advance the animation and return the offset to display
    pub fn update(&mut self, max: ScrollOffset) -> ScrollOffset {
        if self.pending_delta != 0 {
            let target = offset_plus(self.target(), self.pending_delta, max);
            self.pending_delta = 0;
            if target != self.current {
                self.start(target);
            }
        }

        if let Some(tween) = &self.tween {
            if tween.is_complete() {
                self.current = (tween.to() as ScrollOffset).min(max);
                self.tween = None;
            } else {
                self.current = (tween.value().round().max(0.0) as ScrollOffset).min(max);
            }
        }

        self.current = self.current.min(max);
        self.current
    }

    pub fn cancel(&mut self) {
        self.tween = None;
        self.pending_delta = 0;
    }

    fn start(&mut self, target: ScrollOffset) {
        if target == self.current {
            self.tween = None;
            return;
        }
        self.tween = Some(Tween::new(
            self.current as f64,
            target as f64,
            self.config.animation_duration(),
            self.config.easing,
        ));
    }

    fn step(&self) -> i32 {
        if self.config.is_smooth() {
            1
        } else {
            self.config.scroll_lines.max(1) as i32
        }
    }
}

fn offset_plus(offset: ScrollOffset, delta: i32, max: ScrollOffset) -> ScrollOffset {
    (offset as i32 + delta).clamp(0, max as i32) as ScrollOffset
}
