//! Sliding header surface

use std::time::Duration;

use folio_core::nav::HeaderSurface;
use folio_core::{EasingType, HeaderConfig};

use crate::scroll::Tween;

/// Header height in rows
pub const HEADER_HEIGHT: u16 = 3;

/// Header surface that eases between its shown and hidden offsets
///
/// The navigation controller writes the target offset; the render loop
/// calls `update` each frame to advance the transition.
#[derive(Debug, Clone)]
pub struct HeaderSlide {
    target: i16,
    current: f64,
    tween: Option<Tween>,
    duration: Duration,
    easing: EasingType,
}

impl HeaderSlide {
    pub fn new(config: &HeaderConfig) -> Self {
        Self {
            target: 0,
            current: 0.0,
            tween: None,
            duration: Duration::from_millis(config.transition_ms),
            easing: config.easing,
        }
    }

    /// Offset the controller asked for
    pub fn target(&self) -> i16 {
        self.target
    }

    /// Offset to draw at, in rows (0 = fully visible)
    pub fn offset(&self) -> i16 {
        self.current.round() as i16
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Advance the transition; returns the offset to draw at
    pub fn update(&mut self) -> i16 {
        if let Some(tween) = &self.tween {
            if tween.is_complete() {
                self.current = tween.to();
                self.tween = None;
            } else {
                self.current = tween.value();
            }
        }
        self.offset()
    }
}

impl HeaderSurface for HeaderSlide {
    fn set_translate_y(&mut self, offset: i16) {
        if offset == self.target {
            return;
        }
        self.target = offset;

        if self.duration.is_zero() || self.easing == EasingType::None {
            self.current = offset as f64;
            self.tween = None;
        } else {
            // Start from wherever the header is now, mid-transition included
            self.tween = Some(Tween::new(self.current, offset as f64, self.duration, self.easing));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(transition_ms: u64) -> HeaderConfig {
        HeaderConfig {
            transition_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_without_transition() {
        let mut header = HeaderSlide::new(&config(0));
        header.set_translate_y(-3);
        assert_eq!(header.offset(), -3);
        assert!(!header.is_animating());
    }

    #[test]
    fn test_transition_runs() {
        let mut header = HeaderSlide::new(&config(10_000));
        header.set_translate_y(-3);
        assert!(header.is_animating());
        assert_eq!(header.target(), -3);
        assert!(header.update() > -3);
    }

    #[test]
    fn test_repeated_target_does_not_restart() {
        let mut header = HeaderSlide::new(&config(0));
        header.set_translate_y(0);
        assert!(!header.is_animating());
        assert_eq!(header.offset(), 0);
    }
}
