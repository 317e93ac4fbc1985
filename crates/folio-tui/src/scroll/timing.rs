//! Time based interpolation shared by page scrolling and the header slide

use std::time::{Duration, Instant};

use super::easing::{EasingType, EasingTypeExt};

/// Progress (0.0 to 1.0) of an animation started at `start`
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (start.elapsed().as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// A single eased transition between two values
#[derive(Debug, Clone)]
pub struct Tween {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration, easing: EasingType) -> Self {
        Self {
            start: Instant::now(),
            from,
            to,
            duration,
            easing,
        }
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    /// Value at progress `t`
    pub fn value_at(&self, t: f64) -> f64 {
        lerp(self.from, self.to, self.easing.apply(t))
    }

    /// Value right now
    pub fn value(&self) -> f64 {
        self.value_at(progress(self.start, self.duration))
    }

    pub fn is_complete(&self) -> bool {
        self.start.elapsed() >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(10.0, -10.0, 1.0) + 10.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let tween = Tween::new(0.0, -3.0, Duration::ZERO, EasingType::Cubic);
        assert!(tween.is_complete());
        assert!((tween.value() + 3.0).abs() < 0.001);
    }

    #[test]
    fn test_value_at() {
        let tween = Tween::new(10.0, 20.0, Duration::from_secs(60), EasingType::Linear);
        assert!((tween.value_at(0.0) - 10.0).abs() < 0.001);
        assert!((tween.value_at(0.3) - 13.0).abs() < 0.001);
        assert!((tween.value_at(2.0) - 20.0).abs() < 0.001);
        assert!(!tween.is_complete());
    }
}
