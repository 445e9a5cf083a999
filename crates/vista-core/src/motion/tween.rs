//! A play-once 0→1 transition scheduled at a fixed instant.

use std::time::{Duration, Instant};

use super::timing::{is_complete_at, progress_at};
use crate::config::EasingType;

/// One scheduled transition
///
/// The value is a pure function of the sampling instant: it is 0.0 before
/// `start`, eases towards 1.0 over `duration`, and stays at 1.0 forever after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    start: Instant,
    duration: Duration,
    easing: EasingType,
}

impl Tween {
    pub fn new(start: Instant, duration: Duration, easing: EasingType) -> Self {
        Self {
            start,
            duration,
            easing,
        }
    }

    /// Tween that begins `delay` after `origin`
    pub fn delayed(origin: Instant, delay: Duration, duration: Duration, easing: EasingType) -> Self {
        Self::new(origin + delay, duration, easing)
    }

    #[inline]
    pub fn start(&self) -> Instant {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Instant {
        self.start + self.duration
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Eased progress at `now`
    #[inline]
    pub fn progress(&self, now: Instant) -> f64 {
        self.easing.apply(progress_at(self.start, self.duration, now))
    }

    #[inline]
    pub fn is_complete(&self, now: Instant) -> bool {
        is_complete_at(self.start, self.duration, now)
    }
}

impl EasingType {
    /// Eased value of linear progress `t`, clamped to [0, 1]
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delayed_tween_waits() {
        let origin = Instant::now();
        let tween = Tween::delayed(
            origin,
            Duration::from_millis(150),
            Duration::from_millis(500),
            EasingType::Linear,
        );

        assert_eq!(tween.progress(origin), 0.0);
        assert_eq!(tween.progress(origin + Duration::from_millis(150)), 0.0);
        assert!((tween.progress(origin + Duration::from_millis(400)) - 0.5).abs() < 1e-9);
        assert_eq!(tween.progress(origin + Duration::from_millis(650)), 1.0);
        assert_eq!(tween.end(), origin + Duration::from_millis(650));
    }

    #[test]
    fn test_progress_never_decreases() {
        let origin = Instant::now();
        let tween = Tween::new(origin, Duration::from_millis(450), EasingType::Cubic);
        let mut prev = 0.0;
        for ms in (0..1000).step_by(25) {
            let value = tween.progress(origin + Duration::from_millis(ms));
            assert!(value >= prev);
            prev = value;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn test_cubic_entrance_front_loads() {
        let origin = Instant::now();
        let tween = Tween::new(origin, Duration::from_millis(450), EasingType::Cubic);

        // 40% of the way through, the item is already ~78% in
        let value = tween.progress(origin + Duration::from_millis(180));
        assert!((value - 0.784).abs() < 1e-9);
        assert_eq!(EasingType::Cubic.apply(-1.0), 0.0);
        assert_eq!(EasingType::Linear.apply(2.0), 1.0);
    }
}
