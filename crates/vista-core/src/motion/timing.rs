//! Time calculation utilities
//!
//! Every function takes the sampling instant explicitly so callers decide
//! which clock drives the page.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at `now`
///
/// Progress is 0.0 before `start` and 1.0 once `duration` has elapsed.
/// A zero duration completes the moment `start` is reached.
#[inline]
pub fn progress_at(start: Instant, duration: Duration, now: Instant) -> f64 {
    let Some(elapsed) = now.checked_duration_since(start) else {
        return 0.0;
    };
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation starting at `start` has finished by `now`
#[inline]
pub fn is_complete_at(start: Instant, duration: Duration, now: Instant) -> bool {
    now.checked_duration_since(start)
        .is_some_and(|elapsed| elapsed >= duration)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for u16 values (scroll positions)
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(from as f64, to as f64, t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(24.0, 0.0, 1.0) - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.0), 0);
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(100, 0, 1.0), 0);
    }

    #[test]
    fn test_progress_before_start_is_zero() {
        let start = Instant::now() + Duration::from_millis(100);
        let now = start - Duration::from_millis(50);
        assert_eq!(progress_at(start, Duration::from_millis(200), now), 0.0);
    }

    #[test]
    fn test_progress_midway_and_after() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        assert!((progress_at(start, duration, start + Duration::from_millis(100)) - 0.5).abs() < 1e-9);
        assert_eq!(progress_at(start, duration, start + Duration::from_secs(5)), 1.0);
        assert!(is_complete_at(start, duration, start + duration));
        assert!(!is_complete_at(start, duration, start + Duration::from_millis(199)));
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert_eq!(progress_at(start, Duration::ZERO, start), 1.0);
    }
}
