//! Page scroll settings, read from the `[ui]` config table.

use std::time::Duration;

pub use vista_core::UiConfig;

/// Extension trait for UiConfig with scroll/frame timing helpers
pub trait ScrollConfigExt {
    /// Get page scroll animation duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Get frame duration while something is animating
    fn animation_tick_duration(&self) -> Duration;

    /// Check if smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for UiConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            // Never a zero-length poll, even past 1000fps
            Duration::from_millis((1000 / self.animation_fps as u64).max(1))
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_scroll && self.scroll_duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_core::EasingType;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert!(config.smooth_scroll);
        assert_eq!(config.scroll_duration_ms, 220);
        assert_eq!(config.scroll_easing, EasingType::Cubic);
        assert_eq!(config.scroll_step_rows, 2);
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = UiConfig::default();
        assert!(config.is_smooth());

        config.smooth_scroll = false;
        assert!(!config.is_smooth());

        config.smooth_scroll = true;
        config.scroll_duration_ms = 0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_zero_fps_falls_back() {
        let config = UiConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_very_high_fps_keeps_a_frame_gap() {
        let config = UiConfig {
            animation_fps: 5000,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(1));
    }
}
