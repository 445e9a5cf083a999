//! Page scroll animation controller
//!
//! Positions are in terminal rows. Every call that may start or advance an
//! animation takes `now`, so the host loop owns the clock.

use std::time::Instant;

use vista_core::motion::{lerp_u16, Tween};

use super::config::{ScrollConfigExt, UiConfig};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    tween: Tween,
    from: u16,
    to: u16,
}

/// Smooth page scroller
///
/// Call `scroll_to()` or `scroll_by()` to request movement, then `update()`
/// each frame to get the current interpolated row.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: UiConfig,
    current_scroll: u16,
    /// Pending delta for batching several key presses into one animation
    pending_delta: i32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: UiConfig) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0,
            pending_delta: 0,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Animation or pending delta; use this to decide on frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Final position after the running animation
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Set scroll position immediately (no animation)
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Animate to `target`, or jump when smooth scrolling is off
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if !self.config.is_smooth() {
            self.set_scroll(target);
            return;
        }
        self.start(target, now);
    }

    /// Scroll by a delta (positive = down); applied on the next `update`
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.config.is_smooth() {
            let new_scroll = (self.current_scroll as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.set_scroll(new_scroll);
            return;
        }
        self.pending_delta += delta;
    }

    pub fn scroll_down(&mut self, max_scroll: u16) {
        self.scroll_by(self.config.scroll_step_rows as i32, max_scroll);
    }

    pub fn scroll_up(&mut self, max_scroll: u16) {
        self.scroll_by(-(self.config.scroll_step_rows as i32), max_scroll);
    }

    pub fn scroll_half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(half_page, max_scroll);
    }

    pub fn scroll_half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        let half_page = (viewport_height / 2).max(1) as i32;
        self.scroll_by(-half_page, max_scroll);
    }

    pub fn scroll_full_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(viewport_height as i32, max_scroll);
    }

    pub fn scroll_full_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-(viewport_height as i32), max_scroll);
    }

    /// Advance to `now` and return the current row
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let new_target = (self.target_scroll() as i32 + self.pending_delta)
                .clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;
            self.start(new_target, now);
        }

        if let Some(anim) = &self.animation {
            if anim.tween.is_complete(now) {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = anim.tween.progress(now);
                self.current_scroll = lerp_u16(anim.from, anim.to, t).min(max_scroll);
            }
        }

        self.current_scroll
    }

    fn start(&mut self, target: u16, now: Instant) {
        if target == self.current_scroll {
            self.animation = None;
            return;
        }
        self.animation = Some(ActiveAnimation {
            tween: Tween::new(now, self.config.animation_duration(), self.config.scroll_easing),
            from: self.current_scroll,
            to: target,
        });
    }

    /// Stop at the current position
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn smooth() -> UiConfig {
        UiConfig {
            smooth_scroll: true,
            scroll_duration_ms: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let config = UiConfig {
            smooth_scroll: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);

        animator.scroll_to(100, 200, Instant::now());
        assert_eq!(animator.current_scroll(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut animator = ScrollAnimator::new(smooth());
        let t0 = Instant::now();

        animator.scroll_to(100, 200, t0);
        assert!(animator.is_animating());
        assert_eq!(animator.target_scroll(), 100);

        let mid = animator.update(200, t0 + Duration::from_millis(50));
        assert!(mid > 0 && mid < 100);

        assert_eq!(animator.update(200, t0 + Duration::from_millis(100)), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_scroll_by_batching() {
        let mut animator = ScrollAnimator::new(smooth());

        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);
        animator.scroll_by(10, 200);

        animator.update(200, Instant::now());
        assert_eq!(animator.target_scroll(), 30);
    }

    #[test]
    fn test_scroll_clamp_max() {
        let mut animator = ScrollAnimator::default();
        animator.set_scroll(50);
        animator.scroll_to(300, 100, Instant::now());
        assert_eq!(animator.target_scroll(), 100);

        animator.scroll_by(-500, 100);
        animator.update(100, Instant::now());
        assert_eq!(animator.target_scroll(), 0);
    }
}
