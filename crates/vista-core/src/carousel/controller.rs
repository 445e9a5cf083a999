use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::config::CarouselConfig;
use crate::content::{slide_copy, HeroSlide, SlideCopy};
use crate::motion::{EasingType, Tween};
use crate::{Error, Result};

/// Why the active slide moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideChange {
    Autoplay,
    Next,
    Prev,
    Select,
}

/// Snapshot published to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarouselState {
    pub active_index: usize,
    pub transition_progress: f64,
}

/// Active-slide state machine for the hero carousel
///
/// Every index change restarts the caption entrance tween. The autoplay
/// cadence lives outside (see `AutoplayTimer`), so manual navigation never
/// shifts the next autoplay tick.
#[derive(Debug, Clone)]
pub struct CarouselController {
    slides: Vec<HeroSlide>,
    active_index: usize,
    transition: Tween,
    transition_duration: Duration,
    easing: EasingType,
}

impl CarouselController {
    /// Start on the first slide; its entrance plays from `now`
    pub fn new(slides: Vec<HeroSlide>, config: &CarouselConfig, now: Instant) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::EmptyCarousel);
        }
        let transition_duration = Duration::from_millis(config.transition_ms);
        Ok(Self {
            slides,
            active_index: 0,
            transition: Tween::new(now, transition_duration, config.easing),
            transition_duration,
            easing: config.easing,
        })
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[HeroSlide] {
        &self.slides
    }

    pub fn active_slide(&self) -> &HeroSlide {
        &self.slides[self.active_index]
    }

    /// Caption of the active slide (default copy when it has none)
    pub fn active_copy(&self) -> &'static SlideCopy {
        slide_copy(self.active_slide().id)
    }

    pub fn transition_progress(&self, now: Instant) -> f64 {
        self.transition.progress(now)
    }

    pub fn is_transitioning(&self, now: Instant) -> bool {
        !self.transition.is_complete(now)
    }

    pub fn state(&self, now: Instant) -> CarouselState {
        CarouselState {
            active_index: self.active_index,
            transition_progress: self.transition_progress(now),
        }
    }

    /// Autoplay period elapsed: advance one slide
    pub fn on_timer_elapsed(&mut self, now: Instant) -> Option<usize> {
        let target = (self.active_index + 1) % self.slides.len();
        self.go_to(target, SlideChange::Autoplay, now)
    }

    pub fn next(&mut self, now: Instant) -> Option<usize> {
        let target = (self.active_index + 1) % self.slides.len();
        self.go_to(target, SlideChange::Next, now)
    }

    pub fn prev(&mut self, now: Instant) -> Option<usize> {
        let count = self.slides.len();
        let target = (self.active_index + count - 1) % count;
        self.go_to(target, SlideChange::Prev, now)
    }

    /// Jump to `index`; out of range is rejected without touching state
    pub fn select(&mut self, index: usize, now: Instant) -> Result<Option<usize>> {
        if index >= self.slides.len() {
            return Err(Error::SlideOutOfRange {
                index,
                count: self.slides.len(),
            });
        }
        Ok(self.go_to(index, SlideChange::Select, now))
    }

    /// Jump to the slide with identifier `id`
    pub fn select_by_id(&mut self, id: &str, now: Instant) -> Result<Option<usize>> {
        let index = self
            .slides
            .iter()
            .position(|slide| slide.id == id)
            .ok_or_else(|| Error::UnknownSlide(id.to_string()))?;
        self.select(index, now)
    }

    /// Move to `target`, restarting the entrance; None when nothing changed
    fn go_to(&mut self, target: usize, cause: SlideChange, now: Instant) -> Option<usize> {
        if target == self.active_index {
            return None;
        }
        debug!(from = self.active_index, to = target, ?cause, "hero slide changed");
        self.active_index = target;
        self.transition = Tween::new(now, self.transition_duration, self.easing);
        Some(target)
    }
}
