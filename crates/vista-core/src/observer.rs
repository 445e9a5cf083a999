//! Scroll position tracking and reveal threshold checks.

use std::time::Instant;

use tracing::{debug, warn};

use crate::config::ScrollConfig;
use crate::registry::SectionRegistry;
use crate::reveal::{RevealOrchestrator, TriggerOutcome};
use crate::section::SectionKey;

/// Section whose reveal also starts the footer fade
pub const FINAL_REVEAL_SECTION: SectionKey = SectionKey::Testimonials;

/// What a threshold pass started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealSignal {
    Section(SectionKey),
    Footer,
}

/// Latest scroll offset plus the derived header flag
#[derive(Debug, Clone)]
pub struct ScrollObserver {
    config: ScrollConfig,
    offset_y: f64,
    scrolled_past_top: bool,
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollObserver {
    /// Non-finite thresholds fall back to their defaults
    pub fn new(mut config: ScrollConfig) -> Self {
        let defaults = ScrollConfig::default();
        if !config.header_threshold_px.is_finite() {
            warn!(
                "Ignoring non-finite header threshold {}, using {}px",
                config.header_threshold_px, defaults.header_threshold_px
            );
            config.header_threshold_px = defaults.header_threshold_px;
        }
        if !config.lookahead_px.is_finite() {
            warn!(
                "Ignoring non-finite lookahead {}, using {}px",
                config.lookahead_px, defaults.lookahead_px
            );
            config.lookahead_px = defaults.lookahead_px;
        }

        Self {
            config,
            offset_y: 0.0,
            scrolled_past_top: false,
        }
    }

    #[inline]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    #[inline]
    pub fn scrolled_past_top(&self) -> bool {
        self.scrolled_past_top
    }

    /// Store a new scroll offset
    ///
    /// Returns `Some(flag)` when the header flag flipped. Non-finite offsets
    /// are ignored and leave the previous state untouched.
    pub fn update(&mut self, offset_y: f64) -> Option<bool> {
        if !offset_y.is_finite() {
            warn!("Ignoring non-finite scroll offset {}", offset_y);
            return None;
        }
        self.offset_y = offset_y;

        let past = offset_y > self.config.header_threshold_px;
        if past != self.scrolled_past_top {
            self.scrolled_past_top = past;
            Some(past)
        } else {
            None
        }
    }

    /// Whether a section at `section_y` is within lookahead of the current offset
    #[inline]
    pub fn has_reached(&self, section_y: f64) -> bool {
        self.offset_y + self.config.lookahead_px >= section_y
    }

    /// Trigger every pending section whose known offset has been reached
    ///
    /// Sections without a recorded offset are skipped whatever the scroll
    /// position. Each started reveal is reported through `emit`; the final
    /// reveal section also starts the footer in the same pass.
    pub fn evaluate(
        &self,
        registry: &SectionRegistry,
        orchestrator: &mut RevealOrchestrator,
        now: Instant,
        mut emit: impl FnMut(RevealSignal),
    ) {
        for key in SectionKey::ALL {
            if !orchestrator.is_pending(key) {
                continue;
            }
            let Some(section_y) = registry.offset(key) else {
                continue;
            };
            if !self.has_reached(section_y) {
                continue;
            }

            if orchestrator.trigger(key, now) == TriggerOutcome::Started {
                debug!(section = %key, offset_y = self.offset_y, section_y, "threshold crossed");
                emit(RevealSignal::Section(key));

                if key == FINAL_REVEAL_SECTION && orchestrator.trigger_footer(now) {
                    emit(RevealSignal::Footer);
                }
            }
        }
    }
}
