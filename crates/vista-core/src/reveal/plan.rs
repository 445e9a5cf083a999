//! Reveal choreography per section, and the timelines they expand into.

use std::time::{Duration, Instant};

use crate::motion::{EasingType, Tween};
use crate::section::SectionKey;

const SERVICES_INTRO: Duration = Duration::from_millis(550);
const SERVICES_CARD: Duration = Duration::from_millis(500);
const SERVICES_STAGGER: Duration = Duration::from_millis(150);
const SERVICES_CARDS: usize = 3;

const PROCESS_STEP: Duration = Duration::from_millis(450);
const PROCESS_STAGGER: Duration = Duration::from_millis(140);
const PROCESS_STEPS: usize = 4;

const WORK_CARD: Duration = Duration::from_millis(480);
const WORK_STAGGER: Duration = Duration::from_millis(160);
const WORK_CARDS: usize = 3;

const TESTIMONIAL_CARD: Duration = Duration::from_millis(450);
const TESTIMONIAL_STAGGER: Duration = Duration::from_millis(140);
const TESTIMONIAL_CARDS: usize = 3;

const FOOTER_FADE: Duration = Duration::from_millis(600);

/// How a section's elements enter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPlan {
    /// Intro element first; items cascade in only after it has finished
    Sequenced {
        intro: Duration,
        items: usize,
        item_duration: Duration,
        stagger: Duration,
        easing: EasingType,
    },
    /// All items start together, offset by `stagger` per index
    Staggered {
        items: usize,
        item_duration: Duration,
        stagger: Duration,
        easing: EasingType,
    },
}

impl RevealPlan {
    /// Choreography for a section, None for sections that never reveal
    pub fn for_section(key: SectionKey) -> Option<Self> {
        let plan = match key {
            SectionKey::Services => RevealPlan::Sequenced {
                intro: SERVICES_INTRO,
                items: SERVICES_CARDS,
                item_duration: SERVICES_CARD,
                stagger: SERVICES_STAGGER,
                easing: EasingType::Cubic,
            },
            SectionKey::Process => RevealPlan::Staggered {
                items: PROCESS_STEPS,
                item_duration: PROCESS_STEP,
                stagger: PROCESS_STAGGER,
                easing: EasingType::Cubic,
            },
            SectionKey::Work => RevealPlan::Staggered {
                items: WORK_CARDS,
                item_duration: WORK_CARD,
                stagger: WORK_STAGGER,
                easing: EasingType::Cubic,
            },
            SectionKey::Testimonials => RevealPlan::Staggered {
                items: TESTIMONIAL_CARDS,
                item_duration: TESTIMONIAL_CARD,
                stagger: TESTIMONIAL_STAGGER,
                easing: EasingType::Cubic,
            },
            SectionKey::Hero | SectionKey::Contact => return None,
        };
        Some(plan)
    }

    /// Single fade used for the page footer
    pub fn footer() -> Self {
        RevealPlan::Staggered {
            items: 1,
            item_duration: FOOTER_FADE,
            stagger: Duration::ZERO,
            easing: EasingType::Cubic,
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            RevealPlan::Sequenced { items, .. } | RevealPlan::Staggered { items, .. } => *items,
        }
    }

    /// Expand the plan into concrete tweens starting at `origin`
    pub fn schedule(&self, origin: Instant) -> Timeline {
        match *self {
            RevealPlan::Sequenced {
                intro,
                items,
                item_duration,
                stagger,
                easing,
            } => {
                let intro = Tween::new(origin, intro, easing);
                let cascade_origin = intro.end();
                Timeline {
                    intro: Some(intro),
                    items: stagger_tweens(cascade_origin, items, item_duration, stagger, easing),
                }
            }
            RevealPlan::Staggered {
                items,
                item_duration,
                stagger,
                easing,
            } => Timeline {
                intro: None,
                items: stagger_tweens(origin, items, item_duration, stagger, easing),
            },
        }
    }
}

fn stagger_tweens(
    origin: Instant,
    count: usize,
    duration: Duration,
    stagger: Duration,
    easing: EasingType,
) -> Vec<Tween> {
    (0..count)
        .map(|index| Tween::delayed(origin, stagger * index as u32, duration, easing))
        .collect()
}

/// Addressable element inside a revealed section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealElement {
    /// Title block of a sequenced section
    Intro,
    /// Child element by position
    Item(usize),
}

/// Concrete schedule computed once at trigger time
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    intro: Option<Tween>,
    items: Vec<Tween>,
}

impl Timeline {
    /// Progress of one element at `now`; elements the plan does not have sample as 0.0
    pub fn progress(&self, element: RevealElement, now: Instant) -> f64 {
        let tween = match element {
            RevealElement::Intro => self.intro.as_ref(),
            RevealElement::Item(index) => self.items.get(index),
        };
        tween.map_or(0.0, |t| t.progress(now))
    }

    /// Instant at which every element has reached 1.0
    pub fn settles_at(&self) -> Option<Instant> {
        self.intro.iter().chain(self.items.iter()).map(Tween::end).max()
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.settles_at().map_or(true, |end| now >= end)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn has_intro(&self) -> bool {
        self.intro.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_declared_sections() {
        assert!(RevealPlan::for_section(SectionKey::Hero).is_none());
        assert!(RevealPlan::for_section(SectionKey::Contact).is_none());
        assert_eq!(RevealPlan::for_section(SectionKey::Process).unwrap().item_count(), 4);
        assert_eq!(RevealPlan::for_section(SectionKey::Work).unwrap().item_count(), 3);
    }

    #[test]
    fn test_sequenced_items_wait_for_intro() {
        let origin = Instant::now();
        let timeline = RevealPlan::for_section(SectionKey::Services)
            .unwrap()
            .schedule(origin);

        assert!(timeline.has_intro());
        // Intro is running, no card has moved yet
        let mid_intro = origin + ms(400);
        assert!(timeline.progress(RevealElement::Intro, mid_intro) > 0.0);
        for index in 0..3 {
            assert_eq!(timeline.progress(RevealElement::Item(index), mid_intro), 0.0);
        }

        // Card k starts 550 + k * 150 ms after trigger
        let card_two_start = origin + ms(550 + 2 * 150);
        assert_eq!(timeline.progress(RevealElement::Item(2), card_two_start), 0.0);
        assert!(timeline.progress(RevealElement::Item(2), card_two_start + ms(1)) > 0.0);
        assert!(timeline.progress(RevealElement::Item(0), card_two_start) > 0.0);

        assert_eq!(timeline.settles_at(), Some(origin + ms(550 + 300 + 500)));
    }

    #[test]
    fn test_staggered_items_start_together_offset_by_index() {
        let origin = Instant::now();
        let timeline = RevealPlan::for_section(SectionKey::Work)
            .unwrap()
            .schedule(origin);

        assert!(!timeline.has_intro());
        assert_eq!(timeline.progress(RevealElement::Intro, origin + ms(5000)), 0.0);
        assert!(timeline.progress(RevealElement::Item(0), origin + ms(1)) > 0.0);
        assert_eq!(timeline.progress(RevealElement::Item(1), origin + ms(160)), 0.0);
        assert!(timeline.progress(RevealElement::Item(1), origin + ms(161)) > 0.0);
        assert!(timeline.is_settled(origin + ms(320 + 480)));
        assert!(!timeline.is_settled(origin + ms(320 + 479)));
    }

    #[test]
    fn test_missing_item_samples_zero() {
        let timeline = RevealPlan::footer().schedule(Instant::now());
        assert_eq!(timeline.item_count(), 1);
        assert_eq!(timeline.progress(RevealElement::Item(7), Instant::now() + ms(10_000)), 0.0);
    }
}
