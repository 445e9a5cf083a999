use std::collections::HashMap;
use std::time::Instant;

use tracing::{debug, warn};

use super::plan::{RevealElement, RevealPlan, Timeline};
use crate::section::SectionKey;

/// One-shot reveal state of a section
///
/// Moves from `Pending` to `Triggered` exactly once and never back.
#[derive(Debug, Clone, PartialEq)]
pub enum RevealState {
    Pending,
    Triggered(Timeline),
}

impl RevealState {
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, RevealState::Pending)
    }

    /// Fire the transition; returns false when already triggered
    fn fire(&mut self, plan: &RevealPlan, now: Instant) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = RevealState::Triggered(plan.schedule(now));
        true
    }

    fn progress(&self, element: RevealElement, now: Instant) -> f64 {
        match self {
            RevealState::Pending => 0.0,
            RevealState::Triggered(timeline) => timeline.progress(element, now),
        }
    }

    fn is_settled(&self, now: Instant) -> bool {
        match self {
            RevealState::Pending => true,
            RevealState::Triggered(timeline) => timeline.is_settled(now),
        }
    }
}

/// Result of a trigger request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The section moved to Triggered and its timeline started
    Started,
    /// Nothing changed, the reveal already ran
    AlreadyTriggered,
    /// The section has no reveal choreography
    Undeclared,
}

#[derive(Debug, Clone)]
struct SectionReveal {
    plan: RevealPlan,
    state: RevealState,
}

/// Owns the reveal state of every declared section plus the footer fade
#[derive(Debug, Clone)]
pub struct RevealOrchestrator {
    sections: HashMap<SectionKey, SectionReveal>,
    footer_plan: RevealPlan,
    footer: RevealState,
}

impl Default for RevealOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealOrchestrator {
    /// Orchestrator with the page's standard choreography, every section Pending
    pub fn new() -> Self {
        let sections = SectionKey::ALL
            .into_iter()
            .filter_map(|key| {
                RevealPlan::for_section(key).map(|plan| {
                    (
                        key,
                        SectionReveal {
                            plan,
                            state: RevealState::Pending,
                        },
                    )
                })
            })
            .collect();

        Self {
            sections,
            footer_plan: RevealPlan::footer(),
            footer: RevealState::Pending,
        }
    }

    /// Start the reveal for `key` unless it already ran
    pub fn trigger(&mut self, key: SectionKey, now: Instant) -> TriggerOutcome {
        let Some(section) = self.sections.get_mut(&key) else {
            warn!("Reveal requested for section without choreography: {}", key);
            return TriggerOutcome::Undeclared;
        };

        if section.state.fire(&section.plan, now) {
            debug!(section = %key, "reveal started");
            TriggerOutcome::Started
        } else {
            TriggerOutcome::AlreadyTriggered
        }
    }

    /// Start the footer fade; returns false when it already ran
    pub fn trigger_footer(&mut self, now: Instant) -> bool {
        let started = self.footer.fire(&self.footer_plan, now);
        if started {
            debug!("footer reveal started");
        }
        started
    }

    /// True only for declared sections that have not revealed yet
    #[inline]
    pub fn is_pending(&self, key: SectionKey) -> bool {
        self.sections
            .get(&key)
            .is_some_and(|section| section.state.is_pending())
    }

    pub fn state(&self, key: SectionKey) -> Option<&RevealState> {
        self.sections.get(&key).map(|section| &section.state)
    }

    pub fn footer_state(&self) -> &RevealState {
        &self.footer
    }

    /// Sections with choreography, in page order
    pub fn declared(&self) -> impl Iterator<Item = SectionKey> + '_ {
        SectionKey::ALL
            .into_iter()
            .filter(|key| self.sections.contains_key(key))
    }

    /// Declared sections still waiting for their threshold, in page order
    pub fn pending_sections(&self) -> impl Iterator<Item = SectionKey> + '_ {
        SectionKey::ALL
            .into_iter()
            .filter(|key| self.is_pending(*key))
    }

    /// Progress of one element; 0.0 for pending or undeclared sections
    pub fn progress(&self, key: SectionKey, element: RevealElement, now: Instant) -> f64 {
        self.sections
            .get(&key)
            .map_or(0.0, |section| section.state.progress(element, now))
    }

    pub fn footer_progress(&self, now: Instant) -> f64 {
        self.footer.progress(RevealElement::Item(0), now)
    }

    /// Whether `key` has nothing left to animate at `now`
    pub fn section_settled(&self, key: SectionKey, now: Instant) -> bool {
        self.sections
            .get(&key)
            .map_or(true, |section| section.state.is_settled(now))
    }

    /// True when no triggered timeline is still moving at `now`
    pub fn is_settled(&self, now: Instant) -> bool {
        self.footer.is_settled(now)
            && self
                .sections
                .values()
                .all(|section| section.state.is_settled(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_every_declared_section_starts_pending() {
        let orchestrator = RevealOrchestrator::new();
        let declared: Vec<_> = orchestrator.declared().collect();
        assert_eq!(
            declared,
            vec![
                SectionKey::Services,
                SectionKey::Process,
                SectionKey::Work,
                SectionKey::Testimonials
            ]
        );
        assert_eq!(orchestrator.pending_sections().count(), 4);
        assert!(!orchestrator.is_pending(SectionKey::Hero));
    }

    #[test]
    fn test_trigger_is_idempotent() {
        let mut orchestrator = RevealOrchestrator::new();
        let t0 = Instant::now();

        assert_eq!(orchestrator.trigger(SectionKey::Work, t0), TriggerOutcome::Started);
        let after_first = orchestrator.state(SectionKey::Work).cloned();

        let later = t0 + Duration::from_millis(300);
        assert_eq!(
            orchestrator.trigger(SectionKey::Work, later),
            TriggerOutcome::AlreadyTriggered
        );
        assert_eq!(orchestrator.state(SectionKey::Work).cloned(), after_first);
    }

    #[test]
    fn test_progress_never_reset_by_retrigger() {
        let mut orchestrator = RevealOrchestrator::new();
        let t0 = Instant::now();
        orchestrator.trigger(SectionKey::Process, t0);

        let settled = t0 + Duration::from_secs(2);
        assert_eq!(
            orchestrator.progress(SectionKey::Process, RevealElement::Item(3), settled),
            1.0
        );

        orchestrator.trigger(SectionKey::Process, settled);
        assert_eq!(
            orchestrator.progress(SectionKey::Process, RevealElement::Item(3), settled),
            1.0
        );
        assert!(!orchestrator.is_pending(SectionKey::Process));
    }

    #[test]
    fn test_undeclared_section_is_a_noop() {
        let mut orchestrator = RevealOrchestrator::new();
        let now = Instant::now();
        assert_eq!(orchestrator.trigger(SectionKey::Contact, now), TriggerOutcome::Undeclared);
        assert!(orchestrator.state(SectionKey::Contact).is_none());
        assert_eq!(orchestrator.pending_sections().count(), 4);
    }

    #[test]
    fn test_pending_sections_sample_zero() {
        let orchestrator = RevealOrchestrator::new();
        let later = Instant::now() + Duration::from_secs(60);
        assert_eq!(
            orchestrator.progress(SectionKey::Services, RevealElement::Intro, later),
            0.0
        );
        assert_eq!(orchestrator.footer_progress(later), 0.0);
        assert!(orchestrator.is_settled(later));
    }

    #[test]
    fn test_footer_fires_once() {
        let mut orchestrator = RevealOrchestrator::new();
        let t0 = Instant::now();
        assert!(orchestrator.trigger_footer(t0));
        assert!(!orchestrator.trigger_footer(t0 + Duration::from_millis(100)));
        assert!(!orchestrator.is_settled(t0 + Duration::from_millis(599)));
        assert_eq!(orchestrator.footer_progress(t0 + Duration::from_millis(600)), 1.0);
    }
}
