//! One page view: the core modules wired together behind the host-facing API.

use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::carousel::{AutoplayTick, AutoplayTimer, CarouselController, CarouselState, SlideChange};
use crate::config::AppConfig;
use crate::contact::ContactForm;
use crate::content::{HeroSlide, PortfolioCategory, HERO_SLIDES};
use crate::nav::{DropdownKey, NavMenuState};
use crate::observer::{RevealSignal, ScrollObserver};
use crate::registry::SectionRegistry;
use crate::reveal::{RevealElement, RevealOrchestrator};
use crate::section::SectionKey;
use crate::Result;

/// Events published to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PageEvent {
    /// The header crossed the scrolled-past-top threshold
    HeaderChromeChanged { scrolled_past_top: bool },
    /// A section's reveal started
    SectionRevealed { section: SectionKey },
    /// The footer fade started
    FooterRevealed,
    /// The hero carousel moved to another slide
    SlideChanged { index: usize, cause: SlideChange },
}

/// State of a single page view
///
/// All mutation happens through `&mut self` on the host's event loop, so
/// scroll events, layout reports, timer ticks and clicks are applied in the
/// order the host delivers them. Every time-dependent call takes `now`.
#[derive(Debug)]
pub struct PageSession {
    registry: SectionRegistry,
    observer: ScrollObserver,
    reveals: RevealOrchestrator,
    carousel: CarouselController,
    nav: NavMenuState,
    contact: ContactForm,
    portfolio_filter: PortfolioCategory,
    autoplay_period: Duration,
    autoplay: Option<AutoplayTimer>,
    event_tx: Option<mpsc::UnboundedSender<PageEvent>>,
}

impl PageSession {
    /// Session over the standard hero slides
    pub fn new(config: &AppConfig, now: Instant) -> Result<Self> {
        Self::with_slides(HERO_SLIDES.to_vec(), config, now)
    }

    pub fn with_slides(slides: Vec<HeroSlide>, config: &AppConfig, now: Instant) -> Result<Self> {
        Ok(Self {
            registry: SectionRegistry::new(),
            observer: ScrollObserver::new(config.scroll.clone()),
            reveals: RevealOrchestrator::new(),
            carousel: CarouselController::new(slides, &config.carousel, now)?,
            nav: NavMenuState::default(),
            contact: ContactForm::new(),
            portfolio_filter: PortfolioCategory::All,
            autoplay_period: Duration::from_millis(config.carousel.autoplay_interval_ms),
            autoplay: None,
            event_tx: None,
        })
    }

    /// Set the event sender for rendering-layer notifications
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<PageEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    fn send_event(&self, event: PageEvent) {
        send(&self.event_tx, event);
    }

    // ---- layout and scroll ----

    /// Layout engine reported where `key` sits
    ///
    /// Thresholds are re-checked against the last scroll offset, so a section
    /// laid out after the user already scrolled past it still reveals.
    pub fn record_offset(&mut self, key: SectionKey, y: f64, now: Instant) {
        if self.registry.record_offset(key, y) {
            self.evaluate(now);
        }
    }

    /// Scroll surface moved to `offset_y`
    pub fn on_scroll(&mut self, offset_y: f64, now: Instant) {
        if let Some(scrolled_past_top) = self.observer.update(offset_y) {
            self.send_event(PageEvent::HeaderChromeChanged { scrolled_past_top });
        }
        self.evaluate(now);
    }

    fn evaluate(&mut self, now: Instant) {
        let tx = &self.event_tx;
        self.observer
            .evaluate(&self.registry, &mut self.reveals, now, |signal| {
                let event = match signal {
                    RevealSignal::Section(section) => PageEvent::SectionRevealed { section },
                    RevealSignal::Footer => PageEvent::FooterRevealed,
                };
                send(tx, event);
            });
    }

    pub fn scroll_offset(&self) -> f64 {
        self.observer.offset_y()
    }

    pub fn scrolled_past_top(&self) -> bool {
        self.observer.scrolled_past_top()
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn reveals(&self) -> &RevealOrchestrator {
        &self.reveals
    }

    pub fn reveal_progress(&self, key: SectionKey, element: RevealElement, now: Instant) -> f64 {
        self.reveals.progress(key, element, now)
    }

    pub fn footer_progress(&self, now: Instant) -> f64 {
        self.reveals.footer_progress(now)
    }

    // ---- carousel ----

    /// Spawn the autoplay interval owned by this page view
    ///
    /// Returns the tick receiver the host must drain and forward to
    /// `on_autoplay_tick`. None when autoplay is disabled. Must be called
    /// from within a tokio runtime.
    pub fn start_autoplay(&mut self) -> Option<mpsc::UnboundedReceiver<AutoplayTick>> {
        if self.autoplay_period.is_zero() {
            info!("Hero autoplay disabled (autoplay_interval_ms = 0)");
            return None;
        }
        if self.autoplay.is_some() {
            warn!("Hero autoplay already running; restarting it");
        }
        let (tx, rx) = mpsc::unbounded_channel();
        self.autoplay = Some(AutoplayTimer::spawn(self.autoplay_period, tx));
        Some(rx)
    }

    /// Release the autoplay timer; later calls are no-ops
    pub fn stop_autoplay(&mut self) {
        if let Some(timer) = self.autoplay.take() {
            timer.cancel();
        }
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.as_ref().is_some_and(AutoplayTimer::is_running)
    }

    pub fn on_autoplay_tick(&mut self, now: Instant) {
        let changed = self.carousel.on_timer_elapsed(now);
        self.publish_slide(changed, SlideChange::Autoplay);
    }

    pub fn next_slide(&mut self, now: Instant) {
        let changed = self.carousel.next(now);
        self.publish_slide(changed, SlideChange::Next);
    }

    pub fn prev_slide(&mut self, now: Instant) {
        let changed = self.carousel.prev(now);
        self.publish_slide(changed, SlideChange::Prev);
    }

    pub fn select_slide(&mut self, index: usize, now: Instant) -> Result<()> {
        let changed = self.carousel.select(index, now)?;
        self.publish_slide(changed, SlideChange::Select);
        Ok(())
    }

    fn publish_slide(&self, changed: Option<usize>, cause: SlideChange) {
        if let Some(index) = changed {
            self.send_event(PageEvent::SlideChanged { index, cause });
        }
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn carousel_state(&self, now: Instant) -> CarouselState {
        self.carousel.state(now)
    }

    // ---- navigation ----

    pub fn nav(&self) -> &NavMenuState {
        &self.nav
    }

    pub fn set_dropdown(&mut self, key: DropdownKey) {
        self.nav.set_dropdown(key);
    }

    pub fn clear_dropdown(&mut self, key: DropdownKey) -> bool {
        self.nav.clear_dropdown(key)
    }

    pub fn close_dropdowns(&mut self) {
        self.nav.close_dropdowns();
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.nav.toggle_mobile_menu()
    }

    /// A nav destination was picked: close menus and return the scroll target
    pub fn select_nav_destination(&mut self, section: SectionKey) -> f64 {
        self.nav.destination_selected();
        self.registry.scroll_target(section)
    }

    // ---- collaborators ----

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    pub fn portfolio_filter(&self) -> PortfolioCategory {
        self.portfolio_filter
    }

    pub fn set_portfolio_filter(&mut self, category: PortfolioCategory) {
        self.portfolio_filter = category;
    }

    /// True while any reveal or the hero caption is still moving
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.reveals.is_settled(now) || self.carousel.is_transitioning(now)
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        self.stop_autoplay();
    }
}

fn send(tx: &Option<mpsc::UnboundedSender<PageEvent>>, event: PageEvent) {
    if let Some(tx) = tx {
        if tx.send(event).is_err() {
            warn!("Failed to send page event: receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (PageSession, mpsc::UnboundedReceiver<PageEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = PageSession::new(&AppConfig::default(), Instant::now())
            .unwrap()
            .with_event_sender(tx);
        (session, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<PageEvent>) -> Vec<PageEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn lay_out(session: &mut PageSession, now: Instant) {
        for (key, y) in [
            (SectionKey::Hero, 0.0),
            (SectionKey::Services, 900.0),
            (SectionKey::Process, 1800.0),
            (SectionKey::Work, 2600.0),
            (SectionKey::Testimonials, 3600.0),
            (SectionKey::Contact, 4400.0),
        ] {
            session.record_offset(key, y, now);
        }
    }

    #[test]
    fn test_scroll_reveals_sections_in_order() {
        let (mut session, mut rx) = session();
        let now = Instant::now();
        lay_out(&mut session, now);
        assert!(drain(&mut rx).is_empty());

        for y in (0..=4000).step_by(50) {
            session.on_scroll(y as f64, now);
        }

        assert_eq!(
            drain(&mut rx),
            vec![
                PageEvent::HeaderChromeChanged { scrolled_past_top: true },
                PageEvent::SectionRevealed { section: SectionKey::Services },
                PageEvent::SectionRevealed { section: SectionKey::Process },
                PageEvent::SectionRevealed { section: SectionKey::Work },
                PageEvent::SectionRevealed { section: SectionKey::Testimonials },
                PageEvent::FooterRevealed,
            ]
        );
    }

    #[test]
    fn test_scroll_flood_triggers_once() {
        let (mut session, mut rx) = session();
        let now = Instant::now();
        session.record_offset(SectionKey::Testimonials, 1000.0, now);

        for _ in 0..500 {
            session.on_scroll(900.0, now);
        }

        let events = drain(&mut rx);
        let footer_count = events.iter().filter(|e| **e == PageEvent::FooterRevealed).count();
        let reveal_count = events
            .iter()
            .filter(|e| matches!(e, PageEvent::SectionRevealed { .. }))
            .count();
        assert_eq!(footer_count, 1);
        assert_eq!(reveal_count, 1);
    }

    #[test]
    fn test_layout_after_scroll_still_reveals() {
        let (mut session, mut rx) = session();
        let now = Instant::now();
        session.on_scroll(5000.0, now);
        drain(&mut rx);

        session.record_offset(SectionKey::Work, 2600.0, now);
        assert_eq!(
            drain(&mut rx),
            vec![PageEvent::SectionRevealed { section: SectionKey::Work }]
        );
        assert!(!session.reveals().is_pending(SectionKey::Work));
    }

    #[test]
    fn test_threshold_is_inclusive_at_lookahead() {
        let (mut session, _rx) = session();
        let now = Instant::now();
        session.record_offset(SectionKey::Services, 1300.0, now);

        session.on_scroll(999.0, now);
        assert!(session.reveals().is_pending(SectionKey::Services));
        session.on_scroll(1000.0, now);
        assert!(!session.reveals().is_pending(SectionKey::Services));
    }

    #[test]
    fn test_reveal_progress_survives_scrolling_back_up() {
        let (mut session, _rx) = session();
        let t0 = Instant::now();
        lay_out(&mut session, t0);
        session.on_scroll(2400.0, t0);

        let settled = t0 + Duration::from_secs(3);
        session.on_scroll(0.0, settled);
        assert_eq!(
            session.reveal_progress(SectionKey::Work, RevealElement::Item(2), settled),
            1.0
        );
        assert!(!session.is_animating(settled));
    }

    #[test]
    fn test_slide_events_and_nav_destination() {
        let (mut session, mut rx) = session();
        let now = Instant::now();
        lay_out(&mut session, now);

        session.prev_slide(now);
        session.next_slide(now);
        assert!(session.select_slide(9, now).is_err());
        assert_eq!(
            drain(&mut rx),
            vec![
                PageEvent::SlideChanged { index: 2, cause: SlideChange::Prev },
                PageEvent::SlideChanged { index: 0, cause: SlideChange::Next },
            ]
        );

        session.toggle_mobile_menu();
        session.set_dropdown(DropdownKey::About);
        assert_eq!(session.select_nav_destination(SectionKey::Contact), 4400.0);
        assert_eq!(*session.nav(), NavMenuState::default());
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_string(&PageEvent::SectionRevealed {
            section: SectionKey::Work,
        })
        .unwrap();
        assert_eq!(json, r#"{"event":"section_revealed","section":"work"}"#);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_next_does_not_shift_autoplay() {
        let (mut session, _events) = session();
        let mut ticks = session.start_autoplay().unwrap();

        tokio::time::sleep(Duration::from_secs(5)).await;
        session.next_slide(Instant::now());
        assert_eq!(session.carousel().active_index(), 1);

        // 13s after start, not 13s after the click
        tokio::time::sleep(Duration::from_millis(8_010)).await;
        assert!(ticks.try_recv().is_ok());
        session.on_autoplay_tick(Instant::now());
        assert_eq!(session.carousel().active_index(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_autoplay() {
        let (mut session, _events) = session();
        let mut ticks = session.start_autoplay().unwrap();
        assert!(session.is_autoplaying());

        drop(session);
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(ticks.recv().await, None);
    }

    #[test]
    fn test_autoplay_disabled_by_config() {
        let mut config = AppConfig::default();
        config.carousel.autoplay_interval_ms = 0;
        let mut session = PageSession::new(&config, Instant::now()).unwrap();
        assert!(session.start_autoplay().is_none());
        assert!(!session.is_autoplaying());
    }
}
