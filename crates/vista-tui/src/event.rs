//! Terminal input for the page view, paced by what is on screen.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::scroll::ScrollConfigExt;
use vista_core::UiConfig;

/// What woke the page view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageInput {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    /// Nothing arrived; draw the next frame
    Frame,
}

/// How soon the page view needs to draw again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Nothing is moving; wake on input or the idle tick
    Idle,
    /// A reveal, caption or scroll is mid-flight
    Animating,
}

/// Blocking crossterm reader with two wake-up rates
pub struct TerminalInput {
    idle: Duration,
    frame: Duration,
}

impl TerminalInput {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            idle: Duration::from_millis(ui.tick_rate_ms.max(1)),
            frame: ui.animation_tick_duration(),
        }
    }

    /// Longest wait before the next frame at `pace`
    pub fn timeout(&self, pace: Pace) -> Duration {
        match pace {
            Pace::Idle => self.idle,
            Pace::Animating => self.frame.min(self.idle),
        }
    }

    /// Wait for input or the next frame
    ///
    /// Returns None for terminal events the page ignores.
    pub fn wait(&self, pace: Pace) -> Result<Option<PageInput>> {
        if event::poll(self.timeout(pace))? {
            Ok(translate(event::read()?))
        } else {
            Ok(Some(PageInput::Frame))
        }
    }
}

/// Map a raw terminal event onto page input
///
/// Key releases and repeats are dropped (crossterm reports them on some
/// platforms), as are mouse, focus and paste events.
pub fn translate(event: Event) -> Option<PageInput> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(PageInput::Key(key)),
        Event::Resize(width, height) => Some(PageInput::Resize { width, height }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(KeyCode::Char('j'), KeyModifiers::NONE, kind))
    }

    #[test]
    fn test_only_key_presses_reach_the_page() {
        assert!(matches!(translate(key(KeyEventKind::Press)), Some(PageInput::Key(_))));
        assert_eq!(translate(key(KeyEventKind::Release)), None);
        assert_eq!(translate(key(KeyEventKind::Repeat)), None);
        assert_eq!(translate(Event::FocusLost), None);
    }

    #[test]
    fn test_resize_carries_terminal_size() {
        assert_eq!(
            translate(Event::Resize(120, 40)),
            Some(PageInput::Resize { width: 120, height: 40 })
        );
    }

    #[test]
    fn test_animating_wakes_at_frame_rate() {
        let input = TerminalInput::new(&UiConfig::default());
        assert_eq!(input.timeout(Pace::Animating), Duration::from_millis(16));
        assert!(input.timeout(Pace::Idle) > input.timeout(Pace::Animating));
    }

    #[test]
    fn test_frame_never_slower_than_idle() {
        let ui = UiConfig {
            tick_rate_ms: 10,
            animation_fps: 20,
            ..Default::default()
        };
        let input = TerminalInput::new(&ui);
        assert_eq!(input.timeout(Pace::Animating), Duration::from_millis(10));
    }
}
