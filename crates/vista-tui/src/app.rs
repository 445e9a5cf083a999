use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};
use vista_core::contact::ContactField;
use vista_core::nav::{nav_item, DropdownKey, MOBILE_NAV};
use vista_core::{AppConfig, PageSession, SectionKey};

use crate::layout::{px_to_rows, rows_to_px, PageLayout};
use crate::scroll::ScrollAnimator;

/// Rows above the page viewport (header bar and its chrome line)
pub const HEADER_ROWS: u16 = 2;
/// Rows below the page viewport
pub const STATUS_ROWS: u16 = 1;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Reading the page
    Normal,
    /// A header dropdown is open; highlighted child index
    Dropdown(usize),
    /// Mobile menu is open; highlighted link index
    MobileMenu(usize),
    /// Typing into the contact form
    Form(ContactField),
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Page engine state
    pub session: PageSession,
    /// Row layout at the current width
    pub layout: PageLayout,
    /// Page scroll animation
    pub scroll: ScrollAnimator,
    /// Current application mode
    pub mode: Mode,
    /// Page viewport size (excludes header and status bar)
    pub viewport_width: u16,
    pub viewport_height: u16,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Last row forwarded to the session
    reported_row: Option<u16>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, session: PageSession) -> Self {
        let scroll = ScrollAnimator::new(config.ui.clone());
        Self {
            config,
            session,
            layout: PageLayout::default(),
            scroll,
            mode: Mode::Normal,
            viewport_width: 0,
            viewport_height: 0,
            should_quit: false,
            status_message: None,
            pending_key: None,
            reported_row: None,
        }
    }

    /// Adopt a new terminal size and re-measure the page
    pub fn resize(&mut self, width: u16, height: u16, now: Instant) {
        self.viewport_width = width;
        self.viewport_height = height.saturating_sub(HEADER_ROWS + STATUS_ROWS);
        self.relayout(now);
    }

    /// Measure the page again and report every section offset
    pub fn relayout(&mut self, now: Instant) {
        self.layout = PageLayout::measure(&self.session, self.viewport_width, self.viewport_height);
        self.layout.report(&mut self.session, now);

        let max = self.max_scroll();
        if self.scroll.current_scroll() > max {
            self.scroll.set_scroll(max);
        }
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.max_scroll(self.viewport_height)
    }

    /// Advance the page scroll and forward a changed row to the session
    pub fn tick(&mut self, now: Instant) {
        let row = self.scroll.update(self.max_scroll(), now);
        if self.reported_row != Some(row) {
            self.reported_row = Some(row);
            self.session.on_scroll(rows_to_px(row), now);
        }
    }

    /// Whether the next frame should come at animation rate
    pub fn is_animating(&self, now: Instant) -> bool {
        self.scroll.needs_update() || self.session.is_animating(now)
    }

    pub fn current_section(&self) -> Option<SectionKey> {
        self.layout.section_at(self.scroll.current_scroll())
    }

    pub fn form_focus(&self) -> Option<ContactField> {
        match self.mode {
            Mode::Form(field) => Some(field),
            _ => None,
        }
    }

    /// Keys are text, not commands
    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::Form(_))
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // ---- page scroll ----

    pub fn scroll_down(&mut self) {
        let max = self.max_scroll();
        self.scroll.scroll_down(max);
    }

    pub fn scroll_up(&mut self) {
        let max = self.max_scroll();
        self.scroll.scroll_up(max);
    }

    pub fn scroll_half_page_down(&mut self) {
        let max = self.max_scroll();
        self.scroll.scroll_half_page_down(self.viewport_height, max);
    }

    pub fn scroll_half_page_up(&mut self) {
        let max = self.max_scroll();
        self.scroll.scroll_half_page_up(self.viewport_height, max);
    }

    pub fn scroll_page_down(&mut self) {
        let max = self.max_scroll();
        self.scroll.scroll_full_page_down(self.viewport_height, max);
    }

    pub fn scroll_page_up(&mut self) {
        let max = self.max_scroll();
        self.scroll.scroll_full_page_up(self.viewport_height, max);
    }

    pub fn jump_to_top(&mut self, now: Instant) {
        let max = self.max_scroll();
        self.scroll.scroll_to(0, max, now);
    }

    pub fn jump_to_bottom(&mut self, now: Instant) {
        let max = self.max_scroll();
        self.scroll.scroll_to(max, max, now);
    }

    /// Close menus and scroll to `key`
    pub fn go_to_section(&mut self, key: SectionKey, now: Instant) {
        let target = self.session.select_nav_destination(key);
        let max = self.max_scroll();
        self.scroll.scroll_to(px_to_rows(target), max, now);
        self.mode = Mode::Normal;
    }

    // ---- header navigation ----

    /// Open `key`, or close it when it is already the open one
    pub fn toggle_dropdown(&mut self, key: DropdownKey) {
        if self.session.nav().open_dropdown == Some(key) {
            self.close_dropdown();
            return;
        }
        if self.session.nav().mobile_open {
            self.session.toggle_mobile_menu();
        }
        self.session.set_dropdown(key);
        self.mode = Mode::Dropdown(0);
    }

    pub fn close_dropdown(&mut self) {
        if let Some(key) = self.session.nav().open_dropdown {
            self.session.clear_dropdown(key);
        }
        self.mode = Mode::Normal;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.session.close_dropdowns();
        self.mode = if self.session.toggle_mobile_menu() {
            Mode::MobileMenu(0)
        } else {
            Mode::Normal
        };
    }

    /// Move the highlight inside the open menu, wrapping
    pub fn menu_move(&mut self, delta: isize) {
        let (selected, len) = match self.mode {
            Mode::Dropdown(selected) => match self.session.nav().open_dropdown {
                Some(key) => (selected, nav_item(key).children.len()),
                None => return,
            },
            Mode::MobileMenu(selected) => (selected, MOBILE_NAV.len()),
            _ => return,
        };
        if len == 0 {
            return;
        }
        let next = (selected as isize + delta).rem_euclid(len as isize) as usize;
        self.mode = match self.mode {
            Mode::Dropdown(_) => Mode::Dropdown(next),
            _ => Mode::MobileMenu(next),
        };
    }

    /// Follow the highlighted menu link
    pub fn menu_confirm(&mut self, now: Instant) {
        let section = match self.mode {
            Mode::Dropdown(selected) => self
                .session
                .nav()
                .open_dropdown
                .and_then(|key| nav_item(key).children.get(selected))
                .map(|link| link.section),
            Mode::MobileMenu(selected) => MOBILE_NAV.get(selected).map(|link| link.section),
            _ => None,
        };
        if let Some(section) = section {
            self.go_to_section(section, now);
        }
    }

    /// Esc inside a menu
    pub fn close_menus(&mut self) {
        if self.session.nav().mobile_open {
            self.session.toggle_mobile_menu();
        }
        self.close_dropdown();
    }

    // ---- hero carousel ----

    pub fn next_slide(&mut self, now: Instant) {
        self.session.next_slide(now);
    }

    pub fn prev_slide(&mut self, now: Instant) {
        self.session.prev_slide(now);
    }

    pub fn select_slide(&mut self, index: usize, now: Instant) {
        if let Err(e) = self.session.select_slide(index, now) {
            warn!("Slide selection rejected: {}", e);
            self.set_status(e.to_string());
        }
    }

    // ---- work filter ----

    /// Next portfolio category; the page height changes, so re-measure
    pub fn cycle_portfolio_filter(&mut self, now: Instant) {
        let next = self.session.portfolio_filter().next();
        self.session.set_portfolio_filter(next);
        self.relayout(now);
        self.set_status(format!("Work: {}", next.label()));
    }

    // ---- contact form ----

    pub fn start_form(&mut self, now: Instant) {
        self.go_to_section(SectionKey::Contact, now);
        self.mode = Mode::Form(ContactField::Name);
    }

    pub fn form_next_field(&mut self) {
        if let Mode::Form(field) = self.mode {
            self.mode = Mode::Form(field.next());
        }
    }

    pub fn form_prev_field(&mut self) {
        if let Mode::Form(field) = self.mode {
            self.mode = Mode::Form(field.prev());
        }
    }

    pub fn form_input(&mut self, c: char) {
        if let Mode::Form(field) = self.mode {
            self.session.contact_mut().push_char(field, c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Mode::Form(field) = self.mode {
            self.session.contact_mut().pop_char(field);
        }
    }

    /// Validate and send the brief; on failure the form stays open
    pub fn submit_form(&mut self) {
        match self.session.contact_mut().submit() {
            Ok(brief) => {
                info!(email = %brief.email, company = %brief.company, "brief submitted");
                self.set_status("Brief sent: we'll reply within one business day.");
                self.mode = Mode::Normal;
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub fn exit_mode(&mut self) {
        match self.mode {
            Mode::Dropdown(_) | Mode::MobileMenu(_) => self.close_menus(),
            _ => self.mode = Mode::Normal,
        }
    }
}
