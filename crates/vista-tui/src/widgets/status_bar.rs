use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};
use crate::layout::rows_to_px;
use crate::theme::Neon;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let mode_str = match app.mode {
            Mode::Normal => "PAGE",
            Mode::Dropdown(_) => "MENU",
            Mode::MobileMenu(_) => "MOBILE",
            Mode::Form(_) => "BRIEF",
            Mode::Help => "HELP",
        };

        let section = app
            .current_section()
            .map(|key| key.as_str())
            .unwrap_or("footer");
        let carousel = app.session.carousel_state(now);

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | slide {}/{} | y={}px{}",
                mode_str,
                section,
                carousel.active_index + 1,
                app.session.carousel().slide_count(),
                rows_to_px(app.scroll.current_scroll()),
                if app.session.is_autoplaying() { "" } else { " | autoplay off" },
            )
        };

        let help_hint = " q:quit j/k:scroll h/l:slides 1-4:menus ?:help ";
        let padding_len =
            (area.width as usize).saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(Neon::TEXT).bg(Neon::CARD_SOFT),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(Neon::CARD_SOFT)),
            Span::styled(
                help_hint,
                Style::default().fg(Neon::SUBTLE).bg(Neon::CARD_SOFT),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
