use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;
use vista_core::content::{BRAND, BRAND_SUBTITLE};
use vista_core::nav::{DropdownKey, CENTER_NAV};

use crate::app::App;
use crate::theme::Neon;

const CTA: &str = " Book a call [c] ";

pub struct HeaderWidget;

impl HeaderWidget {
    /// Logo, center nav and CTA; gains a card background and rule once the
    /// page scrolls past the top
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let scrolled = app.session.scrolled_past_top();
        let bg = if scrolled { Neon::CARD } else { Neon::BG };
        let open = app.session.nav().open_dropdown;

        let mut spans = vec![
            Span::styled(" ◆ ", Style::default().fg(Neon::NEON).bg(bg)),
            Span::styled(
                BRAND,
                Style::default()
                    .fg(Neon::TEXT)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", BRAND_SUBTITLE), Style::default().fg(Neon::SUBTLE).bg(bg)),
            Span::styled("    ", Style::default().bg(bg)),
        ];

        for (i, item) in CENTER_NAV.iter().enumerate() {
            let is_open = open == Some(item.key);
            let style = if is_open {
                Style::default()
                    .fg(Neon::NEON)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Neon::TEXT_MUTED).bg(bg)
            };
            let caret = if is_open { "▴" } else { "▾" };
            spans.push(Span::styled(format!("{} {}{}  ", i + 1, item.label, caret), style));
        }

        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let padding = (area.width as usize).saturating_sub(used + CTA.width());
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            CTA,
            Style::default()
                .fg(Neon::BG)
                .bg(Neon::NEON)
                .add_modifier(Modifier::BOLD),
        ));

        let mut block = Block::default().style(Style::default().bg(bg));
        if scrolled {
            block = block
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Neon::BORDER).bg(bg));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, area);
    }

    /// Column where the center nav label for `key` starts
    pub fn label_column(key: DropdownKey) -> u16 {
        let mut column = (" ◆ ".width() + BRAND.width() + 2 + BRAND_SUBTITLE.width() + 4) as u16;
        for (i, item) in CENTER_NAV.iter().enumerate() {
            if item.key == key {
                break;
            }
            column += format!("{} {}▾  ", i + 1, item.label).width() as u16;
        }
        column
    }
}
