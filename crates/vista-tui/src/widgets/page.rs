use std::time::Instant;

use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};
use vista_core::SectionKey;

use crate::app::App;
use crate::theme::Neon;
use crate::widgets::sections::{footer_lines, section_lines, Paint};

pub struct PageWidget;

impl PageWidget {
    /// Scrolled page body, sampled at `now`
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let paint = Paint::live(&app.session, now, app.viewport_height, app.form_focus());

        let mut lines = Vec::with_capacity(app.layout.total_rows() as usize);
        for key in SectionKey::ALL {
            lines.extend(section_lines(key, &paint, area.width));
        }
        lines.extend(footer_lines(&paint, area.width));

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(Neon::BG))
            .scroll((app.scroll.current_scroll(), 0));
        frame.render_widget(paragraph, area);
    }
}
