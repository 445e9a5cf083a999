use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use vista_core::nav::{nav_item, NavLink, MOBILE_NAV};

use crate::app::{App, Mode, HEADER_ROWS};
use crate::theme::Neon;
use crate::widgets::HeaderWidget;

pub struct PopupWidget;

impl PopupWidget {
    /// Open header dropdown, anchored under its label
    pub fn render_dropdown(frame: &mut Frame, app: &App) {
        let Some(key) = app.session.nav().open_dropdown else {
            return;
        };
        let selected = match app.mode {
            Mode::Dropdown(selected) => Some(selected),
            _ => None,
        };
        let area = frame.area();
        let item = nav_item(key);
        let width = (item
            .children
            .iter()
            .map(|link| link.label.chars().count())
            .max()
            .unwrap_or(0)
            + 6) as u16;
        let height = item.children.len() as u16 + 2;

        let x = HeaderWidget::label_column(key).min(area.width.saturating_sub(width));
        let popup_area = Rect::new(
            x,
            area.y + HEADER_ROWS.min(area.height),
            width.min(area.width),
            height.min(area.height.saturating_sub(HEADER_ROWS)),
        );
        render_links(frame, popup_area, item.label, item.children, selected);
    }

    /// Mobile menu, centered
    pub fn render_mobile_menu(frame: &mut Frame, app: &App) {
        if !app.session.nav().mobile_open {
            return;
        }
        let selected = match app.mode {
            Mode::MobileMenu(selected) => Some(selected),
            _ => None,
        };
        let area = frame.area();
        let popup_area = centered_rect(
            32u16.min(area.width.saturating_sub(4)),
            (MOBILE_NAV.len() as u16 + 2).min(area.height.saturating_sub(2)),
            area,
        );
        render_links(frame, popup_area, "Menu", &MOBILE_NAV, selected);
    }

    /// Key binding overview
    pub fn render_help(frame: &mut Frame) {
        const BINDINGS: [(&str, &str); 12] = [
            ("j / k", "scroll"),
            ("C-d / C-u", "half page"),
            ("gg / G", "top / bottom"),
            ("h / l", "previous / next slide"),
            ("M-1..M-9", "jump to slide"),
            ("1 - 4", "open header dropdown"),
            ("m", "mobile menu"),
            ("Enter", "follow menu link"),
            ("f", "cycle work filter"),
            ("c", "fill in the brief"),
            ("Esc", "close / leave"),
            ("q", "quit"),
        ];

        let area = frame.area();
        let popup_area = centered_rect(
            44u16.min(area.width.saturating_sub(4)),
            (BINDINGS.len() as u16 + 2).min(area.height.saturating_sub(2)),
            area,
        );
        frame.render_widget(Clear, popup_area);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(format!(" {:<12}", keys), Style::default().fg(Neon::NEON)),
                    Span::styled(*what, Style::default().fg(Neon::TEXT_MUTED)),
                ])
            })
            .collect();

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Neon::BORDER))
            .style(Style::default().bg(Neon::CARD));
        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

fn render_links(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    links: &[NavLink],
    selected: Option<usize>,
) {
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            if selected == Some(i) {
                Line::from(Span::styled(
                    format!(" › {}", link.label),
                    Style::default()
                        .fg(Neon::NEON)
                        .bg(Neon::CARD_SOFT)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("   {}", link.label),
                    Style::default().fg(Neon::TEXT),
                ))
            }
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Neon::BORDER))
        .style(Style::default().bg(Neon::CARD));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
