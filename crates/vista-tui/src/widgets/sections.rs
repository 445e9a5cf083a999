//! Page content as rows of styled text
//!
//! The same builders serve measurement and drawing, so the offsets reported
//! to the session always match what is on screen. Reveal progress only
//! changes colors and indentation, never the number of rows.

use std::time::Instant;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;
use vista_core::contact::ContactField;
use vista_core::content::{
    filter_portfolio, section_header, slide_copy, SlideCopy, BRAND, FOOTER_CREDITS,
    FOOTER_TAGLINE, PROCESS_STEPS, SERVICES_STACK, SERVICE_CARDS, TESTIMONIALS,
    CONTACT_DETAILS, PortfolioCategory,
};
use vista_core::reveal::RevealElement;
use vista_core::{PageSession, SectionKey};

use crate::layout::wrap;
use crate::theme::{fade_in, Neon};

const MARGIN: usize = 2;
/// Columns an element slides in from while revealing
const SHIFT: usize = 4;

/// Where progress values come from while building rows
pub struct Paint<'a> {
    session: &'a PageSession,
    now: Instant,
    measuring: bool,
    form_focus: Option<ContactField>,
    /// The hero fills at least this many rows
    viewport_rows: u16,
}

impl<'a> Paint<'a> {
    pub fn live(
        session: &'a PageSession,
        now: Instant,
        viewport_rows: u16,
        form_focus: Option<ContactField>,
    ) -> Self {
        Self {
            session,
            now,
            measuring: false,
            form_focus,
            viewport_rows,
        }
    }

    /// Everything fully shown; only row counts matter
    pub fn measuring(session: &'a PageSession, viewport_rows: u16) -> Self {
        Self {
            session,
            now: Instant::now(),
            measuring: true,
            form_focus: None,
            viewport_rows,
        }
    }

    fn reveal(&self, key: SectionKey, element: RevealElement) -> f64 {
        if self.measuring {
            1.0
        } else {
            self.session.reveal_progress(key, element, self.now)
        }
    }

    fn footer(&self) -> f64 {
        if self.measuring {
            1.0
        } else {
            self.session.footer_progress(self.now)
        }
    }

    fn caption(&self) -> f64 {
        if self.measuring {
            1.0
        } else {
            self.session.carousel_state(self.now).transition_progress
        }
    }
}

struct Rows {
    lines: Vec<Line<'static>>,
    width: usize,
}

impl Rows {
    fn new(width: u16) -> Self {
        Self {
            lines: Vec::new(),
            width: (width as usize).saturating_sub(MARGIN * 2 + SHIFT).max(12),
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Wrapped paragraph shown at `progress`
    fn text(&mut self, text: &str, style: Style, progress: f64) {
        let style = faded(style, progress);
        let pad = indent(progress);
        for row in wrap(text, self.width) {
            self.lines
                .push(Line::from(vec![Span::raw(pad.clone()), Span::styled(row, style)]));
        }
    }

    /// Single row of spans; anything past the edge is clipped
    fn row(&mut self, spans: Vec<Span<'static>>, progress: f64) {
        let mut all = Vec::with_capacity(spans.len() + 1);
        all.push(Span::raw(indent(progress)));
        all.extend(
            spans
                .into_iter()
                .map(|span| Span::styled(span.content, faded(span.style, progress))),
        );
        self.lines.push(Line::from(all));
    }

    fn pad_to(&mut self, rows: usize) {
        while self.lines.len() < rows {
            self.blank();
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        self.lines
    }
}

fn indent(progress: f64) -> String {
    let shift = ((1.0 - progress.clamp(0.0, 1.0)) * SHIFT as f64).round() as usize;
    " ".repeat(MARGIN + shift)
}

fn faded(style: Style, progress: f64) -> Style {
    match style.fg {
        Some(fg) => style.fg(fade_in(fg, progress)),
        None => style,
    }
}

fn title_style() -> Style {
    Style::default().fg(Neon::TEXT).add_modifier(Modifier::BOLD)
}

fn muted() -> Style {
    Style::default().fg(Neon::TEXT_MUTED)
}

fn subtle() -> Style {
    Style::default().fg(Neon::SUBTLE)
}

fn accent() -> Style {
    Style::default().fg(Neon::NEON).add_modifier(Modifier::BOLD)
}

/// Rows of one section, in page order
pub fn section_lines(key: SectionKey, paint: &Paint, width: u16) -> Vec<Line<'static>> {
    match key {
        SectionKey::Hero => hero(paint, width),
        SectionKey::Services => services(paint, width),
        SectionKey::Process => process(paint, width),
        SectionKey::Work => work(paint, width),
        SectionKey::Testimonials => testimonials(paint, width),
        SectionKey::Contact => contact(paint, width),
    }
}

fn header(rows: &mut Rows, key: SectionKey, progress: f64) {
    let Some(header) = section_header(key) else {
        return;
    };
    rows.row(
        vec![Span::styled(format!("── {} ", header.label.to_uppercase()), accent())],
        progress,
    );
    rows.text(header.title, title_style(), progress);
    rows.text(header.subtitle, muted(), progress);
    rows.blank();
}

fn copy_height(copy: &SlideCopy, width: usize) -> usize {
    1 + wrap(copy.title, width).len() + 1 + wrap(copy.body, width).len()
}

fn hero(paint: &Paint, width: u16) -> Vec<Line<'static>> {
    let mut rows = Rows::new(width);
    let carousel = paint.session.carousel();
    let copy = carousel.active_copy();
    let t = paint.caption();

    rows.blank();
    rows.row(
        vec![Span::styled(format!("◆ {}", copy.kicker.to_uppercase()), accent())],
        t,
    );
    rows.text(copy.title, title_style(), t);
    rows.blank();
    rows.text(copy.body, muted(), t);

    // Hold the hero at its tallest caption so slides never move the page
    let tallest = carousel
        .slides()
        .iter()
        .map(|slide| copy_height(slide_copy(slide.id), rows.width))
        .max()
        .unwrap_or(0);
    rows.pad_to(1 + tallest);
    rows.blank();

    let active = carousel.active_index();
    let tabs: Vec<Span<'static>> = carousel
        .slides()
        .iter()
        .enumerate()
        .flat_map(|(i, slide)| {
            let (marker, style) = if i == active {
                ("●", accent())
            } else {
                ("○", subtle())
            };
            [
                Span::styled(format!("{} {}", marker, slide.title), style),
                Span::raw("   "),
            ]
        })
        .collect();
    rows.row(tabs, 1.0);
    rows.row(
        vec![Span::styled(format!("▶ {}", carousel.active_slide().media), subtle())],
        1.0,
    );
    rows.blank();
    rows.blank();

    // Full-screen hero: the next section starts below the first viewport
    rows.pad_to(paint.viewport_rows as usize);
    rows.into_lines()
}

fn services(paint: &Paint, width: u16) -> Vec<Line<'static>> {
    let key = SectionKey::Services;
    let mut rows = Rows::new(width);
    let intro = paint.reveal(key, RevealElement::Intro);

    header(&mut rows, key, intro);
    rows.row(
        vec![Span::styled(
            SERVICES_STACK.join("  ·  "),
            Style::default().fg(Neon::NEON_SOFT),
        )],
        intro,
    );
    rows.blank();

    for (i, card) in SERVICE_CARDS.iter().enumerate() {
        let p = paint.reveal(key, RevealElement::Item(i));
        rows.row(
            vec![Span::styled(
                card.label.to_uppercase(),
                Style::default().fg(Neon::NEON_SOFT),
            )],
            p,
        );
        rows.text(card.title, title_style(), p);
        rows.text(card.body, muted(), p);
        let tags: Vec<String> = card.tags.iter().map(|tag| format!("#{}", tag)).collect();
        rows.row(vec![Span::styled(tags.join(" "), subtle())], p);
        rows.blank();
    }
    rows.blank();
    rows.into_lines()
}

fn process(paint: &Paint, width: u16) -> Vec<Line<'static>> {
    let key = SectionKey::Process;
    let mut rows = Rows::new(width);
    header(&mut rows, key, 1.0);

    for (i, step) in PROCESS_STEPS.iter().enumerate() {
        let p = paint.reveal(key, RevealElement::Item(i));
        rows.row(
            vec![
                Span::styled(format!("{:02}", i + 1), accent()),
                Span::raw("  "),
                Span::styled(step.title, title_style()),
            ],
            p,
        );
        rows.text(step.body, muted(), p);
        rows.blank();
    }
    rows.blank();
    rows.into_lines()
}

fn work(paint: &Paint, width: u16) -> Vec<Line<'static>> {
    let key = SectionKey::Work;
    let mut rows = Rows::new(width);
    let filter = paint.session.portfolio_filter();
    header(&mut rows, key, 1.0);

    let mut tabs = Vec::new();
    for category in PortfolioCategory::ALL {
        if category == filter {
            tabs.push(Span::styled(format!("[{}]", category.label()), accent()));
        } else {
            tabs.push(Span::styled(format!(" {} ", category.label()), subtle()));
        }
        tabs.push(Span::raw(" "));
    }
    rows.row(tabs, 1.0);
    rows.blank();

    let mut shown = 0;
    for (i, item) in filter_portfolio(filter).enumerate() {
        let p = paint.reveal(key, RevealElement::Item(i));
        rows.row(
            vec![
                Span::styled(item.title, title_style()),
                Span::styled(format!("  ·  {}", item.kind), subtle()),
            ],
            p,
        );
        rows.text(item.description, muted(), p);
        let metrics: Vec<String> = item.metrics.iter().map(|m| format!("▲ {}", m)).collect();
        rows.row(
            vec![Span::styled(
                metrics.join("   "),
                Style::default().fg(Neon::NEON_SOFT),
            )],
            p,
        );
        rows.blank();
        shown += 1;
    }
    if shown == 0 {
        rows.row(
            vec![Span::styled("No projects in this category yet.", subtle())],
            1.0,
        );
        rows.blank();
    }
    rows.blank();
    rows.into_lines()
}

fn testimonials(paint: &Paint, width: u16) -> Vec<Line<'static>> {
    let key = SectionKey::Testimonials;
    let mut rows = Rows::new(width);
    header(&mut rows, key, 1.0);

    for (i, testimonial) in TESTIMONIALS.iter().enumerate() {
        let p = paint.reveal(key, RevealElement::Item(i));
        rows.text(
            &format!("“{}”", testimonial.quote),
            Style::default().fg(Neon::TEXT).add_modifier(Modifier::ITALIC),
            p,
        );
        rows.row(
            vec![Span::styled(
                format!("— {} · {}", testimonial.name, testimonial.role),
                Style::default().fg(Neon::NEON_SOFT),
            )],
            p,
        );
        rows.blank();
    }
    rows.blank();
    rows.into_lines()
}

fn contact(paint: &Paint, width: u16) -> Vec<Line<'static>> {
    let mut rows = Rows::new(width);
    header(&mut rows, SectionKey::Contact, 1.0);
    rows.row(vec![Span::styled(CONTACT_DETAILS, subtle())], 1.0);
    rows.blank();

    let form = paint.session.contact();
    let value_width = rows.width.saturating_sub(2);
    for field in ContactField::ALL {
        let focused = paint.form_focus == Some(field);
        let (marker, label_style) = if focused {
            ("› ", accent())
        } else {
            ("  ", muted())
        };
        rows.row(
            vec![Span::styled(marker, label_style), Span::styled(field.label(), label_style)],
            1.0,
        );

        let value = form.get(field);
        let mut spans = vec![Span::raw("  ")];
        if value.is_empty() {
            spans.push(Span::styled(field.placeholder(), subtle()));
        } else {
            spans.push(Span::styled(tail(value, value_width), Style::default().fg(Neon::TEXT)));
        }
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Neon::NEON)));
        }
        rows.row(spans, 1.0);
        rows.blank();
    }

    let hint = if paint.form_focus.is_some() {
        "  Enter to send · Tab next field · Esc leave form"
    } else {
        "  press c to fill in the brief"
    };
    rows.row(
        vec![
            Span::styled(
                "[ Send brief ]",
                Style::default()
                    .fg(Neon::BG)
                    .bg(Neon::NEON)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(hint, subtle()),
        ],
        1.0,
    );
    rows.blank();
    rows.blank();
    rows.into_lines()
}

/// Footer rows; fades in as a whole
pub fn footer_lines(paint: &Paint, width: u16) -> Vec<Line<'static>> {
    let mut rows = Rows::new(width);
    let p = paint.footer();

    rows.row(
        vec![Span::styled("─".repeat(rows.width), Style::default().fg(Neon::BORDER))],
        p,
    );
    rows.row(vec![Span::styled(BRAND, accent())], p);
    rows.text(FOOTER_TAGLINE, muted(), p);
    rows.blank();
    rows.row(
        vec![Span::styled(format!("© {}. All rights reserved.", BRAND), subtle())],
        p,
    );
    rows.text(FOOTER_CREDITS, subtle(), p);
    rows.blank();
    rows.into_lines()
}

/// Last `width` columns of `value`, so the cursor end stays visible
fn tail(value: &str, width: usize) -> String {
    let mut taken = 0;
    let mut start = value.len();
    for (index, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if taken + w > width {
            break;
        }
        taken += w;
        start = index;
    }
    value[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use vista_core::AppConfig;

    fn session() -> PageSession {
        PageSession::new(&AppConfig::default(), Instant::now()).unwrap()
    }

    #[test]
    fn test_reveal_does_not_change_row_count() {
        let mut session = session();
        let now = Instant::now();
        let before = section_lines(SectionKey::Services, &Paint::live(&session, now, 24, None), 80).len();

        session.record_offset(SectionKey::Services, 0.0, now);
        let mid = now + Duration::from_millis(300);
        let during = section_lines(SectionKey::Services, &Paint::live(&session, mid, 24, None), 80).len();
        let measured = section_lines(SectionKey::Services, &Paint::measuring(&session, 24), 80).len();

        assert_eq!(before, during);
        assert_eq!(during, measured);
    }

    #[test]
    fn test_hero_height_is_stable_across_slides() {
        let mut session = session();
        let now = Instant::now();
        let first = section_lines(SectionKey::Hero, &Paint::measuring(&session, 0), 60).len();
        for _ in 0..3 {
            session.next_slide(now);
            let rows = section_lines(SectionKey::Hero, &Paint::measuring(&session, 0), 60).len();
            assert_eq!(rows, first);
        }
    }

    #[test]
    fn test_hero_fills_viewport() {
        let session = session();
        let short = section_lines(SectionKey::Hero, &Paint::measuring(&session, 0), 80).len();
        let tall = section_lines(SectionKey::Hero, &Paint::measuring(&session, 40), 80).len();
        assert!(short < 40);
        assert_eq!(tall, 40);
        // Content taller than the viewport is never clipped
        let tiny = section_lines(SectionKey::Hero, &Paint::measuring(&session, 3), 80).len();
        assert_eq!(tiny, short);
    }

    #[test]
    fn test_indent_shrinks_with_progress() {
        assert_eq!(indent(0.0).len(), MARGIN + SHIFT);
        assert_eq!(indent(1.0).len(), MARGIN);
    }

    #[test]
    fn test_tail_keeps_end_of_value() {
        assert_eq!(tail("hello world", 5), "world");
        assert_eq!(tail("hi", 5), "hi");
        assert_eq!(tail("", 5), "");
    }
}
