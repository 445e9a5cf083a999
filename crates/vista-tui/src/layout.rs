//! Page measurement: section heights in rows, and their logical-pixel offsets.

use std::time::Instant;

use tracing::debug;
use unicode_width::UnicodeWidthStr;
use vista_core::{PageSession, SectionKey};

use crate::widgets::sections::{footer_lines, section_lines, Paint};

/// Logical pixels per terminal row
///
/// Scroll thresholds are configured in pixels; the terminal page maps one
/// row to this many of them.
pub const PX_PER_ROW: f64 = 20.0;

#[inline]
pub fn rows_to_px(rows: u16) -> f64 {
    rows as f64 * PX_PER_ROW
}

#[inline]
pub fn px_to_rows(px: f64) -> u16 {
    (px / PX_PER_ROW).round().clamp(0.0, u16::MAX as f64) as u16
}

/// Where a section sits on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub key: SectionKey,
    pub start_row: u16,
    pub rows: u16,
}

/// Row layout of the whole page at one width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    width: u16,
    height: u16,
    spans: Vec<SectionSpan>,
    footer_row: u16,
    total_rows: u16,
}

impl PageLayout {
    /// Measure every section as it would render in a `width` x `height` viewport
    pub fn measure(session: &PageSession, width: u16, height: u16) -> Self {
        let paint = Paint::measuring(session, height);
        let mut spans = Vec::with_capacity(SectionKey::ALL.len());
        let mut row = 0u16;

        for key in SectionKey::ALL {
            let rows = section_lines(key, &paint, width).len() as u16;
            spans.push(SectionSpan {
                key,
                start_row: row,
                rows,
            });
            row = row.saturating_add(rows);
        }

        let footer_row = row;
        let total_rows = row.saturating_add(footer_lines(&paint, width).len() as u16);

        Self {
            width,
            height,
            spans,
            footer_row,
            total_rows,
        }
    }

    /// Push every section offset into the session
    pub fn report(&self, session: &mut PageSession, now: Instant) {
        for span in &self.spans {
            session.record_offset(span.key, rows_to_px(span.start_row), now);
        }
        debug!(
            width = self.width,
            height = self.height,
            rows = self.total_rows,
            "page layout reported"
        );
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn start_row(&self, key: SectionKey) -> Option<u16> {
        self.spans.iter().find(|s| s.key == key).map(|s| s.start_row)
    }

    pub fn footer_row(&self) -> u16 {
        self.footer_row
    }

    pub fn total_rows(&self) -> u16 {
        self.total_rows
    }

    /// Largest scroll row that still fills a viewport of `height` rows
    pub fn max_scroll(&self, height: u16) -> u16 {
        self.total_rows.saturating_sub(height)
    }

    /// Section containing `row`, if any
    pub fn section_at(&self, row: u16) -> Option<SectionKey> {
        self.spans
            .iter()
            .rev()
            .find(|s| s.start_row <= row && row < s.start_row.saturating_add(s.rows))
            .map(|s| s.key)
    }
}

/// Word-wrap `text` to `width` display columns
///
/// Words wider than a line are split. Always yields at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for c in word.chars() {
                let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
                if current_width + w > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
            continue;
        }

        let needed = if current.is_empty() { word_width } else { current_width + 1 + word_width };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_core::AppConfig;

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_respects_display_width() {
        for line in wrap("brief → launch in weeks, not quarters", 12) {
            assert!(line.width() <= 12);
        }
    }

    #[test]
    fn test_rows_px_conversion() {
        assert_eq!(rows_to_px(2), 40.0);
        assert_eq!(px_to_rows(300.0), 15);
        assert_eq!(px_to_rows(-5.0), 0);
    }

    #[test]
    fn test_measure_orders_sections() {
        let session = PageSession::new(&AppConfig::default(), Instant::now()).unwrap();
        let layout = PageLayout::measure(&session, 80, 24);

        let starts: Vec<u16> = layout.spans().iter().map(|s| s.start_row).collect();
        assert_eq!(starts[0], 0);
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
        assert!(layout.footer_row() < layout.total_rows());
        assert_eq!(layout.section_at(0), Some(SectionKey::Hero));
        assert_eq!(
            layout.section_at(layout.start_row(SectionKey::Work).unwrap()),
            Some(SectionKey::Work)
        );
    }

    #[test]
    fn test_narrow_page_is_taller() {
        let session = PageSession::new(&AppConfig::default(), Instant::now()).unwrap();
        let wide = PageLayout::measure(&session, 120, 24);
        let narrow = PageLayout::measure(&session, 40, 24);
        assert!(narrow.total_rows() > wide.total_rows());
    }

    #[test]
    fn test_report_records_offsets() {
        let mut session = PageSession::new(&AppConfig::default(), Instant::now()).unwrap();
        let layout = PageLayout::measure(&session, 80, 24);
        layout.report(&mut session, Instant::now());

        let row = layout.start_row(SectionKey::Process).unwrap();
        assert_eq!(session.registry().offset(SectionKey::Process), Some(rows_to_px(row)));
    }

    #[test]
    fn test_first_section_starts_past_lookahead() {
        let config = AppConfig::default();
        for width in [60, 80, 120, 200] {
            let mut session = PageSession::new(&config, Instant::now()).unwrap();
            let layout = PageLayout::measure(&session, width, 27);
            let services = layout.start_row(SectionKey::Services).unwrap();
            assert!(rows_to_px(services) > config.scroll.lookahead_px);

            layout.report(&mut session, Instant::now());
            assert!(session.reveals().is_pending(SectionKey::Services));
        }
    }
}
