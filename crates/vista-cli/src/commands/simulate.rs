use std::time::Instant;

use anyhow::{bail, Result};
use serde::Serialize;
use tokio::sync::mpsc;

use vista_core::{AppConfig, PageEvent, PageSession};
use vista_tui::app::{HEADER_ROWS, STATUS_ROWS};
use vista_tui::layout::{rows_to_px, PageLayout};

/// One JSON line of output
#[derive(Debug, Serialize)]
struct Record {
    offset_y: f64,
    #[serde(flatten)]
    event: PageEvent,
}

/// Result of one headless scroll
struct Simulation {
    layout: PageLayout,
    session: PageSession,
    records: Vec<Record>,
}

pub fn run(
    config: &AppConfig,
    width: u16,
    height: u16,
    to: f64,
    step: f64,
    json: bool,
) -> Result<()> {
    let sim = simulate(config, width, height, to, step)?;

    if !json {
        print_layout(&sim.layout);
    }

    for record in &sim.records {
        if json {
            println!("{}", serde_json::to_string(record)?);
        } else {
            println!("{:>8}px  {}", record.offset_y, describe(&record.event));
        }
    }

    if !json {
        let pending: Vec<&str> = sim
            .session
            .reveals()
            .pending_sections()
            .map(|key| key.as_str())
            .collect();
        if pending.is_empty() {
            println!("\nEvery section revealed by y={}px", to);
        } else {
            println!("\nStill pending at y={}px: {}", to, pending.join(", "));
        }
    }
    Ok(())
}

/// Lay the page out in a `width` x `height` terminal and scroll it from the top
fn simulate(config: &AppConfig, width: u16, height: u16, to: f64, step: f64) -> Result<Simulation> {
    if !step.is_finite() || step <= 0.0 {
        bail!("--step must be a positive number of pixels");
    }
    if !to.is_finite() || to < 0.0 {
        bail!("--to must be a non-negative number of pixels");
    }

    let now = Instant::now();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = PageSession::new(config, now)?.with_event_sender(tx);

    let viewport = height.saturating_sub(HEADER_ROWS + STATUS_ROWS);
    let layout = PageLayout::measure(&session, width, viewport);
    layout.report(&mut session, now);

    // Offsets reported above may already have revealed something at y=0
    let mut records = Vec::new();
    drain(&mut rx, 0.0, &mut records);

    let mut y = 0.0;
    loop {
        session.on_scroll(y, now);
        drain(&mut rx, y, &mut records);
        if y >= to {
            break;
        }
        y = (y + step).min(to);
    }

    Ok(Simulation {
        layout,
        session,
        records,
    })
}

fn drain(rx: &mut mpsc::UnboundedReceiver<PageEvent>, offset_y: f64, records: &mut Vec<Record>) {
    while let Ok(event) = rx.try_recv() {
        records.push(Record { offset_y, event });
    }
}

fn print_layout(layout: &PageLayout) {
    println!("Layout at {}x{} rows:", layout.width(), layout.height());
    for span in layout.spans() {
        println!(
            "  {:<13} y={:>7}px  rows={}",
            span.key.as_str(),
            rows_to_px(span.start_row),
            span.rows
        );
    }
    println!(
        "  {:<13} y={:>7}px  total rows={}",
        "footer",
        rows_to_px(layout.footer_row()),
        layout.total_rows()
    );
    println!();
}

fn describe(event: &PageEvent) -> String {
    match event {
        PageEvent::HeaderChromeChanged { scrolled_past_top: true } => "header: solid".to_string(),
        PageEvent::HeaderChromeChanged { scrolled_past_top: false } => {
            "header: transparent".to_string()
        }
        PageEvent::SectionRevealed { section } => format!("reveal: {}", section),
        PageEvent::FooterRevealed => "reveal: footer".to_string(),
        PageEvent::SlideChanged { index, cause } => format!("slide: {} ({:?})", index, cause),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_core::SectionKey;

    fn revealed(sim: &Simulation) -> Vec<(f64, SectionKey)> {
        sim.records
            .iter()
            .filter_map(|r| match r.event {
                PageEvent::SectionRevealed { section } => Some((r.offset_y, section)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_nothing_reveals_before_scrolling() {
        let config = AppConfig::default();
        for width in [60, 80, 120, 200] {
            let sim = simulate(&config, width, 30, 0.0, 20.0).unwrap();
            assert!(revealed(&sim).is_empty(), "revealed at load for width {}", width);
            assert!(sim.session.reveals().is_pending(SectionKey::Services));
        }
    }

    #[test]
    fn test_sections_reveal_in_page_order() {
        let config = AppConfig::default();
        let sim = simulate(&config, 100, 40, 20_000.0, 20.0).unwrap();
        let reveals = revealed(&sim);

        let order: Vec<SectionKey> = reveals.iter().map(|(_, key)| *key).collect();
        assert_eq!(
            order,
            vec![
                SectionKey::Services,
                SectionKey::Process,
                SectionKey::Work,
                SectionKey::Testimonials,
            ]
        );
        assert!(reveals.iter().all(|(y, _)| *y > 0.0));

        // Each section fires once its top is within the lookahead
        for (y, key) in &reveals {
            let top = rows_to_px(sim.layout.start_row(*key).unwrap());
            assert!(y + config.scroll.lookahead_px >= top);
            assert!(y - 20.0 + config.scroll.lookahead_px < top);
        }

        let footer: Vec<&Record> = sim
            .records
            .iter()
            .filter(|r| matches!(r.event, PageEvent::FooterRevealed))
            .collect();
        assert_eq!(footer.len(), 1);
        assert!(sim.session.reveals().pending_sections().next().is_none());
    }

    #[test]
    fn test_header_flips_once_on_the_way_down() {
        let sim = simulate(&AppConfig::default(), 100, 40, 2000.0, 20.0).unwrap();
        let flips: Vec<f64> = sim
            .records
            .iter()
            .filter(|r| matches!(r.event, PageEvent::HeaderChromeChanged { .. }))
            .map(|r| r.offset_y)
            .collect();
        assert_eq!(flips, vec![60.0]);
    }

    #[test]
    fn test_json_record_shape() {
        let sim = simulate(&AppConfig::default(), 100, 40, 20_000.0, 20.0).unwrap();
        let first = sim
            .records
            .iter()
            .find(|r| matches!(r.event, PageEvent::SectionRevealed { .. }))
            .unwrap();
        let value = serde_json::to_value(first).unwrap();
        assert_eq!(value["event"], "section_revealed");
        assert_eq!(value["section"], "services");
        assert_eq!(value["offset_y"], first.offset_y);
    }

    #[test]
    fn test_rejects_bad_step() {
        let config = AppConfig::default();
        assert!(simulate(&config, 100, 40, 100.0, 0.0).is_err());
        assert!(simulate(&config, 100, 40, f64::NAN, 20.0).is_err());
    }
}
