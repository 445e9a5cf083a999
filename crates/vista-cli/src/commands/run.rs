use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use vista_core::carousel::AutoplayTick;
use vista_core::content::BRAND;
use vista_core::{AppConfig, PageEvent, PageSession};
use vista_tui::{
    app::{App, Mode, HEADER_ROWS, STATUS_ROWS},
    event::{Pace, PageInput, TerminalInput},
    input::{handle_key_event, Action},
    widgets::{HeaderWidget, PageWidget, PopupWidget, StatusBarWidget},
};

type Backend = CrosstermBackend<io::Stdout>;

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<PageEvent>();
    let session = PageSession::new(&config, Instant::now())?.with_event_sender(event_tx);
    let mut app = App::new(config.clone(), session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(BRAND))?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let size = terminal.size()?;
    app.resize(size.width, size.height, Instant::now());

    // The timer lives exactly as long as this page view
    let mut ticks = app.session.start_autoplay();
    info!("Page view opened at {}x{}", size.width, size.height);

    let result = main_loop(&mut terminal, &mut app, &mut ticks, &mut event_rx);

    app.session.stop_autoplay();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Page view closed");
    result
}

fn main_loop(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    ticks: &mut Option<mpsc::UnboundedReceiver<AutoplayTick>>,
    events: &mut mpsc::UnboundedReceiver<PageEvent>,
) -> Result<()> {
    let input = TerminalInput::new(&app.config.ui);

    loop {
        let now = Instant::now();

        // Autoplay ticks are applied here, on the UI thread (non-blocking)
        if let Some(rx) = ticks.as_mut() {
            while rx.try_recv().is_ok() {
                app.session.on_autoplay_tick(now);
            }
        }

        app.tick(now);

        while let Ok(event) = events.try_recv() {
            debug!(?event, "page event");
        }

        let view: &App = app;
        terminal.draw(|frame| draw(frame, view, now))?;

        let pace = if app.is_animating(now) {
            Pace::Animating
        } else {
            Pace::Idle
        };

        match input.wait(pace)? {
            Some(PageInput::Key(key)) => {
                let action = handle_key_event(key, app);
                handle_action(app, action, Instant::now());
            }
            Some(PageInput::Resize { width, height }) => app.resize(width, height, Instant::now()),
            Some(PageInput::Frame) | None => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(1),
            Constraint::Length(STATUS_ROWS),
        ])
        .split(frame.area());

    HeaderWidget::render(frame, chunks[0], app);
    PageWidget::render(frame, chunks[1], app, now);
    StatusBarWidget::render(frame, chunks[2], app, now);

    PopupWidget::render_dropdown(frame, app);
    PopupWidget::render_mobile_menu(frame, app);
    if app.mode == Mode::Help {
        PopupWidget::render_help(frame);
    }
}

fn handle_action(app: &mut App, action: Action, now: Instant) {
    if action != Action::None {
        app.clear_status();
    }
    if action != Action::PendingG {
        app.pending_key = None;
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollHalfPageDown => app.scroll_half_page_down(),
        Action::ScrollHalfPageUp => app.scroll_half_page_up(),
        Action::ScrollPageDown => app.scroll_page_down(),
        Action::ScrollPageUp => app.scroll_page_up(),
        Action::JumpToTop => app.jump_to_top(now),
        Action::JumpToBottom => app.jump_to_bottom(now),
        Action::PendingG => app.pending_key = Some('g'),
        Action::NextSlide => app.next_slide(now),
        Action::PrevSlide => app.prev_slide(now),
        Action::SelectSlide(index) => app.select_slide(index, now),
        Action::ToggleDropdown(key) => app.toggle_dropdown(key),
        Action::ToggleMobileMenu => app.toggle_mobile_menu(),
        Action::MenuDown => app.menu_move(1),
        Action::MenuUp => app.menu_move(-1),
        Action::MenuConfirm => app.menu_confirm(now),
        Action::CycleWorkFilter => app.cycle_portfolio_filter(now),
        Action::StartForm => app.start_form(now),
        Action::NextField => app.form_next_field(),
        Action::PrevField => app.form_prev_field(),
        Action::InputChar(c) => app.form_input(c),
        Action::Backspace => app.form_backspace(),
        Action::Submit => app.submit_form(),
        Action::ShowHelp => app.mode = Mode::Help,
        Action::ExitMode => app.exit_mode(),
        Action::None => {}
    }
}
