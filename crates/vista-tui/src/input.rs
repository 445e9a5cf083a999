use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vista_core::nav::DropdownKey;

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextSlide,
    PrevSlide,
    SelectSlide(usize),
    ToggleDropdown(DropdownKey),
    ToggleMobileMenu,
    MenuDown,
    MenuUp,
    MenuConfirm,
    CycleWorkFilter,
    StartForm,
    NextField,
    PrevField,
    InputChar(char),
    Backspace,
    Submit,
    ShowHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.is_input_mode() {
        return handle_form_mode(key);
    }

    match app.mode {
        Mode::Help => return Action::ExitMode,
        Mode::Dropdown(_) | Mode::MobileMenu(_) => {
            if let Some(action) = handle_menu_mode(key) {
                return action;
            }
        }
        _ => {}
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Page scroll
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::ScrollPageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::ScrollPageUp,
        (KeyCode::PageDown, _) => Action::ScrollPageDown,
        (KeyCode::PageUp, _) => Action::ScrollPageUp,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::ScrollPageDown,

        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,
        (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::End, _) => Action::JumpToBottom,

        // Hero carousel
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextSlide,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevSlide,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NextSlide,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PrevSlide,
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::ALT) => {
            Action::SelectSlide(c as usize - '1' as usize)
        }

        // Header navigation
        (KeyCode::Char('1'), KeyModifiers::NONE) => Action::ToggleDropdown(DropdownKey::Services),
        (KeyCode::Char('2'), KeyModifiers::NONE) => {
            Action::ToggleDropdown(DropdownKey::Industries)
        }
        (KeyCode::Char('3'), KeyModifiers::NONE) => Action::ToggleDropdown(DropdownKey::Insights),
        (KeyCode::Char('4'), KeyModifiers::NONE) => Action::ToggleDropdown(DropdownKey::About),
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMobileMenu,

        (KeyCode::Char('f'), KeyModifiers::NONE) => Action::CycleWorkFilter,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::StartForm,

        (KeyCode::Char('?'), _) => Action::ShowHelp,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        _ => Action::None,
    }
}

/// Keys owned by an open menu; everything else falls through to normal mode
fn handle_menu_mode(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Action::MenuDown,
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Action::MenuUp,
        KeyCode::Enter => Action::MenuConfirm,
        KeyCode::Esc => Action::ExitMode,
        _ => return None,
    };
    Some(action)
}

/// Handle key events while typing into the contact form
fn handle_form_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Submit,
        KeyCode::Esc => Action::ExitMode,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;
    use vista_core::{AppConfig, PageSession};

    fn app() -> App {
        let config = Arc::new(AppConfig::default());
        let session = PageSession::new(&config, Instant::now()).unwrap();
        App::new(config, session)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = app();
        assert_eq!(handle_key_event(press(KeyCode::Char('j')), &app), Action::ScrollDown);
        assert_eq!(handle_key_event(press(KeyCode::Char('l')), &app), Action::NextSlide);
        assert_eq!(
            handle_key_event(press(KeyCode::Char('2')), &app),
            Action::ToggleDropdown(DropdownKey::Industries)
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT), &app),
            Action::SelectSlide(1)
        );
    }

    #[test]
    fn test_gg_needs_two_presses() {
        let mut app = app();
        assert_eq!(handle_key_event(press(KeyCode::Char('g')), &app), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(press(KeyCode::Char('g')), &app), Action::JumpToTop);
    }

    #[test]
    fn test_menu_mode_overrides_scroll_keys() {
        let mut app = app();
        app.mode = Mode::Dropdown(0);
        assert_eq!(handle_key_event(press(KeyCode::Char('j')), &app), Action::MenuDown);
        assert_eq!(handle_key_event(press(KeyCode::Enter), &app), Action::MenuConfirm);
        // Other dropdowns stay reachable while one is open
        assert_eq!(
            handle_key_event(press(KeyCode::Char('4')), &app),
            Action::ToggleDropdown(DropdownKey::About)
        );
    }

    #[test]
    fn test_form_mode_captures_text() {
        let mut app = app();
        app.mode = Mode::Form(vista_core::contact::ContactField::Email);
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &app), Action::InputChar('q'));
        assert_eq!(handle_key_event(press(KeyCode::Tab), &app), Action::NextField);
        assert_eq!(handle_key_event(press(KeyCode::Esc), &app), Action::ExitMode);
    }
}
