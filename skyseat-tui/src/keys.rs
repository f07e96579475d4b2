//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    Submit,
    NextPane,
    PrevPane,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Select,
    Confirm,
    Cancel,
    Input(char),
    Backspace,
}

/// Map a key press to an action.
///
/// With `text_entry` set (a text field of the passenger form has focus)
/// printable characters are typed into the field instead of acting as
/// shortcuts.
pub fn map_key(event: KeyEvent, text_entry: bool) -> Option<Action> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('s') => Some(Action::Submit),
            _ => None,
        };
    }

    match code {
        KeyCode::Enter => return Some(Action::Confirm),
        KeyCode::Esc => return Some(Action::Cancel),
        KeyCode::Tab => return Some(Action::NextPane),
        KeyCode::BackTab => return Some(Action::PrevPane),
        KeyCode::Up => return Some(Action::MoveUp),
        KeyCode::Down => return Some(Action::MoveDown),
        KeyCode::Left => return Some(Action::MoveLeft),
        KeyCode::Right => return Some(Action::MoveRight),
        _ => {}
    }

    if text_entry {
        return match code {
            KeyCode::Char(c) => Some(Action::Input(c)),
            KeyCode::Backspace => Some(Action::Backspace),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Char(' ') => Some(Action::Select),
        _ => None,
    }
}
