use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Frame tick; the loop redraws on every iteration regardless.
    Tick,
    /// Raw terminal input (keyboard/resize).
    Input(crossterm::event::Event),
    /// Request to quit the application.
    Quit,
}

/// Input-box actions resolved from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    HistoryPrev,
    HistoryNext,
    Submit,
    ToggleFocus,
    Quit,
}

/// Map a key press to an action. Text keys only act while the input box
/// has focus; Ctrl+C quits from anywhere.
pub fn map_key(key: &KeyEvent, input_focused: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    if key.code == KeyCode::Esc {
        return Some(Action::ToggleFocus);
    }
    if !input_focused {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('i') => Some(Action::ToggleFocus),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Home => Some(Action::CursorHome),
        KeyCode::End => Some(Action::CursorEnd),
        KeyCode::Up => Some(Action::HistoryPrev),
        KeyCode::Down => Some(Action::HistoryNext),
        KeyCode::Char(c) => Some(Action::Insert(c)),
        _ => None,
    }
}
