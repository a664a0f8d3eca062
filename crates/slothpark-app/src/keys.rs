//! Key bindings.
//!
//! Keys mean different things depending on whether the chat panel is open:
//! with the panel open, printable characters go to the input field.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Something the visitor asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleChat,
    OpenChat,
    CloseChat,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    ChatScrollUp,
    ChatScrollDown,
    Insert(char),
    Backspace,
    Submit,
}

/// Translate a key press into an action, or `None` if it is unbound.
pub fn map_key(key: KeyEvent, chat_open: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Tab | KeyCode::F(2) => Action::ToggleChat,
        KeyCode::Esc if chat_open => Action::CloseChat,
        KeyCode::Esc => Action::Quit,
        KeyCode::Up if chat_open => Action::ChatScrollUp,
        KeyCode::Down if chat_open => Action::ChatScrollDown,
        KeyCode::Up => Action::ScrollUp,
        KeyCode::Down => Action::ScrollDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Home => Action::Home,
        KeyCode::End => Action::End,
        KeyCode::Backspace if chat_open => Action::Backspace,
        KeyCode::Enter if chat_open => Action::Submit,
        KeyCode::Char(ch) if chat_open && !key.modifiers.contains(KeyModifiers::ALT) => {
            Action::Insert(ch)
        }
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') => Action::OpenChat,
        _ => return None,
    };
    Some(action)
}
