//! Keyboard bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the user asked the dashboard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    PreviousMove,
    NextMove,
    GoLive,
    /// Move the roster cursor up
    CursorUp,
    /// Move the roster cursor down
    CursorDown,
    /// Select the worker under the roster cursor
    SelectCursor,
    /// Select the worker on the n-th roster card
    SelectIndex(usize),
}

/// Map a key press to an action
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousMove),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextMove),
        KeyCode::End | KeyCode::Char('L') => Some(Action::GoLive),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
        KeyCode::Enter => Some(Action::SelectCursor),
        KeyCode::Char(c) if c.is_ascii_digit() => c
            .to_digit(10)
            .map(|d| Action::SelectIndex(d as usize)),
        _ => None,
    }
}

/// One-line key help for the footer
pub const KEY_HELP: &str =
    "←/h prev  →/l next  End/L live  ↑↓ worker  Enter select  0-9 jump  q quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(key(KeyCode::Left)), Some(Action::PreviousMove));
        assert_eq!(map_key(key(KeyCode::Char('l'))), Some(Action::NextMove));
        assert_eq!(map_key(key(KeyCode::End)), Some(Action::GoLive));
        assert_eq!(map_key(key(KeyCode::Char('L'))), Some(Action::GoLive));
    }

    #[test]
    fn test_worker_keys() {
        assert_eq!(map_key(key(KeyCode::Char('3'))), Some(Action::SelectIndex(3)));
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Action::SelectCursor));
        assert_eq!(map_key(key(KeyCode::Down)), Some(Action::CursorDown));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(map_key(key(KeyCode::Char('x'))), None);
        assert_eq!(map_key(key(KeyCode::Tab)), None);
    }
}
