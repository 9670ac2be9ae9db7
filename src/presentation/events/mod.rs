//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed.
    Consumed,
}

/// Key classification helpers shared by every screen.
pub struct EventHandler;

impl EventHandler {
    /// Ctrl+C quits regardless of key binding overrides.
    #[must_use]
    pub fn is_force_quit(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Only presses (and repeats) drive actions; releases are ignored.
    #[must_use]
    pub fn is_actionable(key: &KeyEvent) -> bool {
        key.kind != KeyEventKind::Release
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_force_quit() {
        assert!(EventHandler::is_force_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!EventHandler::is_force_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_force_quit(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_releases_are_not_actionable() {
        assert!(EventHandler::is_actionable(&make_key_event(
            KeyCode::Char('1'),
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_actionable(&KeyEvent::new_with_kind(
            KeyCode::Char('1'),
            KeyModifiers::NONE,
            KeyEventKind::Release
        )));
    }
}
