use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that moves the native scroll offset or controls the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    None,
}

/// Map a key event to an action. `pending_key` carries the first half of a
/// `gg` chord.
pub fn handle_key_event(key: KeyEvent, pending_key: Option<char>) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,

        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,

        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::ScrollPageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::ScrollPageUp,
        (KeyCode::PageDown, KeyModifiers::NONE) => Action::ScrollPageDown,
        (KeyCode::PageUp, KeyModifiers::NONE) => Action::ScrollPageUp,

        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,
        (KeyCode::Home, KeyModifiers::NONE) => Action::JumpToTop,
        (KeyCode::End, KeyModifiers::NONE) => Action::JumpToBottom,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_bindings() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), None), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), None), Action::ScrollDown);
        assert_eq!(handle_key_event(key(KeyCode::Char('k')), None), Action::ScrollUp);
        assert_eq!(
            handle_key_event(
                KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
                None
            ),
            Action::ScrollHalfPageDown
        );
    }

    #[test]
    fn test_gg_chord() {
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), None), Action::PendingG);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), Some('g')),
            Action::JumpToTop
        );
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), None), Action::None);
    }
}
