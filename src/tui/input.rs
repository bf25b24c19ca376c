//! Key event mapping.
//!
//! Translates crossterm key events into the discrete navigation actions the
//! screens understand.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Navigation action produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// up / k
    Up,
    /// down / j
    Down,
    /// enter
    Confirm,
    /// esc
    Back,
    /// q / ctrl+c
    Quit,
    /// alt+n / ctrl+n
    AddNew,
    /// Any other plain character, e.g. a menu digit or mnemonic
    Shortcut(char),
}

impl NavAction {
    /// Map a key event, or `None` for keys without a navigation meaning.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') if ctrl => Some(NavAction::Quit),
            KeyCode::Char('n') if ctrl || alt => Some(NavAction::AddNew),
            KeyCode::Char(_) if ctrl || alt => None,
            KeyCode::Char('q') => Some(NavAction::Quit),
            KeyCode::Char('k') | KeyCode::Up => Some(NavAction::Up),
            KeyCode::Char('j') | KeyCode::Down => Some(NavAction::Down),
            KeyCode::Enter => Some(NavAction::Confirm),
            KeyCode::Esc => Some(NavAction::Back),
            KeyCode::Char(c) => Some(NavAction::Shortcut(c)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(NavAction::from_key(key(KeyCode::Up)), Some(NavAction::Up));
        assert_eq!(NavAction::from_key(key(KeyCode::Char('k'))), Some(NavAction::Up));
        assert_eq!(NavAction::from_key(key(KeyCode::Down)), Some(NavAction::Down));
        assert_eq!(NavAction::from_key(key(KeyCode::Char('j'))), Some(NavAction::Down));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(NavAction::from_key(key(KeyCode::Char('q'))), Some(NavAction::Quit));
        assert_eq!(
            NavAction::from_key(key_with(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(NavAction::Quit)
        );
    }

    #[test]
    fn test_add_new_keys() {
        assert_eq!(
            NavAction::from_key(key_with(KeyCode::Char('n'), KeyModifiers::ALT)),
            Some(NavAction::AddNew)
        );
        assert_eq!(
            NavAction::from_key(key_with(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(NavAction::AddNew)
        );
        // A plain `n` is just a character.
        assert_eq!(
            NavAction::from_key(key(KeyCode::Char('n'))),
            Some(NavAction::Shortcut('n'))
        );
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(NavAction::from_key(key(KeyCode::Enter)), Some(NavAction::Confirm));
        assert_eq!(NavAction::from_key(key(KeyCode::Esc)), Some(NavAction::Back));
        assert_eq!(
            NavAction::from_key(key(KeyCode::Char('2'))),
            Some(NavAction::Shortcut('2'))
        );
        assert_eq!(
            NavAction::from_key(key_with(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(NavAction::from_key(key(KeyCode::F(5))), None);
    }
}
