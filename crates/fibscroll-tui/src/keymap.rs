//! Keyboard shortcut handling.
//!
//! Terminals that report key releases get real press/hold/release
//! navigation. Elsewhere every press, including auto-repeat, is one step.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use fibscroll_core::{InputSource, NavKey};

use crate::messages::TuiMessage;

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Navigate(NavKey),
    Reset,
    ToggleLayout,
    ShowOverlay,
    None,
}

/// Map a key event to an action, ignoring its kind.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Navigate(NavKey::ArrowUp),
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Navigate(NavKey::ArrowDown),
        KeyCode::Left | KeyCode::Char('h') => KeyAction::Navigate(NavKey::ArrowLeft),
        KeyCode::Right | KeyCode::Char('l') => KeyAction::Navigate(NavKey::ArrowRight),
        KeyCode::Char('r') | KeyCode::Home => KeyAction::Reset,
        KeyCode::Char('e') | KeyCode::Tab => KeyAction::ToggleLayout,
        KeyCode::Char('i') => KeyAction::ShowOverlay,
        _ => KeyAction::None,
    }
}

/// Translate a key event into a message.
///
/// With `hold_mode`, navigation keys press on `Press`, release on
/// `Release`, and ignore auto-repeat. Without it they step on every
/// `Press` and `Repeat`.
#[must_use]
pub fn key_message(key: KeyEvent, hold_mode: bool) -> Option<TuiMessage> {
    match map_key(key) {
        KeyAction::Navigate(nav) => navigation_message(nav, key.kind, hold_mode),
        _ if key.kind == KeyEventKind::Release => None,
        KeyAction::Quit => Some(TuiMessage::Quit),
        KeyAction::Reset => Some(TuiMessage::Reset),
        KeyAction::ToggleLayout => Some(TuiMessage::ToggleLayout),
        KeyAction::ShowOverlay => Some(TuiMessage::ShowOverlay),
        KeyAction::None => Some(TuiMessage::Dismiss),
    }
}

fn navigation_message(nav: NavKey, kind: KeyEventKind, hold_mode: bool) -> Option<TuiMessage> {
    let direction = nav.direction();
    match (hold_mode, kind) {
        (true, KeyEventKind::Press) => Some(TuiMessage::Press(InputSource::Key(nav), direction)),
        (true, KeyEventKind::Release) => Some(TuiMessage::Release(InputSource::Key(nav))),
        (false, KeyEventKind::Press | KeyEventKind::Repeat) => Some(TuiMessage::Step(direction)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use fibscroll_core::Direction;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Quit);

        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Quit);

        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), KeyAction::Quit);
    }

    #[test]
    fn arrow_and_vi_keys_navigate() {
        let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Navigate(NavKey::ArrowUp));

        let event = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Navigate(NavKey::ArrowDown));

        let event = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::Navigate(NavKey::ArrowRight));
    }

    #[test]
    fn plain_mode_steps_on_press_and_repeat() {
        assert_eq!(
            key_message(key(KeyCode::Down, KeyEventKind::Press), false),
            Some(TuiMessage::Step(Direction::Down))
        );
        assert_eq!(
            key_message(key(KeyCode::Left, KeyEventKind::Repeat), false),
            Some(TuiMessage::Step(Direction::Up))
        );
        assert_eq!(key_message(key(KeyCode::Down, KeyEventKind::Release), false), None);
    }

    #[test]
    fn hold_mode_presses_and_releases() {
        let source = InputSource::Key(NavKey::ArrowUp);
        assert_eq!(
            key_message(key(KeyCode::Up, KeyEventKind::Press), true),
            Some(TuiMessage::Press(source, Direction::Up))
        );
        assert_eq!(key_message(key(KeyCode::Up, KeyEventKind::Repeat), true), None);
        assert_eq!(
            key_message(key(KeyCode::Up, KeyEventKind::Release), true),
            Some(TuiMessage::Release(source))
        );
    }

    #[test]
    fn command_keys_ignore_release() {
        assert_eq!(
            key_message(key(KeyCode::Char('r'), KeyEventKind::Press), true),
            Some(TuiMessage::Reset)
        );
        assert_eq!(key_message(key(KeyCode::Char('r'), KeyEventKind::Release), true), None);
        assert_eq!(
            key_message(key(KeyCode::Tab, KeyEventKind::Press), false),
            Some(TuiMessage::ToggleLayout)
        );
        assert_eq!(
            key_message(key(KeyCode::Char('i'), KeyEventKind::Press), false),
            Some(TuiMessage::ShowOverlay)
        );
    }

    #[test]
    fn unknown_key_dismisses() {
        let event = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(event), KeyAction::None);
        assert_eq!(key_message(event, false), Some(TuiMessage::Dismiss));
    }
}
