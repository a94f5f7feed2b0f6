//! Key mapping for game input.
//!
//! Converts crossterm key events to game actions. Movement follows vim
//! (`h/j/k/l` plus the arrow keys), with `H/L/g/G` jumping to the field
//! borders.

use crossterm::event::{KeyCode, KeyEvent};
use minefield_core::Action;

/// One decoded input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(Action),
    Quit,
}

/// Key mapper for converting key events to game input
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to at most one input event. Unknown keys map to
    /// `None` and are ignored by the driver.
    pub fn map(event: &KeyEvent) -> Option<InputEvent> {
        let action = match event.code {
            // Basic movement
            KeyCode::Char('h') | KeyCode::Left => Action::CursorLeft,
            KeyCode::Char('j') | KeyCode::Down => Action::CursorDown,
            KeyCode::Char('k') | KeyCode::Up => Action::CursorUp,
            KeyCode::Char('l') | KeyCode::Right => Action::CursorRight,

            // Movements to edges
            KeyCode::Char('H') | KeyCode::Char('0') => Action::CursorToEdgeLeft,
            KeyCode::Char('L') | KeyCode::Char('$') => Action::CursorToEdgeRight,
            KeyCode::Char('g') => Action::CursorToEdgeUp,
            KeyCode::Char('G') => Action::CursorToEdgeDown,

            // Flag selected cell
            KeyCode::Char('f') | KeyCode::Char(' ') => Action::Flag,

            // Reveal selected cell
            KeyCode::Char('r') | KeyCode::Enter | KeyCode::Tab => Action::Reveal,

            // Quit
            KeyCode::Char('q') => return Some(InputEvent::Quit),

            _ => return None,
        };

        Some(InputEvent::Action(action))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn action_for(code: KeyCode) -> Option<InputEvent> {
        KeyMapper::map(&key_event(code))
    }

    #[test]
    fn movement_keys() {
        assert_eq!(
            action_for(KeyCode::Char('h')),
            Some(InputEvent::Action(Action::CursorLeft))
        );
        assert_eq!(
            action_for(KeyCode::Down),
            Some(InputEvent::Action(Action::CursorDown))
        );
        assert_eq!(
            action_for(KeyCode::Char('k')),
            Some(InputEvent::Action(Action::CursorUp))
        );
        assert_eq!(
            action_for(KeyCode::Right),
            Some(InputEvent::Action(Action::CursorRight))
        );
    }

    #[test]
    fn edge_jump_keys() {
        assert_eq!(
            action_for(KeyCode::Char('0')),
            Some(InputEvent::Action(Action::CursorToEdgeLeft))
        );
        assert_eq!(
            action_for(KeyCode::Char('$')),
            Some(InputEvent::Action(Action::CursorToEdgeRight))
        );
        assert_eq!(
            action_for(KeyCode::Char('g')),
            Some(InputEvent::Action(Action::CursorToEdgeUp))
        );
        assert_eq!(
            action_for(KeyCode::Char('G')),
            Some(InputEvent::Action(Action::CursorToEdgeDown))
        );
    }

    #[test]
    fn action_keys() {
        assert_eq!(
            action_for(KeyCode::Char(' ')),
            Some(InputEvent::Action(Action::Flag))
        );
        assert_eq!(
            action_for(KeyCode::Char('f')),
            Some(InputEvent::Action(Action::Flag))
        );
        assert_eq!(
            action_for(KeyCode::Enter),
            Some(InputEvent::Action(Action::Reveal))
        );
        assert_eq!(
            action_for(KeyCode::Tab),
            Some(InputEvent::Action(Action::Reveal))
        );
        assert_eq!(action_for(KeyCode::Char('q')), Some(InputEvent::Quit));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(action_for(KeyCode::Char('z')), None);
        assert_eq!(action_for(KeyCode::Esc), None);
        assert_eq!(action_for(KeyCode::F(1)), None);
    }
}
