//! Keyboard event to action mapping
//!
//! Converts crossterm key events into editor actions. Digits 1-9 all map to
//! `Action::Digit`; the edit controller decides which of them are valid for
//! the column under the cursor.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::trace;

use super::navigation::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Digit(i32),
    Quit,
}

pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let action = match key.code {
        KeyCode::Up => Some(Action::Move(Direction::Up)),
        KeyCode::Down => Some(Action::Move(Direction::Down)),
        KeyCode::Left => Some(Action::Move(Direction::Left)),
        KeyCode::Right => Some(Action::Move(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => Some(Action::Digit(c.to_digit(10)? as i32)),
        _ => None,
    };
    trace!("KEY: {:?} -> {:?}", key.code, action);
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_arrow_keys_move() {
        assert_eq!(
            key_to_action(press(KeyCode::Up)),
            Some(Action::Move(Direction::Up))
        );
        assert_eq!(
            key_to_action(press(KeyCode::Down)),
            Some(Action::Move(Direction::Down))
        );
        assert_eq!(
            key_to_action(press(KeyCode::Left)),
            Some(Action::Move(Direction::Left))
        );
        assert_eq!(
            key_to_action(press(KeyCode::Right)),
            Some(Action::Move(Direction::Right))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_action(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(key_to_action(press(KeyCode::Char('Q'))), Some(Action::Quit));
    }

    #[test]
    fn test_digits_one_through_nine() {
        for d in 1..=9 {
            let c = char::from_digit(d, 10).unwrap();
            assert_eq!(
                key_to_action(press(KeyCode::Char(c))),
                Some(Action::Digit(d as i32))
            );
        }
        // '0' is not an edit key anywhere on the grid.
        assert_eq!(key_to_action(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(key_to_action(press(KeyCode::Char('x'))), None);
        assert_eq!(key_to_action(press(KeyCode::Enter)), None);
        assert_eq!(key_to_action(press(KeyCode::Esc)), None);
        assert_eq!(key_to_action(press(KeyCode::Tab)), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(key), None);
    }
}
