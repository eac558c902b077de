//! Key mapping from terminal events to single-character keys.

use crate::types::{Direction, QUIT_KEY};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to the character the engine sees.
///
/// Arrow keys alias the w/a/s/d movement keys and Ctrl-C aliases the quit key.
/// Releases, repeats and keys with no character form map to `None`.
pub fn key_to_char(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_interrupt(key) {
        return Some(QUIT_KEY);
    }

    match key.code {
        KeyCode::Char(c) => Some(c),
        KeyCode::Up => Some(Direction::Up.key()),
        KeyCode::Down => Some(Direction::Down.key()),
        KeyCode::Left => Some(Direction::Left.key()),
        KeyCode::Right => Some(Direction::Right.key()),
        KeyCode::Esc => Some(QUIT_KEY),
        _ => None,
    }
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
