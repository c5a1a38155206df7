//! Key mapping from joystick event codes and terminal events to game keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Linux input event codes the Sense HAT joystick emits.
pub const KEY_ENTER: u16 = 28;
pub const KEY_UP: u16 = 103;
pub const KEY_LEFT: u16 = 105;
pub const KEY_RIGHT: u16 = 106;
pub const KEY_DOWN: u16 = 108;

/// Map an input event code to a game key.
///
/// Only the code is looked at. Press, release and sync events are not told
/// apart; sync events carry code 0 and are dropped here.
pub fn key_from_event_code(code: u16) -> Option<Key> {
    match code {
        KEY_UP => Some(Key::Up),
        KEY_DOWN => Some(Key::Down),
        KEY_LEFT => Some(Key::Left),
        KEY_RIGHT => Some(Key::Right),
        KEY_ENTER => Some(Key::Enter),
        _ => None,
    }
}

/// Map keyboard input to game keys.
pub fn handle_key_event(key: KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(Key::Enter);
    }

    match key.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Raw mode swallows the interrupt signal, so Ctrl-C has to be handled like
/// the confirm key.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Enter
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
