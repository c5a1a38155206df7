//! Keyboard fallback for when the joystick is idle.

use std::time::Duration;

use crossterm::event::{self, Event};
use log::trace;

use crate::engine::KeySource;
use crate::map::handle_key_event;
use crate::types::Key;

/// Reads at most one terminal key per poll without waiting.
///
/// Expects the terminal to be in raw mode so arrow keys arrive unbuffered.
#[derive(Debug, Default)]
pub struct Keyboard;

impl Keyboard {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for Keyboard {
    fn poll_key(&mut self) -> Option<Key> {
        match event::poll(Duration::ZERO) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                trace!("keyboard poll failed: {err}");
                return None;
            }
        }

        match event::read() {
            Ok(Event::Key(key)) => handle_key_event(key),
            Ok(_) => None,
            Err(err) => {
                trace!("keyboard read failed: {err}");
                None
            }
        }
    }
}
