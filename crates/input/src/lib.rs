//! Input module - everything that turns presses into game keys.
//!
//! This module maps Sense HAT joystick event codes and `crossterm` key events
//! into [`crate::types::Key`], filters the joystick's duplicate deliveries, and
//! provides the keyboard fallback source for the main loop.

pub mod debounce;
pub mod keyboard;
pub mod map;

pub use sense_stetris_engine as engine;
pub use sense_stetris_types as types;

pub use debounce::DoubleInputFilter;
pub use keyboard::Keyboard;
pub use map::{handle_key_event, key_from_event_code, should_quit};
