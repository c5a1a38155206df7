//! Terminal rendering module.
//!
//! The console mirrors the LED matrix as ASCII next to the game counters.
//! [`GameView`] builds the text and is pure; [`TerminalRenderer`] owns the
//! terminal mode and writes the text out.

pub mod game_view;
pub mod renderer;

pub use sense_stetris_core as core;
pub use sense_stetris_engine as engine;
pub use sense_stetris_types as types;

pub use game_view::{GameView, GAME_OVER_BANNER};
pub use renderer::TerminalRenderer;
