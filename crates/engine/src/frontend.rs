//! Seams between the main loop and the outside world.
//!
//! The loop only knows that keys come from somewhere and frames go somewhere.
//! The joystick and the keyboard are [`KeySource`]s; the LED matrix and the
//! console are [`FrameSink`]s.

use anyhow::Result;

use crate::core::GameState;
use crate::types::Key;

/// Something that can be asked, without blocking for long, whether a key was
/// pressed since the last call.
pub trait KeySource {
    fn poll_key(&mut self) -> Option<Key>;
}

/// Something that shows the current game state.
pub trait FrameSink {
    fn present(&mut self, game: &GameState) -> Result<()>;
}

impl<T: KeySource + ?Sized> KeySource for &mut T {
    fn poll_key(&mut self) -> Option<Key> {
        (**self).poll_key()
    }
}

impl<T: FrameSink + ?Sized> FrameSink for &mut T {
    fn present(&mut self, game: &GameState) -> Result<()> {
        (**self).present(game)
    }
}
