use crate::types::Key;

/// Drops every other detected joystick key.
///
/// The joystick reports each press twice on consecutive polls. A toggle flips
/// on every detection and the key only passes while the toggle is clear, so
/// the first of each pair is dropped and the second delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DoubleInputFilter {
    toggled: bool,
}

impl DoubleInputFilter {
    pub fn new() -> Self {
        Self { toggled: false }
    }

    pub fn filter(&mut self, key: Option<Key>) -> Option<Key> {
        let key = key?;
        self.toggled = !self.toggled;
        if self.toggled {
            None
        } else {
            Some(key)
        }
    }
}
