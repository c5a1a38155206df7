//! GameView: maps a `GameSnapshot` into the console text picture.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout for the 8x8 grid:
//!
//! ```text
//! ----------
//! |   #    | Tiles:          1
//! |        | Rows:           0
//! |        | Score:          0
//! |        |
//! |        | Level:          0
//! |        |
//! |        |
//! |        |
//! ----------
//! ```

use std::fmt::Write;

use crate::core::GameSnapshot;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Banner shown in the side panel once the game is over.
pub const GAME_OVER_BANNER: &str = "Game Over";

/// Renders the playfield as ASCII with a counter panel on the right.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    filled: char,
    empty: char,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            filled: '#',
            empty: ' ',
        }
    }
}

impl GameView {
    pub fn new(filled: char, empty: char) -> Self {
        Self { filled, empty }
    }

    /// Render into `out`, one line per entry, replacing its contents.
    ///
    /// Callers can keep one `Vec` and pass it in every frame.
    pub fn render_into(&self, snap: &GameSnapshot, out: &mut Vec<String>) {
        out.clear();
        out.push(self.border());

        for (y, row) in snap.board.iter().enumerate() {
            let mut line = String::with_capacity(GRID_WIDTH as usize + 24);
            line.push('|');
            for &occupied in row {
                line.push(if occupied { self.filled } else { self.empty });
            }
            line.push('|');
            // Writing to a String cannot fail.
            let _ = match y {
                0 => write!(line, " Tiles: {:>10}", snap.tiles),
                1 => write!(line, " Rows:  {:>10}", snap.rows),
                2 => write!(line, " Score: {:>10}", snap.score),
                4 => write!(line, " Level: {:>10}", snap.level),
                y if y == GRID_HEIGHT as usize - 1 => write!(
                    line,
                    " {:>17}",
                    if snap.game_over() { GAME_OVER_BANNER } else { "" }
                ),
                _ => Ok(()),
            };
            out.push(line);
        }

        out.push(self.border());
    }

    pub fn render(&self, snap: &GameSnapshot) -> Vec<String> {
        let mut out = Vec::with_capacity(GRID_HEIGHT as usize + 2);
        self.render_into(snap, &mut out);
        out
    }

    fn border(&self) -> String {
        "-".repeat(GRID_WIDTH as usize + 2)
    }
}
