//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game engine, LED matrix output, console rendering).
//!
//! # Playfield Dimensions
//!
//! The Sense HAT LED matrix is 8x8, so the playfield is too:
//!
//! - **Width**: 8 columns (indexed 0-7)
//! - **Height**: 8 rows (indexed 0-7, row 0 at the top)
//! - **Spawn position**: (3, 0), the top-center cell
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_US` | 10000 | Fixed main loop period |
//! | `INIT_NEXT_GAME_TICK` | 50 | Ticks between game steps at level 0 |
//! | `ROWS_PER_LEVEL` | 2 | Cleared rows needed to advance a level |
//!
//! # Examples
//!
//! ```
//! use sense_stetris_types::{Coord, Rgb565, GRID_HEIGHT, GRID_WIDTH, SPAWN};
//!
//! assert_eq!(GRID_WIDTH, 8);
//! assert_eq!(GRID_HEIGHT, 8);
//! assert_eq!(SPAWN, Coord::new(3, 0));
//!
//! let white = Rgb565::new(31, 63, 31);
//! assert_eq!(white.pack(), 0xFFFF);
//! ```

/// Playfield width in cells (8 columns)
pub const GRID_WIDTH: u8 = 8;

/// Playfield height in cells (8 rows)
pub const GRID_HEIGHT: u8 = 8;

/// Total number of cells on the playfield
pub const GRID_CELLS: usize = GRID_WIDTH as usize * GRID_HEIGHT as usize;

/// Main loop period in microseconds (10ms)
pub const TICK_US: u64 = 10_000;

/// Cumulative cleared rows needed per level advance
pub const ROWS_PER_LEVEL: u32 = 2;

/// Initial value of the game step threshold (ticks per game step)
pub const INIT_NEXT_GAME_TICK: u32 = 50;

/// The single spawn cell: top row, center column.
pub const SPAWN: Coord = Coord::new((GRID_WIDTH - 1) / 2, 0);

/// Number of distinct hues in the tile color cycle.
pub const HUE_CYCLE: u8 = 31;

/// Hue advance per spawned tile.
pub const HUE_STEP: u8 = 13;

/// Logical keys understood by the game.
///
/// Both the joystick and the keyboard fallback produce these. `Enter` is the
/// joystick press and quits the program; it never reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
}

impl Key {
    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Up => "up",
            Key::Down => "down",
            Key::Left => "left",
            Key::Right => "right",
            Key::Enter => "enter",
        }
    }
}

/// A playfield coordinate: `x` is the column (left to right), `y` the row
/// (top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Flat row-major index, or `None` if outside the grid.
    #[inline(always)]
    pub fn index(self) -> Option<usize> {
        if self.x >= GRID_WIDTH || self.y >= GRID_HEIGHT {
            return None;
        }
        Some(self.y as usize * GRID_WIDTH as usize + self.x as usize)
    }

    /// The neighbouring cell one column to the left, if any.
    pub fn left(self) -> Option<Self> {
        self.x.checked_sub(1).map(|x| Self::new(x, self.y))
    }

    /// The neighbouring cell one column to the right, if any.
    pub fn right(self) -> Option<Self> {
        (self.x + 1 < GRID_WIDTH).then(|| Self::new(self.x + 1, self.y))
    }

    /// The neighbouring cell one row down, if any.
    pub fn below(self) -> Option<Self> {
        (self.y + 1 < GRID_HEIGHT).then(|| Self::new(self.x, self.y + 1))
    }
}

/// Bits in the red channel of an RGB565 pixel
pub const RED_BITS: u32 = 5;

/// Bits in the green channel of an RGB565 pixel
pub const GREEN_BITS: u32 = 6;

/// Bits in the blue channel of an RGB565 pixel
pub const BLUE_BITS: u32 = 5;

/// Largest red channel value (31)
pub const RED_MAX: u8 = (1 << RED_BITS) - 1;

/// Largest green channel value (63)
pub const GREEN_MAX: u8 = (1 << GREEN_BITS) - 1;

/// Largest blue channel value (31)
pub const BLUE_MAX: u8 = (1 << BLUE_BITS) - 1;

/// A display color with 5/6/5 bit channels, as the LED matrix expects it.
///
/// Channel values are stored unpacked; [`Rgb565::pack`] produces the 16-bit
/// framebuffer word. Values wider than their channel are masked on packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb565 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb565 {
    /// All channels zero: an unlit LED.
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into a framebuffer word, red in the most significant bits.
    pub const fn pack(self) -> u16 {
        ((self.r & RED_MAX) as u16) << (GREEN_BITS + BLUE_BITS)
            | ((self.g & GREEN_MAX) as u16) << BLUE_BITS
            | (self.b & BLUE_MAX) as u16
    }

    /// Split a framebuffer word back into channels.
    pub const fn unpack(word: u16) -> Self {
        Self {
            r: (word >> (GREEN_BITS + BLUE_BITS)) as u8 & RED_MAX,
            g: (word >> BLUE_BITS) as u8 & GREEN_MAX,
            b: word as u8 & BLUE_MAX,
        }
    }

    pub fn is_off(self) -> bool {
        self == Self::OFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_configuration() {
        assert_eq!(GRID_CELLS, 64);
        assert_eq!(TICK_US, 10_000);
        assert_eq!(ROWS_PER_LEVEL, 2);
        assert_eq!(INIT_NEXT_GAME_TICK, 50);
        assert_eq!(SPAWN, Coord::new(3, 0));
    }

    #[test]
    fn coord_index_is_row_major() {
        assert_eq!(Coord::new(0, 0).index(), Some(0));
        assert_eq!(Coord::new(7, 0).index(), Some(7));
        assert_eq!(Coord::new(0, 1).index(), Some(8));
        assert_eq!(Coord::new(7, 7).index(), Some(63));
        assert_eq!(Coord::new(8, 0).index(), None);
        assert_eq!(Coord::new(0, 8).index(), None);
    }

    #[test]
    fn coord_neighbours_stop_at_edges() {
        assert_eq!(Coord::new(0, 4).left(), None);
        assert_eq!(Coord::new(7, 4).right(), None);
        assert_eq!(Coord::new(3, 7).below(), None);
        assert_eq!(Coord::new(3, 4).left(), Some(Coord::new(2, 4)));
        assert_eq!(Coord::new(3, 4).right(), Some(Coord::new(4, 4)));
        assert_eq!(Coord::new(3, 4).below(), Some(Coord::new(3, 5)));
    }

    #[test]
    fn pack_places_red_in_high_bits() {
        assert_eq!(Rgb565::new(RED_MAX, 0, 0).pack(), 0xF800);
        assert_eq!(Rgb565::new(0, GREEN_MAX, 0).pack(), 0x07E0);
        assert_eq!(Rgb565::new(0, 0, BLUE_MAX).pack(), 0x001F);
        assert_eq!(Rgb565::OFF.pack(), 0);
    }

    #[test]
    fn pack_masks_oversized_channels() {
        // 32 does not fit 5 bits; only the low bits survive.
        assert_eq!(Rgb565::new(32, 0, 0).pack(), 0);
        assert_eq!(Rgb565::new(0, 64, 33).pack(), 1);
    }

    #[test]
    fn unpack_inverts_pack() {
        let c = Rgb565::new(17, 42, 5);
        assert_eq!(Rgb565::unpack(c.pack()), c);
    }
}
