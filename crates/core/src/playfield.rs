//! Playfield module - occupancy grid and its per-cell colors
//!
//! The playfield is an 8x8 grid where each cell is either empty or holds a
//! tile. Next to the occupancy flags it keeps the display color of every cell,
//! indexed the same way, so the LED matrix can be refreshed straight from it.
//!
//! Both grids use flat arrays in row-major order (y * WIDTH + x). They are only
//! ever changed together, through the primitive operations below, which keeps
//! one invariant: a cell and its color are both empty or both populated.

use crate::color::HueCycle;
use crate::types::{Coord, Rgb565, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

const WIDTH: usize = GRID_WIDTH as usize;

/// The game grid - 8 columns x 8 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Playfield {
    /// Occupancy flags, row-major order
    cells: [bool; GRID_CELLS],
    /// Display color of each cell, same indexing as `cells`
    colors: [Rgb565; GRID_CELLS],
    /// Color source for newly placed tiles
    hue: HueCycle,
}

impl Playfield {
    /// Create a new empty playfield
    pub fn new() -> Self {
        Self {
            cells: [false; GRID_CELLS],
            colors: [Rgb565::OFF; GRID_CELLS],
            hue: HueCycle::new(),
        }
    }

    /// Get width of the playfield
    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    /// Get height of the playfield
    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Mark a cell occupied and give it the next color of the hue cycle.
    ///
    /// Returns false if the coordinate is out of bounds.
    pub fn place(&mut self, target: Coord) -> bool {
        match target.index() {
            Some(idx) => {
                self.cells[idx] = true;
                self.colors[idx] = self.hue.next_color();
                true
            }
            None => false,
        }
    }

    /// Copy occupancy and color of `from` into `to`.
    pub fn relocate(&mut self, to: Coord, from: Coord) -> bool {
        match (to.index(), from.index()) {
            (Some(dst), Some(src)) => {
                self.cells[dst] = self.cells[src];
                self.colors[dst] = self.colors[src];
                true
            }
            _ => false,
        }
    }

    /// Copy a whole row, occupancy and colors, from row `from` into row `to`.
    pub fn relocate_row(&mut self, to: u8, from: u8) -> bool {
        if to >= GRID_HEIGHT || from >= GRID_HEIGHT {
            return false;
        }
        let src = from as usize * WIDTH;
        let dst = to as usize * WIDTH;
        self.cells.copy_within(src..src + WIDTH, dst);
        self.colors.copy_within(src..src + WIDTH, dst);
        true
    }

    /// Empty a single cell and switch its LED off.
    pub fn clear(&mut self, target: Coord) -> bool {
        match target.index() {
            Some(idx) => {
                self.cells[idx] = false;
                self.colors[idx] = Rgb565::OFF;
                true
            }
            None => false,
        }
    }

    /// Empty a whole row.
    pub fn clear_row(&mut self, row: u8) -> bool {
        if row >= GRID_HEIGHT {
            return false;
        }
        let start = row as usize * WIDTH;
        self.cells[start..start + WIDTH].fill(false);
        self.colors[start..start + WIDTH].fill(Rgb565::OFF);
        true
    }

    /// Empty the entire playfield. The hue cycle keeps its position.
    pub fn reset(&mut self) {
        for row in 0..GRID_HEIGHT {
            self.clear_row(row);
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, target: Coord) -> bool {
        target.index().is_some_and(|idx| self.cells[idx])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: u8) -> bool {
        self.row(row).is_some_and(|cells| cells.iter().all(|&c| c))
    }

    /// Occupancy flags of one row
    pub fn row(&self, row: u8) -> Option<&[bool]> {
        if row >= GRID_HEIGHT {
            return None;
        }
        let start = row as usize * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Colors of one row
    pub fn row_colors(&self, row: u8) -> Option<&[Rgb565]> {
        if row >= GRID_HEIGHT {
            return None;
        }
        let start = row as usize * WIDTH;
        Some(&self.colors[start..start + WIDTH])
    }

    /// Color of a single cell, `None` if out of bounds
    pub fn color(&self, target: Coord) -> Option<Rgb565> {
        target.index().map(|idx| self.colors[idx])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool; GRID_CELLS] {
        &self.cells
    }

    /// Get a reference to the internal colors array, in framebuffer order
    pub fn colors(&self) -> &[Rgb565; GRID_CELLS] {
        &self.colors
    }

    /// Current position of the tile color cycle
    pub fn hue(&self) -> u8 {
        self.hue.peek()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Whether every cell agrees with its color about being empty.
    pub fn is_consistent(&self) -> bool {
        self.cells
            .iter()
            .zip(self.colors.iter())
            .all(|(&occupied, color)| occupied != color.is_off())
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}
