//! Game state module - the tick-driven column-drop game
//!
//! One tile falls at a time. The player can shift it left or right, or drop it
//! to the bottom at once. Every `next_game_tick` main loop ticks the game takes
//! a step: a full bottom row is cleared, the active tile falls one cell, and a
//! new tile spawns at the top center when the active one has landed. A tile
//! that cannot spawn ends the game; any key starts a new one.
//!
//! [`GameState::step`] is the only entry point that mutates the playfield.

use log::{debug, info};

use crate::level::{is_level_up, next_game_tick_after_level_up};
use crate::playfield::Playfield;
use crate::snapshot::GameSnapshot;
use crate::types::{Coord, Key, GRID_HEIGHT, INIT_NEXT_GAME_TICK, SPAWN};

/// Game lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// No game running; waits for any key.
    GameOver,
    /// A game is in progress.
    Active,
}

/// What happened at the most recent game step.
///
/// Both flags are cleared and recomputed at every step, so they only describe
/// the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TickFlags {
    pub row_clear: bool,
    pub tile_added: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    playfield: Playfield,
    status: Status,
    flags: TickFlags,
    /// The falling tile, `None` before the first spawn and after game over.
    active: Option<Coord>,
    /// Tiles spawned this game.
    tiles: u32,
    /// Rows cleared this game.
    rows: u32,
    score: u32,
    level: u32,
    /// Main loop tick counter, wraps at `next_game_tick`.
    tick: u32,
    /// Ticks per game step; shrinks with level, never 0.
    next_game_tick: u32,
}

impl GameState {
    /// Create a new game, waiting for a key to start.
    pub fn new() -> Self {
        Self {
            playfield: Playfield::new(),
            status: Status::GameOver,
            flags: TickFlags::default(),
            active: None,
            tiles: 0,
            rows: 0,
            score: 0,
            level: 0,
            tick: 0,
            next_game_tick: INIT_NEXT_GAME_TICK,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn flags(&self) -> TickFlags {
        self.flags
    }

    pub fn active(&self) -> Option<Coord> {
        self.active
    }

    pub fn tiles(&self) -> u32 {
        self.tiles
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn next_game_tick(&self) -> u32 {
        self.next_game_tick
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let width = self.playfield.width() as usize;
        for (y, row) in out.board.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.playfield.cells()[start..start + width]);
        }
        for (y, row) in out.colors.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.playfield.colors()[start..start + width]);
        }

        out.active = self.active;
        out.status = self.status;
        out.flags = self.flags;
        out.tiles = self.tiles;
        out.rows = self.rows;
        out.score = self.score;
        out.level = self.level;
        out.tick = self.tick;
        out.next_game_tick = self.next_game_tick;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Advance the main loop tick counter, wrapping at the step interval.
    pub fn advance_tick(&mut self) {
        self.tick = (self.tick + 1) % self.next_game_tick;
    }

    /// Run one main loop invocation with the key read this tick, if any.
    ///
    /// Returns true when the playfield or the counters visibly changed, so
    /// renderers can skip redundant redraws.
    pub fn step(&mut self, key: Option<Key>) -> bool {
        let mut changed = false;

        if self.status == Status::Active {
            if let Some(key) = key {
                changed = self.apply_key(key);
            }

            if self.tick == 0 {
                self.game_step();
                changed = true;
            }
        }

        // Any key starts a new game, including one pressed on the step that
        // just ended the previous game.
        if self.status == Status::GameOver && key.is_some() {
            self.new_game();
            changed = true;
        }

        changed
    }

    fn apply_key(&mut self, key: Key) -> bool {
        match key {
            Key::Left => {
                self.try_move(Coord::left);
                true
            }
            Key::Right => {
                self.try_move(Coord::right);
                true
            }
            Key::Down => {
                while self.move_down() {}
                // Land on this very invocation.
                self.tick = 0;
                true
            }
            Key::Up | Key::Enter => false,
        }
    }

    fn game_step(&mut self) {
        self.flags = TickFlags::default();

        if self.clear_bottom_row() {
            self.flags.row_clear = true;
            self.rows += 1;
            self.score += self.level + 1;
            if is_level_up(self.rows) {
                self.advance_level();
            }
        }

        let landed = match self.active {
            Some(at) => !self.playfield.is_occupied(at) || !self.move_down(),
            None => true,
        };

        if landed {
            if self.spawn_tile() {
                self.flags.tile_added = true;
                self.tiles += 1;
            } else {
                self.end_game();
            }
        }
    }

    /// Shift every row down by one if the bottom row is full.
    ///
    /// A single tile can complete at most the bottom row, so no other row is
    /// checked.
    fn clear_bottom_row(&mut self) -> bool {
        let bottom = GRID_HEIGHT - 1;
        if !self.playfield.is_row_full(bottom) {
            return false;
        }
        for y in (1..=bottom).rev() {
            self.playfield.relocate_row(y, y - 1);
        }
        self.playfield.clear_row(0);
        true
    }

    fn advance_level(&mut self) {
        self.level += 1;
        self.next_game_tick = next_game_tick_after_level_up(self.next_game_tick);
        debug!(
            "level {} reached, stepping every {} ticks",
            self.level, self.next_game_tick
        );
    }

    fn try_move(&mut self, towards: fn(Coord) -> Option<Coord>) -> bool {
        let Some(from) = self.active else {
            return false;
        };
        let Some(to) = towards(from) else {
            return false;
        };
        if self.playfield.is_occupied(to) {
            return false;
        }

        self.playfield.relocate(to, from);
        self.playfield.clear(from);
        self.active = Some(to);
        true
    }

    fn move_down(&mut self) -> bool {
        self.try_move(Coord::below)
    }

    fn spawn_tile(&mut self) -> bool {
        if self.playfield.is_occupied(SPAWN) {
            return false;
        }
        self.playfield.place(SPAWN);
        self.active = Some(SPAWN);
        true
    }

    fn end_game(&mut self) {
        info!(
            "game over: score {} after {} tiles, {} rows, level {}",
            self.score, self.tiles, self.rows, self.level
        );
        self.status = Status::GameOver;
        self.active = None;
        self.next_game_tick = INIT_NEXT_GAME_TICK;
    }

    fn new_game(&mut self) {
        self.status = Status::Active;
        self.flags = TickFlags::default();
        self.tiles = 0;
        self.rows = 0;
        self.score = 0;
        self.level = 0;
        self.tick = 0;
        self.active = None;
        self.playfield.reset();

        if self.spawn_tile() {
            self.flags.tile_added = true;
            self.tiles += 1;
        }
        debug!("new game started");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
