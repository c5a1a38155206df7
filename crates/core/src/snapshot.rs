use crate::game_state::{GameState, Status, TickFlags};
use crate::types::{Coord, Rgb565, GRID_HEIGHT, GRID_WIDTH};

/// Plain copy of everything a renderer needs from one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[bool; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub colors: [[Rgb565; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active: Option<Coord>,
    pub status: Status,
    pub flags: TickFlags,
    pub tiles: u32,
    pub rows: u32,
    pub score: u32,
    pub level: u32,
    pub tick: u32,
    pub next_game_tick: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[false; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        self.colors = [[Rgb565::OFF; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        self.active = None;
        self.status = Status::GameOver;
        self.flags = TickFlags::default();
        self.tiles = 0;
        self.rows = 0;
        self.score = 0;
        self.level = 0;
        self.tick = 0;
        self.next_game_tick = 0;
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[false; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            colors: [[Rgb565::OFF; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            status: Status::GameOver,
            flags: TickFlags::default(),
            tiles: 0,
            rows: 0,
            score: 0,
            level: 0,
            tick: 0,
            next_game_tick: 0,
        };
        s.clear();
        s
    }
}

impl From<&GameState> for GameSnapshot {
    fn from(game: &GameState) -> Self {
        let mut s = Self::default();
        game.snapshot_into(&mut s);
        s
    }
}
