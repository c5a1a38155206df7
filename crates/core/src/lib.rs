//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, the playfield and its colors. It has
//! **no dependencies** on devices, terminals or timing, making it:
//!
//! - **Deterministic**: the same key sequence always produces the same game
//! - **Testable**: every rule can be driven directly from unit tests
//! - **Portable**: the LED matrix and the console render from the same state
//!
//! # Module Structure
//!
//! - [`playfield`]: 8x8 occupancy grid with per-cell display colors
//! - [`color`]: hue cycling that colors each new tile
//! - [`level`]: speed-up schedule applied on level advance
//! - [`game_state`]: the tick-driven state machine
//! - [`snapshot`]: plain copy of a frame for renderers
//!
//! # Game Rules
//!
//! - One tile falls at a time from the top center cell
//! - Left/right shift it one column, down drops it to the bottom
//! - A full bottom row is removed and scores `level + 1`
//! - Every 2 cleared rows the level goes up and the game speeds up
//! - A tile that cannot spawn ends the game; any key restarts it
//!
//! # Example
//!
//! ```
//! use sense_stetris_core::GameState;
//! use sense_stetris_types::{Coord, Key};
//!
//! let mut game = GameState::new();
//! assert!(game.game_over());
//!
//! // Any key starts the game with a tile at the top center.
//! game.step(Some(Key::Up));
//! assert_eq!(game.active(), Some(Coord::new(3, 0)));
//!
//! // Drop it: it lands in the bottom row and a new tile spawns.
//! game.advance_tick();
//! game.step(Some(Key::Down));
//! assert!(game.playfield().is_occupied(Coord::new(3, 7)));
//! assert_eq!(game.tiles(), 2);
//! ```
//!
//! # Timing
//!
//! The main loop calls [`GameState::step`] once per 10ms tick and then
//! [`GameState::advance_tick`]. The game itself only moves when the tick
//! counter wraps to zero, once every `next_game_tick` ticks.

pub mod color;
pub mod game_state;
pub mod level;
pub mod playfield;
pub mod snapshot;

pub use sense_stetris_types as types;

// Re-export commonly used types for convenience
pub use color::{channel_from_hue, color_for_hue, HueCycle};
pub use game_state::{GameState, Status, TickFlags};
pub use level::{next_game_tick_after_level_up, SpeedUpRule, SPEED_UP_RULES};
pub use playfield::Playfield;
pub use snapshot::GameSnapshot;
