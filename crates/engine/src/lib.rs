//! Main loop module - fixed-rate scheduling of the game
//!
//! The loop runs at a fixed 10ms tick. Each tick it asks its key sources in
//! order (joystick first, keyboard as fallback), hands the key to
//! [`GameState::step`](crate::core::GameState::step), redraws every sink if
//! anything changed, and sleeps out the rest of the tick.
//!
//! - [`frontend`]: the `KeySource` / `FrameSink` seams devices plug into
//! - [`pacer`]: fixed-period sleeping
//! - [`runner`]: the loop itself

pub mod frontend;
pub mod pacer;
pub mod runner;

pub use sense_stetris_core as core;
pub use sense_stetris_types as types;

pub use frontend::{FrameSink, KeySource};
pub use pacer::TickPacer;
pub use runner::{Flow, Runner};
