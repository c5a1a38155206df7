//! Main loop runner.
//!
//! Each iteration polls for one key, feeds it to the game, redraws on change,
//! then sleeps out the tick and advances the game's tick counter. `Enter`
//! quits the loop and is never handed to the game.

use std::time::Instant;

use anyhow::Result;
use log::{debug, info};

use crate::core::GameState;
use crate::frontend::{FrameSink, KeySource};
use crate::pacer::TickPacer;
use crate::types::Key;

/// Whether the loop should keep going after an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the game state for the lifetime of the loop.
#[derive(Debug, Clone)]
pub struct Runner {
    game: GameState,
    pacer: TickPacer,
    iterations: u64,
}

impl Runner {
    pub fn new(game: GameState, pacer: TickPacer) -> Self {
        Self {
            game,
            pacer,
            iterations: 0,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Draw the current state on every sink regardless of changes.
    pub fn present_all(&self, sinks: &mut [&mut dyn FrameSink]) -> Result<()> {
        for sink in sinks.iter_mut() {
            sink.present(&self.game)?;
        }
        Ok(())
    }

    /// Run one loop iteration.
    ///
    /// Sources are asked in order; the first one with a key wins and the rest
    /// are not polled this tick.
    pub fn run_once(
        &mut self,
        sources: &mut [&mut dyn KeySource],
        sinks: &mut [&mut dyn FrameSink],
    ) -> Result<Flow> {
        let started = Instant::now();

        let key = sources.iter_mut().find_map(|source| source.poll_key());
        if key == Some(Key::Enter) {
            info!("quit requested after {} iterations", self.iterations);
            return Ok(Flow::Quit);
        }
        if let Some(key) = key {
            debug!("key {}", key.as_str());
        }

        if self.game.step(key) {
            self.present_all(sinks)?;
        }

        self.pacer.wait(started);
        self.game.advance_tick();
        self.iterations += 1;
        Ok(Flow::Continue)
    }

    /// Loop until a source reports `Enter` or a sink fails.
    pub fn run(
        &mut self,
        sources: &mut [&mut dyn KeySource],
        sinks: &mut [&mut dyn FrameSink],
    ) -> Result<()> {
        while self.run_once(sources, sinks)? == Flow::Continue {}
        Ok(())
    }
}
