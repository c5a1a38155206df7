use std::thread;
use std::time::{Duration, Instant};

use crate::types::TICK_US;

/// Keeps main loop iterations at a fixed period.
///
/// An iteration that takes longer than the period is not made up for; the
/// next one simply starts late.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPacer {
    period: Duration,
}

impl TickPacer {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the current period after `elapsed` of processing.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.period
            .checked_sub(elapsed)
            .filter(|left| !left.is_zero())
    }

    /// Sleep out the rest of the period that began at `started`.
    pub fn wait(&self, started: Instant) {
        if let Some(left) = self.remaining(started.elapsed()) {
            thread::sleep(left);
        }
    }
}

impl Default for TickPacer {
    fn default() -> Self {
        Self::new(Duration::from_micros(TICK_US))
    }
}
