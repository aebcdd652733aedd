//! Fixed timestep accumulator

use crate::consts::{MAX_SUBSTEPS, TICK_PERIOD_MS};

/// Turns elapsed milliseconds into a number of ticks to run
#[derive(Debug, Clone)]
pub struct FrameClock {
    period_ms: u64,
    max_substeps: u32,
    accumulator_ms: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICK_PERIOD_MS)
    }
}

impl FrameClock {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            max_substeps: MAX_SUBSTEPS,
            accumulator_ms: 0,
        }
    }

    /// Add elapsed time and return how many ticks are due
    ///
    /// Long stalls are capped at `max_substeps` ticks and the backlog is
    /// dropped rather than replayed.
    pub fn advance(&mut self, elapsed_ms: u64) -> u32 {
        self.accumulator_ms += elapsed_ms;
        let due = self.accumulator_ms / self.period_ms;
        if due > self.max_substeps as u64 {
            log::debug!("Dropping {} ticks of backlog", due - self.max_substeps as u64);
            self.accumulator_ms = 0;
            return self.max_substeps;
        }
        self.accumulator_ms -= due * self.period_ms;
        due as u32
    }

    /// Time until the next tick is due
    pub fn until_next_ms(&self) -> u64 {
        self.period_ms - self.accumulator_ms.min(self.period_ms)
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }
}
