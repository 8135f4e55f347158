//! Monotonic simulation clock.
//!
//! The tick counter is the only notion of time in a run. It starts at zero and moves forward
//! solely through [`SimClock::advance`] with a positive step.

use crate::common::{Result, SimError};

/// Unit-less simulation time counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimClock {
    now: u64,
}

impl SimClock {
    /// Creates a clock at tick zero.
    pub const fn new() -> Self {
        Self { now: 0 }
    }

    /// Returns the current tick.
    #[inline]
    pub const fn current(&self) -> u64 {
        self.now
    }

    /// Moves time forward by `delta` ticks and returns the new tick.
    ///
    /// # Errors
    ///
    /// * [`SimError::InvalidStep`] if `delta` is zero.
    /// * [`SimError::ClockOverflow`] if the counter would wrap. The clock is left unchanged.
    pub fn advance(&mut self, delta: u64) -> Result<u64> {
        if delta == 0 {
            return Err(SimError::InvalidStep { delta });
        }
        self.now = self
            .now
            .checked_add(delta)
            .ok_or(SimError::ClockOverflow {
                now: self.now,
                delta,
            })?;
        Ok(self.now)
    }
}
