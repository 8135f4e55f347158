//! Time and clock authority.
//!
//! Owns the simulation clock and synthesizes the reset and clock waveform:
//! 1. **Power-on:** Clock low, reset asserted, at tick zero.
//! 2. **Reset release:** After the configured settling interval, reset is deasserted.
//! 3. **Clock phases:** Each cycle is a rising half period followed by a falling half period.
//!
//! Every method that changes the stimulus returns the new [`StimulusVector`]; the caller must
//! apply and sample it before asking for the next one.

/// Monotonic tick counter.
pub mod clock;

/// Input vectors and clock phases.
pub mod stimulus;

pub use clock::SimClock;
pub use stimulus::{Phase, StimulusVector};

use crate::common::Result;
use crate::config::ClockConfig;

/// Generates the stimulus sequence and keeps simulation time.
#[derive(Debug, Clone)]
pub struct ClockAuthority {
    clock: SimClock,
    half_period: u64,
    reset_ticks: u64,
    stimulus: StimulusVector,
}

impl ClockAuthority {
    /// Creates an authority at tick zero with power-on inputs.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidStep`](crate::SimError::InvalidStep) if either timing value
    /// is zero.
    pub fn new(config: &ClockConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            clock: SimClock::new(),
            half_period: config.half_period,
            reset_ticks: config.reset_ticks,
            stimulus: StimulusVector::power_on(),
        })
    }

    /// Current tick.
    #[inline]
    pub const fn current(&self) -> u64 {
        self.clock.current()
    }

    /// Advances time by an explicit step.
    ///
    /// # Errors
    ///
    /// See [`SimClock::advance`].
    pub fn advance(&mut self, delta: u64) -> Result<u64> {
        self.clock.advance(delta)
    }

    /// Inputs most recently handed out.
    pub const fn stimulus(&self) -> StimulusVector {
        self.stimulus
    }

    /// Power-on inputs at the current tick (clock low, reset asserted). Time does not move.
    pub const fn power_on(&mut self) -> StimulusVector {
        self.stimulus = StimulusVector::power_on();
        self.stimulus
    }

    /// Holds reset for the settling interval, then releases it.
    ///
    /// # Errors
    ///
    /// Propagates clock advance failures.
    pub fn release_reset(&mut self) -> Result<StimulusVector> {
        let _ = self.clock.advance(self.reset_ticks)?;
        self.stimulus = self.stimulus.with_reset(false);
        Ok(self.stimulus)
    }

    /// Advances one half period and drives the clock to the phase's level.
    ///
    /// # Errors
    ///
    /// Propagates clock advance failures.
    pub fn step(&mut self, phase: Phase) -> Result<StimulusVector> {
        let _ = self.clock.advance(self.half_period)?;
        self.stimulus = self.stimulus.with_clock(phase.level());
        Ok(self.stimulus)
    }
}
