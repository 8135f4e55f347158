//! Primary input vectors and clock phases.

use crate::common::Level;

/// Primary inputs applied to the model at one instant.
///
/// Reset is expressed as asserted/deasserted; the model maps that onto its own polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StimulusVector {
    /// Clock level.
    pub clock: Level,
    /// Whether reset is asserted.
    pub reset: bool,
}

impl StimulusVector {
    /// Power-on inputs: clock low, reset asserted.
    pub const fn power_on() -> Self {
        Self {
            clock: Level::Low,
            reset: true,
        }
    }

    /// Returns a copy with the clock set to `level`.
    #[must_use]
    pub const fn with_clock(self, level: Level) -> Self {
        Self {
            clock: level,
            reset: self.reset,
        }
    }

    /// Returns a copy with reset asserted or released.
    #[must_use]
    pub const fn with_reset(self, asserted: bool) -> Self {
        Self {
            clock: self.clock,
            reset: asserted,
        }
    }
}

impl Default for StimulusVector {
    fn default() -> Self {
        Self::power_on()
    }
}

/// One half of a clock cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Clock driven high.
    Rising,
    /// Clock driven low.
    Falling,
}

impl Phase {
    /// Both phases of a cycle, in order.
    pub const CYCLE: [Self; 2] = [Self::Rising, Self::Falling];

    /// Clock level held during this phase.
    pub const fn level(self) -> Level {
        match self {
            Self::Rising => Level::High,
            Self::Falling => Level::Low,
        }
    }
}
