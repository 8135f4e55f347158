//! Signal declarations and values exchanged across the model boundary.

use std::fmt;

use serde::Serialize;

/// Logic level of a single-bit input such as the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Level {
    /// Logic 0.
    #[default]
    Low,
    /// Logic 1.
    High,
}

impl Level {
    /// Returns the level as a bit value (`0` or `1`).
    #[inline]
    pub const fn bit(self) -> u64 {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }

    /// Returns `true` for [`Level::High`].
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Self::High } else { Self::Low }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bit())
    }
}

/// Name and bit width of a model signal.
///
/// Used both for the full list of traced signals and for the debug ports a model exposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SignalDecl {
    /// Signal name as it appears in the trace and in reports.
    pub name: String,
    /// Width in bits (1..=64).
    pub width: u32,
}

impl SignalDecl {
    /// Creates a declaration.
    pub fn new(name: impl Into<String>, width: u32) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }

    /// Mask selecting the low `width` bits.
    pub const fn mask(&self) -> u64 {
        if self.width >= 64 {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }
}

/// Value read from a debug port, together with the port's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortValue {
    /// Current value, truncated to `width` bits.
    pub value: u64,
    /// Width in bits.
    pub width: u32,
}
