//! Common types shared by every part of the driver.
//!
//! 1. **Errors:** The [`SimError`] enum and the crate [`Result`] alias.
//! 2. **Signals:** Declarations and values of model signals and debug ports.

/// Error types.
pub mod error;

/// Signal declarations and port values.
pub mod signal;

pub use error::{Result, SimError};
pub use signal::{Level, PortValue, SignalDecl};
