//! Simulation error definitions.
//!
//! Every failure in the driver is fatal to the run: there is no retry or partial-success path,
//! so each variant carries enough context (path, port name, step size) to be reported as-is at
//! the top level.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised while configuring, running, or reporting a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A time increment of zero ticks was requested.
    ///
    /// Time only moves forward by explicit positive steps; this is a driver
    /// programming or configuration error.
    #[error("invalid time step of {delta} ticks: steps must be positive")]
    InvalidStep {
        /// The rejected increment.
        delta: u64,
    },

    /// Advancing the clock would overflow the tick counter.
    #[error("simulation clock overflow: {now} + {delta} exceeds u64::MAX")]
    ClockOverflow {
        /// Tick value before the failed advance.
        now: u64,
        /// The requested increment.
        delta: u64,
    },

    /// The waveform sink could not be created.
    #[error("cannot open waveform trace '{}': {source}", path.display())]
    TraceOpen {
        /// Destination that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Writing to an already open waveform sink failed.
    #[error("waveform trace write failed: {0}")]
    TraceWrite(#[source] io::Error),

    /// A requested debug port is not exposed by the bound model.
    #[error("model '{model}' has no debug port named '{name}'")]
    UnknownPort {
        /// The requested port name.
        name: String,
        /// Name of the model that was queried.
        model: String,
    },

    /// The configuration document is malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A memory image handed to a model could not be parsed.
    #[error("malformed memory image at line {line}: {reason}")]
    ProgramImage {
        /// 1-based line number of the offending token.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Reading an input file (configuration, memory image) failed.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
