//! The waveform sink lifecycle.

use crate::common::{Result, SignalDecl};

/// Append-only destination for timestamped signal snapshots.
///
/// Lifecycle: [`open`](WaveformSink::open) once, [`sample`](WaveformSink::sample) any number of
/// times with non-decreasing timestamps, [`close`](WaveformSink::close) once.
pub trait WaveformSink {
    /// Creates the destination and declares every signal under `scope`.
    ///
    /// # Errors
    ///
    /// [`SimError::TraceOpen`](crate::SimError::TraceOpen) when the destination cannot be
    /// created.
    fn open(&mut self, scope: &str, signals: &[SignalDecl]) -> Result<()>;

    /// Records one snapshot; `values` follows the order given to `open`.
    ///
    /// # Errors
    ///
    /// [`SimError::TraceWrite`](crate::SimError::TraceWrite) on I/O failure.
    fn sample(&mut self, time: u64, values: &[u64]) -> Result<()>;

    /// Flushes and releases the destination.
    ///
    /// # Errors
    ///
    /// [`SimError::TraceWrite`](crate::SimError::TraceWrite) if the final flush fails.
    fn close(&mut self) -> Result<()>;
}
