//! In-memory waveform recorder.
//!
//! Samples land in a [`TraceLog`] behind a shared handle, so a caller can keep inspecting the
//! recording after the sink itself has been moved into a testbench and dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::common::{Result, SignalDecl};
use crate::trace::WaveformSink;

/// One recorded snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSample {
    /// Tick the snapshot was taken at.
    pub time: u64,
    /// Signal values, in declaration order.
    pub values: Vec<u64>,
}

/// Everything a [`MemorySink`] has seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceLog {
    /// Scope passed to `open`, if it has been called.
    pub scope: Option<String>,
    /// Declared signals.
    pub signals: Vec<SignalDecl>,
    /// Snapshots in arrival order.
    pub samples: Vec<TraceSample>,
    /// Number of `close` calls received.
    pub closes: usize,
}

impl TraceLog {
    /// Values of one signal across every sample.
    ///
    /// `None` if the signal was never declared or a sample is too short to carry it.
    pub fn column(&self, name: &str) -> Option<Vec<u64>> {
        let idx = self.signals.iter().position(|s| s.name == name)?;
        self.samples.iter().map(|s| s.values.get(idx).copied()).collect()
    }

    /// Sample timestamps in order.
    pub fn times(&self) -> Vec<u64> {
        self.samples.iter().map(|s| s.time).collect()
    }
}

/// Shared read access to a [`TraceLog`].
#[derive(Debug, Clone, Default)]
pub struct TraceHandle {
    log: Arc<Mutex<TraceLog>>,
}

impl TraceHandle {
    /// Locks the log. A poisoned lock still yields the recorded data.
    pub fn lock(&self) -> MutexGuard<'_, TraceLog> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copies the current log.
    pub fn snapshot(&self) -> TraceLog {
        self.lock().clone()
    }
}

/// Sink that records into memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    handle: TraceHandle,
}

impl MemorySink {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that stays valid after the sink is consumed.
    pub fn handle(&self) -> TraceHandle {
        self.handle.clone()
    }
}

impl WaveformSink for MemorySink {
    fn open(&mut self, scope: &str, signals: &[SignalDecl]) -> Result<()> {
        let mut log = self.handle.lock();
        log.scope = Some(scope.to_owned());
        log.signals = signals.to_vec();
        drop(log);
        Ok(())
    }

    fn sample(&mut self, time: u64, values: &[u64]) -> Result<()> {
        self.handle.lock().samples.push(TraceSample {
            time,
            values: values.to_vec(),
        });
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.handle.lock().closes += 1;
        Ok(())
    }
}
