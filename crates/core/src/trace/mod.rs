//! Waveform trace sinks.
//!
//! A sink receives the signal list once when it opens, then one full snapshot per evaluation,
//! then exactly one close. Implementations:
//! 1. **VCD:** [`VcdSink`] writes a Value Change Dump file for external waveform viewers.
//! 2. **Memory:** [`MemorySink`] keeps samples in memory for embedding and tests.

/// In-memory sink.
pub mod memory;

/// Sink trait.
pub mod traits;

/// VCD file sink.
pub mod vcd_sink;

pub use memory::{MemorySink, TraceHandle, TraceLog, TraceSample};
pub use traits::WaveformSink;
pub use vcd_sink::VcdSink;
