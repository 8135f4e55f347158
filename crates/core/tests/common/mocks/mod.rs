/// Free-running counter circuit.
pub mod counter;

/// `mockall` waveform sink.
pub mod sink;
