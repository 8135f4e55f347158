//! Cycle-accurate simulation driver for synchronous circuit models.
//!
//! This crate drives an opaque device under test (DUT) through a fixed-length stimulus run:
//! 1. **Time:** A monotonic tick counter and the clock/reset waveform built on top of it.
//! 2. **Model:** The [`CircuitModel`] boundary and a reference single-cycle RV32I model.
//! 3. **Trace:** Waveform sinks (VCD file, in-memory recorder) sampled after every evaluation.
//! 4. **Simulation:** The testbench that sequences reset, clock cycles, and trace samples.
//! 5. **Report:** Named debug-port snapshots rendered as fixed-width hexadecimal.

/// Shared types: errors and signal declarations.
pub mod common;
/// Run configuration (clock timing, cycle count, trace destination, report ports).
pub mod config;
/// Circuit model boundary and the bundled reference models.
pub mod model;
/// Final-state snapshot and rendering.
pub mod report;
/// Testbench driver and whole-run entry points.
pub mod sim;
/// Run statistics collected by the testbench.
pub mod stats;
/// Simulation time and clock/reset stimulus generation.
pub mod time;
/// Waveform trace sinks.
pub mod trace;

/// Crate-wide error type.
pub use crate::common::SimError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The capability set the driver needs from a device under test.
pub use crate::model::CircuitModel;
/// Ordered final-state snapshot.
pub use crate::report::FinalStateReport;
/// Testbench driver; construct with `Testbench::initialize`.
pub use crate::sim::Testbench;
