//! Simulation driver.
//!
//! 1. **Testbench:** Binds a model and a trace sink, sequences reset and clock cycles, and
//!    guarantees the sink is closed exactly once.
//! 2. **Session:** One-call runs that go from configuration to a final-state report.

/// Whole-run entry points.
pub mod session;

/// The evaluation driver.
pub mod testbench;

pub use session::{RunOutcome, simulate, simulate_with_sink};
pub use testbench::Testbench;
