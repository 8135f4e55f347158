//! Whole-run entry points.
//!
//! The run is strictly linear: bind, reset, fixed cycles, snapshot, shutdown. Any error ends it;
//! the testbench's `Drop` still closes the trace on the way out.

use serde::Serialize;

use crate::common::Result;
use crate::config::Config;
use crate::model::CircuitModel;
use crate::report::{self, FinalStateReport};
use crate::sim::Testbench;
use crate::stats::RunStats;
use crate::trace::{VcdSink, WaveformSink};

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// Final debug-port values.
    pub report: FinalStateReport,
    /// Run counters.
    pub stats: RunStats,
}

/// Runs `model` with a VCD trace written to the configured path.
///
/// # Errors
///
/// Any [`SimError`](crate::SimError) raised along the way; see [`simulate_with_sink`].
pub fn simulate<M: CircuitModel>(model: M, config: &Config) -> Result<RunOutcome> {
    simulate_with_sink(model, VcdSink::from_config(&config.trace), config)
}

/// Runs `model` against an arbitrary trace sink.
///
/// # Errors
///
/// * `InvalidStep` for zero timing values.
/// * `TraceOpen` if the sink cannot be created.
/// * `TraceWrite` on trace I/O failure.
/// * `UnknownPort` if a report port is not exposed by the model.
pub fn simulate_with_sink<M, S>(model: M, sink: S, config: &Config) -> Result<RunOutcome>
where
    M: CircuitModel,
    S: WaveformSink,
{
    let mut bench = Testbench::initialize(model, sink, config)?;
    bench.reset()?;
    bench.run_fixed_cycles(config.run.cycles)?;
    let report = report::snapshot(bench.model(), &config.report.ports)?;
    let stats = bench.shutdown()?;
    Ok(RunOutcome { report, stats })
}
