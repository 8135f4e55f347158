//! Evaluation driver.
//!
//! The testbench owns the model, the trace sink, and the clock authority for the whole run.
//! Every stimulus change goes through [`Testbench::apply_and_sample`], which evaluates the model
//! once and writes one trace sample before the next change can happen.

use tracing::{debug, info, trace, warn};

use crate::common::Result;
use crate::config::Config;
use crate::model::CircuitModel;
use crate::stats::{RunStats, StatsCollector};
use crate::time::{ClockAuthority, Phase, StimulusVector};
use crate::trace::WaveformSink;

/// Drives a circuit model through reset and a fixed number of clock cycles.
///
/// The trace sink is closed by [`shutdown`](Testbench::shutdown), or by `Drop` if the run is
/// abandoned early; it is never closed twice.
#[derive(Debug)]
pub struct Testbench<M: CircuitModel, S: WaveformSink> {
    model: M,
    sink: S,
    authority: ClockAuthority,
    values: Vec<u64>,
    signal_count: usize,
    stats: StatsCollector,
    closed: bool,
}

impl<M: CircuitModel, S: WaveformSink> Testbench<M, S> {
    /// Binds `model`, opens `sink`, and declares every model signal in the trace.
    ///
    /// # Arguments
    ///
    /// * `model` - The device under test, inputs in their power-on state.
    /// * `sink` - Unopened waveform sink.
    /// * `config` - Clock timing and trace scope.
    ///
    /// # Errors
    ///
    /// * [`SimError::InvalidStep`](crate::SimError::InvalidStep) for zero-length timing values.
    /// * [`SimError::TraceOpen`](crate::SimError::TraceOpen) if the sink cannot be created. No
    ///   evaluation has happened at that point.
    pub fn initialize(model: M, mut sink: S, config: &Config) -> Result<Self> {
        let authority = ClockAuthority::new(&config.clock)?;
        let signals = model.signals();
        sink.open(&config.trace.scope, &signals)?;

        info!(
            model = model.name(),
            signals = signals.len(),
            half_period = config.clock.half_period,
            reset_ticks = config.clock.reset_ticks,
            "model bound"
        );

        Ok(Self {
            model,
            sink,
            authority,
            values: Vec::with_capacity(signals.len()),
            signal_count: signals.len(),
            stats: StatsCollector::start(),
            closed: false,
        })
    }

    /// Writes `stimulus` into the model, evaluates once, and samples the trace at the current
    /// tick.
    ///
    /// # Errors
    ///
    /// [`SimError::TraceWrite`](crate::SimError::TraceWrite) if the sample cannot be written.
    pub fn apply_and_sample(&mut self, stimulus: StimulusVector) -> Result<()> {
        self.model.set_clock(stimulus.clock);
        self.model.set_reset(stimulus.reset);
        self.model.eval();
        self.stats.record_evaluation();

        self.values.clear();
        self.model.sample(&mut self.values);
        debug_assert_eq!(self.values.len(), self.signal_count);

        let now = self.authority.current();
        self.sink.sample(now, &self.values)?;
        self.stats.record_sample(now);
        trace!(time = now, clock = %stimulus.clock, reset = stimulus.reset, "sample");
        Ok(())
    }

    /// Runs the reset sequence: power-on inputs sampled at the current tick, then reset
    /// released after the settling interval. Produces two samples.
    ///
    /// # Errors
    ///
    /// Propagates clock and trace failures.
    pub fn reset(&mut self) -> Result<()> {
        let asserted = self.authority.power_on();
        self.apply_and_sample(asserted)?;

        let released = self.authority.release_reset()?;
        self.apply_and_sample(released)?;

        info!(time = self.authority.current(), "reset released");
        Ok(())
    }

    /// Drives `cycles` full clock cycles, each a rising then a falling half period with one
    /// evaluation and one sample per phase.
    ///
    /// # Errors
    ///
    /// Propagates clock and trace failures.
    pub fn run_fixed_cycles(&mut self, cycles: u64) -> Result<()> {
        for cycle in 0..cycles {
            for phase in Phase::CYCLE {
                let stimulus = self.authority.step(phase)?;
                self.apply_and_sample(stimulus)?;
            }
            self.stats.record_cycle();
            debug!(cycle, time = self.authority.current(), "cycle complete");
        }
        Ok(())
    }

    /// The bound model.
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Current simulation tick.
    pub const fn current_time(&self) -> u64 {
        self.authority.current()
    }

    /// Counters so far.
    pub fn stats(&self) -> RunStats {
        self.stats.finish()
    }

    /// Closes the trace and releases the model.
    ///
    /// # Errors
    ///
    /// [`SimError::TraceWrite`](crate::SimError::TraceWrite) if the final flush fails.
    pub fn shutdown(mut self) -> Result<RunStats> {
        let stats = self.stats.finish();
        self.close_trace()?;
        info!(%stats, "simulation finished");
        Ok(stats)
    }

    fn close_trace(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.sink.close()
    }
}

impl<M: CircuitModel, S: WaveformSink> Drop for Testbench<M, S> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        warn!(
            time = self.authority.current(),
            "run ended early; closing waveform trace"
        );
        if let Err(e) = self.close_trace() {
            warn!(error = %e, "failed to close waveform trace");
        }
    }
}
