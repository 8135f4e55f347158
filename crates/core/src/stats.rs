//! Run statistics.
//!
//! Counts what the testbench did so a run can be checked against the fixed-schedule
//! expectation of `2 * cycles + 2` evaluation/sample pairs.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;

/// Counters collected by the testbench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Model evaluations performed.
    pub evaluations: u64,
    /// Trace samples written.
    pub samples: u64,
    /// Full clock cycles driven after reset.
    pub cycles: u64,
    /// Tick of the last sample.
    pub final_time: u64,
    /// Wall-clock time from bind to shutdown.
    #[serde(skip)]
    pub elapsed: Duration,
}

impl RunStats {
    /// Samples expected for a run of `cycles` cycles: two reset samples plus two per cycle.
    pub const fn expected_samples(cycles: u64) -> u64 {
        cycles.saturating_mul(2).saturating_add(2)
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cycles={} evaluations={} samples={} final_time={} elapsed={:.3}ms",
            self.cycles,
            self.evaluations,
            self.samples,
            self.final_time,
            self.elapsed.as_secs_f64() * 1e3
        )
    }
}

/// Mutable counter set owned by a running testbench.
#[derive(Debug, Clone)]
pub(crate) struct StatsCollector {
    started: Instant,
    stats: RunStats,
}

impl StatsCollector {
    pub(crate) fn start() -> Self {
        Self {
            started: Instant::now(),
            stats: RunStats {
                evaluations: 0,
                samples: 0,
                cycles: 0,
                final_time: 0,
                elapsed: Duration::ZERO,
            },
        }
    }

    pub(crate) const fn record_evaluation(&mut self) {
        self.stats.evaluations += 1;
    }

    pub(crate) const fn record_sample(&mut self, time: u64) {
        self.stats.samples += 1;
        self.stats.final_time = time;
    }

    pub(crate) const fn record_cycle(&mut self) {
        self.stats.cycles += 1;
    }

    pub(crate) fn finish(&self) -> RunStats {
        RunStats {
            elapsed: self.started.elapsed(),
            ..self.stats
        }
    }
}
