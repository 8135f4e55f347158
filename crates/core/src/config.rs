//! Configuration system for the simulation driver.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** The classic single-cycle processor testbench timing and report set.
//! 2. **Structures:** Hierarchical config for clock timing, run length, trace output, and report.
//! 3. **Loading:** JSON deserialization with per-field defaults, plus validation.
//!
//! Every field is optional in JSON; missing fields fall back to the values in `defaults`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::{Result, SimError};

/// Default configuration constants for the driver.
mod defaults {
    /// Ticks per clock phase (rising or falling half of a cycle).
    pub const HALF_PERIOD: u64 = 5;

    /// Ticks reset is held asserted before it is released.
    ///
    /// Clocked state must be initialized before the first rising edge.
    pub const RESET_TICKS: u64 = 10;

    /// Number of full clock cycles driven after reset.
    pub const CYCLES: u64 = 30;

    /// Destination of the waveform trace.
    pub const TRACE_PATH: &str = "sim/single_cycle_processor_tb.vcd";

    /// Name of the top-level scope in the trace.
    pub const TRACE_SCOPE: &str = "TOP";

    /// Magnitude of one tick in trace time units.
    pub const TIMESCALE: u32 = 1;

    /// Debug ports reported after the run, in output order.
    pub const REPORT_PORTS: [&str; 10] = [
        "x0",
        "x1",
        "x2",
        "x3",
        "x4",
        "x5",
        "x6",
        "x7",
        "x10",
        "data_mem_0",
    ];
}

/// Time unit attached to one tick in the waveform trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Seconds.
    S,
    /// Milliseconds.
    Ms,
    /// Microseconds.
    Us,
    /// Nanoseconds.
    #[default]
    Ns,
    /// Picoseconds.
    Ps,
    /// Femtoseconds.
    Fs,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Clock and reset timing.
    #[serde(default)]
    pub clock: ClockConfig,
    /// Run length.
    #[serde(default)]
    pub run: RunConfig,
    /// Waveform trace output.
    #[serde(default)]
    pub trace: TraceConfig,
    /// Final-state report.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] when the document is not valid JSON or a field has the
    /// wrong type.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, or [`SimError::Config`] if it does
    /// not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks timing values that would otherwise fail mid-run.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidStep`] if the half period or the reset interval is zero.
    pub const fn validate(&self) -> Result<()> {
        self.clock.validate()
    }
}

/// Clock and reset timing, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Ticks per clock phase; one cycle is two phases.
    #[serde(default = "ClockConfig::default_half_period")]
    pub half_period: u64,

    /// Ticks reset stays asserted before release.
    #[serde(default = "ClockConfig::default_reset_ticks")]
    pub reset_ticks: u64,
}

impl ClockConfig {
    const fn default_half_period() -> u64 {
        defaults::HALF_PERIOD
    }

    const fn default_reset_ticks() -> u64 {
        defaults::RESET_TICKS
    }

    /// Rejects zero-length phases.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidStep`] carrying the offending value.
    pub const fn validate(&self) -> Result<()> {
        if self.half_period == 0 {
            return Err(SimError::InvalidStep {
                delta: self.half_period,
            });
        }
        if self.reset_ticks == 0 {
            return Err(SimError::InvalidStep {
                delta: self.reset_ticks,
            });
        }
        Ok(())
    }

    /// Ticks in one full clock cycle.
    pub const fn period(&self) -> u64 {
        self.half_period.saturating_mul(2)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            half_period: defaults::HALF_PERIOD,
            reset_ticks: defaults::RESET_TICKS,
        }
    }
}

/// Run length.
///
/// The cycle count is fixed up front; the driver never inspects model state to stop early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of clock cycles after reset release. Zero is legal.
    #[serde(default = "RunConfig::default_cycles")]
    pub cycles: u64,
}

impl RunConfig {
    const fn default_cycles() -> u64 {
        defaults::CYCLES
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            cycles: defaults::CYCLES,
        }
    }
}

/// Waveform trace output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// VCD destination; parent directories are created when the trace opens.
    #[serde(default = "TraceConfig::default_path")]
    pub path: PathBuf,

    /// Scope that wraps every traced signal.
    #[serde(default = "TraceConfig::default_scope")]
    pub scope: String,

    /// Magnitude of one tick, in `unit`s.
    #[serde(default = "TraceConfig::default_timescale")]
    pub timescale: u32,

    /// Unit of one tick.
    #[serde(default)]
    pub unit: TimeUnit,
}

impl TraceConfig {
    fn default_path() -> PathBuf {
        PathBuf::from(defaults::TRACE_PATH)
    }

    fn default_scope() -> String {
        defaults::TRACE_SCOPE.to_owned()
    }

    const fn default_timescale() -> u32 {
        defaults::TIMESCALE
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            scope: Self::default_scope(),
            timescale: defaults::TIMESCALE,
            unit: TimeUnit::default(),
        }
    }
}

/// Final-state report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Debug ports to read after the run, in output order.
    #[serde(default = "ReportConfig::default_ports")]
    pub ports: Vec<String>,
}

impl ReportConfig {
    fn default_ports() -> Vec<String> {
        defaults::REPORT_PORTS
            .iter()
            .map(|p| (*p).to_owned())
            .collect()
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            ports: Self::default_ports(),
        }
    }
}
