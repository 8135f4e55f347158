//! Value Change Dump (IEEE 1364) sink.
//!
//! Layout of the produced file:
//! 1. **Header:** Timescale, one module scope, one wire per declared signal.
//! 2. **First sample:** A `$dumpvars` block carrying every value.
//! 3. **Later samples:** The timestamp followed by the values that changed.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use vcd::{IdCode, SimulationCommand, TimescaleUnit, Value, Writer};

use crate::common::{Result, SignalDecl, SimError};
use crate::config::{TimeUnit, TraceConfig};
use crate::trace::WaveformSink;

impl From<TimeUnit> for TimescaleUnit {
    fn from(unit: TimeUnit) -> Self {
        match unit {
            TimeUnit::S => Self::S,
            TimeUnit::Ms => Self::MS,
            TimeUnit::Us => Self::US,
            TimeUnit::Ns => Self::NS,
            TimeUnit::Ps => Self::PS,
            TimeUnit::Fs => Self::FS,
        }
    }
}

/// A declared VCD variable.
#[derive(Debug, Clone, Copy)]
struct Var {
    id: IdCode,
    width: u32,
}

/// VCD file sink.
///
/// Nothing touches the filesystem until [`WaveformSink::open`]; parent directories are created
/// then.
pub struct VcdSink {
    path: PathBuf,
    timescale: u32,
    unit: TimeUnit,
    writer: Option<Writer<BufWriter<File>>>,
    vars: Vec<Var>,
    last: Option<Vec<u64>>,
    closed: bool,
}

impl VcdSink {
    /// Creates a sink that will write to `path` with the given timescale.
    pub fn new(path: impl Into<PathBuf>, timescale: u32, unit: TimeUnit) -> Self {
        Self {
            path: path.into(),
            timescale,
            unit,
            writer: None,
            vars: Vec::new(),
            last: None,
            closed: false,
        }
    }

    /// Creates a sink from the trace section of a run configuration.
    pub fn from_config(config: &TraceConfig) -> Self {
        Self::new(config.path.clone(), config.timescale, config.unit)
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file is currently open.
    pub const fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    fn open_error(&self, source: io::Error) -> SimError {
        SimError::TraceOpen {
            path: self.path.clone(),
            source,
        }
    }

    fn create_writer(&self) -> io::Result<Writer<BufWriter<File>>> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        Ok(Writer::new(BufWriter::new(file)))
    }
}

impl fmt::Debug for VcdSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VcdSink")
            .field("path", &self.path)
            .field("timescale", &self.timescale)
            .field("unit", &self.unit)
            .field("open", &self.is_open())
            .field("vars", &self.vars.len())
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

/// Writes one value, MSB first for vectors.
fn write_value(writer: &mut Writer<BufWriter<File>>, var: Var, value: u64) -> io::Result<()> {
    if var.width == 1 {
        writer.change_scalar(var.id, bit(value, 0))
    } else {
        writer.change_vector(var.id, (0..var.width).rev().map(|b| bit(value, b)))
    }
}

const fn bit(value: u64, idx: u32) -> Value {
    if idx < 64 && (value >> idx) & 1 == 1 {
        Value::V1
    } else {
        Value::V0
    }
}

impl WaveformSink for VcdSink {
    fn open(&mut self, scope: &str, signals: &[SignalDecl]) -> Result<()> {
        if self.writer.is_some() || self.closed {
            return Err(self.open_error(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "trace was already opened",
            )));
        }

        let mut writer = self.create_writer().map_err(|e| self.open_error(e))?;
        let mut vars = Vec::with_capacity(signals.len());
        let header = (|| -> io::Result<()> {
            writer.timescale(self.timescale, self.unit.into())?;
            writer.add_module(scope)?;
            for signal in signals {
                let id = writer.add_wire(signal.width, &signal.name)?;
                vars.push(Var {
                    id,
                    width: signal.width,
                });
            }
            writer.upscope()?;
            writer.enddefinitions()
        })();
        header.map_err(|e| self.open_error(e))?;

        info!(
            path = %self.path.display(),
            signals = vars.len(),
            "waveform trace opened"
        );
        self.vars = vars;
        self.writer = Some(writer);
        Ok(())
    }

    fn sample(&mut self, time: u64, values: &[u64]) -> Result<()> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            SimError::TraceWrite(io::Error::new(
                io::ErrorKind::NotConnected,
                "trace is not open",
            ))
        })?;

        let written = (|| -> io::Result<()> {
            writer.timestamp(time)?;
            match &self.last {
                None => {
                    writer.begin(SimulationCommand::Dumpvars)?;
                    for (var, value) in self.vars.iter().zip(values) {
                        write_value(writer, *var, *value)?;
                    }
                    writer.end()
                }
                Some(prev) => {
                    for ((var, value), old) in self.vars.iter().zip(values).zip(prev) {
                        if value != old {
                            write_value(writer, *var, *value)?;
                        }
                    }
                    Ok(())
                }
            }
        })();
        written.map_err(SimError::TraceWrite)?;

        match &mut self.last {
            Some(prev) => {
                prev.clear();
                prev.extend_from_slice(values);
            }
            None => self.last = Some(values.to_vec()),
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        let Some(mut writer) = self.writer.take() else {
            return Ok(());
        };
        writer.flush().map_err(SimError::TraceWrite)?;
        debug!(path = %self.path.display(), "waveform trace flushed");
        Ok(())
    }
}
