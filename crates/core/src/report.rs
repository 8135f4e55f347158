//! Final-state extraction and rendering.
//!
//! After the stimulus ends, [`snapshot`] reads named debug ports in the caller's order and
//! [`render`] turns the result into fixed-width hexadecimal lines.

use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::common::{Result, SimError};
use crate::model::CircuitModel;

/// One `(port, value)` pair of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortReading {
    /// Debug port name.
    pub name: String,
    /// Value read after the run.
    pub value: u64,
    /// Port width in bits; decides the rendered digit count.
    pub width: u32,
}

impl PortReading {
    /// Hexadecimal digits shown for this port.
    pub const fn hex_digits(&self) -> usize {
        let w = if self.width == 0 { 1 } else { self.width };
        w.div_ceil(4) as usize
    }
}

/// Ordered, immutable snapshot of debug ports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FinalStateReport {
    readings: Vec<PortReading>,
}

impl FinalStateReport {
    /// Readings in requested order.
    pub fn readings(&self) -> &[PortReading] {
        &self.readings
    }

    /// Value of a port, if it was part of the report.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.readings
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.value)
    }

    /// Number of readings.
    pub const fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether no ports were requested.
    pub const fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Port names in report order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.readings.iter().map(|r| r.name.as_str())
    }
}

impl fmt::Display for FinalStateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

/// Reads `ports` from `model`, preserving the requested order.
///
/// Duplicate names are read once per occurrence.
///
/// # Errors
///
/// Returns [`SimError::UnknownPort`] for the first name the model does not expose.
pub fn snapshot<M, S>(model: &M, ports: &[S]) -> Result<FinalStateReport>
where
    M: CircuitModel + ?Sized,
    S: AsRef<str>,
{
    let readings = ports
        .iter()
        .map(|port| {
            let name = port.as_ref();
            model
                .debug_port(name)
                .map(|pv| PortReading {
                    name: name.to_owned(),
                    value: pv.value,
                    width: pv.width,
                })
                .ok_or_else(|| SimError::UnknownPort {
                    name: name.to_owned(),
                    model: model.name().to_owned(),
                })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(FinalStateReport { readings })
}

/// Renders one line per reading: the name padded to the longest name, then the value as
/// zero-padded lowercase hex sized to the port width.
///
/// ```text
/// x0 : 00000000
/// x10: 0000002a
/// ```
pub fn render(report: &FinalStateReport) -> String {
    let name_width = report
        .readings
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0);

    report.readings.iter().fold(String::new(), |mut out, r| {
        let _ = writeln!(
            out,
            "{:<name_width$}: {:0digits$x}",
            r.name,
            r.value,
            digits = r.hex_digits()
        );
        out
    })
}
