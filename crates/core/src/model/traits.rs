//! Circuit model trait.
//!
//! A model is a synchronous black box with writable clock and reset inputs, a parameterless
//! evaluation entry point, and named debug outputs. Nothing else about its structure is visible
//! to the driver.

use crate::common::{Level, PortValue, SignalDecl};

/// Capability set the driver requires from a device under test.
///
/// Implementations must advance clocked state at most once per qualifying input transition:
/// calling [`eval`](CircuitModel::eval) repeatedly with unchanged inputs only re-settles
/// combinational logic.
pub trait CircuitModel {
    /// Short name used in diagnostics.
    fn name(&self) -> &str;

    /// Drives the clock input.
    fn set_clock(&mut self, level: Level);

    /// Drives the reset input. `asserted` is polarity-free; the model applies its own.
    fn set_reset(&mut self, asserted: bool);

    /// Recomputes combinational logic and, on a qualifying clock edge, clocked state.
    fn eval(&mut self);

    /// Every signal captured in a trace sample, in a fixed order.
    fn signals(&self) -> Vec<SignalDecl>;

    /// Appends the current value of each signal, in [`signals`](CircuitModel::signals) order.
    fn sample(&self, values: &mut Vec<u64>);

    /// Debug output ports this model exposes.
    fn debug_ports(&self) -> Vec<SignalDecl>;

    /// Reads a debug port by name, or `None` if the model has no such port.
    fn debug_port(&self, name: &str) -> Option<PortValue>;
}

impl<M: CircuitModel + ?Sized> CircuitModel for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn set_clock(&mut self, level: Level) {
        (**self).set_clock(level);
    }

    fn set_reset(&mut self, asserted: bool) {
        (**self).set_reset(asserted);
    }

    fn eval(&mut self) {
        (**self).eval();
    }

    fn signals(&self) -> Vec<SignalDecl> {
        (**self).signals()
    }

    fn sample(&self, values: &mut Vec<u64>) {
        (**self).sample(values);
    }

    fn debug_ports(&self) -> Vec<SignalDecl> {
        (**self).debug_ports()
    }

    fn debug_port(&self, name: &str) -> Option<PortValue> {
        (**self).debug_port(name)
    }
}
