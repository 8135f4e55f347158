use std::cell::Cell;
use std::rc::Rc;

use cyclesim_core::CircuitModel;
use cyclesim_core::common::{Level, PortValue, SignalDecl};

/// Counter that increments on every rising clock edge and clears while reset is asserted.
///
/// Evaluations are counted through a shared probe so tests can inspect them after the model
/// has been moved into a testbench.
#[derive(Debug)]
pub struct CounterModel {
    clk: Level,
    prev_clk: Level,
    reset: bool,
    count: u64,
    width: u32,
    evals: Rc<Cell<u64>>,
}

impl CounterModel {
    pub fn new(width: u32) -> Self {
        Self {
            clk: Level::Low,
            prev_clk: Level::Low,
            reset: true,
            count: 0,
            width,
            evals: Rc::default(),
        }
    }

    /// Returns the model and a probe counting its evaluations.
    pub fn with_probe(width: u32) -> (Self, Rc<Cell<u64>>) {
        let model = Self::new(width);
        let probe = Rc::clone(&model.evals);
        (model, probe)
    }

    pub const fn count(&self) -> u64 {
        self.count
    }

    fn mask(&self) -> u64 {
        SignalDecl::new("count", self.width).mask()
    }
}

impl CircuitModel for CounterModel {
    fn name(&self) -> &str {
        "counter"
    }

    fn set_clock(&mut self, level: Level) {
        self.clk = level;
    }

    fn set_reset(&mut self, asserted: bool) {
        self.reset = asserted;
    }

    fn eval(&mut self) {
        self.evals.set(self.evals.get() + 1);
        let rising = self.clk.is_high() && !self.prev_clk.is_high();
        self.prev_clk = self.clk;
        if self.reset {
            self.count = 0;
        } else if rising {
            self.count = (self.count + 1) & self.mask();
        }
    }

    fn signals(&self) -> Vec<SignalDecl> {
        vec![
            SignalDecl::new("clk", 1),
            SignalDecl::new("rst", 1),
            SignalDecl::new("count", self.width),
        ]
    }

    fn sample(&self, values: &mut Vec<u64>) {
        values.extend([self.clk.bit(), u64::from(self.reset), self.count]);
    }

    fn debug_ports(&self) -> Vec<SignalDecl> {
        vec![SignalDecl::new("count", self.width), SignalDecl::new("rst", 1)]
    }

    fn debug_port(&self, name: &str) -> Option<PortValue> {
        match name {
            "count" => Some(PortValue {
                value: self.count,
                width: self.width,
            }),
            "rst" => Some(PortValue {
                value: u64::from(self.reset),
                width: 1,
            }),
            _ => None,
        }
    }
}
