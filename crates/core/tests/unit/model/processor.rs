//! # Single-Cycle Core Tests
//!
//! Edge-triggered commit, asynchronous reset, debug ports, and the demo program's progress
//! under the fixed reset-then-cycles schedule.

use std::io::Write;

use cyclesim_core::CircuitModel;
use cyclesim_core::common::Level;
use cyclesim_core::model::rv32::{DATA_MEM_PORT, DEMO_PROGRAM, SingleCycleCore, XLEN};
use cyclesim_core::sim::simulate_with_sink;
use cyclesim_core::trace::MemorySink;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

use crate::common::harness::config_with;

/// Holds reset, releases it, then drives `cycles` rising/falling pairs.
fn run(core: &mut SingleCycleCore, cycles: u64) {
    core.set_clock(Level::Low);
    core.set_reset(true);
    core.eval();
    core.set_reset(false);
    core.eval();
    for _ in 0..cycles {
        core.set_clock(Level::High);
        core.eval();
        core.set_clock(Level::Low);
        core.eval();
    }
}

fn port(core: &SingleCycleCore, name: &str) -> u64 {
    core.debug_port(name).unwrap().value
}

#[test]
fn test_reset_clears_state() {
    let mut core = SingleCycleCore::demo();
    run(&mut core, 5);
    assert_ne!(core.pc(), 0);

    core.set_reset(true);
    core.eval();
    assert_eq!(core.pc(), 0);
    assert_eq!(core.reg(1), 0);
    assert_eq!(core.mem_word(0), 0);
}

#[test]
fn test_reset_is_asynchronous() {
    let mut core = SingleCycleCore::demo();
    run(&mut core, 3);
    core.set_clock(Level::High);
    core.eval();
    let pc = core.pc();
    assert_ne!(pc, 0);

    // Clock held high; reset alone must clear state.
    core.set_reset(true);
    core.eval();
    assert_eq!(core.pc(), 0);
}

#[test]
fn test_repeated_eval_does_not_advance() {
    let mut core = SingleCycleCore::demo();
    run(&mut core, 1);
    core.set_clock(Level::High);
    core.eval();
    let pc = core.pc();
    for _ in 0..5 {
        core.eval();
    }
    assert_eq!(core.pc(), pc);
}

#[test]
fn test_falling_edge_does_not_commit() {
    let mut core = SingleCycleCore::demo();
    run(&mut core, 0);
    core.set_clock(Level::High);
    core.eval();
    assert_eq!(core.pc(), 4);
    core.set_clock(Level::Low);
    core.eval();
    assert_eq!(core.pc(), 4);
}

#[test]
fn test_combinational_outputs_follow_state() {
    let mut core = SingleCycleCore::demo();
    run(&mut core, 0);
    let dp = core.datapath_outputs();
    assert_eq!(dp.instr, DEMO_PROGRAM[0]);
    assert_eq!(dp.alu_result, 5);
    assert_eq!(dp.next_pc, 4);
    assert_eq!(dp.writeback, Some((1, 5)));
    assert_eq!(dp.store, None);
}

#[rstest]
#[case(0, [0, 0, 0, 0, 0])]
#[case(1, [5, 0, 0, 0, 0])]
#[case(3, [5, 10, 15, 0, 0])]
#[case(7, [5, 10, 15, 0, 15])]
#[case(9, [5, 10, 15, 0, 15])]
#[case(10, [5, 10, 15, 42, 15])]
#[case(30, [5, 10, 15, 42, 15])]
fn test_demo_program_progress(#[case] cycles: u64, #[case] expected: [u64; 5]) {
    let mut core = SingleCycleCore::demo();
    run(&mut core, cycles);
    let got = ["x1", "x2", "x3", "x10", DATA_MEM_PORT].map(|p| port(&core, p));
    assert_eq!(got, expected);
}

#[test]
fn test_demo_program_settles_in_self_loop() {
    let mut core = SingleCycleCore::demo();
    run(&mut core, 11);
    assert_eq!(core.pc(), 0x2c);
    run(&mut core, 40);
    assert_eq!(core.pc(), 0x2c);
}

#[test]
fn test_demo_program_final_registers() {
    let mut core = SingleCycleCore::default();
    run(&mut core, 30);
    let regs: Vec<u32> = [0, 1, 2, 3, 4, 5, 6, 7, 10].map(|i| core.reg(i)).to_vec();
    assert_eq!(regs, vec![0, 5, 10, 15, 5, 0, 15, 15, 42]);
    assert_eq!(core.mem_word(0), 15);
}

#[rstest]
#[case("x0", true)]
#[case("x31", true)]
#[case("data_mem_0", true)]
#[case("x32", false)]
#[case("x01", false)]
#[case("x", false)]
#[case("pc", false)]
#[case("X1", false)]
fn test_debug_port_names(#[case] name: &str, #[case] exists: bool) {
    let core = SingleCycleCore::demo();
    assert_eq!(core.debug_port(name).is_some(), exists);
}

#[test]
fn test_debug_port_width() {
    let core = SingleCycleCore::demo();
    assert_eq!(core.debug_port("x5").unwrap().width, XLEN);
    assert_eq!(core.debug_ports().len(), 33);
}

#[test]
fn test_sample_matches_signal_list() {
    let core = SingleCycleCore::demo();
    let mut values = Vec::new();
    core.sample(&mut values);
    let signals = core.signals();
    assert_eq!(values.len(), signals.len());
    assert_eq!(signals[0].name, "clk");
    assert_eq!(signals[1].name, "rst_n");
    assert_eq!(core.name(), "single_cycle_processor");
}

#[test]
fn test_traced_pc_advances_on_rising_edges() {
    let config = config_with(4, &["x1"]);
    let sink = MemorySink::new();
    let handle = sink.handle();
    simulate_with_sink(SingleCycleCore::demo(), sink, &config).unwrap();

    let log = handle.snapshot();
    assert_eq!(log.column("pc").unwrap(), vec![0, 0, 4, 4, 8, 8, 12, 12, 16, 16]);
    assert_eq!(log.column("rst_n").unwrap()[..2], [0, 1]);
}

#[test]
fn test_from_image_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "02a00513 // addi x10, x0, 42\n0000006f").unwrap();
    let mut core = SingleCycleCore::from_image_file(file.path()).unwrap();
    run(&mut core, 3);
    assert_eq!(port(&core, "x10"), 42);
    assert_eq!(core.pc(), 4);
}

#[test]
fn test_fetch_past_image_is_nop_like() {
    let mut core = SingleCycleCore::new(vec![0x00500093]);
    run(&mut core, 4);
    assert_eq!(core.reg(1), 5);
    assert_eq!(core.pc(), 16);
}
