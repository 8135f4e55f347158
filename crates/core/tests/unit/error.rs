//! # Error Tests
//!
//! Display text and source chaining for the crate error type.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use cyclesim_core::SimError;

#[test]
fn test_invalid_step_message() {
    let err = SimError::InvalidStep { delta: 0 };
    assert_eq!(
        err.to_string(),
        "invalid time step of 0 ticks: steps must be positive"
    );
}

#[test]
fn test_unknown_port_message_names_port_and_model() {
    let err = SimError::UnknownPort {
        name: "x99".into(),
        model: "single_cycle_processor".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("x99"));
    assert!(msg.contains("single_cycle_processor"));
}

#[test]
fn test_trace_open_carries_path_and_source() {
    let err = SimError::TraceOpen {
        path: PathBuf::from("out/run.vcd"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("out/run.vcd"));
    assert!(err.source().is_some());
}

#[test]
fn test_clock_overflow_message() {
    let err = SimError::ClockOverflow {
        now: u64::MAX,
        delta: 1,
    };
    assert!(err.to_string().contains("overflow"));
}
