//! # VCD Sink Tests
//!
//! Header layout, dump-then-delta encoding, and lifecycle errors.

use std::fs;

use cyclesim_core::SimError;
use cyclesim_core::common::SignalDecl;
use cyclesim_core::config::{TimeUnit, TraceConfig};
use cyclesim_core::trace::{VcdSink, WaveformSink};
use tempfile::{NamedTempFile, tempdir};

fn signals() -> Vec<SignalDecl> {
    vec![SignalDecl::new("clk", 1), SignalDecl::new("pc", 8)]
}

#[test]
fn test_nothing_written_before_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lazy.vcd");
    let sink = VcdSink::new(&path, 1, TimeUnit::Ns);
    assert!(!sink.is_open());
    assert!(!path.exists());
    assert_eq!(sink.path(), path);
}

#[test]
fn test_from_config() {
    let config = TraceConfig::default();
    let sink = VcdSink::from_config(&config);
    assert_eq!(sink.path(), config.path);
}

#[test]
fn test_header_and_samples() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out/trace.vcd");
    let mut sink = VcdSink::new(&path, 1, TimeUnit::Ns);

    sink.open("TOP", &signals()).unwrap();
    assert!(sink.is_open());
    sink.sample(0, &[0, 0x00]).unwrap();
    sink.sample(5, &[1, 0x00]).unwrap();
    sink.sample(10, &[1, 0x04]).unwrap();
    sink.close().unwrap();
    assert!(!sink.is_open());

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("$timescale"));
    assert!(text.contains("TOP"));
    assert!(text.contains("clk"));
    assert!(text.contains("pc"));
    assert!(text.contains("$enddefinitions"));
    assert!(text.contains("$dumpvars"));
    assert!(text.contains("b00000100"));

    let stamps: Vec<&str> = text.lines().filter(|l| l.starts_with('#')).collect();
    assert_eq!(stamps, vec!["#0", "#5", "#10"]);

    // The pc vector only changes once after the initial dump.
    let header_end = text.find("$enddefinitions").unwrap();
    let body = &text[header_end..];
    assert_eq!(body.matches("b00000000").count(), 1);
}

#[test]
fn test_unchanged_sample_writes_only_timestamp() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("steady.vcd");
    let mut sink = VcdSink::new(&path, 1, TimeUnit::Ns);
    sink.open("TOP", &signals()).unwrap();
    sink.sample(0, &[1, 9]).unwrap();
    sink.sample(5, &[1, 9]).unwrap();
    sink.close().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let tail = &text[text.find("#5").unwrap()..];
    assert_eq!(tail.trim(), "#5");
}

#[test]
fn test_open_under_regular_file_fails() {
    let blocker = NamedTempFile::new().unwrap();
    let path = blocker.path().join("trace.vcd");
    let mut sink = VcdSink::new(&path, 1, TimeUnit::Ns);
    match sink.open("TOP", &signals()).unwrap_err() {
        SimError::TraceOpen { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected TraceOpen, got {other:?}"),
    }
    assert!(!sink.is_open());
}

#[test]
fn test_sample_before_open_fails() {
    let dir = tempdir().unwrap();
    let mut sink = VcdSink::new(dir.path().join("x.vcd"), 1, TimeUnit::Ns);
    assert!(matches!(
        sink.sample(0, &[0, 0]),
        Err(SimError::TraceWrite(_))
    ));
}

#[test]
fn test_close_is_idempotent_and_final() {
    let dir = tempdir().unwrap();
    let mut sink = VcdSink::new(dir.path().join("x.vcd"), 1, TimeUnit::Ns);
    sink.open("TOP", &signals()).unwrap();
    sink.close().unwrap();
    sink.close().unwrap();
    assert!(matches!(
        sink.open("TOP", &signals()),
        Err(SimError::TraceOpen { .. })
    ));
}

#[test]
fn test_double_open_rejected() {
    let dir = tempdir().unwrap();
    let mut sink = VcdSink::new(dir.path().join("x.vcd"), 1, TimeUnit::Ns);
    sink.open("TOP", &signals()).unwrap();
    assert!(matches!(
        sink.open("TOP", &signals()),
        Err(SimError::TraceOpen { .. })
    ));
}

#[test]
fn test_debug_output_summarizes_state() {
    let dir = tempdir().unwrap();
    let mut sink = VcdSink::new(dir.path().join("dbg.vcd"), 1, TimeUnit::Ns);
    sink.open("TOP", &signals()).unwrap();
    let text = format!("{sink:?}");
    assert!(text.starts_with("VcdSink {"));
    assert!(text.contains("open: true"));
    assert!(text.contains("vars: 2"));
    assert!(text.ends_with(", .. }"));
}
