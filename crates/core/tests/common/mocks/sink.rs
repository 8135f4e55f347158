use cyclesim_core::common::{Result, SignalDecl};
use cyclesim_core::trace::WaveformSink;
use mockall::mock;

mock! {
    pub Sink {}
    impl WaveformSink for Sink {
        fn open(&mut self, scope: &str, signals: &[SignalDecl]) -> Result<()>;
        fn sample(&mut self, time: u64, values: &[u64]) -> Result<()>;
        fn close(&mut self) -> Result<()>;
    }
}

/// A sink that accepts everything and expects exactly `samples` samples and one close.
pub fn strict_sink(samples: usize) -> MockSink {
    let mut sink = MockSink::new();
    sink.expect_open().times(1).returning(|_, _| Ok(()));
    sink.expect_sample().times(samples).returning(|_, _| Ok(()));
    sink.expect_close().times(1).returning(|| Ok(()));
    sink
}
