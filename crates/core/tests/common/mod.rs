
/// Mock models and sinks.
pub mod mocks;
