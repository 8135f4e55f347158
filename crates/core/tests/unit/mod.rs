//! # Unit Components
//!
//! Tests organized by driver module: time, simulation, trace sinks, reports, and the bundled
//! reference model.


/// Errors and their messages.
pub mod error;
