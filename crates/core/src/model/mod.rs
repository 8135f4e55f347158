//! Device-under-test boundary.
//!
//! The driver talks to a circuit model only through the [`CircuitModel`] trait. This module
//! also bundles [`rv32`], a behavioural single-cycle RV32I processor used as the default DUT.

/// The model capability set.
pub mod traits;

/// Reference single-cycle RV32I processor model.
pub mod rv32;

pub use traits::CircuitModel;
