//! Simulation utilities and program loading.
//!
//! Provides the machine-code loader, the top-level simulator that drives
//! the pipeline to HALT, and the diagnostic text report.

/// Machine-code image parsing and loading.
pub mod loader;

/// Byte-exact diagnostic output (listing, per-cycle dump, halt summary).
pub mod report;

/// Top-level simulator driving the cycle stepper.
pub mod simulator;

pub use loader::{Program, load_program, parse_program};
pub use simulator::Simulator;
