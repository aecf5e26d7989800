//! Core processor implementation.
//!
//! This module contains the machine state snapshot, the instruction
//! pipeline that transforms it, and the execution units the stages use.

/// Instruction pipeline implementation (stepper, stages, latches, hazards).
pub mod pipeline;

/// Complete machine state for one cycle boundary.
pub mod state;

/// Execution units (ALU).
pub mod units;

pub use self::state::MachineState;
