//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Engine:** The cycle stepper that runs every stage once per cycle.
//! 2. **Hazards:** Load-use detection and operand forwarding.
//! 3. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 4. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.

/// Cycle stepper and per-cycle events.
pub mod engine;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB, WB/END).
pub mod latches;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

pub use engine::{Cycle, CycleEvents, Pipeline};
