//! Cycle stepper.
//!
//! This module ties the five stage transition functions into a single
//! cycle. It provides:
//! 1. **`Pipeline`:** The stepper, parameterised by the pipeline config.
//! 2. **`Cycle`:** The successor snapshot plus what happened during the cycle.
//! 3. **`CycleEvents`:** Stall, flush, squash count and retirement for statistics.
//!
//! Stages run in program order (IF, ID, EX, MEM, WB) against the same
//! immutable snapshot, so their order only matters where a later stage
//! overrides an earlier one's writes: a stall overrides fetch, and a flush
//! overrides fetch, decode and execute.

use tracing::trace;

use crate::common::error::SimError;
use crate::config::PipelineConfig;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::core::state::MachineState;
use crate::isa::opcodes::Opcode;

/// What happened during one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleEvents {
    /// Decode held its instruction for a load-use hazard.
    pub stalled: bool,
    /// A taken BEQ squashed IF/ID, ID/EX and EX/MEM.
    pub flushed: bool,
    /// Flushed words that were real instructions rather than bubbles.
    pub squashed: u8,
    /// Operation that passed through writeback. `None` for a fill word;
    /// bubbles show up as `Some(Opcode::Noop)`.
    pub retired: Option<Opcode>,
}

/// Result of stepping one cycle.
#[derive(Clone, Debug)]
pub struct Cycle {
    /// Snapshot at the start of the next cycle.
    pub state: MachineState,
    /// Events observed while computing it.
    pub events: CycleEvents,
}

/// The five-stage cycle stepper.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pipeline {
    reject_jalr: bool,
}

impl Pipeline {
    /// Creates a stepper from the pipeline configuration.
    pub const fn new(config: &PipelineConfig) -> Self {
        Self {
            reject_jalr: config.reject_jalr,
        }
    }

    /// Computes the successor of `current`.
    ///
    /// `current` is never modified; the successor starts as a copy of it, the
    /// cycle counter is advanced by one, and each stage then fills in its
    /// outgoing latch.
    ///
    /// # Errors
    ///
    /// - [`SimError::Halted`] if `current` has already halted.
    /// - [`SimError::OutOfBounds`] from fetch or from a load/store address.
    /// - [`SimError::UnsupportedInstruction`] when a JALR reaches writeback and
    ///   JALR rejection is enabled.
    pub fn step(&self, current: &MachineState) -> Result<Cycle, SimError> {
        if current.is_halted() {
            return Err(SimError::Halted);
        }

        let mut next = current.clone();
        next.cycles += 1;

        fetch_stage(current, &mut next)?;
        let stalled = decode_stage(current, &mut next);
        execute_stage(current, &mut next);
        let flush = mem_stage(current, &mut next)?;
        let retired = wb_stage(current, &mut next, self.reject_jalr)?;

        let flushed = flush.is_some();
        trace!(cycle = current.cycles, pc = next.pc, stalled, flushed, "cycle done");

        Ok(Cycle {
            state: next,
            events: CycleEvents {
                stalled,
                flushed,
                squashed: flush.unwrap_or(0),
                retired,
            },
        })
    }
}
