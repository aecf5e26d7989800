//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It
//! reads the word at the current PC into IF/ID and advances the PC by one.
//! There is no branch prediction: fetch always falls through, and a taken
//! branch later overwrites both the PC and the fetched word.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::pipeline::latches::IfId;
use crate::core::state::MachineState;
use crate::isa::disasm::disassemble;

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cur` - Snapshot the cycle computes from.
/// * `next` - Successor snapshot; receives IF/ID and the new PC.
///
/// # Errors
///
/// Returns [`SimError::OutOfBounds`] when the PC lies outside instruction memory.
pub fn fetch_stage(cur: &MachineState, next: &mut MachineState) -> Result<(), SimError> {
    let instr = cur.instr_mem.read(cur.pc)?;
    let pc_plus1 = cur.pc.wrapping_add(1);

    trace!(pc = cur.pc, instr, asm = %disassemble(instr), "IF");

    next.if_id = IfId { instr, pc_plus1 };
    next.pc = pc_plus1;
    Ok(())
}
