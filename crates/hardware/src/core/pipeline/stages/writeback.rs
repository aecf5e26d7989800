//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It
//! commits MEM/WB's write data to the register file and always copies the
//! instruction and its value into WB/END, where they stay visible to
//! forwarding for one more cycle and where HALT is detected.

use tracing::debug;

use crate::common::error::SimError;
use crate::core::pipeline::latches::WbEnd;
use crate::core::state::MachineState;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::Opcode;

/// Executes the writeback stage of the pipeline.
///
/// ADD and NOR write the register named by the low three bits of their
/// 16-bit field, LW writes `regB`; nothing else touches the register file.
///
/// # Arguments
///
/// * `cur` - Snapshot the cycle computes from.
/// * `next` - Successor snapshot; receives WB/END and the register write.
/// * `reject_jalr` - Fail instead of silently retiring a JALR.
///
/// # Returns
///
/// The operation that retired, or `None` for a fill word.
///
/// # Errors
///
/// Returns [`SimError::UnsupportedInstruction`] when a JALR retires and
/// `reject_jalr` is set.
pub fn wb_stage(
    cur: &MachineState,
    next: &mut MachineState,
    reject_jalr: bool,
) -> Result<Option<Opcode>, SimError> {
    let wb = &cur.mem_wb;
    let op = wb.instr.opcode();

    if reject_jalr && op == Some(Opcode::Jalr) {
        return Err(SimError::UnsupportedInstruction(wb.instr));
    }

    next.wb_end = WbEnd {
        instr: wb.instr,
        write_data: wb.write_data,
    };

    if let Some(rd) = wb.instr.dest_reg() {
        debug!(asm = %disassemble(wb.instr), rd, val = wb.write_data, "WB commit");
        next.regs.write(rd, wb.write_data);
    }
    Ok(op)
}
