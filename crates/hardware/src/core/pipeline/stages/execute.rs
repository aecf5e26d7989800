//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Operand Resolution:** Re-reads both sources through the forwarding unit.
//! 2. **Arithmetic Execution:** Runs the ALU (NOR or add).
//! 3. **Branch Preparation:** Computes the BEQ target and equality flag; the
//!    branch itself is resolved in Memory.

use tracing::trace;

use crate::core::pipeline::hazards::forward_operands;
use crate::core::pipeline::latches::ExMem;
use crate::core::state::MachineState;
use crate::core::units::alu::Alu;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::InstructionBits;

/// Executes the instruction execute stage.
///
/// Producers for forwarding are the *current* EX/MEM, MEM/WB and WB/END
/// latches, never the ones this cycle is building.
///
/// # Arguments
///
/// * `cur` - Snapshot the cycle computes from.
/// * `next` - Successor snapshot; receives EX/MEM.
pub fn execute_stage(cur: &MachineState, next: &mut MachineState) {
    let id = &cur.id_ex;
    let op = id.instr.opcode();

    let (val_a, val_b) = forward_operands(id, &cur.ex_mem, &cur.mem_wb, &cur.wb_end, &cur.regs);
    let alu_result = Alu::execute(op, val_a, Alu::operand_b(op, val_b, id.offset));

    trace!(
        pc = id.pc_plus1.wrapping_sub(1),
        asm = %disassemble(id.instr),
        val_a,
        val_b,
        alu_result,
        "EX"
    );

    next.ex_mem = ExMem {
        instr: id.instr,
        branch_target: id.pc_plus1.wrapping_add(id.offset),
        eq: val_a == val_b,
        alu_result,
        val_b,
    };
}
