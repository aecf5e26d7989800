//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the pipeline. It performs the following:
//! 1. **Branch Resolution:** A taken BEQ redirects the PC and flushes the three
//!    younger latches (3-cycle penalty), counting the real instructions lost.
//! 2. **Stores:** SW writes the forwarded `regB` value to data memory.
//! 3. **Loads:** LW reads data memory into the MEM/WB write data; everything
//!    else passes its ALU result through.

use tracing::{debug, trace};

use crate::common::constants::NOOP_INSTR;
use crate::common::error::SimError;
use crate::core::pipeline::latches::MemWb;
use crate::core::state::MachineState;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::Opcode;

/// Executes the memory access stage.
///
/// Must run after fetch, decode and execute in the same cycle, since a flush
/// overwrites the IF/ID, ID/EX and EX/MEM latches those stages produced
/// (a flush therefore also wins over a load-use stall). Only the instruction
/// words are replaced with NOOP; the other latch fields keep their values.
///
/// Loads read the current data memory; stores write the successor's.
///
/// # Returns
///
/// `Some(n)` if a taken branch flushed the pipeline this cycle, where `n` is
/// the number of flushed words that were not already NOOPs.
/// `None` otherwise.
///
/// # Errors
///
/// Returns [`SimError::OutOfBounds`] when an LW or SW address lies outside data memory.
pub fn mem_stage(cur: &MachineState, next: &mut MachineState) -> Result<Option<u8>, SimError> {
    let ex = &cur.ex_mem;
    let op = ex.instr.opcode();

    trace!(asm = %disassemble(ex.instr), addr = ex.alu_result, "MEM");

    let taken = op == Some(Opcode::Beq) && ex.eq;
    let squashed = taken.then(|| {
        let younger = [next.if_id.instr, next.id_ex.instr, next.ex_mem.instr];
        younger.iter().filter(|w| w.opcode() != Some(Opcode::Noop)).count() as u8
    });
    if let Some(squashed) = squashed {
        debug!(
            cycle = cur.cycles,
            target = ex.branch_target,
            squashed,
            "branch taken, flushing IF/ID ID/EX EX/MEM"
        );
        next.pc = ex.branch_target;
        next.if_id.instr = NOOP_INSTR;
        next.id_ex.instr = NOOP_INSTR;
        next.ex_mem.instr = NOOP_INSTR;
    }

    if op == Some(Opcode::Sw) {
        next.data_mem.write(ex.alu_result, ex.val_b)?;
    }

    let write_data = if op == Some(Opcode::Lw) {
        cur.data_mem.read(ex.alu_result)?
    } else {
        ex.alu_result
    };

    next.mem_wb = MemWb {
        instr: ex.instr,
        write_data,
        alu_result: ex.alu_result,
    };
    Ok(squashed)
}
