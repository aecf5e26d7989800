//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Hazard Check:** Detects a load-use dependency on the LW in Execute.
//! 2. **Stall:** Freezes fetch and injects a bubble into ID/EX when required.
//! 3. **Operand Read:** Reads both register fields and sign-extends the offset.

use tracing::{debug, trace};

use crate::common::constants::NOOP_INSTR;
use crate::core::pipeline::hazards::need_stall_load_use;
use crate::core::pipeline::latches::IdEx;
use crate::core::state::MachineState;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::InstructionBits;

/// Executes the instruction decode stage.
///
/// Must run after [`fetch_stage`](super::fetch_stage) in the same cycle: on a
/// stall it undoes that cycle's fetch by restoring the PC and IF/ID from `cur`,
/// so the same instruction is decoded again next cycle. The bubble keeps the
/// non-instruction fields of the current ID/EX.
///
/// Register values read here are the committed ones; Execute replaces them
/// with forwarded values.
///
/// # Returns
///
/// `true` if the stage stalled this cycle.
pub fn decode_stage(cur: &MachineState, next: &mut MachineState) -> bool {
    if need_stall_load_use(&cur.id_ex, &cur.if_id) {
        debug!(
            cycle = cur.cycles,
            producer = %disassemble(cur.id_ex.instr),
            consumer = %disassemble(cur.if_id.instr),
            "load-use stall"
        );
        next.pc = cur.pc;
        next.if_id = cur.if_id;
        next.id_ex = IdEx {
            instr: NOOP_INSTR,
            ..cur.id_ex
        };
        return true;
    }

    let instr = cur.if_id.instr;
    trace!(pc = cur.if_id.pc_plus1.wrapping_sub(1), asm = %disassemble(instr), "ID");

    next.id_ex = IdEx {
        instr,
        pc_plus1: cur.if_id.pc_plus1,
        val_a: cur.regs.read(instr.field_a()),
        val_b: cur.regs.read(instr.field_b()),
        offset: instr.offset(),
    };
    false
}
