//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for keeping the pipeline consistent when
//! data dependencies exist between in-flight instructions. It provides:
//! 1. **Hazard Detection:** Identifies load-use hazards that require a one-cycle stall.
//! 2. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards by bypassing
//!    the register file with values from EX/MEM, MEM/WB and WB/END.

use std::fmt;

use tracing::trace;

use crate::common::reg::RegisterFile;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, WbEnd};
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::Opcode;

/// Where a forwarded operand came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardSource {
    /// No in-flight producer; committed register value.
    RegFile,
    /// ALU result of the instruction in EX/MEM.
    ExMem,
    /// Write data of the instruction in MEM/WB.
    MemWb,
    /// Write data of the instruction in WB/END.
    WbEnd,
}

impl fmt::Display for ForwardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RegFile => "RegFile",
            Self::ExMem => "EX_MEM",
            Self::MemWb => "MEM_WB",
            Self::WbEnd => "WB_END",
        };
        f.write_str(name)
    }
}

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction in Decode reads a register
/// that the LW currently in Execute is about to load. ADD, NOR, BEQ and SW
/// read both `regA` and `regB`; LW reads only `regA`. HALT, NOOP, JALR and
/// fill words read nothing.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch holding the potential producer.
/// * `if_id` - The IF/ID latch holding the instruction being decoded.
///
/// # Examples
///
/// ```
/// use lc2k_core::core::pipeline::hazards::need_stall_load_use;
/// use lc2k_core::core::pipeline::latches::{IdEx, IfId};
/// use lc2k_core::isa::decode::encode;
/// use lc2k_core::isa::opcodes::Opcode;
///
/// // lw 0 1 0   (in execute, loads reg1)
/// // add 1 1 2  (in decode, reads reg1)
/// let id_ex = IdEx { instr: encode(Opcode::Lw, 0, 1, 0), ..IdEx::default() };
/// let if_id = IfId { instr: encode(Opcode::Add, 1, 1, 2), ..IfId::default() };
/// assert!(need_stall_load_use(&id_ex, &if_id));
/// ```
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    if id_ex.instr.opcode() != Some(Opcode::Lw) {
        return false;
    }
    let loaded = id_ex.instr.field_b();
    if_id.instr.src_regs().contains(&Some(loaded))
}

/// Resolves one source register against the in-flight producers.
///
/// Producers are checked youngest first (EX/MEM, then MEM/WB, then WB/END),
/// so the most recent pending write to `reg` wins. Without a match the
/// committed register file value is used.
///
/// # Returns
///
/// The operand value and the stage it was taken from.
pub fn forward_operand(
    reg: usize,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    wb_end: &WbEnd,
    regs: &RegisterFile,
) -> (i32, ForwardSource) {
    if ex_mem.instr.dest_reg() == Some(reg) {
        (ex_mem.alu_result, ForwardSource::ExMem)
    } else if mem_wb.instr.dest_reg() == Some(reg) {
        (mem_wb.write_data, ForwardSource::MemWb)
    } else if wb_end.instr.dest_reg() == Some(reg) {
        (wb_end.write_data, ForwardSource::WbEnd)
    } else {
        (regs.read(reg), ForwardSource::RegFile)
    }
}

/// Re-reads both source operands of the instruction in ID/EX with forwarding.
///
/// The decode-time `val_a`/`val_b` in `id_ex` are ignored; values come from
/// the youngest in-flight producer or the register file.
///
/// # Returns
///
/// A tuple `(val_a, val_b)`.
pub fn forward_operands(
    id_ex: &IdEx,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    wb_end: &WbEnd,
    regs: &RegisterFile,
) -> (i32, i32) {
    let reg_a = id_ex.instr.field_a();
    let reg_b = id_ex.instr.field_b();
    let (a, a_src) = forward_operand(reg_a, ex_mem, mem_wb, wb_end, regs);
    let (b, b_src) = forward_operand(reg_b, ex_mem, mem_wb, wb_end, regs);

    if a_src != ForwardSource::RegFile || b_src != ForwardSource::RegFile {
        trace!(
            pc = id_ex.pc_plus1.wrapping_sub(1),
            reg_a,
            val_a = a,
            src_a = %a_src,
            reg_b,
            val_b = b,
            src_b = %b_src,
            "forward"
        );
    }
    (a, b)
}
