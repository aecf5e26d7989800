//! Diagnostic Text Output.
//!
//! This module renders the machine in the fixed textual format that graders
//! and reference traces diff against. It provides:
//! 1. **Program Listing:** One line per loaded word (hex, decimal, disassembly).
//! 2. **State Dump:** The "@@@ ... end state" block printed before every cycle.
//! 3. **Halt Summary:** The cycle count and final state once HALT retires.
//!
//! Every byte of these formats is significant, including tabs, the spaces
//! inside `[ i ]`, and the missing `=` after `branchTarget`.

use std::fmt;

use crate::core::state::MachineState;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{InstructionBits, Word};
use crate::isa::opcodes::Opcode;

/// A latch field whose value may be meaningless for the instruction in the latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LatchField {
    /// IF/ID `pcPlus1`.
    IfIdPcPlus1,
    /// ID/EX `pcPlus1`.
    IdExPcPlus1,
    /// ID/EX `readRegA`.
    IdExReadRegA,
    /// ID/EX `readRegB`.
    IdExReadRegB,
    /// ID/EX `offset`.
    IdExOffset,
    /// EX/MEM `branchTarget`.
    ExMemBranchTarget,
    /// EX/MEM `eq`.
    ExMemEq,
    /// EX/MEM `aluResult`.
    ExMemAluResult,
    /// EX/MEM `readRegB`.
    ExMemReadRegB,
    /// MEM/WB `writeData`.
    MemWbWriteData,
    /// WB/END `writeData`.
    WbEndWriteData,
}

/// Whether `field` is marked "(Don't Care)" when the latch holds `op`.
///
/// `None` is a fill word and counts as an out-of-range opcode. Note that the
/// `pcPlus1` fields are only hidden for NOOP, not for fill words.
///
/// # Examples
///
/// ```
/// use lc2k_core::isa::opcodes::Opcode;
/// use lc2k_core::sim::report::{LatchField, is_dont_care};
///
/// assert!(is_dont_care(LatchField::IdExReadRegB, Some(Opcode::Lw)));
/// assert!(!is_dont_care(LatchField::IdExReadRegB, Some(Opcode::Sw)));
/// assert!(!is_dont_care(LatchField::IfIdPcPlus1, None));
/// ```
pub const fn is_dont_care(field: LatchField, op: Option<Opcode>) -> bool {
    use Opcode::{Add, Beq, Jalr, Lw, Noop, Nor, Sw};

    match field {
        LatchField::IfIdPcPlus1 | LatchField::IdExPcPlus1 => matches!(op, Some(Noop)),
        LatchField::IdExReadRegA => !matches!(op, Some(Add | Nor | Lw | Sw | Beq | Jalr)),
        LatchField::IdExReadRegB => !matches!(op, Some(Add | Nor | Sw | Beq)),
        LatchField::IdExOffset => !matches!(op, Some(Lw | Sw | Beq)),
        LatchField::ExMemBranchTarget | LatchField::ExMemEq => !matches!(op, Some(Beq)),
        LatchField::ExMemAluResult => !matches!(op, Some(Add | Nor | Lw | Sw)),
        LatchField::ExMemReadRegB => !matches!(op, Some(Sw)),
        LatchField::MemWbWriteData | LatchField::WbEndWriteData => {
            !matches!(op, Some(Add | Nor | Lw))
        }
    }
}

/// Writes one `\t\t<label><value>` line with the don't-care marker if it applies.
fn field_line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &dyn fmt::Display,
    field: LatchField,
    instr: Word,
) -> fmt::Result {
    write!(f, "\t\t{label}{value}")?;
    if is_dont_care(field, instr.opcode()) {
        f.write_str(" (Don't Care)")?;
    }
    f.write_str("\n")
}

fn latch_header(f: &mut fmt::Formatter<'_>, name: &str, instr: Word) -> fmt::Result {
    writeln!(f, "\t{name} pipeline register:")?;
    writeln!(f, "\t\tinstruction = {instr} ( {} )", disassemble(instr))
}

/// The per-cycle state dump.
///
/// Formats as a block starting with a blank line and `@@@` and ending with
/// `end state\n`.
#[derive(Clone, Copy, Debug)]
pub struct StateDump<'a>(pub &'a MachineState);

impl fmt::Display for StateDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        write!(f, "\n@@@\n")?;
        writeln!(f, "state before cycle {} starts:", s.cycles)?;
        writeln!(f, "\tpc = {}", s.pc)?;

        writeln!(f, "\tdata memory:")?;
        for (i, word) in s.data_mem.loaded_words().enumerate() {
            writeln!(f, "\t\tdataMem[ {i} ] = {word}")?;
        }
        writeln!(f, "\tregisters:")?;
        for (i, val) in s.regs.as_array().iter().enumerate() {
            writeln!(f, "\t\treg[ {i} ] = {val}")?;
        }

        let if_id = &s.if_id;
        latch_header(f, "IF/ID", if_id.instr)?;
        field_line(f, "pcPlus1 = ", &if_id.pc_plus1, LatchField::IfIdPcPlus1, if_id.instr)?;

        let id_ex = &s.id_ex;
        latch_header(f, "ID/EX", id_ex.instr)?;
        let id_ex_fields: [(&str, &dyn fmt::Display, LatchField); 4] = [
            ("pcPlus1 = ", &id_ex.pc_plus1, LatchField::IdExPcPlus1),
            ("readRegA = ", &id_ex.val_a, LatchField::IdExReadRegA),
            ("readRegB = ", &id_ex.val_b, LatchField::IdExReadRegB),
            ("offset = ", &id_ex.offset, LatchField::IdExOffset),
        ];
        for (label, value, field) in id_ex_fields {
            field_line(f, label, value, field, id_ex.instr)?;
        }

        let ex_mem = &s.ex_mem;
        let eq = if ex_mem.eq { "True" } else { "False" };
        latch_header(f, "EX/MEM", ex_mem.instr)?;
        let ex_mem_fields: [(&str, &dyn fmt::Display, LatchField); 4] = [
            ("branchTarget ", &ex_mem.branch_target, LatchField::ExMemBranchTarget),
            ("eq ? ", &eq, LatchField::ExMemEq),
            ("aluResult = ", &ex_mem.alu_result, LatchField::ExMemAluResult),
            ("readRegB = ", &ex_mem.val_b, LatchField::ExMemReadRegB),
        ];
        for (label, value, field) in ex_mem_fields {
            field_line(f, label, value, field, ex_mem.instr)?;
        }

        latch_header(f, "MEM/WB", s.mem_wb.instr)?;
        field_line(
            f,
            "writeData = ",
            &s.mem_wb.write_data,
            LatchField::MemWbWriteData,
            s.mem_wb.instr,
        )?;

        latch_header(f, "WB/END", s.wb_end.instr)?;
        field_line(
            f,
            "writeData = ",
            &s.wb_end.write_data,
            LatchField::WbEndWriteData,
            s.wb_end.instr,
        )?;

        writeln!(f, "end state")
    }
}

/// Listing of the loaded image, printed once before simulation starts.
#[derive(Clone, Copy, Debug)]
pub struct ProgramListing<'a>(pub &'a [Word]);

impl fmt::Display for ProgramListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "instruction memory:")?;
        for (i, &word) in self.0.iter().enumerate() {
            writeln!(
                f,
                "\tinstrMem[ {i} ]\t= 0x{:08x}\t= {word}\t= {}",
                word as u32,
                disassemble(word)
            )?;
        }
        Ok(())
    }
}

/// Final report once HALT reaches WB/END: cycle count and final state.
#[derive(Clone, Copy, Debug)]
pub struct HaltSummary<'a>(pub &'a MachineState);

impl fmt::Display for HaltSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Machine halted")?;
        writeln!(f, "Total of {} cycles executed", self.0.cycles)?;
        writeln!(f, "Final state of machine:")?;
        write!(f, "{}", StateDump(self.0))
    }
}
