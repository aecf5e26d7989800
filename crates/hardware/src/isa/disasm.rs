//! Instruction Disassembler for LC-2K.
//!
//! Converts a 32-bit word into the assembler text used by the diagnostic
//! state dump, trace logging, and test failure messages.
//!
//! # Usage
//!
//! ```
//! use lc2k_core::isa::decode::encode;
//! use lc2k_core::isa::disasm::disassemble;
//! use lc2k_core::isa::opcodes::Opcode;
//!
//! assert_eq!(disassemble(encode(Opcode::Lw, 0, 1, 7)), "lw 0 1 7");
//! assert_eq!(disassemble(-1), ".fill -1");
//! ```

use crate::isa::instruction::{InstructionBits, Word};
use crate::isa::opcodes::Opcode;

/// Disassembles a word into `mnemonic fields` form.
///
/// R/I-type operations print both registers and the signed 16-bit field,
/// JALR prints its two registers, HALT and NOOP print the bare mnemonic,
/// and anything else is shown as a `.fill` directive of the whole word.
pub fn disassemble(word: Word) -> String {
    match word.opcode() {
        Some(op @ (Opcode::Add | Opcode::Nor | Opcode::Lw | Opcode::Sw | Opcode::Beq)) => {
            format!("{op} {} {} {}", word.field_a(), word.field_b(), word.offset())
        }
        Some(Opcode::Jalr) => format!("jalr {} {}", word.field_a(), word.field_b()),
        Some(op @ (Opcode::Halt | Opcode::Noop)) => op.mnemonic().to_owned(),
        None => format!(".fill {word}"),
    }
}
