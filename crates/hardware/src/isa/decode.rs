//! LC-2K Instruction Decoder.
//!
//! This module turns a raw word into a structured [`Decoded`] view and back.
//! Decoding never fails; encoding only emits the fields the operation uses,
//! so `decode(w).encode()` equals `w` with unused fields cleared.

use crate::common::constants::{IMM_MASK, OPCODE_SHIFT, REG_A_SHIFT, REG_B_SHIFT, REG_MASK};
use crate::isa::instruction::{InstructionBits, Word};
use crate::isa::opcodes::Opcode;

/// Decoded instruction fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit word.
    pub raw: Word,
    /// Operation, or `None` for a fill word.
    pub opcode: Option<Opcode>,
    /// First register field.
    pub reg_a: usize,
    /// Second register field.
    pub reg_b: usize,
    /// Unsigned 16-bit field.
    pub imm: u32,
    /// Sign-extended 16-bit field.
    pub offset: i32,
}

/// Decodes every field of `word`.
pub fn decode(word: Word) -> Decoded {
    Decoded {
        raw: word,
        opcode: word.opcode(),
        reg_a: word.field_a(),
        reg_b: word.field_b(),
        imm: word.field_imm(),
        offset: word.offset(),
    }
}

/// Assembles a word from an operation and its fields.
///
/// Register indices are masked to 3 bits and `offset` to 16 bits, so
/// negative offsets encode as two's complement.
pub const fn encode(op: Opcode, reg_a: usize, reg_b: usize, offset: i32) -> Word {
    let bits = ((op as u32) << OPCODE_SHIFT)
        | (((reg_a as u32) & REG_MASK) << REG_A_SHIFT)
        | (((reg_b as u32) & REG_MASK) << REG_B_SHIFT)
        | ((offset as u32) & IMM_MASK);
    bits as Word
}

impl Decoded {
    /// Re-encodes the fields this operation actually uses.
    ///
    /// Fill words have no structure and come back unchanged.
    pub const fn encode(&self) -> Word {
        match self.opcode {
            Some(op @ (Opcode::Add | Opcode::Nor | Opcode::Lw | Opcode::Sw | Opcode::Beq)) => {
                encode(op, self.reg_a, self.reg_b, self.imm as i32)
            }
            Some(Opcode::Jalr) => encode(Opcode::Jalr, self.reg_a, self.reg_b, 0),
            Some(op @ (Opcode::Halt | Opcode::Noop)) => encode(op, 0, 0, 0),
            None => self.raw,
        }
    }
}
