//! Instruction field extraction.
//!
//! Provides bit extraction for the fixed LC-2K encoding:
//!
//! ```text
//!  31        22 21  19 18  16 15              0
//! +------------+------+------+-----------------+
//! |   opcode   | regA | regB | offset / dest   |
//! +------------+------+------+-----------------+
//! ```

use crate::common::constants::{
    IMM_MASK, IMM_SIGN_BIT, OPCODE_MASK, OPCODE_SHIFT, REG_A_SHIFT, REG_B_SHIFT, REG_MASK,
};
use crate::isa::opcodes::Opcode;

/// A 32-bit machine word, signed as in the register file.
pub type Word = i32;

/// Trait for extracting instruction fields from an encoded word.
///
/// Every method is total: any 32-bit value decodes to something, and values
/// whose opcode field is not 0-7 simply report `None` from [`opcode`](Self::opcode).
pub trait InstructionBits {
    /// Raw 10-bit opcode field (bits 31-22).
    fn raw_opcode(&self) -> u32;

    /// Decoded operation, or `None` for a fill word.
    fn opcode(&self) -> Option<Opcode>;

    /// First register field (bits 21-19).
    fn field_a(&self) -> usize;

    /// Second register field (bits 18-16).
    fn field_b(&self) -> usize;

    /// Low 16 bits, unsigned.
    fn field_imm(&self) -> u32;

    /// Low 16 bits sign-extended from bit 15.
    fn offset(&self) -> i32;

    /// Register written at writeback, if any.
    ///
    /// LW writes `regB`; ADD and NOR write the register named by the low three
    /// bits of the 16-bit field. Everything else writes nothing.
    fn dest_reg(&self) -> Option<usize>;

    /// Registers read by the instruction, `regA` first.
    ///
    /// ADD, NOR, BEQ and SW read both fields; LW reads only `regA` (its `regB`
    /// is the destination). HALT, NOOP, JALR and fill words read nothing.
    fn src_regs(&self) -> [Option<usize>; 2];
}

impl InstructionBits for Word {
    #[inline(always)]
    fn raw_opcode(&self) -> u32 {
        ((*self as u32) >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn opcode(&self) -> Option<Opcode> {
        Opcode::from_raw(self.raw_opcode())
    }

    #[inline(always)]
    fn field_a(&self) -> usize {
        (((*self as u32) >> REG_A_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn field_b(&self) -> usize {
        (((*self as u32) >> REG_B_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn field_imm(&self) -> u32 {
        (*self as u32) & IMM_MASK
    }

    /// Two's complement extension: subtract 2^16 when bit 15 is set.
    #[inline(always)]
    fn offset(&self) -> i32 {
        let imm = self.field_imm();
        if imm & IMM_SIGN_BIT == 0 {
            imm as Self
        } else {
            imm as Self - (1 << 16)
        }
    }

    #[inline(always)]
    fn dest_reg(&self) -> Option<usize> {
        match self.opcode()? {
            Opcode::Lw => Some(self.field_b()),
            Opcode::Add | Opcode::Nor => Some((self.field_imm() & REG_MASK) as usize),
            _ => None,
        }
    }

    #[inline(always)]
    fn src_regs(&self) -> [Option<usize>; 2] {
        match self.opcode() {
            Some(Opcode::Add | Opcode::Nor | Opcode::Beq | Opcode::Sw) => {
                [Some(self.field_a()), Some(self.field_b())]
            }
            Some(Opcode::Lw) => [Some(self.field_a()), None],
            _ => [None, None],
        }
    }
}
