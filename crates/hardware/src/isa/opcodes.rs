//! LC-2K Opcodes.
//!
//! Defines the eight operations addressable by the opcode field (bits 31-22).
//! Any other field value marks a data ("fill") word with no semantic effect.

use std::fmt;

/// An LC-2K operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `dest = regA + regB`, destination in the low field.
    Add = 0,
    /// `dest = !(regA | regB)`, destination in the low field.
    Nor = 1,
    /// Load word: `regB = mem[regA + offset]`.
    Lw = 2,
    /// Store word: `mem[regA + offset] = regB`.
    Sw = 3,
    /// Branch to `pc + 1 + offset` when `regA == regB`.
    Beq = 4,
    /// Jump and link register. Decoded and disassembled but not executed.
    Jalr = 5,
    /// Stop the machine once it commits.
    Halt = 6,
    /// No operation; also the bubble injected into empty latches.
    Noop = 7,
}

/// Mnemonics indexed by opcode value.
pub const MNEMONICS: [&str; 8] = ["add", "nor", "lw", "sw", "beq", "jalr", "halt", "noop"];

impl Opcode {
    /// Maps a raw opcode field to an operation; `None` for fill words.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Add),
            1 => Some(Self::Nor),
            2 => Some(Self::Lw),
            3 => Some(Self::Sw),
            4 => Some(Self::Beq),
            5 => Some(Self::Jalr),
            6 => Some(Self::Halt),
            7 => Some(Self::Noop),
            _ => None,
        }
    }

    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        MNEMONICS[self as usize]
    }

    /// True for the register-register ALU operations (ADD, NOR).
    pub const fn is_alu(self) -> bool {
        matches!(self, Self::Add | Self::Nor)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
