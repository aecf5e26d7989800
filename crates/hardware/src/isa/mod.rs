//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LC-2K opcode table, field extraction, decoding and
//! disassembly. The machine has a single fixed 32-bit format; see
//! [`instruction`] for the bit layout.

/// Instruction decoding into a structured view, and encoding back.
pub mod decode;

/// Instruction disassembler for the state dump and trace output.
pub mod disasm;

/// Word type and bit extraction utilities.
pub mod instruction;

/// Opcode table and mnemonics.
pub mod opcodes;

pub use instruction::{InstructionBits, Word};
pub use opcodes::Opcode;
