//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the five pipeline registers of the LC-2K datapath:
//! IF/ID → ID/EX → EX/MEM → MEM/WB → WB/END.
//!
//! 1. **Instruction Flow:** Every latch carries the in-flight instruction word.
//! 2. **Stage Results:** Each latch adds the values its producing stage computed.
//! 3. **Bubbles:** A latch with no real instruction holds NOOP; its other fields
//!    keep whatever they held and are "don't care" for the dump.

use crate::common::constants::NOOP_INSTR;
use crate::isa::instruction::Word;

/// IF/ID pipeline register (Fetch to Decode).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfId {
    /// Fetched instruction word.
    pub instr: Word,
    /// Address of the instruction plus one.
    pub pc_plus1: i32,
}

impl Default for IfId {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTR,
            pc_plus1: 0,
        }
    }
}

/// ID/EX pipeline register (Decode to Execute).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// Decoded instruction word.
    pub instr: Word,
    /// Address of the instruction plus one.
    pub pc_plus1: i32,
    /// Register-file value of `regA` at decode (before forwarding).
    pub val_a: i32,
    /// Register-file value of `regB` at decode (before forwarding).
    pub val_b: i32,
    /// Sign-extended 16-bit field.
    pub offset: i32,
}

impl Default for IdEx {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTR,
            pc_plus1: 0,
            val_a: 0,
            val_b: 0,
            offset: 0,
        }
    }
}

/// EX/MEM pipeline register (Execute to Memory).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// Executed instruction word.
    pub instr: Word,
    /// `pc + 1 + offset`, used only by BEQ.
    pub branch_target: i32,
    /// Forwarded `regA == regB`, used only by BEQ.
    pub eq: bool,
    /// ALU output: a sum, or a NOR for the NOR instruction.
    pub alu_result: i32,
    /// Forwarded `regB` value; the store data for SW.
    pub val_b: i32,
}

impl Default for ExMem {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTR,
            branch_target: 0,
            eq: false,
            alu_result: 0,
            val_b: 0,
        }
    }
}

/// MEM/WB pipeline register (Memory to Writeback).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// Instruction word.
    pub instr: Word,
    /// Value to commit: loaded word for LW, ALU result otherwise.
    pub write_data: i32,
    /// ALU result carried from EX/MEM.
    pub alu_result: i32,
}

impl Default for MemWb {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTR,
            write_data: 0,
            alu_result: 0,
        }
    }
}

/// WB/END pipeline register.
///
/// Holds the instruction that committed last cycle. It only exists so its
/// value can still be forwarded and so the stepper can see HALT retire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WbEnd {
    /// Committed instruction word.
    pub instr: Word,
    /// Value that was committed.
    pub write_data: i32,
}

impl Default for WbEnd {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTR,
            write_data: 0,
        }
    }
}
