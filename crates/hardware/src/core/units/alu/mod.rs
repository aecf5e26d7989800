//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. The
//! LC-2K datapath has exactly two functions: NOR for the NOR instruction and
//! two's complement addition for everything else (ADD, and the address or
//! target computation of LW/SW/BEQ).

use crate::isa::opcodes::Opcode;

/// Arithmetic Logic Unit for the Execute stage.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Selects the second ALU operand.
    ///
    /// ADD and NOR use the forwarded `regB` value; every other instruction
    /// uses the sign-extended offset.
    #[inline]
    pub fn operand_b(op: Option<Opcode>, val_b: i32, offset: i32) -> i32 {
        if op.is_some_and(Opcode::is_alu) {
            val_b
        } else {
            offset
        }
    }

    /// Executes the ALU function selected by `op`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lc2k_core::core::units::alu::Alu;
    /// use lc2k_core::isa::opcodes::Opcode;
    ///
    /// assert_eq!(Alu::execute(Some(Opcode::Add), 2, 3), 5);
    /// assert_eq!(Alu::execute(Some(Opcode::Nor), 0, 0), -1);
    /// assert_eq!(Alu::execute(Some(Opcode::Add), i32::MAX, 1), i32::MIN);
    /// ```
    #[inline]
    pub const fn execute(op: Option<Opcode>, a: i32, b: i32) -> i32 {
        match op {
            Some(Opcode::Nor) => !(a | b),
            _ => a.wrapping_add(b),
        }
    }
}
