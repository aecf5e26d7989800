//! Global Machine Constants.
//!
//! This module defines the fixed parameters of the LC-2K machine. It includes:
//! 1. **Machine Sizes:** Register count and default memory capacity.
//! 2. **Encoding Layout:** Shifts and masks for every instruction field.
//! 3. **Pipeline Constants:** The canonical NOOP word used to fill empty latches.

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 8;

/// Default capacity of instruction and data memory, in words.
pub const MEMORY_WORDS: usize = 65536;

/// Bit position of the opcode field (bits 31-22).
pub const OPCODE_SHIFT: u32 = 22;

/// Mask applied to the opcode field after shifting (10 bits wide).
pub const OPCODE_MASK: u32 = 0x3FF;

/// Bit position of the regA field (bits 21-19).
pub const REG_A_SHIFT: u32 = 19;

/// Bit position of the regB field (bits 18-16).
pub const REG_B_SHIFT: u32 = 16;

/// Mask for a 3-bit register field.
pub const REG_MASK: u32 = 0x7;

/// Mask for the 16-bit offset / destination field (bits 15-0).
pub const IMM_MASK: u32 = 0xFFFF;

/// Sign bit of the 16-bit offset field.
pub const IMM_SIGN_BIT: u32 = 1 << 15;

/// Encoded NOOP (opcode 7, all other fields zero).
///
/// Every latch holds this word when no real instruction occupies the stage.
pub const NOOP_INSTR: i32 = 7 << OPCODE_SHIFT;
