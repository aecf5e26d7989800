//! LC-2K Register File.
//!
//! This module implements the eight general-purpose registers of the machine.
//! It performs the following:
//! 1. **Storage:** Maintains 8 signed 32-bit registers (`reg[0]`-`reg[7]`).
//! 2. **No Hardwired Zero:** Register 0 is an ordinary register; writes to it stick.

use crate::common::constants::NUM_REGS;

/// General-purpose register file.
///
/// Register indices come from 3-bit instruction fields, so every index
/// produced by the decoder is in range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    pub const fn read(&self, idx: usize) -> i32 {
        self.regs[idx]
    }

    /// Writes a register. Register 0 is writable like any other.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The value to store.
    pub const fn write(&mut self, idx: usize, val: i32) {
        self.regs[idx] = val;
    }

    /// Returns all registers in index order.
    pub const fn as_array(&self) -> &[i32; NUM_REGS] {
        &self.regs
    }
}
