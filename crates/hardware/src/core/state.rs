//! Architectural State Definition and Initialization.
//!
//! This module defines `MachineState`, the complete snapshot the cycle stepper
//! transforms. It holds:
//! 1. **Architectural Registers:** Program counter and the eight general registers.
//! 2. **Memories:** Shared read-only instruction memory and mutable data memory.
//! 3. **Pipeline Latches:** IF/ID, ID/EX, EX/MEM, MEM/WB and WB/END.
//! 4. **Cycle Counter:** Number of cycles simulated so far.
//!
//! A snapshot is never mutated while a cycle computes from it; the stepper
//! builds a fresh successor and swaps it in once every stage has run.

use std::sync::Arc;

use crate::common::error::MemoryRegion;
use crate::common::memory::Memory;
use crate::common::reg::RegisterFile;
use crate::config::MemoryConfig;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, WbEnd};
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::Opcode;
use crate::sim::loader::Program;

/// Complete machine state for one cycle boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineState {
    /// Program Counter (word index into instruction memory).
    pub pc: i32,
    /// Instruction memory; read-only after load, shared between snapshots.
    pub instr_mem: Arc<Memory>,
    /// Data memory; written by SW.
    pub data_mem: Memory,
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// IF/ID Latch.
    pub if_id: IfId,
    /// ID/EX Latch.
    pub id_ex: IdEx,
    /// EX/MEM Latch.
    pub ex_mem: ExMem,
    /// MEM/WB Latch.
    pub mem_wb: MemWb,
    /// WB/END Latch.
    pub wb_end: WbEnd,
    /// Cycles simulated so far.
    pub cycles: u64,
}

impl MachineState {
    /// Creates the reset state for `program`.
    ///
    /// Registers are zeroed, the PC is 0, every latch holds NOOP, and both
    /// memories start with the program image (data memory gets an identical
    /// copy, since LC-2K programs keep their data words in the same image).
    ///
    /// # Arguments
    ///
    /// * `program` - Loaded machine-code image; must fit the configured capacities.
    /// * `config` - Memory capacities.
    pub fn new(program: &Program, config: &MemoryConfig) -> Self {
        let words = program.words();
        Self {
            pc: 0,
            instr_mem: Arc::new(Memory::with_image(
                MemoryRegion::Instruction,
                words,
                config.instr_words,
            )),
            data_mem: Memory::with_image(MemoryRegion::Data, words, config.data_words),
            regs: RegisterFile::new(),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            wb_end: WbEnd::default(),
            cycles: 0,
        }
    }

    /// True once HALT has reached the WB/END latch.
    pub fn is_halted(&self) -> bool {
        self.wb_end.instr.opcode() == Some(Opcode::Halt)
    }
}
