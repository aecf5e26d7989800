//! Simulation and Load Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Runtime Errors:** Conditions that stop the cycle stepper (bad addresses, JALR, cycle cap).
//! 2. **Load Errors:** Failures while reading a machine-code image from disk or text.
//! 3. **Memory Regions:** A tag naming which memory an out-of-bounds access targeted.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::isa::instruction::Word;

/// Memory that an access was directed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryRegion {
    /// Instruction memory, read by the fetch stage.
    Instruction,
    /// Data memory, read by LW and written by SW.
    Data,
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instruction => write!(f, "instruction"),
            Self::Data => write!(f, "data"),
        }
    }
}

/// Errors raised while stepping the pipeline.
///
/// All of these are fatal: the simulator has no recovery path and the
/// machine state at the point of failure is left as it was before the
/// failing cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A fetch, load or store addressed a word outside the memory's capacity.
    ///
    /// Negative addresses are reported with their signed value.
    #[error("{region} memory address {addr} out of bounds (capacity {capacity} words)")]
    OutOfBounds {
        /// Memory that was addressed.
        region: MemoryRegion,
        /// Offending word address.
        addr: i64,
        /// Capacity of the memory in words.
        capacity: usize,
    },

    /// A JALR reached writeback while JALR is configured as unsupported.
    #[error("unsupported instruction {0} (jalr) reached writeback")]
    UnsupportedInstruction(Word),

    /// The configured cycle cap was reached before HALT committed.
    #[error("cycle limit of {0} reached before halt")]
    CycleLimit(u64),

    /// The machine was stepped after HALT already reached the WB/END latch.
    #[error("machine already halted")]
    Halted,
}

/// Errors raised while loading a machine-code image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be opened or read.
    #[error("can't open file {}: {source}", .path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line did not start with an integer.
    #[error("error in reading address {address}")]
    Parse {
        /// Word address (zero-based line number) of the bad line.
        address: usize,
        /// The offending line, without its terminator.
        line: String,
    },

    /// The image holds more words than the configured memory capacity.
    #[error("program has {words} words but memory holds only {capacity}")]
    TooLarge {
        /// Number of words in the image.
        words: usize,
        /// Configured memory capacity.
        capacity: usize,
    },
}
