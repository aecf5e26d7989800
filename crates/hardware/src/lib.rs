//! LC-2K pipelined processor simulator library.
//!
//! This crate implements a cycle-accurate simulator of the five-stage LC-2K
//! pipeline with the following:
//! 1. **Core:** Machine state snapshots, IF/ID/EX/MEM/WB stages, load-use stalls,
//!    forwarding, and taken-branch flushes.
//! 2. **ISA:** Field extraction, decoding, encoding, and disassembly of LC-2K words.
//! 3. **Simulation:** Loader, top-level simulator, and the diagnostic state dump.
//! 4. **Support:** Configuration, statistics, and error types.
//!
//! # Example
//!
//! ```
//! use lc2k_core::{Config, Simulator};
//! use lc2k_core::isa::decode::encode;
//! use lc2k_core::isa::opcodes::Opcode;
//! use lc2k_core::sim::Program;
//!
//! let program = Program::from_words(vec![
//!     encode(Opcode::Lw, 0, 1, 3),
//!     encode(Opcode::Add, 1, 1, 2),
//!     encode(Opcode::Halt, 0, 0, 0),
//!     21,
//! ]);
//! let mut sim = Simulator::new(&program, &Config::default()).unwrap();
//! sim.run_to_halt().unwrap();
//! assert_eq!(sim.state().regs.read(2), 42);
//! ```

/// Common types and constants (memory, registers, errors).
pub mod common;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// Processor core (state snapshot, pipeline, execution units).
pub mod core;
/// Instruction set (opcodes, fields, decode, disassembly).
pub mod isa;
/// Loader, simulator, and diagnostic report.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Complete machine state at a cycle boundary.
pub use crate::core::MachineState;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
