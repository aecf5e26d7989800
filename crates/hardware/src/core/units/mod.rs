//! Execution units.
//!
//! The LC-2K datapath needs only an integer ALU; address generation for
//! loads and stores and branch target computation reuse its adder.

/// Arithmetic Logic Unit (NOR and add).
pub mod alu;
