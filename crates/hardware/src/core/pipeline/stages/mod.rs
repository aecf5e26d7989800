//! Pipeline stage implementations.
//!
//! This module contains the individual transition functions for the five
//! stages of the pipeline. Each reads only the current snapshot and writes
//! only the successor. It includes:
//! 1. **Fetch:** Reads the instruction at the PC.
//! 2. **Decode:** Detects load-use hazards and reads operands.
//! 3. **Execute:** Forwards operands and runs the ALU.
//! 4. **Memory:** Resolves branches and performs loads and stores.
//! 5. **Writeback:** Commits results to the register file.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
