//! Common utilities and types used throughout the LC-2K simulator.
//!
//! This module provides the building blocks shared by every other component.
//! It includes:
//! 1. **Constants:** Machine sizes and the instruction field layout.
//! 2. **Error Handling:** Runtime and load error types.
//! 3. **Memory:** Bounds-checked, word-addressed storage.
//! 4. **Register Management:** The eight-entry register file.

/// Machine-wide constants.
pub mod constants;

/// Error types for simulation and loading.
pub mod error;

/// Word-addressed memory with bounds checking.
pub mod memory;

/// Register file implementation.
pub mod reg;

pub use error::{LoadError, MemoryRegion, SimError};
pub use memory::Memory;
pub use reg::RegisterFile;
