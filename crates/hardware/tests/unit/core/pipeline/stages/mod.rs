


/// Memory stage tests.
pub mod memory;

/// Writeback stage tests.
pub mod writeback;
