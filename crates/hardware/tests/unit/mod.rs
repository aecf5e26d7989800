//! # Unit Components
//!
//! This module serves as the central hub for the tests of each simulator
//! component, from instruction decoding up to whole-program runs.

/// Unit tests for the configuration structures and JSON loading.
pub mod config;
