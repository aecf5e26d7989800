//! Configuration system for the LC-2K simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (memory capacities, reporting, JALR handling).
//! 2. **Structures:** Hierarchical config for general, memory, and pipeline settings.
//! 3. **Loading:** JSON parsing from a string or file.
//!
//! Every field is optional in JSON; missing fields take their default, so
//! `{}` is a valid configuration equal to `Config::default()`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::MEMORY_WORDS;

/// Default configuration constants for the simulator.
mod defaults {
    use super::MEMORY_WORDS;

    /// Instruction memory capacity in words.
    pub const INSTR_WORDS: usize = MEMORY_WORDS;

    /// Data memory capacity in words.
    pub const DATA_WORDS: usize = MEMORY_WORDS;

    /// Print the state dump before every cycle.
    pub const PRINT_STATE: bool = true;

    /// Fail when a JALR reaches writeback.
    pub const REJECT_JALR: bool = true;
}

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("can't read config {}: {source}", .path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The contents are not a valid configuration.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use lc2k_core::config::Config;
///
/// let config = Config::default();
/// assert!(config.general.print_state);
/// assert_eq!(config.memory.data_words, 65536);
/// assert!(config.pipeline.reject_jalr);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use lc2k_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 1000 },
///     "memory": { "data_words": 256 },
///     "pipeline": { "reject_jalr": false }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.memory.instr_words, 65536);
/// assert_eq!(config.memory.data_words, 256);
/// assert!(!config.pipeline.reject_jalr);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory capacities
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Pipeline behaviour
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed JSON or unknown fields.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Json`] if its contents are invalid.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log every stage at `trace` level (stderr)
    #[serde(default)]
    pub trace_instructions: bool,

    /// Print the machine state before every cycle
    #[serde(default = "GeneralConfig::default_print_state")]
    pub print_state: bool,

    /// Stop with an error after this many cycles without reaching HALT
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default per-cycle dump setting.
    const fn default_print_state() -> bool {
        defaults::PRINT_STATE
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            print_state: defaults::PRINT_STATE,
            max_cycles: None,
        }
    }
}

/// Memory capacities, in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Instruction memory capacity
    #[serde(default = "MemoryConfig::default_instr_words")]
    pub instr_words: usize,

    /// Data memory capacity
    #[serde(default = "MemoryConfig::default_data_words")]
    pub data_words: usize,
}

impl MemoryConfig {
    /// Returns the default instruction memory capacity.
    const fn default_instr_words() -> usize {
        defaults::INSTR_WORDS
    }

    /// Returns the default data memory capacity.
    const fn default_data_words() -> usize {
        defaults::DATA_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            instr_words: defaults::INSTR_WORDS,
            data_words: defaults::DATA_WORDS,
        }
    }
}

/// Pipeline behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Treat a JALR reaching writeback as an error instead of a no-op
    #[serde(default = "PipelineConfig::default_reject_jalr")]
    pub reject_jalr: bool,
}

impl PipelineConfig {
    /// Returns the default JALR handling.
    const fn default_reject_jalr() -> bool {
        defaults::REJECT_JALR
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reject_jalr: defaults::REJECT_JALR,
        }
    }
}
