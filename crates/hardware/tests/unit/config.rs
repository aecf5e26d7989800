//! Configuration Tests.
//!
//! Every section and field is optional in JSON; missing values fall back to
//! the same defaults `Config::default()` uses.

use std::io::Write;

use lc2k_core::config::{Config, ConfigError, GeneralConfig, MemoryConfig, PipelineConfig};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(
        config.general,
        GeneralConfig {
            trace_instructions: false,
            print_state: true,
            max_cycles: None,
        }
    );
    assert_eq!(
        config.memory,
        MemoryConfig {
            instr_words: 65536,
            data_words: 65536,
        }
    );
    assert_eq!(config.pipeline, PipelineConfig { reject_jalr: true });
}

#[test]
fn empty_object_is_default() {
    assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config =
        Config::from_json_str(r#"{ "general": { "print_state": false }, "memory": {} }"#).unwrap();
    assert!(!config.general.print_state);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory, MemoryConfig::default());
    assert!(config.pipeline.reject_jalr);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(matches!(
        Config::from_json_str(r#"{ "cache": {} }"#),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        Config::from_json_str(r#"{ "memory": { "words": 4 } }"#),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn malformed_json_is_rejected() {
    let err = Config::from_json_str("{ general").unwrap_err();
    assert!(err.to_string().starts_with("invalid config: "));
}

#[test]
fn reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "general": { "max_cycles": 500 }, "memory": { "data_words": 128 } }"#)
        .unwrap();
    file.flush().unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.general.max_cycles, Some(500));
    assert_eq!(config.memory.data_words, 128);
    assert_eq!(config.memory.instr_words, 65536);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    match Config::from_json_file(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
