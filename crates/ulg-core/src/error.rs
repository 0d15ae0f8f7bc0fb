//! Error types for ulg-core.
//!
//! Per-line failures ([`LineError`]) are recovered by the extractor: they are
//! logged and the line is skipped. [`ConfigError`] and [`ConvertError`] abort
//! the run.

use std::path::PathBuf;
use thiserror::Error;

/// A single input line could not be turned into a record.
#[derive(Debug, Error)]
pub enum LineError {
    /// The content matched none of the configured patterns.
    #[error("Unable to parse line: {line}")]
    Unparsed { line: String },

    /// The timestamp prefix matched but is not a valid instant.
    #[error("Unable to parse timestamp {raw:?} in line: {line}")]
    Timestamp {
        raw: String,
        line: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Invalid configuration, detected before any input is read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid cutoff {value:?}: {source}")]
    Cutoff {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("pattern {pattern:?} must declare a named group `{group}`")]
    MissingGroup { pattern: String, group: &'static str },

    #[error("at least one content pattern is required")]
    NoPatterns,
}

/// A file-level failure that aborts the conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}
