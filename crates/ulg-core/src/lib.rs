//! ulg-core — log line extraction for ulg-convert.
//!
//! Turns line-oriented device logs into `PULSE` records for the timing-chart
//! viewer.
//!
//! # Pipeline
//!
//! ```text
//! line ──► Normalizer ──► Matcher × N ──► Extraction ──► Export
//!            │                               │
//!            └─ cutoff / prefix              └─ default visibility
//! ```
//!
//! Everything runs on the calling thread in a single pass; nothing survives
//! between calls to [`Extractor::extract`].

pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod matcher;
pub mod normalizer;
pub mod types;

pub use error::{ConfigError, ConvertError, LineError};
pub use extractor::{ExtractStats, Extraction, Extractor};
pub use types::{Document, LogRecord, OutputFormat, VisibilityEntry};
