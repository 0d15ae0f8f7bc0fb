//! Core types for ulg-core.
//!
//! This module defines the records written to the output file: the
//! [`LogRecord`] itself, the [`VisibilityEntry`] list consumed by the chart
//! viewer, the [`Document`] wrapper that carries both, and the
//! [`OutputFormat`] discriminant choosing between the two output shapes.

use serde::{Deserialize, Serialize};

/// Event type stamped on every extracted record.
pub const PULSE: &str = "PULSE";

/// Value stamped on every extracted record.
pub const PULSE_VALUE: i64 = 400;

/// Group assigned when the name carries no `<identifier>.c` prefix.
pub const DEFAULT_GROUP: &str = "group1";

/// Comment marker that flags a `(group, name)` pair as shown by default.
pub const DEFAULT_VISIBLE_MARKER: &str = "[default_visible]";

/// One structured log entry.
///
/// Field order matches the serialized order: `timestamp`, `type`, `group`,
/// `name`, `value`, `comment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Raw timestamp token captured from the line, or empty when the line had
    /// no timestamp prefix.
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub group: String,
    pub name: String,
    pub value: i64,
    pub comment: String,
}

impl LogRecord {
    /// Build a `PULSE` record, deriving the group from `name`.
    pub fn pulse(
        timestamp: impl Into<String>,
        name: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            timestamp: timestamp.into(),
            kind: PULSE.to_string(),
            group: crate::matcher::derive_group(&name).to_string(),
            name,
            value: PULSE_VALUE,
            comment: comment.into(),
        }
    }

    /// Whether the comment asks for this record's signal to be visible.
    pub fn is_default_visible(&self) -> bool {
        self.comment.contains(DEFAULT_VISIBLE_MARKER)
    }
}

/// A `(group, name)` pair shown by default in the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityEntry {
    pub group: String,
    pub name: String,
    pub visible: bool,
}

/// The `document` output shape: records plus the default-visibility list.
///
/// `default_visibility` may be absent on input; files carrying only `logs`
/// load with an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub logs: Vec<LogRecord>,
    #[serde(default)]
    pub default_visibility: Vec<VisibilityEntry>,
}

/// Shape of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare JSON array of records.
    Array,
    /// `{"logs": [...], "default_visibility": [...]}`.
    #[default]
    Document,
}

impl OutputFormat {
    /// Extension used when none is configured explicitly.
    pub fn default_extension(self) -> &'static str {
        match self {
            OutputFormat::Array => "ulg",
            OutputFormat::Document => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Array => write!(f, "array"),
            OutputFormat::Document => write!(f, "document"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "array" => Ok(OutputFormat::Array),
            "document" => Ok(OutputFormat::Document),
            other => Err(format!(
                "unknown output format {other:?} (expected \"array\" or \"document\")"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
