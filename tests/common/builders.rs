//! Test builders — ergonomic constructors for expected [`LogRecord`] values.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use ulg_core::LogRecord;

/// Fluent builder for expected [`LogRecord`] values.
///
/// # Example
///
/// ```rust
/// let expected = LogRecordBuilder::new("hoge.c-100", "overflow detected")
///     .timestamp("2025-03-11T05:30:54.867Z")
///     .build();
/// ```
pub struct LogRecordBuilder {
    record: LogRecord,
}

impl LogRecordBuilder {
    pub fn new(name: &str, comment: &str) -> Self {
        Self {
            record: LogRecord::pulse("", name, comment),
        }
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.record.timestamp = timestamp.to_string();
        self
    }

    pub fn group(mut self, group: &str) -> Self {
        self.record.group = group.to_string();
        self
    }

    pub fn build(self) -> LogRecord {
        self.record
    }
}

/// Build an extractor with the built-in defaults.
pub fn default_extractor() -> ulg_core::Extractor {
    ulg_core::Extractor::from_config(&ulg_core::config::Config::defaults().extract)
        .expect("default extraction config is valid")
}

/// Run the default extractor over `lines` joined by newlines.
pub fn extract_lines<S: AsRef<str>>(lines: &[S]) -> ulg_core::Extraction {
    let text: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    default_extractor().extract(&text.join("\n"))
}
