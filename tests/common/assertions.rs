//! Domain-specific assertions for ulg-convert harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which record invariant was violated.

use pretty_assertions::assert_eq;
use ulg_core::LogRecord;

/// Assert that a record carries the expected name and comment.
///
/// ```rust
/// assert_record!(record, "hoge.c-100", "overflow detected");
/// ```
#[macro_export]
macro_rules! assert_record {
    ($record:expr, $name:expr, $comment:expr) => {{
        let record: &ulg_core::LogRecord = &$record;
        let name: &str = $name;
        let comment: &str = $comment;
        if record.name != name || record.comment != comment {
            panic!(
                "assert_record! failed:\n  expected: {:?} / {:?}\n  actual:   {:?} / {:?}",
                name, comment, record.name, record.comment
            );
        }
    }};
}

/// Assert that a record was placed in the expected group.
#[macro_export]
macro_rules! assert_group {
    ($record:expr, $group:expr) => {{
        let record: &ulg_core::LogRecord = &$record;
        let expected: &str = $group;
        if record.group != expected {
            panic!(
                "assert_group! failed for name {:?}:\n  expected: {:?}\n  actual:   {:?}",
                record.name, expected, record.group
            );
        }
    }};
}

/// Assert the fixed metadata every record carries.
pub fn assert_pulse_invariants(records: &[LogRecord]) {
    for record in records {
        assert_eq!(record.kind, "PULSE", "record type must be PULSE: {record:?}");
        assert_eq!(record.value, 400, "record value must be 400: {record:?}");
        assert!(!record.name.is_empty(), "record name must be non-empty: {record:?}");
        assert!(!record.comment.is_empty(), "record comment must be non-empty: {record:?}");
    }
}
