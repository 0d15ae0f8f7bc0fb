//! Content matchers and group derivation.
//!
//! A [`Matcher`] turns normalized line content into at most one record.
//! The extractor runs every configured matcher against every line, so a line
//! may yield several records.

use crate::error::ConfigError;
use crate::types::{LogRecord, DEFAULT_GROUP};
use regex::Regex;
use std::sync::LazyLock;

static GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^-]+\.c)(?:-|$)").expect("group regex is valid"));

/// Derive the display group for a record name.
///
/// `hoge.c-100` → `hoge.c`. The segment before the first hyphen (or the
/// whole name, if it has none) must end in `.c`; anything else falls back to
/// [`DEFAULT_GROUP`].
pub fn derive_group(name: &str) -> &str {
    match GROUP.captures(name).and_then(|caps| caps.get(1)) {
        Some(m) => m.as_str(),
        None => DEFAULT_GROUP,
    }
}

/// Extracts a record from normalized line content.
///
/// Implementations must be pure: the same input always yields the same
/// output. Handlers keyed on other fields (e.g. a bracketed priority tag)
/// plug in here.
pub trait Matcher: std::fmt::Debug + Send + Sync {
    /// Short label used in diagnostics.
    fn label(&self) -> &str;

    fn extract(&self, timestamp: &str, content: &str) -> Option<LogRecord>;
}

/// Matches content against a regex declaring `name` and `comment` groups.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    pattern: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        for group in ["name", "comment"] {
            if !regex.capture_names().flatten().any(|n| n == group) {
                return Err(ConfigError::MissingGroup {
                    pattern: pattern.to_string(),
                    group,
                });
            }
        }
        Ok(Self { pattern: regex })
    }
}

impl Matcher for RegexMatcher {
    fn label(&self) -> &str {
        self.pattern.as_str()
    }

    fn extract(&self, timestamp: &str, content: &str) -> Option<LogRecord> {
        let caps = self.pattern.captures(content)?;
        let name = caps.name("name")?.as_str();
        let comment = caps.name("comment")?.as_str();
        if name.is_empty() || comment.is_empty() {
            return None;
        }
        Some(LogRecord::pulse(timestamp, name, comment))
    }
}

/// Compile an ordered matcher list from pattern strings.
pub fn compile(patterns: &[String]) -> Result<Vec<Box<dyn Matcher>>, ConfigError> {
    if patterns.is_empty() {
        return Err(ConfigError::NoPatterns);
    }
    patterns
        .iter()
        .map(|p| RegexMatcher::new(p).map(|m| Box::new(m) as Box<dyn Matcher>))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
