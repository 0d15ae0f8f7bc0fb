//! Extractor — one sequential pass from input text to records.
//!
//! [`Extractor::extract`] owns no state between runs: every call returns a
//! fresh [`Extraction`] holding the records in arrival order, the
//! default-visibility list, and counters describing what was skipped.

use crate::config::ExtractConfig;
use crate::error::{ConfigError, LineError};
use crate::matcher::{self, Matcher};
use crate::normalizer::{Normalized, Normalizer};
use crate::types::{Document, LogRecord, VisibilityEntry};
use std::collections::HashSet;

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub lines: usize,
    pub blank: usize,
    pub records: usize,
    pub before_cutoff: usize,
    pub no_prefix: usize,
    pub unparsed: usize,
    pub bad_timestamps: usize,
}

/// Result of one extraction run.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<LogRecord>,
    pub visibility: Vec<VisibilityEntry>,
    pub stats: ExtractStats,
    seen_visible: HashSet<(String, String)>,
}

impl Extraction {
    fn push(&mut self, record: LogRecord) {
        if record.is_default_visible() {
            let key = (record.group.clone(), record.name.clone());
            if self.seen_visible.insert(key) {
                self.visibility.push(VisibilityEntry {
                    group: record.group.clone(),
                    name: record.name.clone(),
                    visible: true,
                });
            }
        }
        self.stats.records += 1;
        self.records.push(record);
    }

    pub fn into_document(self) -> Document {
        Document {
            logs: self.records,
            default_visibility: self.visibility,
        }
    }
}

/// Compiled extraction rules: a normalizer plus an ordered matcher list.
#[derive(Debug)]
pub struct Extractor {
    normalizer: Normalizer,
    matchers: Vec<Box<dyn Matcher>>,
}

impl Extractor {
    pub fn new(normalizer: Normalizer, matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self {
            normalizer,
            matchers,
        }
    }

    pub fn from_config(cfg: &ExtractConfig) -> Result<Self, ConfigError> {
        let normalizer = Normalizer::new(cfg.cutoff()?, cfg.allow_untimestamped);
        Ok(Self::new(normalizer, matcher::compile(&cfg.patterns)?))
    }

    /// Process every line of `input`. Per-line failures are logged and
    /// counted, never returned.
    pub fn extract(&self, input: &str) -> Extraction {
        let mut out = Extraction::default();

        for (idx, raw) in input.lines().enumerate() {
            out.stats.lines += 1;
            let line = raw.trim();
            if line.is_empty() {
                out.stats.blank += 1;
                continue;
            }

            match self.extract_line(line) {
                Ok(LineOutcome::Records(records)) => {
                    for record in records {
                        out.push(record);
                    }
                }
                Ok(LineOutcome::BeforeCutoff) => out.stats.before_cutoff += 1,
                Ok(LineOutcome::NoPrefix) => {
                    tracing::debug!(line_no = idx + 1, line, "no timestamp prefix, dropped");
                    out.stats.no_prefix += 1;
                }
                Err(err @ LineError::Unparsed { .. }) => {
                    tracing::warn!(line_no = idx + 1, "{err}");
                    out.stats.unparsed += 1;
                }
                Err(err @ LineError::Timestamp { .. }) => {
                    tracing::warn!(line_no = idx + 1, "{err}");
                    out.stats.bad_timestamps += 1;
                }
            }
        }

        tracing::info!(
            lines = out.stats.lines,
            records = out.stats.records,
            before_cutoff = out.stats.before_cutoff,
            unparsed = out.stats.unparsed,
            bad_timestamps = out.stats.bad_timestamps,
            visible = out.visibility.len(),
            "extraction finished"
        );
        out
    }

    /// Run one trimmed, non-empty line through normalization and every matcher.
    pub fn extract_line(&self, line: &str) -> Result<LineOutcome, LineError> {
        let (timestamp, content) = match self.normalizer.normalize(line)? {
            Normalized::Content { timestamp, content } => (timestamp, content),
            Normalized::BeforeCutoff => return Ok(LineOutcome::BeforeCutoff),
            Normalized::NoPrefix => return Ok(LineOutcome::NoPrefix),
        };

        let records: Vec<LogRecord> = self
            .matchers
            .iter()
            .filter_map(|m| {
                let record = m.extract(timestamp, content)?;
                tracing::trace!(matcher = m.label(), name = %record.name, "matched");
                Some(record)
            })
            .collect();

        if records.is_empty() {
            return Err(LineError::Unparsed {
                line: line.to_string(),
            });
        }
        Ok(LineOutcome::Records(records))
    }
}

/// What happened to a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// One record per matcher that matched, in matcher order.
    Records(Vec<LogRecord>),
    BeforeCutoff,
    NoPrefix,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
