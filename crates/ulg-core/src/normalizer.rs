//! Normalizer — splits a raw line into its timestamp and content.
//!
//! A line may start with a short `[HH:MM:SS.ffffff]` capture stamp, which is
//! discarded. What follows is either the device prefix
//! `<ISO-8601>:<field>:<field>:<content>` or bare content.

use crate::error::LineError;
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

static SHORT_STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[\d{2}:\d{2}:\d{2}\.\d{6}\]\s*").expect("short stamp regex is valid")
});

static PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<timestamp>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?Z?):[^:\s]+:[^:\s]+:\s*(?P<rest>.*)$",
    )
    .expect("prefix regex is valid")
});

/// Outcome of normalizing one non-empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized<'a> {
    /// Content ready for matching. `timestamp` is the raw token, or empty.
    Content { timestamp: &'a str, content: &'a str },
    /// Timestamped strictly before the cutoff.
    BeforeCutoff,
    /// No timestamp prefix, and untimestamped lines are disabled.
    NoPrefix,
}

/// Per-run normalization settings. The line rules are shared statics.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    cutoff: Option<DateTime<Utc>>,
    allow_untimestamped: bool,
}

impl Normalizer {
    pub fn new(cutoff: Option<DateTime<Utc>>, allow_untimestamped: bool) -> Self {
        Self {
            cutoff,
            allow_untimestamped,
        }
    }

    /// Normalize an already-trimmed, non-empty line.
    pub fn normalize<'a>(&self, line: &'a str) -> Result<Normalized<'a>, LineError> {
        let line = match SHORT_STAMP.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        };

        let Some(caps) = PREFIX.captures(line) else {
            if self.allow_untimestamped {
                return Ok(Normalized::Content {
                    timestamp: "",
                    content: line,
                });
            }
            return Ok(Normalized::NoPrefix);
        };

        // Both groups are mandatory in PREFIX.
        let raw = caps.name("timestamp").map_or("", |m| m.as_str());
        let content = caps.name("rest").map_or("", |m| m.as_str());

        let ts = parse_timestamp(raw).map_err(|source| LineError::Timestamp {
            raw: raw.to_string(),
            line: line.to_string(),
            source,
        })?;

        if self.cutoff.is_some_and(|cutoff| ts < cutoff) {
            return Ok(Normalized::BeforeCutoff);
        }

        Ok(Normalized::Content {
            timestamp: raw,
            content,
        })
    }
}

/// Parse an ISO-8601 timestamp. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(_) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|ndt| ndt.and_utc()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
