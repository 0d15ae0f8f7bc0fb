//! Configuration types for ulg-convert.
//!
//! [`Config::load`] layers `~/.config/ulg-convert/config.toml` (if present)
//! and an optional explicit file on top of the embedded defaults.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use crate::error::ConfigError;
use crate::types::OutputFormat;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

/// Pattern applied to line content when no other pattern is configured.
pub const CANONICAL_PATTERN: &str = r"^(?:\[.*?\]\s+)?(?P<name>[^:]+):\s+(?P<comment>.+)$";

const DEFAULT_CONFIG: &str = r#"
[extract]
cutoff              = "2025-01-01T00:00:00Z"
allow_untimestamped = true
patterns            = ['^(?:\[.*?\]\s+)?(?P<name>[^:]+):\s+(?P<comment>.+)$']

[output]
format    = "document"
extension = ""
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level converter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[extract]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// Records stamped strictly before this instant are dropped. Empty or
    /// `"none"` disables the filter.
    #[serde(default = "default_cutoff")]
    pub cutoff: String,
    /// Match content of lines that carry no timestamp prefix, emitting an
    /// empty timestamp. When false such lines are dropped.
    #[serde(default = "default_allow_untimestamped")]
    pub allow_untimestamped: bool,
    /// Content patterns, tried in order. Each must declare the named groups
    /// `name` and `comment`.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,
}

fn default_cutoff() -> String { "2025-01-01T00:00:00Z".to_string() }
fn default_allow_untimestamped() -> bool { true }
fn default_patterns() -> Vec<String> { vec![CANONICAL_PATTERN.to_string()] }

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            cutoff: default_cutoff(),
            allow_untimestamped: default_allow_untimestamped(),
            patterns: default_patterns(),
        }
    }
}

impl ExtractConfig {
    /// Parse [`cutoff`](Self::cutoff) into an instant.
    ///
    /// Accepts RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS[.fff]` read as UTC.
    pub fn cutoff(&self) -> Result<Option<DateTime<Utc>>, ConfigError> {
        parse_cutoff(&self.cutoff)
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Output file extension without the dot. Empty means the format's
    /// default (`json` or `ulg`).
    #[serde(default)]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            extension: String::new(),
        }
    }
}

impl OutputConfig {
    pub fn extension(&self) -> &str {
        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() {
            self.format.default_extension()
        } else {
            ext
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the user config file, then `extra` if given, layered on top of
    /// the built-in defaults. A missing user file is not an error; a missing
    /// `extra` file is.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(config_path().as_path()).required(false));

        if let Some(path) = extra {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let cfg: Config = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.extract.cutoff()?;
        if self.extract.patterns.is_empty() {
            return Err(ConfigError::NoPatterns);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a cutoff value. Empty and `none` (any case) mean no cutoff.
pub fn parse_cutoff(value: &str) -> Result<Option<DateTime<Utc>>, ConfigError> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|ndt| ndt.and_utc())
        })
        .map(Some)
        .map_err(|source| ConfigError::Cutoff {
            value: value.to_string(),
            source,
        })
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("ulg-convert")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
