//! ulg-convert — turns device logs into timing-chart input.
//!
//! Reads a UTF-8 log file, extracts one `PULSE` record per matching line, and
//! writes the records as JSON next to the input. The extraction rules live in
//! [`ulg_core`]; this crate adds file handling for the `convert` binary and
//! for integration tests.
//!
//! # Flow
//!
//! ```text
//! input file ──► Extractor ──► Extraction ──► export ──► output file
//! ```

use anyhow::Context;
use std::path::{Path, PathBuf};
use ulg_core::config::Config;
use ulg_core::{export, ExtractStats, Extractor};

pub use ulg_core;

/// Summary of a finished conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: ExtractStats,
}

/// Convert `input` according to `config`.
///
/// The output goes to `output` when given, otherwise next to the input with
/// the configured extension. Unparseable lines are logged and skipped; only
/// configuration and file errors are returned.
pub fn convert_file(input: &Path, output: Option<&Path>, config: &Config) -> anyhow::Result<Conversion> {
    let extractor = Extractor::from_config(&config.extract).context("invalid extraction settings")?;

    let text = std::fs::read_to_string(input).map_err(|source| ulg_core::ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => export::output_path(input, config.output.extension()),
    };
    anyhow::ensure!(
        output != input,
        "output path {} would overwrite the input; pass --output or change the extension",
        output.display()
    );
    tracing::debug!(input = %input.display(), output = %output.display(), format = %config.output.format, "converting");

    let extraction = extractor.extract(&text);
    let stats = extraction.stats;
    export::write_file(&output, extraction, config.output.format)?;

    Ok(Conversion {
        input: input.to_path_buf(),
        output,
        stats,
    })
}
