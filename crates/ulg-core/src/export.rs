//! Export — serializes an [`Extraction`] and derives where it is written.

use crate::error::ConvertError;
use crate::extractor::Extraction;
use crate::types::OutputFormat;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output path for `input`: same location, extension replaced.
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// Write `extraction` to `writer` as pretty-printed JSON (2-space indent)
/// followed by a newline.
pub fn write_json<W: Write>(
    mut writer: W,
    extraction: Extraction,
    format: OutputFormat,
) -> Result<(), ConvertError> {
    match format {
        OutputFormat::Array => write_pretty(&mut writer, &extraction.records)?,
        OutputFormat::Document => write_pretty(&mut writer, &extraction.into_document())?,
    }
    writer.write_all(b"\n").map_err(serde_json::Error::io)?;
    writer.flush().map_err(serde_json::Error::io)?;
    Ok(())
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<(), ConvertError> {
    serde_json::to_writer_pretty(writer, value).map_err(Into::into)
}

/// Serialize to a string; convenient for tests and previews.
pub fn to_json_string(extraction: Extraction, format: OutputFormat) -> Result<String, ConvertError> {
    let mut buf = Vec::new();
    write_json(&mut buf, extraction, format)?;
    // serde_json only emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `extraction` to `path`, replacing any existing file.
pub fn write_file(path: &Path, extraction: Extraction, format: OutputFormat) -> Result<(), ConvertError> {
    let file = std::fs::File::create(path).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write_json(std::io::BufWriter::new(file), extraction, format).map_err(|err| match err {
        ConvertError::Serialize(e) if e.is_io() => ConvertError::Write {
            path: path.to_path_buf(),
            source: e.into(),
        },
        other => other,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::extractor::Extractor;
    use crate::types::{Document, LogRecord};

    fn sample() -> Extraction {
        Extractor::from_config(&Config::defaults().extract).unwrap().extract(
            "2025-03-11T05:30:54.867Z:I:0x00100000:[LOG] hoge.c-100: overflow detected [default_visible]\n",
        )
    }

    #[test]
    fn output_path_replaces_extension() {
        assert_eq!(output_path(Path::new("/tmp/run.log"), "ulg"), PathBuf::from("/tmp/run.ulg"));
        assert_eq!(output_path(Path::new("run"), "json"), PathBuf::from("run.json"));
        assert_eq!(output_path(Path::new("a.b.txt"), "json"), PathBuf::from("a.b.json"));
    }

    #[test]
    fn array_format_is_bare_list() {
        let json = to_json_string(sample(), OutputFormat::Array).unwrap();
        assert!(json.starts_with("[\n  {\n    \"timestamp\""));
        assert!(json.ends_with("]\n"));
        let records: Vec<LogRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn document_format_carries_visibility() {
        let json = to_json_string(sample(), OutputFormat::Document).unwrap();
        let doc: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc.logs.len(), 1);
        assert_eq!(doc.default_visibility.len(), 1);
        assert_eq!(doc.default_visibility[0].group, "hoge.c");
    }

    #[test]
    fn write_file_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("out.json");
        let err = write_file(&target, sample(), OutputFormat::Document).unwrap_err();
        assert!(matches!(err, ConvertError::Write { ref path, .. } if *path == target));
    }
}
