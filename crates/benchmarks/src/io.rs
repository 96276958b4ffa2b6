//! I/O operations for performance reports.
//!
//! This module writes a [`Report`] to the output directory as a pretty
//! JSON analysis file and a markdown report, and reads analysis files back.
//! File names carry the report's `YYYYMMDD_HHMMSS` stamp; two runs within
//! the same second overwrite each other.

use crate::config::OutputFormat;
use crate::error::{ReportError, Result};
use crate::markdown;
use crate::result::Report;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths of the files a report is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `analysis_<stamp>.json`
    pub json: PathBuf,
    /// `report_<stamp>.md`
    pub markdown: PathBuf,
}

impl OutputPaths {
    /// Output paths for `stamp` under `dir`.
    pub fn new(dir: impl AsRef<Path>, stamp: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            json: dir.join(format!("analysis_{stamp}.json")),
            markdown: dir.join(format!("report_{stamp}.md")),
        }
    }

    /// Output paths for `report` under `dir`.
    pub fn for_report(dir: impl AsRef<Path>, report: &Report) -> Self {
        Self::new(dir, &report.file_stamp())
    }
}

/// Files actually written by [`write_outputs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenFiles {
    /// JSON analysis file, if written.
    pub json: Option<PathBuf>,
    /// Markdown report, if written.
    pub markdown: Option<PathBuf>,
}

/// Ensure the output directory exists.
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the report as pretty-printed JSON.
pub fn write_report_json(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    write_file(path.as_ref(), &json)
}

/// Write the markdown rendering of the report.
pub fn write_report_markdown(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    write_file(path.as_ref(), &markdown::generate_report(report))
}

/// Write the files selected by `format` into `dir`.
pub fn write_outputs(
    report: &Report,
    dir: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<WrittenFiles> {
    let dir = dir.as_ref();
    ensure_output_dir(dir)?;

    let paths = OutputPaths::for_report(dir, report);
    let mut written = WrittenFiles::default();

    if format.writes_json() {
        write_report_json(report, &paths.json)?;
        info!(path = %paths.json.display(), "Wrote JSON analysis");
        written.json = Some(paths.json);
    }

    if format.writes_markdown() {
        write_report_markdown(report, &paths.markdown)?;
        info!(path = %paths.markdown.display(), "Wrote markdown report");
        written.markdown = Some(paths.markdown);
    }

    Ok(written)
}

/// Read a report from a JSON analysis file.
pub fn read_report_json(path: impl AsRef<Path>) -> Result<Report> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ReportError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        let paths = OutputPaths::new("benchmarks/results", "20250314_092653");
        assert_eq!(
            paths.json,
            PathBuf::from("benchmarks/results/analysis_20250314_092653.json")
        );
        assert_eq!(
            paths.markdown,
            PathBuf::from("benchmarks/results/report_20250314_092653.md")
        );
    }

    #[test]
    fn test_ensure_output_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested/results");
        ensure_output_dir(&dir).unwrap();
        ensure_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_read_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_report_json(tmp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ReportError::Read { .. }));
    }

    #[test]
    fn test_read_invalid_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("analysis_bad.json");
        fs::write(&path, "{\"timestamp\": 1}").unwrap();
        let err = read_report_json(&path).unwrap_err();
        assert!(matches!(err, ReportError::Deserialize { .. }));
        assert!(err.to_string().contains("analysis_bad.json"));
    }

    #[test]
    fn test_create_dir_over_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("occupied");
        fs::write(&file, "x").unwrap();
        let err = ensure_output_dir(file.join("results")).unwrap_err();
        assert!(matches!(err, ReportError::CreateDir { .. }));
    }
}
