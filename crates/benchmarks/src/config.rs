//! Analyzer configuration.

use std::path::PathBuf;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "benchmarks/results";

/// Which report files a run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Only `analysis_<stamp>.json`.
    Json,
    /// Only `report_<stamp>.md`.
    Markdown,
    /// Both files.
    #[default]
    Both,
}

impl OutputFormat {
    /// Whether the JSON analysis file is written.
    pub fn writes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }

    /// Whether the markdown report is written.
    pub fn writes_markdown(self) -> bool {
        matches!(self, OutputFormat::Markdown | OutputFormat::Both)
    }
}

/// Configuration for a [`ReportGenerator`](crate::ReportGenerator) run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Directory the report files are written to. Created if missing.
    pub output_dir: PathBuf,
    /// Files to write.
    pub format: OutputFormat,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::default(),
            seed: None,
        }
    }
}

impl AnalyzerConfig {
    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("benchmarks/results"));
        assert_eq!(config.format, OutputFormat::Both);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_format_selection() {
        assert!(OutputFormat::Both.writes_json() && OutputFormat::Both.writes_markdown());
        assert!(OutputFormat::Json.writes_json() && !OutputFormat::Json.writes_markdown());
        assert!(!OutputFormat::Markdown.writes_json() && OutputFormat::Markdown.writes_markdown());
    }

    #[test]
    fn test_builder() {
        let config = AnalyzerConfig::default()
            .with_output_dir("/tmp/out")
            .with_format(OutputFormat::Json)
            .with_seed(9);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.seed, Some(9));
    }
}
