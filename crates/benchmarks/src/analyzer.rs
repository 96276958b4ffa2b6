//! The analysis pipeline: generate → analyze → recommend → persist.

use crate::analysis::compare;
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::generator::MetricGenerator;
use crate::io::{self, WrittenFiles};
use crate::recommend::derive_recommendations;
use crate::result::{MetricSet, Report};
use chrono::{DateTime, Local};
use std::fmt;
use tracing::{debug, info};

/// Pipeline stage, reported to the progress callback before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Drawing synthetic metrics.
    Simulate,
    /// Computing deltas.
    Analyze,
    /// Evaluating recommendation rules.
    Recommend,
    /// Writing output files.
    Save,
}

impl Stage {
    /// Number of pipeline stages.
    pub const COUNT: usize = 4;

    /// 1-based position of the stage.
    pub fn number(self) -> usize {
        match self {
            Stage::Simulate => 1,
            Stage::Analyze => 2,
            Stage::Recommend => 3,
            Stage::Save => 4,
        }
    }

    /// Progress message for the stage.
    pub fn description(self) -> &'static str {
        match self {
            Stage::Simulate => "Simulating performance measurements...",
            Stage::Analyze => "Calculating statistics...",
            Stage::Recommend => "Generating recommendations...",
            Stage::Save => "Saving results...",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.number(), Self::COUNT, self.description())
    }
}

/// Result of a complete run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// The generated report.
    pub report: Report,
    /// Files written for it.
    pub files: WrittenFiles,
}

/// Build a report from two metric sets, stamped with `timestamp`.
pub fn build_report_at(
    docker: MetricSet,
    gardenliminal: MetricSet,
    timestamp: DateTime<Local>,
) -> Report {
    let analysis = compare(&docker, &gardenliminal);
    let recommendations = derive_recommendations(&analysis);
    Report {
        timestamp,
        docker,
        gardenliminal,
        analysis,
        recommendations,
    }
}

/// Build a report from two metric sets, stamped with the current local time.
pub fn build_report(docker: MetricSet, gardenliminal: MetricSet) -> Report {
    build_report_at(docker, gardenliminal, Local::now())
}

/// Runs the full analysis pipeline for one configuration.
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: AnalyzerConfig,
}

impl ReportGenerator {
    /// Create a new generator.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// The generator's configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Generate and analyze metrics without writing anything.
    pub fn generate(&self) -> Report {
        self.generate_with_progress(&mut |_| {})
    }

    fn generate_with_progress(&self, on_stage: &mut impl FnMut(Stage)) -> Report {
        let timestamp = Local::now();

        on_stage(Stage::Simulate);
        let mut generator = MetricGenerator::from_seed(self.config.seed);
        let (docker, gardenliminal) = generator.generate();
        debug!(?docker, ?gardenliminal, "Simulated measurements");

        on_stage(Stage::Analyze);
        let analysis = compare(&docker, &gardenliminal);
        debug!(overall = analysis.overall_improvement_pct, "Calculated statistics");

        on_stage(Stage::Recommend);
        let recommendations = derive_recommendations(&analysis);

        Report {
            timestamp,
            docker,
            gardenliminal,
            analysis,
            recommendations,
        }
    }

    /// Run the pipeline and write the configured outputs.
    pub fn run(&self) -> Result<RunOutcome> {
        self.run_with_progress(|_| {})
    }

    /// Run the pipeline, calling `on_stage` before each stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created or a file
    /// cannot be written. The in-memory report is dropped in that case.
    pub fn run_with_progress(&self, mut on_stage: impl FnMut(Stage)) -> Result<RunOutcome> {
        let report = self.generate_with_progress(&mut on_stage);

        on_stage(Stage::Save);
        let files = io::write_outputs(&report, &self.config.output_dir, self.config.format)?;
        info!(
            dir = %self.config.output_dir.display(),
            overall = report.analysis.overall_improvement_pct,
            "Analysis complete"
        );

        Ok(RunOutcome { report, files })
    }
}
