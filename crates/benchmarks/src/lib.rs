//! Docker vs GardenLiminal performance analysis for KuponGo.
//!
//! This crate fabricates synthetic performance metrics for two container
//! runtimes, computes percentage deltas between them, derives threshold
//! based deployment recommendations and renders the result as a JSON
//! analysis file and a markdown report.
//!
//! # Quick Start
//!
//! ```no_run
//! use kupongo_perf_benchmarks::{AnalyzerConfig, ReportGenerator};
//!
//! let generator = ReportGenerator::new(AnalyzerConfig::default());
//! let outcome = generator.run()?;
//!
//! println!("Overall: {:.1}%", outcome.report.analysis.overall_improvement_pct);
//! # Ok::<(), kupongo_perf_benchmarks::ReportError>(())
//! ```
//!
//! # Modules
//!
//! - [`result`] - Report value types
//! - [`generator`] - Synthetic metric generation
//! - [`analysis`] - Percentage deltas and overall score
//! - [`recommend`] - Threshold recommendations
//! - [`markdown`] - Markdown report generation
//! - [`io`] - Reading and writing report files
//! - [`analyzer`] - The end-to-end pipeline

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod generator;
pub mod io;
pub mod markdown;
pub mod recommend;
pub mod result;

pub use analyzer::{build_report, build_report_at, ReportGenerator, RunOutcome, Stage};
pub use config::{AnalyzerConfig, OutputFormat, DEFAULT_OUTPUT_DIR};
pub use error::{ReportError, Result};
pub use result::{Category, ComparisonResult, MetricSet, Recommendation, Report};
