//! CLI for the KuponGo performance analyzer.
//!
//! This crate provides the `kupongo-perf` command-line interface, including
//! the `run` subcommand that generates and writes a comparison report.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod console;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kupongo_perf_benchmarks::io::read_report_json;
use kupongo_perf_benchmarks::markdown::generate_report;
use kupongo_perf_benchmarks::{AnalyzerConfig, OutputFormat, ReportGenerator, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;
use tracing::{debug, info};

/// KuponGo performance analyzer CLI.
#[derive(Parser, Debug)]
#[command(name = "kupongo-perf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI-compatible output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    /// Only the JSON analysis file
    Json,
    /// Only the markdown report
    Markdown,
    /// Both files
    Both,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli: CliOutputFormat) -> Self {
        match cli {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Markdown => OutputFormat::Markdown,
            CliOutputFormat::Both => OutputFormat::Both,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate Docker and GardenLiminal measurements and write the report.
    ///
    /// Writes `analysis_<YYYYMMDD_HHMMSS>.json` and
    /// `report_<YYYYMMDD_HHMMSS>.md` to the output directory.
    Run {
        /// Output directory.
        #[arg(short, long, env = "KUPONGO_PERF_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Files to write.
        #[arg(short, long, value_enum, default_value = "both")]
        format: CliOutputFormat,

        /// Fixed RNG seed for reproducible numbers.
        #[arg(long)]
        seed: Option<u64>,

        /// Verbose output.
        #[arg(short, long)]
        verbose: bool,
    },

    /// Re-render a markdown report from a saved JSON analysis file.
    Render {
        /// Path to an `analysis_*.json` file.
        input: PathBuf,

        /// Markdown file to write; prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show analyzer configuration.
    Status {
        /// Show metric ranges, score weights and thresholds.
        #[arg(short, long)]
        detailed: bool,
    },
}

/// Initialize the tracing subscriber. Logs go to stderr.
pub fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    execute(cli.command)
}

/// Execute a parsed command.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            output,
            format,
            seed,
            verbose,
        } => {
            let mut config = AnalyzerConfig::default()
                .with_output_dir(output)
                .with_format(format.into());
            config.seed = seed;
            debug!(?config, "Starting analysis");

            console::print_banner();
            let outcome = ReportGenerator::new(config)
                .run_with_progress(console::print_stage)
                .context("Performance analysis failed")?;

            console::print_written(&outcome.files);
            console::print_summary(&outcome.report.analysis);
            if verbose {
                console::print_recommendations(&outcome.report.recommendations);
            }

            Ok(())
        }
        Commands::Render { input, output } => {
            let report = read_report_json(&input)
                .with_context(|| format!("Could not load {}", input.display()))?;
            let markdown = generate_report(&report);

            match output {
                Some(path) => {
                    std::fs::write(&path, markdown)
                        .with_context(|| format!("Could not write {}", path.display()))?;
                    info!(path = %path.display(), "Rendered markdown report");
                    println!("✓ Markdown report saved: {}", path.display());
                }
                None => print!("{markdown}"),
            }

            Ok(())
        }
        Commands::Status { detailed } => {
            console::print_status(detailed);
            Ok(())
        }
    }
}
