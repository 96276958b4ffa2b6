//! Human-readable console output.

use colored::Colorize;
use kupongo_perf_benchmarks::analysis::SCORE_WEIGHTS;
use kupongo_perf_benchmarks::generator::{MetricRanges, DOCKER_RANGES, GARDENLIMINAL_RANGES};
use kupongo_perf_benchmarks::io::WrittenFiles;
use kupongo_perf_benchmarks::recommend::{
    METRIC_RULES, OVERALL_MODEST_THRESHOLD, OVERALL_STRONG_THRESHOLD,
};
use kupongo_perf_benchmarks::{ComparisonResult, Recommendation, Stage, DEFAULT_OUTPUT_DIR};

/// Print the tool banner.
pub fn print_banner() {
    let border = "═".repeat(55);
    println!("{}", format!("╔{border}╗").cyan());
    println!("{}", "║     KuponGo Performance Analysis Tool                 ║".cyan());
    println!("{}", "║     Docker vs GardenLiminal Comparison                ║".cyan());
    println!("{}", format!("╚{border}╝").cyan());
    println!();
}

/// Print a `[n/4]` progress line.
pub fn print_stage(stage: Stage) {
    println!("{stage}");
}

/// Print the paths of the written files.
pub fn print_written(files: &WrittenFiles) {
    println!();
    if let Some(path) = &files.json {
        println!("{} JSON results saved: {}", "✓".green(), path.display());
    }
    if let Some(path) = &files.markdown {
        println!("{} Markdown report saved: {}", "✓".green(), path.display());
    }
    println!();
}

/// Print the headline numbers.
pub fn print_summary(analysis: &ComparisonResult) {
    println!("{}", "Summary:".bold());
    println!(
        "  Overall Improvement: {}",
        format!("{:.1}%", analysis.overall_improvement_pct).bold()
    );
    println!("  Startup: {:.1}% faster", analysis.startup_improvement_pct);
    println!("  Memory: {:.1}% less", analysis.memory_reduction_pct);
    println!("  CPU: {:.1}% less", analysis.cpu_reduction_pct);
    println!("  Response: {:.1}% faster", analysis.response_improvement_pct);
    println!("  Throughput: {:.1}% more", analysis.throughput_improvement_pct);
    println!();
}

/// Print every recommendation.
pub fn print_recommendations(recommendations: &[Recommendation]) {
    println!("{}", "Recommendations:".bold());
    if recommendations.is_empty() {
        println!("  (none)");
    }
    for rec in recommendations {
        println!("  {} {}", format!("[{}]", rec.category).yellow(), rec.finding);
        println!("    → {}", rec.recommendation);
    }
    println!();
}

/// Sampling intervals of one runtime, one indented line per metric.
pub fn range_lines(ranges: &MetricRanges) -> Vec<String> {
    vec![
        format!("    startup_time_ms:       {}", ranges.startup_time_ms),
        format!("    memory_mb:             {}", ranges.memory_mb),
        format!("    cpu_percent:           {:.1}", ranges.cpu_percent),
        format!("    response_time_ms:      {:.1}", ranges.response_time_ms),
        format!("    throughput_rps:        {}", ranges.throughput_rps),
        format!("    container_overhead_mb: {}", ranges.container_overhead_mb),
        format!("    binary_size_mb:        {}", ranges.binary_size_mb),
    ]
}

fn print_ranges(name: &str, ranges: &MetricRanges) {
    println!("  {name}:");
    for line in range_lines(ranges) {
        println!("{line}");
    }
}

/// Print version and configuration.
pub fn print_status(detailed: bool) {
    println!("KuponGo Performance Analyzer");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!("Default output directory: {DEFAULT_OUTPUT_DIR}/");

    if !detailed {
        return;
    }

    println!("\nMetric ranges:");
    print_ranges("Docker", &DOCKER_RANGES);
    print_ranges("GardenLiminal", &GARDENLIMINAL_RANGES);

    let w = SCORE_WEIGHTS;
    println!("\nOverall score weights:");
    println!(
        "  startup {:.2}, memory {:.2}, cpu {:.2}, response {:.2}, throughput {:.2}",
        w.startup, w.memory, w.cpu, w.response, w.throughput
    );

    println!("\nRecommendation thresholds:");
    for rule in &METRIC_RULES {
        println!(
            "  {:<20} {} > {}",
            rule.category.label(),
            rule.delta.field_name(),
            rule.threshold
        );
    }
    println!(
        "  {:<20} overall_improvement_pct > {} or < {}",
        "Overall", OVERALL_STRONG_THRESHOLD, OVERALL_MODEST_THRESHOLD
    );
}
