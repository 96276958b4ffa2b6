//! End-to-end tests for report generation and persistence.

use chrono::{Local, TimeZone};
use kupongo_perf_benchmarks::io::{read_report_json, write_outputs, OutputPaths};
use kupongo_perf_benchmarks::markdown::generate_report;
use kupongo_perf_benchmarks::{
    build_report_at, AnalyzerConfig, Category, MetricSet, OutputFormat, ReportGenerator,
};
use pretty_assertions::assert_eq;
use std::fs;

fn reference_docker() -> MetricSet {
    MetricSet {
        startup_time_ms: 500,
        memory_mb: 600,
        cpu_percent: 20.0,
        response_time_ms: 20.0,
        throughput_rps: 200,
        container_overhead_mb: 150,
        binary_size_mb: 100,
    }
}

fn reference_gardenliminal() -> MetricSet {
    MetricSet {
        startup_time_ms: 100,
        memory_mb: 200,
        cpu_percent: 10.0,
        response_time_ms: 10.0,
        throughput_rps: 300,
        container_overhead_mb: 30,
        binary_size_mb: 10,
    }
}

#[test]
fn reference_scenario_produces_all_recommendations() {
    let timestamp = Local.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let report = build_report_at(reference_docker(), reference_gardenliminal(), timestamp);

    assert_eq!(report.analysis.startup_improvement_pct, 80.0);
    assert_eq!(report.analysis.memory_reduction_pct, 66.7);
    assert_eq!(report.analysis.cpu_reduction_pct, 50.0);
    assert_eq!(report.analysis.response_improvement_pct, 50.0);
    assert_eq!(report.analysis.throughput_improvement_pct, 50.0);
    assert_eq!(report.analysis.overall_improvement_pct, 60.2);

    let categories: Vec<Category> = report.recommendations.iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::StartupPerformance,
            Category::MemoryEfficiency,
            Category::CpuEfficiency,
            Category::Latency,
            Category::Throughput,
            Category::Overall,
        ]
    );
    assert_eq!(report.file_stamp(), "20250601_120000");
}

#[test]
fn written_files_are_named_by_timestamp() {
    let tmp = tempfile::tempdir().unwrap();
    let timestamp = Local.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let report = build_report_at(reference_docker(), reference_gardenliminal(), timestamp);

    let files = write_outputs(&report, tmp.path(), OutputFormat::Both).unwrap();
    let expected = OutputPaths::new(tmp.path(), "20250601_120000");

    assert_eq!(files.json.as_deref(), Some(expected.json.as_path()));
    assert_eq!(files.markdown.as_deref(), Some(expected.markdown.as_path()));
    assert!(expected.json.is_file());
    assert!(expected.markdown.is_file());
}

#[test]
fn json_round_trip_reproduces_markdown() {
    let tmp = tempfile::tempdir().unwrap();
    let config = AnalyzerConfig::default()
        .with_output_dir(tmp.path().join("results"))
        .with_seed(2024);

    let outcome = ReportGenerator::new(config).run().unwrap();
    let json_path = outcome.files.json.expect("json written");
    let md_path = outcome.files.markdown.expect("markdown written");

    let parsed = read_report_json(&json_path).unwrap();
    assert_eq!(parsed, outcome.report);

    let markdown = fs::read_to_string(md_path).unwrap();
    assert_eq!(generate_report(&parsed), markdown);
}

#[test]
fn json_is_pretty_printed_with_expected_keys() {
    let tmp = tempfile::tempdir().unwrap();
    let config = AnalyzerConfig::default()
        .with_output_dir(tmp.path())
        .with_format(OutputFormat::Json)
        .with_seed(5);

    let outcome = ReportGenerator::new(config).run().unwrap();
    let text = fs::read_to_string(outcome.files.json.unwrap()).unwrap();
    assert!(text.starts_with("{\n  \"timestamp\": "));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    for key in ["timestamp", "docker", "gardenliminal", "analysis", "recommendations"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert!(value["recommendations"].is_array());
    for rec in value["recommendations"].as_array().unwrap() {
        assert!(rec["category"].is_string());
        assert!(rec["finding"].is_string());
        assert!(rec["recommendation"].is_string());
    }
}

#[test]
fn every_run_has_at_most_one_overall_entry() {
    for seed in 0..200 {
        let config = AnalyzerConfig::default().with_seed(seed);
        let report = ReportGenerator::new(config).generate();
        let overall = report.analysis.overall_improvement_pct;
        let count = report
            .recommendations
            .iter()
            .filter(|r| r.category == Category::Overall)
            .count();
        let expected = usize::from(overall > 40.0 || overall < 20.0);
        assert_eq!(count, expected, "seed {seed}, overall {overall}");
    }
}

#[test]
fn markdown_only_run_skips_json() {
    let tmp = tempfile::tempdir().unwrap();
    let config = AnalyzerConfig::default()
        .with_output_dir(tmp.path())
        .with_format(OutputFormat::Markdown);

    let outcome = ReportGenerator::new(config).run().unwrap();
    assert!(outcome.files.json.is_none());
    let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}
