//! Performance report types.
//!
//! This module provides the value records that flow through one analysis
//! run: the per-runtime [`MetricSet`], the derived [`ComparisonResult`],
//! threshold-triggered [`Recommendation`]s and the terminal [`Report`].
//! Field declaration order is the JSON key order.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One runtime's snapshot of performance numbers for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    /// Container startup time in milliseconds.
    pub startup_time_ms: u32,
    /// Resident memory in megabytes.
    pub memory_mb: u32,
    /// CPU utilisation in percent.
    pub cpu_percent: f64,
    /// Average response time in milliseconds.
    pub response_time_ms: f64,
    /// Requests served per second.
    pub throughput_rps: u32,
    /// Memory attributed to the container runtime itself, in megabytes.
    pub container_overhead_mb: u32,
    /// Size of the runtime binary in megabytes.
    pub binary_size_mb: u32,
}

/// Selects one delta of a [`ComparisonResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delta {
    /// `startup_improvement_pct`
    Startup,
    /// `memory_reduction_pct`
    Memory,
    /// `cpu_reduction_pct`
    Cpu,
    /// `response_improvement_pct`
    Response,
    /// `throughput_improvement_pct`
    Throughput,
    /// `overhead_reduction_pct`
    Overhead,
    /// `binary_reduction_pct`
    Binary,
    /// `overall_improvement_pct`
    Overall,
}

impl Delta {
    /// JSON field name of this delta.
    pub fn field_name(self) -> &'static str {
        match self {
            Delta::Startup => "startup_improvement_pct",
            Delta::Memory => "memory_reduction_pct",
            Delta::Cpu => "cpu_reduction_pct",
            Delta::Response => "response_improvement_pct",
            Delta::Throughput => "throughput_improvement_pct",
            Delta::Overhead => "overhead_reduction_pct",
            Delta::Binary => "binary_reduction_pct",
            Delta::Overall => "overall_improvement_pct",
        }
    }
}

/// Percentage deltas between the baseline and the comparison runtime.
///
/// Every value is rounded to one decimal place. A positive value always
/// means the comparison runtime (GardenLiminal) is better.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Startup time reduction.
    pub startup_improvement_pct: f64,
    /// Memory reduction.
    pub memory_reduction_pct: f64,
    /// CPU utilisation reduction.
    pub cpu_reduction_pct: f64,
    /// Response time reduction.
    pub response_improvement_pct: f64,
    /// Throughput increase.
    pub throughput_improvement_pct: f64,
    /// Container overhead reduction. Not part of the overall score.
    pub overhead_reduction_pct: f64,
    /// Binary size reduction. Not part of the overall score.
    pub binary_reduction_pct: f64,
    /// Weighted aggregate of the five scored deltas.
    pub overall_improvement_pct: f64,
}

impl ComparisonResult {
    /// Read one delta by selector.
    pub fn get(&self, delta: Delta) -> f64 {
        match delta {
            Delta::Startup => self.startup_improvement_pct,
            Delta::Memory => self.memory_reduction_pct,
            Delta::Cpu => self.cpu_reduction_pct,
            Delta::Response => self.response_improvement_pct,
            Delta::Throughput => self.throughput_improvement_pct,
            Delta::Overhead => self.overhead_reduction_pct,
            Delta::Binary => self.binary_reduction_pct,
            Delta::Overall => self.overall_improvement_pct,
        }
    }
}

/// Recommendation category, serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Startup time findings.
    #[serde(rename = "Startup Performance")]
    StartupPerformance,
    /// Memory findings.
    #[serde(rename = "Memory Efficiency")]
    MemoryEfficiency,
    /// CPU findings.
    #[serde(rename = "CPU Efficiency")]
    CpuEfficiency,
    /// Response time findings.
    #[serde(rename = "Latency")]
    Latency,
    /// Throughput findings.
    #[serde(rename = "Throughput")]
    Throughput,
    /// Aggregate score findings.
    #[serde(rename = "Overall")]
    Overall,
}

impl Category {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::StartupPerformance => "Startup Performance",
            Category::MemoryEfficiency => "Memory Efficiency",
            Category::CpuEfficiency => "CPU Efficiency",
            Category::Latency => "Latency",
            Category::Throughput => "Throughput",
            Category::Overall => "Overall",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A threshold-triggered advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Category the finding belongs to.
    pub category: Category,
    /// Finding text with the measured percentage interpolated.
    pub finding: String,
    /// Fixed advisory text.
    pub recommendation: String,
}

impl Recommendation {
    /// Create a new Recommendation.
    pub fn new(
        category: Category,
        finding: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            category,
            finding: finding.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Local time the report was generated.
    pub timestamp: DateTime<Local>,
    /// Baseline runtime metrics.
    pub docker: MetricSet,
    /// Comparison runtime metrics.
    pub gardenliminal: MetricSet,
    /// Derived deltas.
    pub analysis: ComparisonResult,
    /// Recommendations in rule evaluation order.
    pub recommendations: Vec<Recommendation>,
}

impl Report {
    /// `YYYYMMDD_HHMMSS` stamp used in output file names.
    pub fn file_stamp(&self) -> String {
        self.timestamp.format("%Y%m%d_%H%M%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::StartupPerformance).unwrap();
        assert_eq!(json, "\"Startup Performance\"");

        let parsed: Category = serde_json::from_str("\"CPU Efficiency\"").unwrap();
        assert_eq!(parsed, Category::CpuEfficiency);
        assert_eq!(parsed.to_string(), "CPU Efficiency");
    }

    #[test]
    fn test_metric_set_key_order() {
        let metrics = MetricSet {
            startup_time_ms: 1,
            memory_mb: 2,
            cpu_percent: 3.0,
            response_time_ms: 4.0,
            throughput_rps: 5,
            container_overhead_mb: 6,
            binary_size_mb: 7,
        };
        let json = serde_json::to_string(&metrics).unwrap();
        let keys = [
            "startup_time_ms",
            "memory_mb",
            "cpu_percent",
            "response_time_ms",
            "throughput_rps",
            "container_overhead_mb",
            "binary_size_mb",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_delta_field_names_match_serialized_keys() {
        let analysis = ComparisonResult {
            startup_improvement_pct: 1.0,
            memory_reduction_pct: 2.0,
            cpu_reduction_pct: 3.0,
            response_improvement_pct: 4.0,
            throughput_improvement_pct: 5.0,
            overhead_reduction_pct: 6.0,
            binary_reduction_pct: 7.0,
            overall_improvement_pct: 8.0,
        };
        let value = serde_json::to_value(analysis).unwrap();
        for delta in [
            Delta::Startup,
            Delta::Memory,
            Delta::Cpu,
            Delta::Response,
            Delta::Throughput,
            Delta::Overhead,
            Delta::Binary,
            Delta::Overall,
        ] {
            assert_eq!(value[delta.field_name()].as_f64(), Some(analysis.get(delta)));
        }
    }
}
