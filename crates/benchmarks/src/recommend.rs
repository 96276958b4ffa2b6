// Copyright 2025 KuponGo Contributors
// SPDX-License-Identifier: Apache-2.0

//! Threshold-based deployment recommendations.
//!
//! Rules are evaluated in declaration order and each produces at most one
//! [`Recommendation`]. The overall score has two mutually exclusive rules;
//! a score in `[20, 40]` produces no overall entry.

use crate::result::{Category, ComparisonResult, Delta, Recommendation};
use tracing::debug;

/// A single "delta above threshold" rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Category of the produced recommendation.
    pub category: Category,
    /// Delta the rule inspects.
    pub delta: Delta,
    /// The rule fires when the delta is strictly greater than this.
    pub threshold: f64,
    /// Finding text before the percentage.
    pub finding_prefix: &'static str,
    /// Finding text after the percentage sign.
    pub finding_suffix: &'static str,
    /// Fixed advisory text.
    pub recommendation: &'static str,
}

impl Rule {
    fn evaluate(&self, analysis: &ComparisonResult) -> Option<Recommendation> {
        let value = analysis.get(self.delta);
        (value > self.threshold).then(|| {
            Recommendation::new(
                self.category,
                format!("{}{:.1}%{}", self.finding_prefix, value, self.finding_suffix),
                self.recommendation,
            )
        })
    }
}

/// Per-metric rules, in evaluation order.
pub const METRIC_RULES: [Rule; 5] = [
    Rule {
        category: Category::StartupPerformance,
        delta: Delta::Startup,
        threshold: 50.0,
        finding_prefix: "GardenLiminal is ",
        finding_suffix: " faster at startup",
        recommendation: "Use GardenLiminal for CI/CD pipelines and development",
    },
    Rule {
        category: Category::MemoryEfficiency,
        delta: Delta::Memory,
        threshold: 40.0,
        finding_prefix: "GardenLiminal uses ",
        finding_suffix: " less memory",
        recommendation: "Deploy with GardenLiminal on resource-constrained environments",
    },
    Rule {
        category: Category::CpuEfficiency,
        delta: Delta::Cpu,
        threshold: 30.0,
        finding_prefix: "GardenLiminal reduces CPU usage by ",
        finding_suffix: "",
        recommendation: "Ideal for high-density deployments and edge computing",
    },
    Rule {
        category: Category::Latency,
        delta: Delta::Response,
        threshold: 30.0,
        finding_prefix: "GardenLiminal provides ",
        finding_suffix: " faster responses",
        recommendation: "Better for latency-sensitive applications",
    },
    Rule {
        category: Category::Throughput,
        delta: Delta::Throughput,
        threshold: 20.0,
        finding_prefix: "GardenLiminal handles ",
        finding_suffix: " more requests",
        recommendation: "Suitable for high-traffic scenarios",
    },
];

/// Overall score above which GardenLiminal is recommended outright.
pub const OVERALL_STRONG_THRESHOLD: f64 = 40.0;

/// Overall score below which Docker is recommended.
pub const OVERALL_MODEST_THRESHOLD: f64 = 20.0;

fn overall_recommendation(overall: f64) -> Option<Recommendation> {
    if overall > OVERALL_STRONG_THRESHOLD {
        Some(Recommendation::new(
            Category::Overall,
            format!("Overall performance improvement: {overall:.1}%"),
            "GardenLiminal is significantly better for this workload",
        ))
    } else if overall < OVERALL_MODEST_THRESHOLD {
        Some(Recommendation::new(
            Category::Overall,
            format!("Modest improvement: {overall:.1}%"),
            "Stick with Docker for production stability",
        ))
    } else {
        None
    }
}

/// Derive all recommendations for `analysis`.
pub fn derive_recommendations(analysis: &ComparisonResult) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = METRIC_RULES
        .iter()
        .filter_map(|rule| rule.evaluate(analysis))
        .collect();
    recommendations.extend(overall_recommendation(analysis.overall_improvement_pct));

    debug!(count = recommendations.len(), "Derived recommendations");
    recommendations
}
