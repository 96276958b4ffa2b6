// Copyright 2025 KuponGo Contributors
// SPDX-License-Identifier: Apache-2.0

//! Comparative statistics between the baseline and the comparison runtime.
//!
//! Each delta is a relative change against the baseline value, expressed so
//! that a positive number always favors the comparison runtime:
//!
//! ```text
//! lower is better:  (baseline - comparison) / baseline * 100
//! higher is better: (comparison - baseline) / baseline * 100
//! ```
//!
//! Baseline values are never zero because they are drawn from strictly
//! positive intervals, so the division is not guarded.

use crate::result::{ComparisonResult, MetricSet};

/// Weights of the five scored deltas in the overall improvement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Startup time weight.
    pub startup: f64,
    /// Memory weight.
    pub memory: f64,
    /// CPU weight.
    pub cpu: f64,
    /// Response time weight.
    pub response: f64,
    /// Throughput weight.
    pub throughput: f64,
}

impl ScoreWeights {
    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.startup + self.memory + self.cpu + self.response + self.throughput
    }
}

/// Overall score weights. Overhead and binary size are not scored.
pub const SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    startup: 0.20,
    memory: 0.25,
    cpu: 0.20,
    response: 0.20,
    throughput: 0.15,
};

/// Relative reduction in percent, for metrics where lower is better.
pub fn reduction_pct(baseline: f64, comparison: f64) -> f64 {
    (baseline - comparison) / baseline * 100.0
}

/// Relative increase in percent, for metrics where higher is better.
pub fn increase_pct(baseline: f64, comparison: f64) -> f64 {
    (comparison - baseline) / baseline * 100.0
}

/// Round to one decimal place.
///
/// Rounds the exact binary value with ties to even, so `70.25` becomes
/// `70.2` and `70.75` becomes `70.8`. `{:.1}` output always parses back.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Compute every delta of `comparison` against `baseline`.
///
/// The overall score is the weighted sum of the unrounded deltas; only the
/// final sum is rounded.
pub fn compare(baseline: &MetricSet, comparison: &MetricSet) -> ComparisonResult {
    let startup = reduction_pct(
        f64::from(baseline.startup_time_ms),
        f64::from(comparison.startup_time_ms),
    );
    let memory = reduction_pct(f64::from(baseline.memory_mb), f64::from(comparison.memory_mb));
    let cpu = reduction_pct(baseline.cpu_percent, comparison.cpu_percent);
    let response = reduction_pct(baseline.response_time_ms, comparison.response_time_ms);
    let throughput = increase_pct(
        f64::from(baseline.throughput_rps),
        f64::from(comparison.throughput_rps),
    );
    let overhead = reduction_pct(
        f64::from(baseline.container_overhead_mb),
        f64::from(comparison.container_overhead_mb),
    );
    let binary = reduction_pct(
        f64::from(baseline.binary_size_mb),
        f64::from(comparison.binary_size_mb),
    );

    let w = SCORE_WEIGHTS;
    let overall = startup * w.startup
        + memory * w.memory
        + cpu * w.cpu
        + response * w.response
        + throughput * w.throughput;

    ComparisonResult {
        startup_improvement_pct: round1(startup),
        memory_reduction_pct: round1(memory),
        cpu_reduction_pct: round1(cpu),
        response_improvement_pct: round1(response),
        throughput_improvement_pct: round1(throughput),
        overhead_reduction_pct: round1(overhead),
        binary_reduction_pct: round1(binary),
        overall_improvement_pct: round1(overall),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MetricGenerator;
    use pretty_assertions::assert_eq;

    fn docker() -> MetricSet {
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

    fn gardenliminal() -> MetricSet {
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
    fn test_reference_scenario() {
        let analysis = compare(&docker(), &gardenliminal());
        assert_eq!(
            analysis,
            ComparisonResult {
                startup_improvement_pct: 80.0,
                memory_reduction_pct: 66.7,
                cpu_reduction_pct: 50.0,
                response_improvement_pct: 50.0,
                throughput_improvement_pct: 50.0,
                overhead_reduction_pct: 80.0,
                binary_reduction_pct: 90.0,
                overall_improvement_pct: 60.2,
            }
        );
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((SCORE_WEIGHTS.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_throughput_sign_is_inverted() {
        assert_eq!(reduction_pct(200.0, 300.0), -50.0);
        assert_eq!(increase_pct(200.0, 300.0), 50.0);
    }

    #[test]
    fn test_regression_yields_negative_delta() {
        let mut slower = gardenliminal();
        slower.startup_time_ms = 600;
        slower.throughput_rps = 150;
        let analysis = compare(&docker(), &slower);
        assert_eq!(analysis.startup_improvement_pct, -20.0);
        assert_eq!(analysis.throughput_improvement_pct, -25.0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(66.666_666), 66.7);
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(-7.25), -7.2);
        assert_eq!(round1(50.0), 50.0);
    }

    #[test]
    fn test_round1_ties_to_even() {
        assert_eq!(round1(70.25), 70.2);
        assert_eq!(round1(56.25), 56.2);
        assert_eq!(round1(70.75), 70.8);
        assert_eq!(round1(0.15), 0.1);
    }

    #[test]
    fn test_exact_tie_deltas() {
        let mut d = docker();
        d.startup_time_ms = 400;
        d.memory_mb = 640;
        let mut g = gardenliminal();
        g.startup_time_ms = 119;
        g.memory_mb = 280;

        let analysis = compare(&d, &g);
        assert_eq!(analysis.startup_improvement_pct, 70.2);
        assert_eq!(analysis.memory_reduction_pct, 56.2);
    }

    #[test]
    fn test_excluded_deltas_do_not_affect_overall() {
        let mut other = gardenliminal();
        other.container_overhead_mb = 179;
        other.binary_size_mb = 99;
        let base = compare(&docker(), &gardenliminal());
        let changed = compare(&docker(), &other);
        assert_eq!(base.overall_improvement_pct, changed.overall_improvement_pct);
        assert_ne!(base.overhead_reduction_pct, changed.overhead_reduction_pct);
        assert_ne!(base.binary_reduction_pct, changed.binary_reduction_pct);
    }

    #[test]
    fn test_generated_deltas_match_formulas() {
        let mut generator = MetricGenerator::with_seed(7);
        for _ in 0..200 {
            let (d, g) = generator.generate();
            let analysis = compare(&d, &g);

            let expected_cpu = round1((d.cpu_percent - g.cpu_percent) / d.cpu_percent * 100.0);
            assert_eq!(analysis.cpu_reduction_pct, expected_cpu);

            let expected_tp = round1(
                (f64::from(g.throughput_rps) - f64::from(d.throughput_rps))
                    / f64::from(d.throughput_rps)
                    * 100.0,
            );
            assert_eq!(analysis.throughput_improvement_pct, expected_tp);

            // Rounded deltas differ from the unrounded ones by at most 0.05 each,
            // so the weighted sums differ by at most 0.05 before final rounding.
            let from_rounded = analysis.startup_improvement_pct * SCORE_WEIGHTS.startup
                + analysis.memory_reduction_pct * SCORE_WEIGHTS.memory
                + analysis.cpu_reduction_pct * SCORE_WEIGHTS.cpu
                + analysis.response_improvement_pct * SCORE_WEIGHTS.response
                + analysis.throughput_improvement_pct * SCORE_WEIGHTS.throughput;
            assert!((analysis.overall_improvement_pct - from_rounded).abs() <= 0.1 + 1e-9);
        }
    }
}
