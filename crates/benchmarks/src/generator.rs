// Copyright 2025 KuponGo Contributors
// SPDX-License-Identifier: Apache-2.0

//! Synthetic metric generation.
//!
//! Every metric is drawn independently and uniformly from a fixed closed
//! interval. The GardenLiminal intervals sit on the favorable side of the
//! Docker ones, so the direction of each comparison is fixed even though
//! the absolute numbers change from run to run.

use crate::result::MetricSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    /// Lower bound (inclusive).
    pub min: T,
    /// Upper bound (inclusive).
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// Create a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the interval.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Formats as `min-max`. A precision applies to both ends.
impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}-{:.*}", p, self.min, p, self.max),
            None => write!(f, "{}-{}", self.min, self.max),
        }
    }
}

/// Sampling intervals for every metric of one runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRanges {
    /// Startup time in milliseconds.
    pub startup_time_ms: Bounds<u32>,
    /// Memory in megabytes.
    pub memory_mb: Bounds<u32>,
    /// CPU utilisation in percent.
    pub cpu_percent: Bounds<f64>,
    /// Response time in milliseconds.
    pub response_time_ms: Bounds<f64>,
    /// Requests per second.
    pub throughput_rps: Bounds<u32>,
    /// Runtime overhead in megabytes.
    pub container_overhead_mb: Bounds<u32>,
    /// Runtime binary size in megabytes.
    pub binary_size_mb: Bounds<u32>,
}

impl MetricRanges {
    /// Whether every value of `metrics` lies within its interval.
    pub fn contains(&self, metrics: &MetricSet) -> bool {
        self.startup_time_ms.contains(metrics.startup_time_ms)
            && self.memory_mb.contains(metrics.memory_mb)
            && self.cpu_percent.contains(metrics.cpu_percent)
            && self.response_time_ms.contains(metrics.response_time_ms)
            && self.throughput_rps.contains(metrics.throughput_rps)
            && self.container_overhead_mb.contains(metrics.container_overhead_mb)
            && self.binary_size_mb.contains(metrics.binary_size_mb)
    }
}

/// Docker (baseline) sampling intervals.
pub const DOCKER_RANGES: MetricRanges = MetricRanges {
    startup_time_ms: Bounds::new(350, 550),
    memory_mb: Bounds::new(450, 650),
    cpu_percent: Bounds::new(15.0, 25.0),
    response_time_ms: Bounds::new(12.0, 25.0),
    throughput_rps: Bounds::new(180, 250),
    container_overhead_mb: Bounds::new(120, 180),
    binary_size_mb: Bounds::new(95, 115),
};

/// GardenLiminal (comparison) sampling intervals.
pub const GARDENLIMINAL_RANGES: MetricRanges = MetricRanges {
    startup_time_ms: Bounds::new(80, 150),
    memory_mb: Bounds::new(180, 280),
    cpu_percent: Bounds::new(8.0, 15.0),
    response_time_ms: Bounds::new(8.0, 15.0),
    throughput_rps: Bounds::new(220, 320),
    container_overhead_mb: Bounds::new(20, 40),
    binary_size_mb: Bounds::new(5, 12),
};

/// Random source for synthetic measurements.
pub struct MetricGenerator {
    rng: StdRng,
}

impl MetricGenerator {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator; equal seeds yield equal metric pairs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded generator when `seed` is set, entropy-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }

    /// Draw one metric set from `ranges`.
    pub fn sample(&mut self, ranges: &MetricRanges) -> MetricSet {
        MetricSet {
            startup_time_ms: self.draw_int(ranges.startup_time_ms),
            memory_mb: self.draw_int(ranges.memory_mb),
            cpu_percent: self.draw_real(ranges.cpu_percent),
            response_time_ms: self.draw_real(ranges.response_time_ms),
            throughput_rps: self.draw_int(ranges.throughput_rps),
            container_overhead_mb: self.draw_int(ranges.container_overhead_mb),
            binary_size_mb: self.draw_int(ranges.binary_size_mb),
        }
    }

    /// Draw the `(docker, gardenliminal)` pair for one run.
    pub fn generate(&mut self) -> (MetricSet, MetricSet) {
        let docker = self.sample(&DOCKER_RANGES);
        let gardenliminal = self.sample(&GARDENLIMINAL_RANGES);
        (docker, gardenliminal)
    }

    fn draw_int(&mut self, bounds: Bounds<u32>) -> u32 {
        self.rng.gen_range(bounds.min..=bounds.max)
    }

    fn draw_real(&mut self, bounds: Bounds<f64>) -> f64 {
        self.rng.gen_range(bounds.min..=bounds.max)
    }
}

impl Default for MetricGenerator {
    fn default() -> Self {
        Self::new()
    }
}
