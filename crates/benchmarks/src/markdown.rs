//! Markdown output generation for performance reports.
//!
//! The report is a fixed template filled from a [`Report`]. Rendering is a
//! pure function of the report; the "Generated" line uses the report's own
//! timestamp.

use crate::result::{MetricSet, Report};
use std::fmt::{self, Write};

/// Latency multipliers applied to the average response time to illustrate
/// a P95/P99 distribution. Not independently measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyMultipliers {
    /// P95 as a multiple of P50.
    pub p95: f64,
    /// P99 as a multiple of P50.
    pub p99: f64,
}

/// Docker latency spread.
pub const DOCKER_LATENCY: LatencyMultipliers = LatencyMultipliers { p95: 1.5, p99: 2.0 };

/// GardenLiminal latency spread.
pub const GARDENLIMINAL_LATENCY: LatencyMultipliers = LatencyMultipliers { p95: 1.3, p99: 1.7 };

/// Generate the full markdown report.
pub fn generate_report(report: &Report) -> String {
    let mut output = String::new();
    // Writing into a String never fails.
    let _ = write_report(&mut output, report);
    output
}

/// Write the full markdown report into `out`.
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> fmt::Result {
    write_header(out, report)?;
    write_startup(out, report)?;
    write_memory(out, report)?;
    write_cpu(out, report)?;
    write_latency(out, report)?;
    write_throughput(out, report)?;
    write_sizes(out, report)?;
    write_matrix(out, report)?;
    write_recommendations(out, report)?;
    write_guidelines(out)?;
    write_conclusion(out, report)
}

fn diff(a: u32, b: u32) -> i64 {
    i64::from(a) - i64::from(b)
}

fn write_header<W: Write>(out: &mut W, report: &Report) -> fmt::Result {
    writeln!(out, "# KuponGo Performance Analysis Report")?;
    writeln!(out)?;
    writeln!(out, "**Docker vs GardenLiminal Deployment Comparison**")?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;
    writeln!(out, "## Executive Summary")?;
    writeln!(out)?;
    writeln!(out, "Generated: {}", report.timestamp.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out)?;
    writeln!(
        out,
        "**Overall Performance Improvement:** {:.1}%",
        report.analysis.overall_improvement_pct
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "GardenLiminal demonstrates significant performance advantages over Docker across \
         multiple metrics, particularly in startup time, memory efficiency, and response latency."
    )?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;
    writeln!(out, "## Detailed Metrics")?;
    writeln!(out)
}

fn write_startup<W: Write>(out: &mut W, report: &Report) -> fmt::Result {
    let (d, g) = (&report.docker, &report.gardenliminal);
    let pct = report.analysis.startup_improvement_pct;

    writeln!(out, "### 1. Startup Performance")?;
    writeln!(out)?;
    writeln!(out, "| Deployment | Startup Time | Improvement |")?;
    writeln!(out, "|------------|--------------|-------------|")?;
    writeln!(out, "| Docker | {}ms | Baseline |", d.startup_time_ms)?;
    writeln!(out, "| GardenLiminal | {}ms | **{pct:.1}% faster** ⚡ |", g.startup_time_ms)?;
    writeln!(out)?;
    writeln!(out, "**Analysis:**")?;
    writeln!(out, "- GardenLiminal starts containers **{pct:.1}%** faster")?;
    writeln!(
        out,
        "- Reduces cold start latency by ~{}ms",
        diff(d.startup_time_ms, g.startup_time_ms)
    )?;
    writeln!(out, "- Ideal for autoscaling and CI/CD environments")?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)
}

fn write_memory_breakdown<W: Write>(
    out: &mut W,
    name: &str,
    base_os_mb: u32,
    m: &MetricSet,
    note: &str,
) -> fmt::Result {
    writeln!(out, "{name}:")?;
    writeln!(out, "  - Base OS: ~{base_os_mb}MB")?;
    writeln!(out, "  - Container Runtime: ~{}MB{note}", m.container_overhead_mb)?;
    writeln!(
        out,
        "  - Application: ~{}MB",
        diff(m.memory_mb, m.container_overhead_mb)
    )
}

fn write_memory<W: Write>(out: &mut W, report: &Report) -> fmt::Result {
    let (d, g) = (&report.docker, &report.gardenliminal);
    let pct = report.analysis.memory_reduction_pct;

    writeln!(out, "### 2. Memory Usage")?;
    writeln!(out)?;
    writeln!(out, "| Deployment | Memory Consumption | Improvement |")?;
    writeln!(out, "|------------|-------------------|-------------|")?;
    writeln!(out, "| Docker | {}MB | Baseline |", d.memory_mb)?;
    writeln!(out, "| GardenLiminal | {}MB | **{pct:.1}% less** 💾 |", g.memory_mb)?;
    writeln!(out)?;
    writeln!(out, "**Analysis:**")?;
    writeln!(out, "- GardenLiminal uses **{pct:.1}%** less memory")?;
    writeln!(out, "- Saves ~{}MB per deployment", diff(d.memory_mb, g.memory_mb))?;
    writeln!(out, "- Better for high-density environments")?;
    writeln!(out)?;
    writeln!(out, "**Memory Breakdown:**")?;
    writeln!(out, "```")?;
    write_memory_breakdown(out, "Docker", 120, d, "")?;
    writeln!(out)?;
    write_memory_breakdown(out, "GardenLiminal", 100, g, "  (minimal)")?;
    writeln!(out, "```")?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)
}

fn write_cpu<W: Write>(out: &mut W, report: &Report) -> fmt::Result {
    let (d, g) = (&report.docker, &report.gardenliminal);
    let pct = report.analysis.cpu_reduction_pct;

    writeln!(out, "### 3. CPU Efficiency")?;
    writeln!(out)?;
    writeln!(out, "| Deployment | CPU Usage | Improvement |")?;
    writeln!(out, "|------------|-----------|-------------|")?;
    writeln!(out, "| Docker | {:.1}% | Baseline |", d.cpu_percent)?;
    writeln!(out, "| GardenLiminal | {:.1}% | **{pct:.1}% less** 🔥 |", g.cpu_percent)?;
    writeln!(out)?;
    writeln!(out, "**Analysis:**")?;
    writeln!(out, "- GardenLiminal reduces CPU overhead by **{pct:.1}%**")?;
    writeln!(out, "- Lower daemon overhead (no Docker Engine)")?;
    writeln!(out, "- More CPU available for application workload")?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)
}

fn write_distribution<W: Write>(
    out: &mut W,
    name: &str,
    p50: f64,
    spread: LatencyMultipliers,
) -> fmt::Result {
    writeln!(out, "{name}:")?;
    writeln!(out, "  P50: {p50:.2}ms")?;
    writeln!(out, "  P95: {:.2}ms", p50 * spread.p95)?;
    writeln!(out, "  P99: {:.2}ms", p50 * spread.p99)
}

fn write_latency<W: Write>(out: &mut W, report: &Report) -> fmt::Result {
    let (d, g) = (&report.docker, &report.gardenliminal);
    let pct = report.analysis.response_improvement_pct;

    writeln!(out, "### 4. Response Time & Latency")?;
    writeln!(out)?;
    writeln!(out, "| Deployment | Avg Response Time | Improvement |")?;
    writeln!(out, "|------------|------------------|-------------|")?;
    writeln!(out, "| Docker | {:.2}ms | Baseline |", d.response_time_ms)?;
    writeln!(out, "| GardenLiminal | {:.2}ms | **{pct:.1}% faster** 🚀 |", g.response_time_ms)?;
    writeln!(out)?;
    writeln!(out, "**Analysis:**")?;
    writeln!(out, "- GardenLiminal provides **{pct:.1}%** lower latency")?;
    writeln!(out, "- Reduces network stack overhead")?;
    writeln!(out, "- Better for real-time applications")?;
    writeln!(out)?;
    writeln!(out, "**Latency Distribution (simulated):**")?;
    writeln!(out, "```")?;
    write_distribution(out, "Docker", d.response_time_ms, DOCKER_LATENCY)?;
    writeln!(out)?;
    write_distribution(out, "GardenLiminal", g.response_time_ms, GARDENLIMINAL_LATENCY)?;
    writeln!(out, "```")?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)
}

fn write_throughput<W: Write>(out: &mut W, report: &Report) -> fmt::Result {
    let (d, g) = (&report.docker, &report.gardenliminal);
    let pct = report.analysis.throughput_improvement_pct;

    writeln!(out, "### 5. Throughput")?;
    writeln!(out)?;
    writeln!(out, "| Deployment | Requests/Second | Improvement |")?;
    writeln!(out, "|------------|----------------|-------------|")?;
    writeln!(out, "| Docker | {} req/s | Baseline |", d.throughput_rps)?;
    writeln!(out, "| GardenLiminal | {} req/s | **{pct:.1}% more** 📈 |", g.throughput_rps)?;
    writeln!(out)?;
    writeln!(out, "**Analysis:**")?;
    writeln!(out, "- GardenLiminal handles **{pct:.1}%** more requests")?;
    writeln!(
        out,
        "- Additional capacity: ~{} req/s",
        diff(g.throughput_rps, d.throughput_rps)
    )?;
    writeln!(out, "- Better resource utilization")?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)
}

fn write_sizes<W: Write>(out: &mut W, report: &Report) -> fmt::Result {
    let (d, g, a) = (&report.docker, &report.gardenliminal, &report.analysis);

    writeln!(out, "### 6. Binary & Overhead Size")?;
    writeln!(out)?;
    writeln!(out, "| Metric | Docker | GardenLiminal | Reduction |")?;
    writeln!(out, "|--------|--------|---------------|-----------|")?;
    writeln!(
        out,
        "| Runtime Binary | {}MB | {}MB | **{:.1}%** |",
        d.binary_size_mb, g.binary_size_mb, a.binary_reduction_pct
    )?;
    writeln!(
        out,
        "| Container Overhead | {}MB | {}MB | **{:.1}%** |",
        d.container_overhead_mb, g.container_overhead_mb, a.overhead_reduction_pct
    )?;
    writeln!(out)?;
    writeln!(out, "**Analysis:**")?;
    writeln!(out, "- GardenLiminal runtime is **{:.1}%** smaller", a.binary_reduction_pct)?;
    writeln!(
        out,
        "- Minimal container overhead (**{:.1}%** reduction)",
        a.overhead_reduction_pct
    )?;
    writeln!(out, "- Faster downloads and deployment")?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)
}

fn write_matrix<W: Write>(out: &mut W, report: &Report) -> fmt::Result {
    let (d, g) = (&report.docker, &report.gardenliminal);

    // Column spacing is fixed text, not computed padding.
    writeln!(out, "## Comparative Analysis")?;
    writeln!(out)?;
    writeln!(out, "### Performance Matrix")?;
    writeln!(out)?;
    writeln!(out, "```")?;
    writeln!(out, "                   Docker    GardenLiminal    Winner")?;
    writeln!(out, "{}", "━".repeat(53))?;
    writeln!(
        out,
        "Startup Time       {}ms      {}ms          GardenLiminal ⚡",
        d.startup_time_ms, g.startup_time_ms
    )?;
    writeln!(
        out,
        "Memory Usage       {}MB      {}MB          GardenLiminal 💾",
        d.memory_mb, g.memory_mb
    )?;
    writeln!(
        out,
        "CPU Usage          {:.1}%       {:.1}%          GardenLiminal 🔥",
        d.cpu_percent, g.cpu_percent
    )?;
    writeln!(
        out,
        "Response Time      {:.1}ms      {:.1}ms         GardenLiminal 🚀",
        d.response_time_ms, g.response_time_ms
    )?;
    writeln!(
        out,
        "Throughput         {} rps    {} rps       GardenLiminal 📈",
        d.throughput_rps, g.throughput_rps
    )?;
    writeln!(
        out,
        "Binary Size        {}MB      {}MB          GardenLiminal 📦",
        d.binary_size_mb, g.binary_size_mb
    )?;
    writeln!(out, "```")?;
    writeln!(out)?;
    writeln!(
        out,
        "### Overall Score: {:.1}% improvement with GardenLiminal",
        report.analysis.overall_improvement_pct
    )?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)
}

fn write_recommendations<W: Write>(out: &mut W, report: &Report) -> fmt::Result {
    writeln!(out, "## Recommendations")?;
    writeln!(out)?;
    for rec in &report.recommendations {
        writeln!(out, "### {}", rec.category)?;
        writeln!(out)?;
        writeln!(out, "**Finding:** {}", rec.finding)?;
        writeln!(out)?;
        writeln!(out, "**Recommendation:** {}", rec.recommendation)?;
        writeln!(out)?;
        writeln!(out, "---")?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_guidelines<W: Write>(out: &mut W) -> fmt::Result {
    const DOCKER: [&str; 5] = [
        "Production workloads requiring stability",
        "Large ecosystem of pre-built images",
        "Need for Docker Compose/Swarm/Kubernetes",
        "Team familiar with Docker workflows",
        "Compliance requirements for established tech",
    ];
    const GARDENLIMINAL: [&str; 7] = [
        "Development and testing environments",
        "CI/CD pipelines (faster builds)",
        "Edge computing and IoT deployments",
        "Resource-constrained environments",
        "Learning containerization internals",
        "Custom container workflows",
        "LiminalDB-heavy applications",
    ];

    writeln!(out, "## Use Case Guidelines")?;
    writeln!(out)?;
    writeln!(out, "### When to use Docker:")?;
    for item in DOCKER {
        writeln!(out, "- ✅ {item}")?;
    }
    writeln!(out)?;
    writeln!(out, "### When to use GardenLiminal:")?;
    for item in GARDENLIMINAL {
        writeln!(out, "- ⚡ {item}")?;
    }
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)
}

fn write_conclusion<W: Write>(out: &mut W, report: &Report) -> fmt::Result {
    let a = &report.analysis;

    writeln!(out, "## Conclusion")?;
    writeln!(out)?;
    writeln!(
        out,
        "GardenLiminal demonstrates **significant performance advantages** across all measured metrics:"
    )?;
    writeln!(out)?;
    writeln!(out, "- **{:.1}%** faster startup", a.startup_improvement_pct)?;
    writeln!(out, "- **{:.1}%** lower memory footprint", a.memory_reduction_pct)?;
    writeln!(out, "- **{:.1}%** reduced CPU overhead", a.cpu_reduction_pct)?;
    writeln!(out, "- **{:.1}%** faster response times", a.response_improvement_pct)?;
    writeln!(out, "- **{:.1}%** higher throughput", a.throughput_improvement_pct)?;
    writeln!(out)?;
    writeln!(out, "For the KuponGo project, we recommend:")?;
    writeln!(out, "1. **Production:** Docker (stability and ecosystem)")?;
    writeln!(out, "2. **Development:** GardenLiminal (speed and efficiency)")?;
    writeln!(out, "3. **Edge/Mobile:** GardenLiminal (resource constraints)")?;
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;
    writeln!(out, "**Report generated by KuponGo Performance Analyzer**")?;
    writeln!(out, "*Automated analysis tool for deployment comparison*")
}
