//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use algobench_core::limits::Limits;
use algobench_core::workload::DEFAULT_SEED;

/// Problem family to benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Problem {
    /// F(n) with recursion, memoization, or iteration.
    Fibonacci,
    /// Largest contiguous sum with brute force, DP, or Kadane.
    MaxSubarray,
}

/// algobench: compare Fibonacci and maximum-subarray strategies.
#[derive(Parser, Debug)]
#[command(name = "algobench", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Problem to run.
    #[arg(long, value_enum, default_value_t = Problem::Fibonacci)]
    pub problem: Problem,

    /// Strategy name, or "all".
    ///
    /// Fibonacci: recursive, memoization, iterative.
    /// Max-subarray: bruteforce, dp, kadane.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Fibonacci index.
    #[arg(
        short,
        long,
        default_value = "30",
        env = "ALGOBENCH_N",
        allow_negative_numbers = true
    )]
    pub n: i64,

    /// Comma-separated integers for max-subarray (e.g. "-2,1,-3,4").
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with = "random_len"
    )]
    pub array: Vec<i32>,

    /// Generate a pseudo-random sequence of this length instead of --array.
    #[arg(long)]
    pub random_len: Option<usize>,

    /// Seed for --random-len.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Walk through the standard input sizes instead of a single input.
    #[arg(long)]
    pub sweep: bool,

    /// Run the selected strategies concurrently.
    #[arg(long)]
    pub parallel: bool,

    /// Report best-effort resident memory deltas.
    #[arg(long)]
    pub memory: bool,

    /// Timeout per strategy (e.g., "5m", "30s", "500ms").
    #[arg(long, default_value = "5m")]
    pub timeout: String,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Write a JSON report to this path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not apply input ceilings.
    #[arg(long)]
    pub no_limits: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse timeout string into Duration.
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        parse_duration(&self.timeout).unwrap_or(Duration::from_secs(300))
    }

    /// Input ceilings for this run.
    #[must_use]
    pub fn limits(&self) -> Limits {
        if self.no_limits {
            Limits::unbounded()
        } else {
            Limits::default()
        }
    }
}

/// Parse a duration string like "5m", "1h", "30s", "500ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        Some(Duration::from_millis(ms.parse().ok()?))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n * 3600))
    } else if let Some(secs) = s.strip_suffix('s') {
        Some(Duration::from_secs(secs.parse().ok()?))
    } else {
        Some(Duration::from_secs(s.parse().ok()?))
    }
}
