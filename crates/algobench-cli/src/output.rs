//! CLI output formatting and JSON reports.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Duration;

use serde::Serialize;

use algobench_core::harness::AlgorithmResult;
use algobench_orchestration::interfaces::CalculationResult;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a best-effort memory delta.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_memory(bytes: Option<i64>) -> String {
    let Some(bytes) = bytes else {
        return "n/a".to_string();
    };
    let sign = if bytes < 0 { "-" } else { "" };
    let abs = bytes.unsigned_abs();
    if abs < 1024 {
        format!("{sign}{abs} B")
    } else if abs < 1024 * 1024 {
        format!("{sign}{:.1} KiB", abs as f64 / 1024.0)
    } else {
        format!("{sign}{:.1} MiB", abs as f64 / (1024.0 * 1024.0))
    }
}

/// Short description of a sequence for display.
#[must_use]
pub fn describe_sequence(nums: &[i32]) -> String {
    const PREVIEW: usize = 8;
    if nums.len() <= PREVIEW {
        format!("{nums:?}")
    } else {
        let head: Vec<String> = nums[..PREVIEW].iter().map(ToString::to_string).collect();
        format!(
            "[{}, ...] ({} elements)",
            head.join(", "),
            format_number(nums.len() as u64)
        )
    }
}

/// One row of a JSON report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord<'a, T> {
    /// Strategy name.
    pub algorithm: &'a str,
    /// Human description of the input.
    pub input: String,
    /// Measurement fields, flattened into the record on success.
    #[serde(flatten)]
    pub measurement: Option<&'a AlgorithmResult<T>>,
    /// Error message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Build report rows for one batch.
#[must_use]
pub fn to_records<'a, T>(input: &str, results: &'a [CalculationResult<T>]) -> Vec<RunRecord<'a, T>> {
    results
        .iter()
        .map(|r| RunRecord {
            algorithm: &r.algorithm,
            input: input.to_string(),
            measurement: r.outcome.as_ref().ok(),
            error: r.outcome.as_ref().err().map(ToString::to_string),
        })
        .collect()
}

/// Write a report to a file as pretty JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report<S: Serialize + ?Sized>(path: &str, report: &S) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()
}
