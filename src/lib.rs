//! Fixtures shared by the workspace-level integration tests.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Contents of `tests/testdata/golden.json`.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub fibonacci: Vec<FibonacciCase>,
    pub max_subarray: Vec<SubarrayCase>,
}

/// A known Fibonacci value.
#[derive(Debug, Deserialize)]
pub struct FibonacciCase {
    pub n: i64,
    pub value: u64,
}

/// A sequence with its maximum subarray sum.
#[derive(Debug, Deserialize)]
pub struct SubarrayCase {
    pub name: String,
    pub input: Vec<i32>,
    pub expected: i64,
}

/// Load the golden data file.
pub fn load_golden() -> Result<GoldenData> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/golden.json");
    let data = std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    serde_json::from_str(&data).context("failed to parse golden JSON")
}
