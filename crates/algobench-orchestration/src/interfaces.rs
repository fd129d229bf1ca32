//! Orchestration interfaces.

use std::fmt::Display;
use std::time::Duration;

use algobench_core::calculator::AlgoError;
use algobench_core::harness::AlgorithmResult;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one measured result. `input` describes what was computed.
    fn present_result<T: Display>(&self, algorithm: &str, input: &str, result: &AlgorithmResult<T>);

    /// Present a side-by-side comparison.
    fn present_comparison<T>(&self, results: &[CalculationResult<T>]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of running a single strategy.
#[derive(Debug, Clone)]
pub struct CalculationResult<T> {
    /// Strategy name.
    pub algorithm: String,
    /// The measurement or a structured error.
    pub outcome: Result<AlgorithmResult<T>, AlgoError>,
}

impl<T> CalculationResult<T> {
    /// The computed value, if the run succeeded.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.outcome.as_ref().ok().map(|m| &m.result)
    }

    /// Elapsed time, if the run succeeded.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.outcome.as_ref().ok().map(AlgorithmResult::duration)
    }
}
