//! Core orchestration: run several strategies on one input and compare.

use std::sync::Arc;
use std::time::Duration;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use algobench_core::calculator::{AlgoError, Calculator};
use algobench_core::cancellation::CancellationToken;
use algobench_core::harness::Harness;

use crate::interfaces::CalculationResult;

/// How a batch of strategies is scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One after another; timings are not disturbed by sibling runs.
    #[default]
    Sequential,
    /// Concurrently on the rayon pool.
    Parallel,
}

/// Options for a batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionOptions {
    /// Scheduling mode.
    pub mode: ExecutionMode,
    /// Measurement settings.
    pub harness: Harness,
    /// Deadline applied to each strategy individually.
    pub timeout: Option<Duration>,
}

/// Run every calculator once on `input` through the harness.
///
/// Results come back in the order of `calculators`, whatever the mode.
pub fn execute_calculations<C>(
    calculators: &[Arc<C>],
    input: &C::Input,
    cancel: &CancellationToken,
    opts: &ExecutionOptions,
) -> Vec<CalculationResult<C::Output>>
where
    C: Calculator + ?Sized,
    C::Input: Sync,
    C::Output: Send,
{
    let run_one = |calc: &Arc<C>| -> CalculationResult<C::Output> {
        let token = match opts.timeout {
            Some(timeout) => cancel.with_timeout(timeout),
            None => cancel.clone(),
        };
        tracing::trace!(strategy = calc.name(), budget = ?token.remaining(), "strategy starting");
        let outcome = opts
            .harness
            .measure(|input: &C::Input| calc.calculate(&token, input), input);

        match &outcome {
            Ok(measured) => tracing::debug!(
                strategy = calc.name(),
                family = ?calc.family(),
                elapsed_ms = measured.execution_time_ms,
                "strategy finished"
            ),
            Err(e) => tracing::warn!(strategy = calc.name(), error = %e, "strategy failed"),
        }

        CalculationResult {
            algorithm: calc.name().to_string(),
            outcome,
        }
    };

    match opts.mode {
        ExecutionMode::Sequential => calculators.iter().map(run_one).collect(),
        ExecutionMode::Parallel => calculators.par_iter().map(run_one).collect(),
    }
}

/// Check that every successful run produced the same value.
pub fn analyze_comparison_results<T: PartialEq>(
    results: &[CalculationResult<T>],
) -> Result<(), AlgoError> {
    let mut values = results.iter().filter_map(CalculationResult::value);

    let Some(first) = values.next() else {
        return Err(AlgoError::Calculation("no valid results".into()));
    };

    if values.any(|v| v != first) {
        return Err(AlgoError::Mismatch);
    }

    Ok(())
}
