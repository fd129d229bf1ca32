//! Uniform timing harness and the `AlgorithmResult` record.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::calculator::AlgoError;
use crate::memory::{memory_delta, MemoryProbe};

/// Outcome of one measured invocation.
///
/// Serialized as `{"result": .., "executionTimeMs": .., "memoryUsedBytes": ..}`.
/// `memory_used_bytes` is `None` when memory tracking is off or the platform
/// cannot report it; see [`crate::memory`] for what the figure means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult<T> {
    /// The computed value.
    pub result: T,
    /// Wall-clock duration of the single invocation, in milliseconds.
    pub execution_time_ms: f64,
    /// Best-effort change in resident memory across the invocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_used_bytes: Option<i64>,
}

impl<T> AlgorithmResult<T> {
    /// Elapsed time as a `Duration`, saturating at [`Duration::MAX`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.execution_time_ms.max(0.0) / 1000.0)
            .unwrap_or(Duration::MAX)
    }
}

/// Run `computation(input)` once and time it with a monotonic clock.
///
/// No retries and no caching: every call is a cold measurement. Errors from
/// the computation are returned as-is.
///
/// # Example
/// ```
/// use algobench_core::harness::measure;
///
/// let measured = measure(|n: &u64| Ok(n * 2), &21).unwrap();
/// assert_eq!(measured.result, 42);
/// assert!(measured.execution_time_ms >= 0.0);
/// assert!(measured.memory_used_bytes.is_none());
/// ```
pub fn measure<I, O, F>(computation: F, input: &I) -> Result<AlgorithmResult<O>, AlgoError>
where
    I: ?Sized,
    F: FnOnce(&I) -> Result<O, AlgoError>,
{
    Harness::default().measure(computation, input)
}

/// Measurement settings shared by every invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Harness {
    /// Sample process memory before and after the computation.
    pub track_memory: bool,
}

impl Harness {
    /// Harness with memory tracking switched on or off.
    #[must_use]
    pub fn new(track_memory: bool) -> Self {
        Self { track_memory }
    }

    /// Measure one invocation of `computation(input)`.
    pub fn measure<I, O, F>(&self, computation: F, input: &I) -> Result<AlgorithmResult<O>, AlgoError>
    where
        I: ?Sized,
        F: FnOnce(&I) -> Result<O, AlgoError>,
    {
        let mut probe = if self.track_memory {
            MemoryProbe::new()
        } else {
            None
        };
        let before = probe.as_mut().and_then(MemoryProbe::resident_bytes);

        let start = Instant::now();
        let outcome = computation(input);
        let elapsed = start.elapsed();

        let result = outcome?;
        let memory_used_bytes = match (before, probe.as_mut()) {
            (Some(before), Some(probe)) => {
                probe.resident_bytes().map(|after| memory_delta(before, after))
            }
            _ => None,
        };

        Ok(AlgorithmResult {
            result,
            execution_time_ms: elapsed.as_secs_f64() * 1000.0,
            memory_used_bytes,
        })
    }
}
