//! Calculator traits, the error type, and the validating decorators.
//!
//! `Calculator` is the public trait consumed by orchestration and the server.
//! `CoreFibonacci` and `CoreSubarray` are the internal traits implemented by
//! each strategy. `FibCalculator` and `SubarrayCalculator` are decorators that
//! validate input and check cancellation before delegating.

use std::sync::Arc;

use crate::cancellation::CancellationToken;
use crate::constants::MAX_FIB_U64;

/// Error type for every strategy and harness operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgoError {
    /// Input violates the operation's contract.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The Fibonacci number does not fit in 64 bits.
    #[error("F({0}) overflows a 64-bit integer (max n is {max})", max = MAX_FIB_U64)]
    Overflow(u64),

    /// Input is valid but above a configured ceiling.
    #[error("{what} {value} exceeds the configured limit of {limit}")]
    LimitExceeded {
        /// Which quantity was limited.
        what: &'static str,
        /// Value supplied by the caller.
        value: u64,
        /// Configured ceiling.
        limit: u64,
    },

    /// No strategy is registered under this name.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Calculation was cancelled.
    #[error("calculation cancelled")]
    Cancelled,

    /// Calculation ran past its deadline.
    #[error("calculation timed out: {0}")]
    Timeout(String),

    /// Strategies of the same family returned different results.
    #[error("result mismatch between strategies")]
    Mismatch,

    /// No strategy produced a result.
    #[error("calculation error: {0}")]
    Calculation(String),
}

/// The two problem families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// n-th Fibonacci number.
    Fibonacci,
    /// Maximum contiguous-subarray sum.
    MaxSubarray,
}

/// Public trait for strategies, consumed by orchestration and the server.
pub trait Calculator: Send + Sync {
    /// What the caller supplies.
    type Input: ?Sized;
    /// What the strategy computes.
    type Output;

    /// Validate `input` and compute the result.
    fn calculate(
        &self,
        cancel: &CancellationToken,
        input: &Self::Input,
    ) -> Result<Self::Output, AlgoError>;

    /// Name of the underlying strategy.
    fn name(&self) -> &str;

    /// Problem family this calculator belongs to.
    fn family(&self) -> Family;
}

/// A type-erased Fibonacci calculator.
pub type DynFibonacci = dyn Calculator<Input = i64, Output = u64>;

/// A type-erased max-subarray calculator.
pub type DynSubarray = dyn Calculator<Input = [i32], Output = i64>;

/// Internal trait for Fibonacci strategies.
pub trait CoreFibonacci: Send + Sync {
    /// Compute F(n). Returns [`AlgoError::Overflow`] for `n > MAX_FIB_U64`.
    fn fib_core(&self, cancel: &CancellationToken, n: u64) -> Result<u64, AlgoError>;

    /// Name of this strategy.
    fn name(&self) -> &'static str;
}

/// Internal trait for max-subarray strategies.
pub trait CoreSubarray: Send + Sync {
    /// Maximum sum over all non-empty contiguous runs of `nums`.
    /// Returns [`AlgoError::InvalidInput`] when `nums` is empty.
    fn max_sum_core(&self, cancel: &CancellationToken, nums: &[i32]) -> Result<i64, AlgoError>;

    /// Name of this strategy.
    fn name(&self) -> &'static str;
}

/// Check a Fibonacci index and convert it to `u64`.
///
/// ```
/// use algobench_core::calculator::{validate_index, AlgoError};
///
/// assert_eq!(validate_index(10), Ok(10));
/// assert!(matches!(validate_index(-1), Err(AlgoError::InvalidInput(_))));
/// assert_eq!(validate_index(94), Err(AlgoError::Overflow(94)));
/// ```
pub fn validate_index(n: i64) -> Result<u64, AlgoError> {
    let n = u64::try_from(n)
        .map_err(|_| AlgoError::InvalidInput(format!("n must be non-negative, got {n}")))?;
    ensure_representable(n)?;
    Ok(n)
}

/// Fail with [`AlgoError::Overflow`] when F(n) does not fit in a `u64`.
pub fn ensure_representable(n: u64) -> Result<(), AlgoError> {
    if n > MAX_FIB_U64 {
        return Err(AlgoError::Overflow(n));
    }
    Ok(())
}

/// Reject empty sequences.
pub fn validate_sequence(nums: &[i32]) -> Result<(), AlgoError> {
    split_sequence(nums).map(|_| ())
}

/// First element and the rest, or [`AlgoError::InvalidInput`] when empty.
pub fn split_sequence(nums: &[i32]) -> Result<(i32, &[i32]), AlgoError> {
    match nums.split_first() {
        Some((&first, rest)) => Ok((first, rest)),
        None => Err(AlgoError::InvalidInput(
            "input array cannot be empty".to_string(),
        )),
    }
}

/// Decorator that validates the index before delegating to a `CoreFibonacci`.
pub struct FibCalculator {
    inner: Arc<dyn CoreFibonacci>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given strategy.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreFibonacci>) -> Self {
        Self { inner }
    }
}

impl Calculator for FibCalculator {
    type Input = i64;
    type Output = u64;

    fn calculate(&self, cancel: &CancellationToken, n: &i64) -> Result<u64, AlgoError> {
        let n = validate_index(*n)?;
        cancel.check_cancelled()?;
        tracing::debug!(strategy = self.inner.name(), n, "computing fibonacci");
        self.inner.fib_core(cancel, n)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn family(&self) -> Family {
        Family::Fibonacci
    }
}

/// Decorator that rejects empty input before delegating to a `CoreSubarray`.
pub struct SubarrayCalculator {
    inner: Arc<dyn CoreSubarray>,
}

impl SubarrayCalculator {
    /// Create a new `SubarrayCalculator` wrapping the given strategy.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreSubarray>) -> Self {
        Self { inner }
    }
}

impl Calculator for SubarrayCalculator {
    type Input = [i32];
    type Output = i64;

    fn calculate(&self, cancel: &CancellationToken, nums: &[i32]) -> Result<i64, AlgoError> {
        validate_sequence(nums)?;
        cancel.check_cancelled()?;
        tracing::debug!(strategy = self.inner.name(), len = nums.len(), "computing max subarray");
        self.inner.max_sum_core(cancel, nums)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn family(&self) -> Family {
        Family::MaxSubarray
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fibonacci::IterativeFibonacci;
    use crate::max_subarray::Kadane;

    #[test]
    fn validate_index_bounds() {
        assert_eq!(validate_index(0), Ok(0));
        assert_eq!(validate_index(93), Ok(93));
        assert_eq!(validate_index(94), Err(AlgoError::Overflow(94)));
        assert!(matches!(validate_index(i64::MIN), Err(AlgoError::InvalidInput(_))));
    }

    #[test]
    fn validate_sequence_rejects_empty() {
        assert!(validate_sequence(&[]).is_err());
        assert!(validate_sequence(&[0]).is_ok());
    }

    #[test]
    fn fib_calculator_rejects_negative() {
        let calc = FibCalculator::new(Arc::new(IterativeFibonacci::new()));
        let cancel = CancellationToken::new();
        assert!(matches!(
            calc.calculate(&cancel, &-1),
            Err(AlgoError::InvalidInput(_))
        ));
        assert_eq!(calc.calculate(&cancel, &10), Ok(55));
        assert_eq!(calc.family(), Family::Fibonacci);
    }

    #[test]
    fn fib_calculator_checks_cancellation_first() {
        let calc = FibCalculator::new(Arc::new(IterativeFibonacci::new()));
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_eq!(calc.calculate(&cancel, &10), Err(AlgoError::Cancelled));
        // Validation still wins over cancellation.
        assert!(matches!(
            calc.calculate(&cancel, &-5),
            Err(AlgoError::InvalidInput(_))
        ));
    }

    #[test]
    fn subarray_calculator_rejects_empty() {
        let calc = SubarrayCalculator::new(Arc::new(Kadane::new()));
        let cancel = CancellationToken::new();
        assert!(matches!(
            calc.calculate(&cancel, &[]),
            Err(AlgoError::InvalidInput(_))
        ));
        assert_eq!(calc.calculate(&cancel, &[5]), Ok(5));
        assert_eq!(calc.name(), "Kadane");
        assert_eq!(calc.family(), Family::MaxSubarray);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            AlgoError::InvalidInput("test".into()).to_string(),
            "invalid input: test"
        );
        assert_eq!(AlgoError::Cancelled.to_string(), "calculation cancelled");
        assert_eq!(
            AlgoError::Overflow(100).to_string(),
            "F(100) overflows a 64-bit integer (max n is 93)"
        );
        let err = AlgoError::LimitExceeded {
            what: "n",
            value: 50,
            limit: 45,
        };
        assert_eq!(err.to_string(), "n 50 exceeds the configured limit of 45");
    }
}
