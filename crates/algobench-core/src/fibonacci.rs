//! Fibonacci strategies: naive recursion, top-down memoization, bottom-up iteration.
//!
//! All three compute F(n) with F(0) = 0 and F(1) = 1 and agree on every
//! index up to [`MAX_FIB_U64`](crate::constants::MAX_FIB_U64).

use crate::calculator::{ensure_representable, validate_index, AlgoError, CoreFibonacci};
use crate::cancellation::CancellationToken;
use crate::constants::CANCEL_CHECK_MIN_INDEX;

/// Direct recurrence without a cache. O(2^n) time, O(n) stack.
///
/// Latency grows by ~1.6x per index; expect seconds past n = 40.
pub fn recursive_fib(n: i64) -> Result<u64, AlgoError> {
    let n = validate_index(n)?;
    RecursiveFibonacci.fib_core(&CancellationToken::new(), n)
}

/// Same recurrence backed by a call-scoped cache. O(n) time and space.
pub fn memoization_fib(n: i64) -> Result<u64, AlgoError> {
    let n = validate_index(n)?;
    MemoizedFibonacci.fib_core(&CancellationToken::new(), n)
}

/// Two rolling accumulators. O(n) time, O(1) space.
pub fn iterative_fib(n: i64) -> Result<u64, AlgoError> {
    let n = validate_index(n)?;
    IterativeFibonacci.fib_core(&CancellationToken::new(), n)
}

/// Naive recursive strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveFibonacci;

impl RecursiveFibonacci {
    /// Create the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn recurse(n: u64, cancel: &CancellationToken) -> Result<u64, AlgoError> {
        if n <= 1 {
            return Ok(n);
        }
        if n >= CANCEL_CHECK_MIN_INDEX {
            cancel.check_cancelled()?;
        }
        Ok(Self::recurse(n - 1, cancel)? + Self::recurse(n - 2, cancel)?)
    }
}

impl CoreFibonacci for RecursiveFibonacci {
    fn fib_core(&self, cancel: &CancellationToken, n: u64) -> Result<u64, AlgoError> {
        ensure_representable(n)?;
        Self::recurse(n, cancel)
    }

    fn name(&self) -> &'static str {
        "Recursive"
    }
}

/// Top-down memoized strategy.
///
/// The cache lives only for one call. Slots are `Option<u64>` so that an
/// uncomputed entry is never confused with F(0) = 0.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoizedFibonacci;

impl MemoizedFibonacci {
    /// Create the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[allow(clippy::cast_possible_truncation)]
    fn lookup(
        n: u64,
        memo: &mut [Option<u64>],
        cancel: &CancellationToken,
    ) -> Result<u64, AlgoError> {
        if let Some(value) = memo[n as usize] {
            return Ok(value);
        }
        if n >= CANCEL_CHECK_MIN_INDEX {
            cancel.check_cancelled()?;
        }
        let value = Self::lookup(n - 1, memo, cancel)? + Self::lookup(n - 2, memo, cancel)?;
        memo[n as usize] = Some(value);
        Ok(value)
    }
}

impl CoreFibonacci for MemoizedFibonacci {
    #[allow(clippy::cast_possible_truncation)]
    fn fib_core(&self, cancel: &CancellationToken, n: u64) -> Result<u64, AlgoError> {
        ensure_representable(n)?;
        if n <= 1 {
            return Ok(n);
        }
        let mut memo = vec![None; n as usize + 1];
        memo[0] = Some(0);
        memo[1] = Some(1);
        Self::lookup(n, &mut memo, cancel)
    }

    fn name(&self) -> &'static str {
        "Memoization"
    }
}

/// Bottom-up iterative strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct IterativeFibonacci;

impl IterativeFibonacci {
    /// Create the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoreFibonacci for IterativeFibonacci {
    fn fib_core(&self, _cancel: &CancellationToken, n: u64) -> Result<u64, AlgoError> {
        ensure_representable(n)?;
        if n <= 1 {
            return Ok(n);
        }
        let (mut prev, mut curr) = (0u64, 1u64);
        for _ in 2..=n {
            let next = prev + curr;
            prev = curr;
            curr = next;
        }
        Ok(curr)
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    const KNOWN: [(i64, u64); 11] = [
        (0, 0),
        (1, 1),
        (2, 1),
        (3, 2),
        (4, 3),
        (5, 5),
        (6, 8),
        (10, 55),
        (20, 6765),
        (30, 832_040),
        (40, 102_334_155),
    ];

    #[test]
    fn recursive_known_values() {
        // F(40) is slow without optimizations; stop at F(30).
        for &(n, expected) in KNOWN.iter().filter(|(n, _)| *n <= 30) {
            assert_eq!(recursive_fib(n), Ok(expected), "n={n}");
        }
    }

    #[test]
    fn memoization_known_values() {
        for &(n, expected) in &KNOWN {
            assert_eq!(memoization_fib(n), Ok(expected), "n={n}");
        }
    }

    #[test]
    fn iterative_known_values() {
        for &(n, expected) in &KNOWN {
            assert_eq!(iterative_fib(n), Ok(expected), "n={n}");
        }
    }

    #[test]
    fn memoization_matches_table_up_to_max() {
        for (n, &expected) in FIB_TABLE.iter().enumerate() {
            assert_eq!(memoization_fib(n as i64), Ok(expected));
            assert_eq!(iterative_fib(n as i64), Ok(expected));
        }
    }

    #[test]
    fn memo_cache_distinguishes_zero() {
        // n = 2 reads memo[0]; it must come back as a stored zero.
        assert_eq!(memoization_fib(2), Ok(1));
        assert_eq!(memoization_fib(0), Ok(0));
    }

    #[test]
    fn negative_index_rejected() {
        assert!(matches!(recursive_fib(-1), Err(AlgoError::InvalidInput(_))));
        assert!(matches!(memoization_fib(-1), Err(AlgoError::InvalidInput(_))));
        assert!(matches!(iterative_fib(-1), Err(AlgoError::InvalidInput(_))));
    }

    #[test]
    fn overflowing_index_rejected() {
        assert_eq!(iterative_fib(94), Err(AlgoError::Overflow(94)));
        assert_eq!(memoization_fib(200), Err(AlgoError::Overflow(200)));
        assert_eq!(recursive_fib(94), Err(AlgoError::Overflow(94)));
    }

    #[test]
    fn recursive_honours_cancellation() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_eq!(
            RecursiveFibonacci.fib_core(&cancel, 60),
            Err(AlgoError::Cancelled)
        );
        // Below the polling threshold the computation runs to completion.
        assert_eq!(RecursiveFibonacci.fib_core(&cancel, 10), Ok(55));
    }

    #[test]
    fn recursive_times_out_on_deep_input() {
        let cancel = CancellationToken::new().with_timeout(std::time::Duration::from_millis(20));
        assert!(matches!(
            RecursiveFibonacci.fib_core(&cancel, 90),
            Err(AlgoError::Timeout(_))
        ));
    }

    #[test]
    fn core_strategies_report_overflow() {
        let cancel = CancellationToken::new();
        assert_eq!(
            IterativeFibonacci.fib_core(&cancel, 94),
            Err(AlgoError::Overflow(94))
        );
        assert_eq!(
            MemoizedFibonacci.fib_core(&cancel, 94),
            Err(AlgoError::Overflow(94))
        );
        assert_eq!(
            RecursiveFibonacci.fib_core(&cancel, u64::MAX),
            Err(AlgoError::Overflow(u64::MAX))
        );
        assert_eq!(IterativeFibonacci.fib_core(&cancel, 93), Ok(FIB_TABLE[93]));
    }

    #[test]
    #[ignore = "takes ~1s in debug builds; run with --ignored"]
    fn recursive_forty() {
        assert_eq!(recursive_fib(40), Ok(102_334_155));
    }

    #[test]
    fn names() {
        assert_eq!(RecursiveFibonacci::new().name(), "Recursive");
        assert_eq!(MemoizedFibonacci::new().name(), "Memoization");
        assert_eq!(IterativeFibonacci::new().name(), "Iterative");
    }
}
