//! # algobench-core
//!
//! Three Fibonacci strategies (naive recursion, memoization, iteration) and
//! three maximum-subarray strategies (brute force, dynamic programming,
//! Kadane), each runnable through a uniform timing harness.

pub mod calculator;
pub mod cancellation;
pub mod constants;
pub mod fibonacci;
pub mod harness;
pub mod limits;
pub mod max_subarray;
pub mod memory;
pub mod registry;
pub mod workload;

// Re-exports
pub use calculator::{AlgoError, Calculator, DynFibonacci, DynSubarray, Family};
pub use cancellation::CancellationToken;
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64};
pub use fibonacci::{iterative_fib, memoization_fib, recursive_fib};
pub use harness::{measure, AlgorithmResult, Harness};
pub use limits::Limits;
pub use max_subarray::{max_subarray_brute_force, max_subarray_dp, max_subarray_kadane};
pub use registry::{CalculatorFactory, DefaultFactory};

/// Compute F(n) iteratively and time it.
///
/// Convenience for simple use cases; for strategy selection, cancellation,
/// or memory tracking go through [`DefaultFactory`] and [`Harness`].
///
/// # Example
/// ```
/// let measured = algobench_core::fibonacci(10).unwrap();
/// assert_eq!(measured.result, 55);
/// assert!(algobench_core::fibonacci(-1).is_err());
/// ```
pub fn fibonacci(n: i64) -> Result<AlgorithmResult<u64>, AlgoError> {
    measure(|n: &i64| iterative_fib(*n), &n)
}

/// Compute the maximum subarray sum with Kadane's algorithm and time it.
///
/// # Example
/// ```
/// let measured = algobench_core::max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]).unwrap();
/// assert_eq!(measured.result, 6);
/// assert!(algobench_core::max_subarray(&[]).is_err());
/// ```
pub fn max_subarray(nums: &[i32]) -> Result<AlgorithmResult<i64>, AlgoError> {
    measure(max_subarray_kadane, nums)
}
