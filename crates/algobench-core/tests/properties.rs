//! Property-based tests for the strategies.
//!
//! These exercise the core traits directly (without the validating
//! decorators) as well as the public free functions.

use proptest::prelude::*;

use algobench_core::calculator::{AlgoError, CoreFibonacci, CoreSubarray};
use algobench_core::cancellation::CancellationToken;
use algobench_core::constants::FIB_TABLE;
use algobench_core::fibonacci::{IterativeFibonacci, MemoizedFibonacci, RecursiveFibonacci};
use algobench_core::max_subarray::{BruteForce, DynamicProgramming, Kadane};
use algobench_core::{max_subarray_brute_force, max_subarray_dp, max_subarray_kadane};

fn fib_core(algo: &dyn CoreFibonacci, n: u64) -> u64 {
    algo.fib_core(&CancellationToken::new(), n).unwrap()
}

fn max_sum_core(algo: &dyn CoreSubarray, nums: &[i32]) -> i64 {
    algo.max_sum_core(&CancellationToken::new(), nums).unwrap()
}

/// Exhaustive reference: best sum over every (start, end) pair.
fn reference_max_sum(nums: &[i32]) -> i64 {
    let mut best = i64::MIN;
    for start in 0..nums.len() {
        for end in start..nums.len() {
            let sum: i64 = nums[start..=end].iter().map(|&x| i64::from(x)).sum();
            best = best.max(sum);
        }
    }
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Memoization and iteration agree with the table for every valid n.
    #[test]
    fn linear_fibonacci_strategies_match_table(n in 0u64..=93) {
        let memo = fib_core(&MemoizedFibonacci::new(), n);
        let iter = fib_core(&IterativeFibonacci::new(), n);
        prop_assert_eq!(memo, FIB_TABLE[n as usize], "memoization at n={}", n);
        prop_assert_eq!(iter, FIB_TABLE[n as usize], "iterative at n={}", n);
    }

    /// Recursion agrees with iteration on the range where it is fast.
    #[test]
    fn recursive_matches_iterative(n in 0u64..=25) {
        prop_assert_eq!(
            fib_core(&RecursiveFibonacci::new(), n),
            fib_core(&IterativeFibonacci::new(), n)
        );
    }

    /// F(n) + F(n+1) == F(n+2).
    #[test]
    fn fibonacci_recurrence(n in 0u64..=91) {
        let algo = IterativeFibonacci::new();
        prop_assert_eq!(fib_core(&algo, n) + fib_core(&algo, n + 1), fib_core(&algo, n + 2));
    }

    /// Indices past the u64 range are reported, never wrapped or panicked on.
    #[test]
    fn core_strategies_report_overflow(n in 94u64..=10_000) {
        let cancel = CancellationToken::new();
        prop_assert_eq!(IterativeFibonacci::new().fib_core(&cancel, n), Err(AlgoError::Overflow(n)));
        prop_assert_eq!(MemoizedFibonacci::new().fib_core(&cancel, n), Err(AlgoError::Overflow(n)));
        prop_assert_eq!(RecursiveFibonacci::new().fib_core(&cancel, n), Err(AlgoError::Overflow(n)));
    }

    /// All three max-subarray strategies agree with each other and the reference.
    #[test]
    fn subarray_strategies_agree(nums in prop::collection::vec(-100i32..=100, 1..60)) {
        let expected = reference_max_sum(&nums);
        prop_assert_eq!(max_sum_core(&BruteForce::new(), &nums), expected);
        prop_assert_eq!(max_sum_core(&DynamicProgramming::new(), &nums), expected);
        prop_assert_eq!(max_sum_core(&Kadane::new(), &nums), expected);
    }

    /// Extreme element values never overflow the i64 accumulator.
    #[test]
    fn subarray_strategies_agree_on_extremes(nums in prop::collection::vec(any::<i32>(), 1..40)) {
        let kadane = max_subarray_kadane(&nums).unwrap();
        prop_assert_eq!(max_subarray_brute_force(&nums).unwrap(), kadane);
        prop_assert_eq!(max_subarray_dp(&nums).unwrap(), kadane);
    }

    /// The answer is at least the largest single element.
    #[test]
    fn answer_dominates_every_element(nums in prop::collection::vec(-1000i32..=1000, 1..200)) {
        let best = max_subarray_kadane(&nums).unwrap();
        let max_elem = nums.iter().copied().map(i64::from).max().unwrap();
        prop_assert!(best >= max_elem);
    }

    /// Idempotence: the same input gives the same result twice.
    #[test]
    fn repeated_calls_agree(nums in prop::collection::vec(-50i32..=50, 1..100)) {
        prop_assert_eq!(max_subarray_dp(&nums), max_subarray_dp(&nums));
    }
}
