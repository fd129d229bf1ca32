//! Maximum contiguous-subarray sum: brute force, dynamic programming, Kadane.
//!
//! Elements are `i32` and sums accumulate in `i64`, so no partial sum can
//! overflow. Every strategy rejects an empty sequence and all three return the
//! same value for the same input.

use crate::calculator::{split_sequence, AlgoError, CoreSubarray};
use crate::cancellation::CancellationToken;
use crate::constants::CANCEL_CHECK_STRIDE;

/// Enumerate every start/end pair. O(n^2) time, O(1) extra space.
pub fn max_subarray_brute_force(nums: &[i32]) -> Result<i64, AlgoError> {
    BruteForce.max_sum_core(&CancellationToken::new(), nums)
}

/// `dp[i]` is the best sum ending exactly at `i`. O(n) time and space.
pub fn max_subarray_dp(nums: &[i32]) -> Result<i64, AlgoError> {
    DynamicProgramming.max_sum_core(&CancellationToken::new(), nums)
}

/// Single pass with a running best-ending-here sum. O(n) time, O(1) space.
pub fn max_subarray_kadane(nums: &[i32]) -> Result<i64, AlgoError> {
    Kadane.max_sum_core(&CancellationToken::new(), nums)
}

/// Quadratic enumeration of all runs.
///
/// Keeps one running sum per start index instead of the full triangular
/// table of sums, which is never read back.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForce;

impl BruteForce {
    /// Create the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoreSubarray for BruteForce {
    fn max_sum_core(&self, cancel: &CancellationToken, nums: &[i32]) -> Result<i64, AlgoError> {
        let (first, _) = split_sequence(nums)?;
        let mut best = i64::from(first);
        for start in 0..nums.len() {
            cancel.check_cancelled()?;
            let mut sum = 0i64;
            for &x in &nums[start..] {
                sum += i64::from(x);
                best = best.max(sum);
            }
        }
        Ok(best)
    }

    fn name(&self) -> &'static str {
        "BruteForce"
    }
}

/// Tabulated recurrence `dp[i] = max(nums[i], dp[i-1] + nums[i])`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DynamicProgramming;

impl DynamicProgramming {
    /// Create the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoreSubarray for DynamicProgramming {
    fn max_sum_core(&self, cancel: &CancellationToken, nums: &[i32]) -> Result<i64, AlgoError> {
        let (first, _) = split_sequence(nums)?;
        let mut dp = Vec::with_capacity(nums.len());
        dp.push(i64::from(first));
        let mut best = dp[0];
        for (i, &x) in nums.iter().enumerate().skip(1) {
            if i % CANCEL_CHECK_STRIDE == 0 {
                cancel.check_cancelled()?;
            }
            let x = i64::from(x);
            let ending_here = x.max(dp[i - 1] + x);
            dp.push(ending_here);
            best = best.max(ending_here);
        }
        Ok(best)
    }

    fn name(&self) -> &'static str {
        "DynamicProgramming"
    }
}

/// Kadane's algorithm: the DP recurrence collapsed to two scalars.
#[derive(Debug, Default, Clone, Copy)]
pub struct Kadane;

impl Kadane {
    /// Create the strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CoreSubarray for Kadane {
    fn max_sum_core(&self, cancel: &CancellationToken, nums: &[i32]) -> Result<i64, AlgoError> {
        let (first, rest) = split_sequence(nums)?;
        let mut current = i64::from(first);
        let mut best = current;
        for (i, &x) in (1..).zip(rest) {
            if i % CANCEL_CHECK_STRIDE == 0 {
                cancel.check_cancelled()?;
            }
            let x = i64::from(x);
            // Either extend the run ending at i-1 or start afresh at i.
            current = x.max(current + x);
            best = best.max(current);
        }
        Ok(best)
    }

    fn name(&self) -> &'static str {
        "Kadane"
    }
}
