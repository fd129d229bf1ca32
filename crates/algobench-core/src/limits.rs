//! Input ceilings applied before a strategy runs.
//!
//! The strategies themselves accept any valid input; an exposed service caps
//! what untrusted callers may ask for, since naive recursion and brute force
//! have no useful response-time bound.

use crate::calculator::AlgoError;
use crate::constants::{
    DEFAULT_MAX_BRUTE_FORCE_LEN, DEFAULT_MAX_FIBONACCI_N, DEFAULT_MAX_RECURSIVE_N,
    DEFAULT_MAX_SUBARRAY_LEN, MAX_FIB_U64,
};
use crate::registry::{canonical_fibonacci, canonical_subarray};

/// Per-strategy input ceilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest n for the memoization and iterative strategies.
    pub max_fibonacci_n: u64,
    /// Largest n for the recursive strategy.
    pub max_recursive_n: u64,
    /// Longest sequence for the DP and Kadane strategies.
    pub max_subarray_len: usize,
    /// Longest sequence for the brute-force strategy.
    pub max_brute_force_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_fibonacci_n: DEFAULT_MAX_FIBONACCI_N,
            max_recursive_n: DEFAULT_MAX_RECURSIVE_N,
            max_subarray_len: DEFAULT_MAX_SUBARRAY_LEN,
            max_brute_force_len: DEFAULT_MAX_BRUTE_FORCE_LEN,
        }
    }
}

impl Limits {
    /// No ceilings beyond what the types allow.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_fibonacci_n: u64::MAX,
            max_recursive_n: u64::MAX,
            max_subarray_len: usize::MAX,
            max_brute_force_len: usize::MAX,
        }
    }

    /// Replace zero ceilings with their defaults.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        let defaults = Self::default();
        if self.max_fibonacci_n == 0 {
            self.max_fibonacci_n = defaults.max_fibonacci_n;
        }
        if self.max_recursive_n == 0 {
            self.max_recursive_n = defaults.max_recursive_n;
        }
        if self.max_subarray_len == 0 {
            self.max_subarray_len = defaults.max_subarray_len;
        }
        if self.max_brute_force_len == 0 {
            self.max_brute_force_len = defaults.max_brute_force_len;
        }
        self
    }

    /// Check `n` against the ceiling for `strategy`.
    ///
    /// Indices the calculator rejects on its own (negative, or above
    /// [`MAX_FIB_U64`]) pass, so the caller sees `InvalidInput` or `Overflow`.
    pub fn check_fibonacci(&self, strategy: &str, n: i64) -> Result<(), AlgoError> {
        let Ok(n) = u64::try_from(n) else {
            return Ok(());
        };
        if n > MAX_FIB_U64 {
            return Ok(());
        }
        let limit = if canonical_fibonacci(strategy) == Some("recursive") {
            self.max_recursive_n
        } else {
            self.max_fibonacci_n
        };
        if n > limit {
            return Err(AlgoError::LimitExceeded {
                what: "n",
                value: n,
                limit,
            });
        }
        Ok(())
    }

    /// Check a sequence length against the ceiling for `strategy`.
    pub fn check_subarray(&self, strategy: &str, len: usize) -> Result<(), AlgoError> {
        let limit = if canonical_subarray(strategy) == Some("bruteforce") {
            self.max_brute_force_len
        } else {
            self.max_subarray_len
        };
        if len > limit {
            return Err(AlgoError::LimitExceeded {
                what: "array length",
                value: len as u64,
                limit: limit as u64,
            });
        }
        Ok(())
    }
}
