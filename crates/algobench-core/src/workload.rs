//! Deterministic input generation for sweeps and benchmarks.

use rand::prelude::*;

/// Fibonacci indices the load-test sweep walks through.
pub const SWEEP_FIBONACCI_N: [i64; 5] = [5, 10, 20, 30, 40];

/// Sequence lengths the load-test sweep walks through.
pub const SWEEP_SUBARRAY_LEN: [usize; 7] = [10, 50, 100, 200, 500, 1000, 2000];

/// Default seed for generated sequences.
pub const DEFAULT_SEED: u64 = 0x2545_F491_4F6C_DD1D;

/// `len` pseudo-random integers in `[-100, 100]`, reproducible from `seed`.
///
/// ```
/// use algobench_core::workload::random_sequence;
///
/// let a = random_sequence(16, 7);
/// assert_eq!(a, random_sequence(16, 7));
/// assert!(a.iter().all(|x| (-100..=100).contains(x)));
/// ```
#[must_use]
pub fn random_sequence(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-100..=100)).collect()
}
