//! Constants for strategy limits, cancellation polling, and exit codes.

/// Largest Fibonacci index whose value fits in a `u64`.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Default ceiling for the naive recursive strategy.
///
/// F(45) takes several seconds with plain recursion on current hardware.
pub const DEFAULT_MAX_RECURSIVE_N: u64 = 45;

/// Default ceiling for the linear Fibonacci strategies.
pub const DEFAULT_MAX_FIBONACCI_N: u64 = MAX_FIB_U64;

/// Default maximum sequence length for the linear max-subarray strategies.
pub const DEFAULT_MAX_SUBARRAY_LEN: usize = 1_000_000;

/// Default maximum sequence length for the quadratic brute-force strategy.
pub const DEFAULT_MAX_BRUTE_FORCE_LEN: usize = 20_000;

/// Recursive calls at or above this index poll the cancellation token.
///
/// The subtree under F(23) is ~46k calls, well below a millisecond.
pub const CANCEL_CHECK_MIN_INDEX: u64 = 24;

/// Linear scans poll the cancellation token once per this many elements.
pub const CANCEL_CHECK_STRIDE: usize = 1 << 16;

/// Precomputed Fibonacci values for n = 0..=93, used as an oracle.
///
/// F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes for the `algobench` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Computation timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Strategies disagreed during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
    /// Computation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
