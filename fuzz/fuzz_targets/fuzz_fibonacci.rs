#![no_main]

use libfuzzer_sys::fuzz_target;

use algobench_core::calculator::AlgoError;
use algobench_core::{iterative_fib, memoization_fib, recursive_fib, FIB_TABLE, MAX_FIB_U64};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    // Any i64 is a legal input; only in-range indices produce a value.
    let n = i64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);

    let iterative = iterative_fib(n);
    let memoized = memoization_fib(n);
    assert_eq!(iterative, memoized, "iterative != memoization at n={n}");

    match u64::try_from(n) {
        Err(_) => assert!(matches!(iterative, Err(AlgoError::InvalidInput(_)))),
        Ok(k) if k > MAX_FIB_U64 => assert_eq!(iterative, Err(AlgoError::Overflow(k))),
        Ok(k) => {
            assert_eq!(iterative, Ok(FIB_TABLE[k as usize]));
            // Recursion is exponential; only cross-check small indices.
            if k <= 20 {
                assert_eq!(recursive_fib(n), iterative, "recursive != iterative at n={n}");
            }
        }
    }
});
