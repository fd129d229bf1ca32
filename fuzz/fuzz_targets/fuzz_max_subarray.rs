#![no_main]

use libfuzzer_sys::fuzz_target;

use algobench_core::{max_subarray_brute_force, max_subarray_dp, max_subarray_kadane};

fuzz_target!(|data: &[u8]| {
    // Cap the length so the quadratic strategy stays fast.
    let nums: Vec<i32> = data
        .chunks_exact(4)
        .take(512)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    let kadane = max_subarray_kadane(&nums);
    let dp = max_subarray_dp(&nums);
    let brute = max_subarray_brute_force(&nums);

    assert_eq!(kadane, dp, "Kadane != DP for {nums:?}");
    assert_eq!(kadane, brute, "Kadane != BruteForce for {nums:?}");

    if let Ok(best) = kadane {
        let max_element = nums.iter().copied().map(i64::from).max().unwrap_or(i64::MIN);
        assert!(best >= max_element);
    } else {
        assert!(nums.is_empty());
    }
});
