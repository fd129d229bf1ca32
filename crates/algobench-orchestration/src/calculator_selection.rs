//! Calculator selection logic.

use std::sync::Arc;

use algobench_core::calculator::{AlgoError, DynFibonacci, DynSubarray};
use algobench_core::registry::CalculatorFactory;

/// Fibonacci calculators to run: every strategy for `"all"`, else the named one.
pub fn get_fibonacci_calculators(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<DynFibonacci>>, AlgoError> {
    match algo {
        "all" => factory
            .available_fibonacci()
            .into_iter()
            .map(|name| factory.fibonacci(name))
            .collect(),
        name => Ok(vec![factory.fibonacci(name)?]),
    }
}

/// Max-subarray calculators to run: every strategy for `"all"`, else the named one.
pub fn get_subarray_calculators(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<DynSubarray>>, AlgoError> {
    match algo {
        "all" => factory
            .available_subarray()
            .into_iter()
            .map(|name| factory.subarray(name))
            .collect(),
        name => Ok(vec![factory.subarray(name)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algobench_core::registry::DefaultFactory;

    #[test]
    fn select_all_fibonacci() {
        let factory = DefaultFactory::new();
        let calcs = get_fibonacci_calculators("all", &factory).unwrap();
        let names: Vec<&str> = calcs.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Recursive", "Memoization", "Iterative"]);
    }

    #[test]
    fn select_all_subarray() {
        let factory = DefaultFactory::new();
        let calcs = get_subarray_calculators("all", &factory).unwrap();
        assert_eq!(calcs.len(), 3);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let calcs = get_subarray_calculators("kadane", &factory).unwrap();
        assert_eq!(calcs.len(), 1);
        assert_eq!(calcs[0].name(), "Kadane");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        assert!(get_fibonacci_calculators("fast", &factory).is_err());
        assert!(get_subarray_calculators("iterative", &factory).is_err());
    }
}
