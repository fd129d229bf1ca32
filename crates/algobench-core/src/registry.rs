//! Strategy factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{AlgoError, DynFibonacci, DynSubarray, FibCalculator, SubarrayCalculator};
use crate::fibonacci::{IterativeFibonacci, MemoizedFibonacci, RecursiveFibonacci};
use crate::max_subarray::{BruteForce, DynamicProgramming, Kadane};

/// Canonical Fibonacci strategy names, slowest first.
pub const FIBONACCI_STRATEGIES: [&str; 3] = ["recursive", "memoization", "iterative"];

/// Canonical max-subarray strategy names, slowest first.
pub const SUBARRAY_STRATEGIES: [&str; 3] = ["bruteforce", "dp", "kadane"];

/// Factory trait for looking up calculators by name.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a Fibonacci calculator.
    fn fibonacci(&self, name: &str) -> Result<Arc<DynFibonacci>, AlgoError>;

    /// Get or create a max-subarray calculator.
    fn subarray(&self, name: &str) -> Result<Arc<DynSubarray>, AlgoError>;

    /// Available Fibonacci strategy names.
    fn available_fibonacci(&self) -> Vec<&str>;

    /// Available max-subarray strategy names.
    fn available_subarray(&self) -> Vec<&str>;
}

/// Map an accepted spelling to its canonical Fibonacci name.
#[must_use]
pub fn canonical_fibonacci(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "recursive" | "naive" => Some("recursive"),
        "memoization" | "memo" | "memoized" => Some("memoization"),
        "iterative" => Some("iterative"),
        _ => None,
    }
}

/// Map an accepted spelling to its canonical max-subarray name.
#[must_use]
pub fn canonical_subarray(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "bruteforce" | "brute-force" | "brute_force" => Some("bruteforce"),
        "dp" | "dynamic-programming" | "dynamic_programming" => Some("dp"),
        "kadane" => Some("kadane"),
        _ => None,
    }
}

/// Default factory with lazy creation and cache.
///
/// Calculators hold no mutable state, so one shared instance per name is
/// safe to use from any number of threads.
pub struct DefaultFactory {
    fibonacci: RwLock<HashMap<&'static str, Arc<DynFibonacci>>>,
    subarray: RwLock<HashMap<&'static str, Arc<DynSubarray>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fibonacci: RwLock::new(HashMap::new()),
            subarray: RwLock::new(HashMap::new()),
        }
    }

    fn create_fibonacci(name: &'static str) -> Arc<DynFibonacci> {
        let core: Arc<dyn crate::calculator::CoreFibonacci> = match name {
            "recursive" => Arc::new(RecursiveFibonacci::new()),
            "memoization" => Arc::new(MemoizedFibonacci::new()),
            _ => Arc::new(IterativeFibonacci::new()),
        };
        Arc::new(FibCalculator::new(core))
    }

    fn create_subarray(name: &'static str) -> Arc<DynSubarray> {
        let core: Arc<dyn crate::calculator::CoreSubarray> = match name {
            "bruteforce" => Arc::new(BruteForce::new()),
            "dp" => Arc::new(DynamicProgramming::new()),
            _ => Arc::new(Kadane::new()),
        };
        Arc::new(SubarrayCalculator::new(core))
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn fibonacci(&self, name: &str) -> Result<Arc<DynFibonacci>, AlgoError> {
        let key = canonical_fibonacci(name)
            .ok_or_else(|| AlgoError::UnknownStrategy(name.to_string()))?;

        if let Some(calc) = self.fibonacci.read().get(key) {
            return Ok(Arc::clone(calc));
        }

        let calc = Self::create_fibonacci(key);
        self.fibonacci.write().insert(key, Arc::clone(&calc));
        Ok(calc)
    }

    fn subarray(&self, name: &str) -> Result<Arc<DynSubarray>, AlgoError> {
        let key = canonical_subarray(name)
            .ok_or_else(|| AlgoError::UnknownStrategy(name.to_string()))?;

        if let Some(calc) = self.subarray.read().get(key) {
            return Ok(Arc::clone(calc));
        }

        let calc = Self::create_subarray(key);
        self.subarray.write().insert(key, Arc::clone(&calc));
        Ok(calc)
    }

    fn available_fibonacci(&self) -> Vec<&str> {
        FIBONACCI_STRATEGIES.to_vec()
    }

    fn available_subarray(&self) -> Vec<&str> {
        SUBARRAY_STRATEGIES.to_vec()
    }
}
