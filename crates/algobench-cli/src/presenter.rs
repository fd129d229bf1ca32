//! CLI result presenter.

use std::fmt::Display;

use algobench_core::harness::AlgorithmResult;
use algobench_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_duration, format_memory};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result<T: Display>(&self, algorithm: &str, input: &str, result: &AlgorithmResult<T>) {
        if self.quiet {
            println!("{}", result.result);
            return;
        }

        println!("Algorithm: {algorithm}");
        println!("Input: {input}");
        println!("Duration: {}", format_duration(result.duration()));
        if self.verbose || result.memory_used_bytes.is_some() {
            println!("Memory delta: {}", format_memory(result.memory_used_bytes));
        }
        println!("Result: {}", result.result);
    }

    fn present_comparison<T>(&self, results: &[CalculationResult<T>]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            match &result.outcome {
                Ok(measured) => println!(
                    "  {:<20} {:>12} {:>12} [OK]",
                    result.algorithm,
                    format_duration(measured.duration()),
                    format_memory(measured.memory_used_bytes),
                ),
                Err(e) => {
                    println!("  {:<20} {:>12} {:>12} [ERROR]", result.algorithm, "-", "-");
                    if self.verbose {
                        println!("    {e}");
                    }
                }
            }
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
