//! Application entry point and dispatch.

use std::borrow::Borrow;
use std::fmt::Display;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;

use algobench_cli::output::{describe_sequence, to_records, write_report};
use algobench_cli::presenter::CLIResultPresenter;
use algobench_cli::progress::SweepProgress;
use algobench_cli::ui::{print_family_header, print_skipped, print_verdict};
use algobench_core::calculator::{AlgoError, Calculator, Family};
use algobench_core::cancellation::CancellationToken;
use algobench_core::harness::Harness;
use algobench_core::limits::Limits;
use algobench_core::registry::DefaultFactory;
use algobench_core::workload::{random_sequence, SWEEP_FIBONACCI_N, SWEEP_SUBARRAY_LEN};
use algobench_orchestration::calculator_selection::{
    get_fibonacci_calculators, get_subarray_calculators,
};
use algobench_orchestration::interfaces::ResultPresenter;
use algobench_orchestration::orchestrator::{
    analyze_comparison_results, execute_calculations, ExecutionMode, ExecutionOptions,
};

use crate::config::{AppConfig, Problem};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "algobench", &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone())?;

    let session = Session {
        config,
        cancel,
        opts: ExecutionOptions {
            mode: if config.parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Sequential
            },
            harness: Harness::new(config.memory),
            timeout: Some(config.timeout_duration()),
        },
        presenter: CLIResultPresenter::new(config.verbose, config.quiet),
    };
    let limits: Limits = config.limits();
    let factory = DefaultFactory::new();

    let report = match config.problem {
        Problem::Fibonacci => {
            let calculators = get_fibonacci_calculators(&config.algo, &factory)?;
            let inputs: Vec<i64> = if config.sweep {
                SWEEP_FIBONACCI_N.to_vec()
            } else {
                vec![config.n]
            };
            if session.interactive() {
                print_family_header(Family::Fibonacci);
            }
            session.run_batches(
                &calculators,
                &inputs,
                |n: &i64| format!("n = {n}"),
                |strategy, n: &i64| limits.check_fibonacci(strategy, *n),
            )?
        }
        Problem::MaxSubarray => {
            let calculators = get_subarray_calculators(&config.algo, &factory)?;
            let inputs = subarray_inputs(config)?;
            if session.interactive() {
                print_family_header(Family::MaxSubarray);
            }
            session.run_batches(
                &calculators,
                &inputs,
                |nums: &Vec<i32>| describe_sequence(nums.as_slice()),
                |strategy, nums: &Vec<i32>| limits.check_subarray(strategy, nums.len()),
            )?
        }
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report.records)?);
    }

    if let Some(ref path) = config.output {
        write_report(path, &report.records)
            .with_context(|| format!("failed to write report to {path}"))?;
    }

    match report.failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Sequences to feed the max-subarray strategies.
fn subarray_inputs(config: &AppConfig) -> Result<Vec<Vec<i32>>, AlgoError> {
    if config.sweep {
        return Ok(SWEEP_SUBARRAY_LEN
            .iter()
            .map(|&len| random_sequence(len, config.seed))
            .collect());
    }
    if let Some(len) = config.random_len {
        return Ok(vec![random_sequence(len, config.seed)]);
    }
    if config.array.is_empty() {
        return Err(AlgoError::InvalidInput(
            "input array cannot be empty (pass --array or --random-len)".into(),
        ));
    }
    Ok(vec![config.array.clone()])
}

/// Everything gathered over a run.
#[derive(Default)]
struct Report {
    records: Vec<serde_json::Value>,
    failure: Option<AlgoError>,
}

struct Session<'a> {
    config: &'a AppConfig,
    cancel: CancellationToken,
    opts: ExecutionOptions,
    presenter: CLIResultPresenter,
}

impl Session<'_> {
    /// Human-readable output on stdout.
    fn interactive(&self) -> bool {
        !self.config.quiet && !self.config.json
    }

    /// Run every admitted calculator on each input in turn.
    fn run_batches<C, In>(
        &self,
        calculators: &[Arc<C>],
        inputs: &[In],
        describe: impl Fn(&In) -> String,
        admit: impl Fn(&str, &In) -> Result<(), AlgoError>,
    ) -> Result<Report>
    where
        C: Calculator + ?Sized,
        C::Input: Sync,
        C::Output: Display + PartialEq + Serialize + Send,
        In: Borrow<C::Input>,
    {
        let mut report = Report::default();
        let progress = SweepProgress::new(
            inputs.len() as u64,
            !self.interactive() || inputs.len() == 1,
        );

        for input in inputs {
            if self.cancel.is_cancelled() {
                report.failure = Some(AlgoError::Cancelled);
                break;
            }

            let label = describe(input);
            progress.start_step(&label);

            let mut admitted = Vec::with_capacity(calculators.len());
            let mut skipped = None;
            for calc in calculators {
                match admit(calc.name(), input) {
                    Ok(()) => admitted.push(Arc::clone(calc)),
                    Err(e) => {
                        if calculators.len() > 1 && self.interactive() {
                            print_skipped(calc.name(), &label, &e);
                        }
                        skipped.get_or_insert(e);
                    }
                }
            }
            if admitted.is_empty() {
                if let Some(e) = skipped {
                    report.failure.get_or_insert(e);
                }
                progress.finish_step();
                continue;
            }

            let input: &C::Input = input.borrow();
            let results = execute_calculations(&admitted, input, &self.cancel, &self.opts);
            progress.finish_step();

            for result in &results {
                match &result.outcome {
                    Ok(measured) => {
                        if !self.config.json {
                            self.presenter
                                .present_result(&result.algorithm, &label, measured);
                        }
                    }
                    Err(e) => {
                        if results.len() > 1 {
                            self.presenter
                                .present_error(&format!("{}: {e}", result.algorithm));
                        }
                        report.failure.get_or_insert_with(|| e.clone());
                    }
                }
            }

            if results.len() > 1 {
                if !self.config.json {
                    self.presenter.present_comparison(&results);
                }
                match analyze_comparison_results(&results) {
                    Err(AlgoError::Mismatch) => {
                        tracing::error!(input = %label, "strategies disagree");
                        if !self.config.json {
                            print_verdict(&label, results.len(), false);
                        }
                        report.failure = Some(AlgoError::Mismatch);
                    }
                    Ok(()) if self.interactive() => print_verdict(&label, results.len(), true),
                    _ => {}
                }
            }

            for record in to_records(&label, &results) {
                report.records.push(serde_json::to_value(&record)?);
            }
        }

        progress.finish();
        Ok(report)
    }
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        tracing::warn!("interrupt received, cancelling");
        cancel.cancel();
    })
    .context("failed to set Ctrl+C handler")
}
