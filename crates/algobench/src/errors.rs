//! Error handling and exit codes.

use algobench_core::calculator::AlgoError;
use algobench_core::constants::exit_codes;

/// Map a calculation error to the process exit code.
#[must_use]
pub fn handle_error(err: &AlgoError) -> i32 {
    match err {
        AlgoError::InvalidInput(_)
        | AlgoError::Overflow(_)
        | AlgoError::LimitExceeded { .. }
        | AlgoError::UnknownStrategy(_) => exit_codes::ERROR_CONFIG,
        AlgoError::Cancelled => exit_codes::ERROR_CANCELED,
        AlgoError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        AlgoError::Mismatch => exit_codes::ERROR_MISMATCH,
        AlgoError::Calculation(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<AlgoError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
