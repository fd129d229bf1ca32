//! Request handlers.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use algobench_core::calculator::{AlgoError, Calculator};
use algobench_core::cancellation::CancellationToken;
use algobench_core::harness::AlgorithmResult;

use crate::error::{ApiError, EMPTY_INPUT};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    status: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `GET /fibonacci/{strategy}/{n}`
pub async fn fibonacci(
    State(state): State<AppState>,
    path: Result<Path<(String, i64)>, PathRejection>,
) -> Result<Json<AlgorithmResult<u64>>, ApiError> {
    let Path((strategy, n)) = path?;
    let calc = state.factory.fibonacci(&strategy)?;
    state.limits.check_fibonacci(&strategy, n)?;

    let name = calc.name().to_string();
    let token = CancellationToken::new().with_timeout(state.timeout);
    let harness = state.harness;
    let measured = run_blocking(move || {
        harness.measure(|n: &i64| calc.calculate(&token, n), &n)
    })
    .await?;

    tracing::info!(
        strategy = %name,
        n,
        elapsed_ms = measured.execution_time_ms,
        "fibonacci"
    );
    Ok(Json(measured))
}

/// `POST /max-subarray/{strategy}` with a JSON integer array body.
pub async fn max_subarray(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<AlgorithmResult<i64>>, ApiError> {
    let Path(strategy) = path?;
    let calc = state.factory.subarray(&strategy)?;
    let nums = parse_sequence(&body)?;
    state.limits.check_subarray(&strategy, nums.len())?;

    let name = calc.name().to_string();
    let len = nums.len();
    let token = CancellationToken::new().with_timeout(state.timeout);
    let harness = state.harness;
    let measured = run_blocking(move || {
        harness.measure(|nums: &[i32]| calc.calculate(&token, nums), &nums[..])
    })
    .await?;

    tracing::info!(
        strategy = %name,
        len,
        elapsed_ms = measured.execution_time_ms,
        "max-subarray"
    );
    Ok(Json(measured))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::not_found("no such route")
}

/// Decode a request body into a non-empty sequence.
///
/// An empty body, `null`, and `[]` are all rejected with [`EMPTY_INPUT`].
pub fn parse_sequence(body: &[u8]) -> Result<Vec<i32>, ApiError> {
    let nums: Option<Vec<i32>> = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        serde_json::from_slice(body)
            .map_err(|e| ApiError::bad_request(format!("invalid JSON body: {e}")))?
    };
    match nums {
        Some(nums) if !nums.is_empty() => Ok(nums),
        _ => Err(ApiError::bad_request(EMPTY_INPUT)),
    }
}

/// Run a computation on the blocking pool so it does not stall the runtime.
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, AlgoError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::internal(format!("computation task failed: {e}")))?
        .map_err(ApiError::from)
}
