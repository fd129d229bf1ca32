//! # algobench-server
//!
//! HTTP API for the Fibonacci and maximum-subarray strategies. Every route
//! is served both at the root and under `/api`.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;

use algobench_core::harness::Harness;
use algobench_core::limits::Limits;
use algobench_core::registry::{CalculatorFactory, DefaultFactory};

/// Shared state for every handler.
#[derive(Clone)]
pub struct AppState {
    /// Strategy lookup.
    pub factory: Arc<dyn CalculatorFactory>,
    /// Input ceilings for untrusted callers.
    pub limits: Limits,
    /// Deadline for one computation.
    pub timeout: Duration,
    /// Measurement settings.
    pub harness: Harness,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            factory: Arc::new(DefaultFactory::new()),
            limits: Limits::default(),
            timeout: Duration::from_secs(30),
            harness: Harness::default(),
        }
    }
}

fn strategy_routes() -> Router<AppState> {
    Router::new()
        .route("/fibonacci/{strategy}/{n}", get(routes::fibonacci))
        .route("/max-subarray/{strategy}", post(routes::max_subarray))
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .merge(strategy_routes())
        .nest("/api", strategy_routes())
        .fallback(routes::not_found)
        .with_state(state)
}
