//! Server configuration from CLI flags and environment.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use algobench_core::constants::{DEFAULT_MAX_BRUTE_FORCE_LEN, DEFAULT_MAX_RECURSIVE_N};
use algobench_core::harness::Harness;
use algobench_core::limits::Limits;
use algobench_core::registry::DefaultFactory;

use crate::AppState;

/// algobench-server: HTTP API for the Fibonacci and max-subarray strategies.
#[derive(Parser, Debug, Clone)]
#[command(name = "algobench-server", version, about)]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1", env = "ALGOBENCH_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 5256, env = "ALGOBENCH_PORT")]
    pub port: u16,

    /// Per-request computation timeout in seconds.
    #[arg(long, default_value_t = 30, env = "ALGOBENCH_TIMEOUT")]
    pub timeout: u64,

    /// Largest n accepted by the recursive strategy.
    #[arg(long, default_value_t = DEFAULT_MAX_RECURSIVE_N, env = "ALGOBENCH_MAX_RECURSIVE_N")]
    pub max_recursive_n: u64,

    /// Longest sequence accepted by the brute-force strategy.
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_BRUTE_FORCE_LEN,
        env = "ALGOBENCH_MAX_BRUTE_FORCE_LEN"
    )]
    pub max_brute_force_len: usize,

    /// Report best-effort resident memory deltas in responses.
    #[arg(long, env = "ALGOBENCH_TRACK_MEMORY")]
    pub track_memory: bool,
}

impl ServerConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// `host:port` to bind.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Shared handler state built from this configuration.
    #[must_use]
    pub fn state(&self) -> AppState {
        AppState {
            factory: Arc::new(DefaultFactory::new()),
            limits: Limits {
                max_recursive_n: self.max_recursive_n,
                max_brute_force_len: self.max_brute_force_len,
                ..Limits::default()
            }
            .normalize(),
            timeout: Duration::from_secs(self.timeout.max(1)),
            harness: Harness::new(self.track_memory),
        }
    }
}
