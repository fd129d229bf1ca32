//! algobench: compare Fibonacci and maximum-subarray strategies.

use algobench_cli::ui::print_error;
use algobench_lib::{app, config, errors};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing; RUST_LOG overrides the WARN default.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
