//! algobench library: application logic for the benchmark CLI.

pub mod app;
pub mod config;
pub mod errors;
