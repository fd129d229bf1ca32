//! # algobench-cli
//!
//! CLI output, sweep progress display, and status lines.

pub mod output;
pub mod presenter;
pub mod progress;
pub mod ui;

pub use presenter::CLIResultPresenter;
pub use progress::SweepProgress;
