//! Status lines for interactive runs.
//!
//! Headings and verdicts go to stdout, skips and failures to stderr. Setting
//! `NO_COLOR` switches every line to plain bracketed tags.

use std::fmt::Display;

use console::{style, Color};

use algobench_core::calculator::Family;

/// Heading text for a problem family.
#[must_use]
pub fn family_title(family: Family) -> &'static str {
    match family {
        Family::Fibonacci => "Fibonacci",
        Family::MaxSubarray => "Maximum subarray",
    }
}

fn plain() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

fn tag(label: &str, color: Color) -> String {
    let text = format!("[{label}]");
    if plain() {
        text
    } else {
        style(text).fg(color).bold().to_string()
    }
}

/// Heading printed before the first batch of a family.
pub fn print_family_header(family: Family) {
    let heading = format!("=== {} ===", family_title(family));
    if plain() {
        println!("{heading}");
    } else {
        println!("{}", style(heading).bold().cyan());
    }
}

/// Whether every strategy run on `input` produced the same answer.
pub fn print_verdict(input: &str, strategies: usize, agree: bool) {
    if agree {
        println!(
            "{} all strategies agree ({strategies} on {input})",
            tag("OK", Color::Green)
        );
    } else {
        eprintln!(
            "{} strategies disagree on {input}",
            tag("MISMATCH", Color::Red)
        );
    }
}

/// A strategy left out because its input ceiling excludes `input`.
pub fn print_skipped(strategy: &str, input: &str, reason: &dyn Display) {
    eprintln!(
        "{} {strategy} skipped for {input}: {reason}",
        tag("SKIP", Color::Yellow)
    );
}

/// Fatal error line.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", tag("ERROR", Color::Red));
}
