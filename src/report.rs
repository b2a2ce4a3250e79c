//! Terminal diagnostics for failed gate runs

use colored::Colorize;

use crate::coverage::Violation;

/// Print the raw report followed by the enumerated violation list.
///
/// This is CI log output only; the verdict itself travels in the returned
/// `ValidationError`.
pub fn print_failure(raw_output: &str, violations: &[Violation]) {
    println!("{raw_output}");
    println!("{}", "─".repeat(50).dimmed());
    println!("{}", "Non-compliant packages:".red().bold());

    for (id, violation) in violations.iter().enumerate() {
        println!("  {} {}", format!("[{id}]").dimmed(), violation);
    }
}
