//! Formatting functions for CLI output.
//!
//! `format_*` build the text, `display_*` write it to stderr so stdout carries
//! only the version string.

use crate::boundary::BoundaryWarning;
use crate::sequencer::VersionPlan;

/// Error line in red.
pub fn format_error(message: &str) -> String {
    format!("\x1b[31mERROR:\x1b[0m {}", message)
}

/// Status line with yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("\x1b[33m→\x1b[0m {}", message)
}

/// Warning line with yellow warning icon.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning)
}

/// Summary of a computed version: one status line, then one line per note.
///
/// # Arguments
/// * `branch` - The branch the version was computed for
/// * `plan` - The computed plan, including any notes
pub fn format_plan(branch: &str, plan: &VersionPlan) -> Vec<String> {
    let mut lines = vec![format_status(&format!(
        "Branch '{}' is a {} build: \x1b[32m{}\x1b[0m",
        branch, plan.kind, plan.version
    ))];
    lines.extend(plan.notes.iter().map(format_boundary_warning));
    lines
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Summarise a computed version for verbose runs.
pub fn display_plan(branch: &str, plan: &VersionPlan) {
    for line in format_plan(branch, plan) {
        eprintln!("{}", line);
    }
}
